use std::collections::HashSet;

use thiserror::Error;

use super::model::{Behavior, ObjectId, World};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Structural checks on an already-resolved world. Collects every problem
/// instead of stopping at the first.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
        return errors;
    }

    let room_ok = |idx: usize| idx < world.rooms.len();
    let object_ok = |id: ObjectId| id.0 < world.objects.len();

    if !room_ok(world.start_room.0) {
        errors.push(ValidationError::new("start_room is out of range"));
    }

    for room in &world.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::new("a room has an empty name"));
        }

        for (dir, target) in &room.exits {
            if !room_ok(target.0) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit {} targets a missing room",
                    room.name, dir
                )));
            }
        }

        for rule in room.guard.iter().flat_map(|g| &g.rules) {
            if !object_ok(rule.requires_open) {
                errors.push(ValidationError::new(format!(
                    "room '{}' guard references a missing object",
                    room.name
                )));
            } else if !world.object(rule.requires_open).openable {
                errors.push(ValidationError::new(format!(
                    "room '{}' guard depends on '{}', which can't be opened",
                    room.name,
                    world.object(rule.requires_open).name
                )));
            }
        }
    }

    // Objects placed somewhere at start
    let placed: HashSet<ObjectId> = world
        .rooms
        .iter()
        .flat_map(|r| r.contents.ids().iter().copied())
        .collect();

    for obj in &world.objects {
        for behavior in obj.verbs.values() {
            let Behavior::Reveal(reveal) = behavior else {
                continue;
            };
            if obj.openable {
                errors.push(ValidationError::new(format!(
                    "object '{}' is openable and can't track a one-time reveal",
                    obj.name
                )));
            }
            if !object_ok(reveal.object) {
                errors.push(ValidationError::new(format!(
                    "object '{}' reveals a missing object",
                    obj.name
                )));
            } else if placed.contains(&reveal.object) {
                errors.push(ValidationError::new(format!(
                    "object '{}' reveals '{}', which is already placed in a room",
                    obj.name,
                    world.object(reveal.object).name
                )));
            }
        }
    }

    // Troll setup
    let troll = &world.troll;
    for (what, idx) in [("room", troll.room.0), ("safe_room", troll.safe_room.0)] {
        if !room_ok(idx) {
            errors.push(ValidationError::new(format!("troll {what} is out of range")));
        }
    }
    if troll.room == troll.safe_room {
        errors.push(ValidationError::new(
            "troll room and safe_room must differ",
        ));
    }
    if troll.prize == troll.bait {
        errors.push(ValidationError::new("troll prize and bait must differ"));
    }
    if room_ok(troll.room.0) && !world.room(troll.room).contents.contains(troll.object) {
        errors.push(ValidationError::new(format!(
            "troll object is not placed in the troll room '{}'",
            world.room(troll.room).name
        )));
    }
    if troll.difficulty == 0 {
        errors.push(ValidationError::new("troll difficulty must be at least 1"));
    }
    if troll.strike_above >= 100 {
        errors.push(ValidationError::new(
            "troll strike_above must be below 100 or the troll never hits",
        ));
    }

    let reachable_points = troll.prize_points + troll.bait_points;
    if world.max_points < reachable_points {
        errors.push(ValidationError::new(format!(
            "max_points {} is below the troll bonuses alone ({})",
            world.max_points, reachable_points
        )));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_builtin_world;

    #[test]
    fn builtin_world_is_clean() {
        let world = load_builtin_world().unwrap();
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn collects_several_problems() {
        let mut world = load_builtin_world().unwrap();
        world.troll.safe_room = world.troll.room;
        world.troll.bait = world.troll.prize;
        world.troll.difficulty = 0;

        let errors = validate_world(&world);
        assert_eq!(errors.len(), 3, "{errors:?}");
    }

    #[test]
    fn guard_on_unopenable_object_is_flagged() {
        let mut world = load_builtin_world().unwrap();
        let window = world.objects.iter().position(|o| o.name == "Window").unwrap();
        world.objects[window].openable = false;

        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.message.contains("can't be opened")));
    }
}
