use super::model::{Direction, ExitGuard, Object, Room, RoomId};

/// Why an exit couldn't be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoExit {
    /// A neighbour is wired but the guard refused.
    Guarded,
    /// Nothing wired in that direction.
    Unwired,
}

impl ExitGuard {
    pub fn permits(&self, dir: Direction, objects: &[Object]) -> bool {
        self.rules
            .iter()
            .filter(|r| r.directions.contains(&dir))
            .all(|r| objects[r.requires_open.0].open)
    }
}

impl Room {
    pub fn exit_direction(&self, dir: Direction, objects: &[Object]) -> Result<RoomId, NoExit> {
        if let Some(guard) = &self.guard {
            if !guard.permits(dir, objects) {
                return Err(NoExit::Guarded);
            }
        }
        self.exits.get(&dir).copied().ok_or(NoExit::Unwired)
    }

    pub fn enter(&mut self) {
        self.visited = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Container, GuardRule, ObjectId};
    use std::collections::BTreeMap;

    fn window(open: bool) -> Object {
        Object {
            name: "Window".into(),
            desc: String::new(),
            adjectives: vec![],
            aliases: vec![],
            verbs: BTreeMap::new(),
            openable: true,
            open,
            fixture: true,
            carryable: false,
        }
    }

    fn guarded_room() -> Room {
        let mut exits = BTreeMap::new();
        exits.insert(Direction::West, RoomId(1));
        exits.insert(Direction::North, RoomId(2));
        Room {
            name: "Behind House".into(),
            desc: String::new(),
            visited: false,
            exits,
            guard: Some(ExitGuard {
                rules: vec![GuardRule {
                    directions: vec![Direction::West, Direction::In],
                    requires_open: ObjectId(0),
                }],
            }),
            contents: Container::new(),
        }
    }

    #[test]
    fn guard_is_rechecked_every_attempt() {
        let room = guarded_room();
        let mut objects = vec![window(false)];

        assert_eq!(room.exit_direction(Direction::West, &objects), Err(NoExit::Guarded));
        objects[0].open = true;
        assert_eq!(room.exit_direction(Direction::West, &objects), Ok(RoomId(1)));
        objects[0].open = false;
        assert_eq!(room.exit_direction(Direction::West, &objects), Err(NoExit::Guarded));
    }

    #[test]
    fn unguarded_and_unwired_directions() {
        let room = guarded_room();
        let objects = vec![window(false)];
        assert_eq!(room.exit_direction(Direction::North, &objects), Ok(RoomId(2)));
        assert_eq!(room.exit_direction(Direction::South, &objects), Err(NoExit::Unwired));
        // guarded and unwired: the guard answers first
        assert_eq!(room.exit_direction(Direction::In, &objects), Err(NoExit::Guarded));
    }
}
