use crate::engine::output::Output;
use crate::world::{Container, ObjectId, RoomId, World};

/// Mutable session state for the one player.
#[derive(Debug, Clone)]
pub struct Player {
    pub room: RoomId,
    pub points: u32,
    pub max_points: u32,
    pub dead: bool,
    pub win: bool,
    pub inventory: Container,
}

impl Player {
    pub fn new(start: RoomId, max_points: u32) -> Self {
        Player {
            room: start,
            points: 0,
            max_points,
            dead: false,
            win: false,
            inventory: Container::new(),
        }
    }

    /// No clamp against `max_points`; the world is built so the total can't
    /// exceed it.
    pub fn give_points(&mut self, points: u32, out: &mut Output) {
        self.points += points;
        out.say(format!(
            "(Your score increased by {} points, you now have {}/{} points.)",
            points, self.points, self.max_points
        ));
    }

    pub fn die(&mut self, out: &mut Output) {
        self.dead = true;
        out.say(" **** GAME OVER! You are dead.");
        out.say(self.final_score());
    }

    pub fn win(&mut self, out: &mut Output) {
        self.win = true;
        out.say(" **** CONGRATULATIONS! YOU WON THE GAME!");
        out.say(self.final_score());
    }

    pub fn is_over(&self) -> bool {
        self.dead || self.win
    }

    fn final_score(&self) -> String {
        format!(
            "You managed to score {} out of {} possible points.",
            self.points, self.max_points
        )
    }

    /// Room floor first, then inventory.
    pub fn find_near(&self, world: &World, args: &[String]) -> Option<ObjectId> {
        world
            .room(self.room)
            .contents
            .find(&world.objects, args)
            .or_else(|| self.inventory.find(&world.objects, args))
    }
}
