//! The troll: a small state machine that reacts to the world once per turn.
//!
//! Dormant until the player walks into its room, then it follows the player
//! from room to room (except into the safe room), counting `aggro` down while
//! they share a room. At zero it swings its club. Dropping the bait in its room
//! buys time; dropping the prize wins the game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{RoomId, TrollSetup, World};

/// Percentile rolls for the troll's strike.
pub trait Dice {
    /// A roll in `0..100`.
    fn roll_percent(&mut self) -> u32;
}

/// Production dice backed by a seedable RNG.
pub struct RandomDice(StdRng);

impl RandomDice {
    pub fn from_seed(seed: u64) -> Self {
        RandomDice(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RandomDice(StdRng::from_os_rng())
    }
}

impl Dice for RandomDice {
    fn roll_percent(&mut self) -> u32 {
        self.0.random_range(0..100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrollState {
    /// Hasn't met the player yet, or lost them at the safe room.
    Dormant,
    /// Follows the player on every move.
    Stalking,
    /// Ate the prize. Does nothing from now on.
    Defeated,
    /// Killed the player.
    Lethal,
}

#[derive(Debug, Clone)]
pub struct TrollAi {
    pub room: RoomId,
    pub aggro: u32,
    pub state: TrollState,
    setup: TrollSetup,
}

impl TrollAi {
    pub fn new(setup: TrollSetup) -> Self {
        TrollAi {
            room: setup.room,
            aggro: setup.difficulty,
            state: TrollState::Dormant,
            setup,
        }
    }

    pub fn follow(&self) -> bool {
        self.state == TrollState::Stalking
    }

    fn inert(&self) -> bool {
        matches!(self.state, TrollState::Defeated | TrollState::Lethal)
    }

    fn set_state(&mut self, state: TrollState) {
        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, aggro = self.aggro, "troll state change");
            self.state = state;
        }
    }

    /// Called once after every dispatched command.
    pub fn turn(
        &mut self,
        out: &mut Output,
        world: &mut World,
        player: &mut Player,
        dice: &mut dyn Dice,
    ) {
        if self.inert() {
            return;
        }

        let here = &world.room(self.room).contents;

        if here.contains(self.setup.prize) {
            out.event("The troll sees the fish on the floor, immediately picks it up and eats it without chewing in a single gulp.");
            out.event("The troll looks ill, slowly, the huge creature sinks onto the floor.");
            out.event("The rotten fish killed the troll, by giving him food poisoning!");
            player.give_points(self.setup.prize_points, out);
            player.win(out);
            self.set_state(TrollState::Defeated);
            return;
        }

        if here.contains(self.setup.bait) {
            out.event("The troll sees the can on the floor, immediately picks it up and eats it without chewing in a single gulp.");
            out.event("Still the beast looks hungry at you.");
            world.room_mut(self.room).contents.remove(self.setup.bait);
            player.give_points(self.setup.bait_points, out);
            self.aggro = self.aggro.max(self.setup.difficulty / 2);
            return;
        }

        if self.room != player.room {
            return;
        }

        if self.aggro == 0 {
            let roll = dice.roll_percent();
            tracing::debug!(roll, strike_above = self.setup.strike_above, "troll swings");
            if roll > self.setup.strike_above {
                out.event("The troll strikes at you with his club, hitting you on the head.");
                player.die(out);
                self.set_state(TrollState::Lethal);
                return;
            }
            out.event("The troll leaps forward and tries to hit you with his club, but misses!");
            self.aggro = self.setup.difficulty / 2;
        } else if self.aggro == self.setup.warn_at {
            out.event("The troll looks at you threateningly.");
        }
        self.aggro = self.aggro.saturating_sub(1);
    }

    /// Called on every room change, before [`TrollAi::turn`].
    pub fn player_moved(&mut self, out: &mut Output, world: &mut World, player: &Player) {
        match self.state {
            TrollState::Stalking => {
                self.aggro = self.setup.difficulty;

                if player.room == self.setup.safe_room {
                    self.set_state(TrollState::Dormant);
                    return;
                }

                world.room_mut(self.room).contents.remove(self.setup.object);
                world.room_mut(player.room).contents.add([self.setup.object]);
                self.room = player.room;
                out.event("The monstrous creature follows you into the room!");
            }
            TrollState::Dormant if self.room == player.room => {
                // follows from the next move on
                self.set_state(TrollState::Stalking);
            }
            _ => {}
        }
    }
}
