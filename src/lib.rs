pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod world;

use engine::{
    Command, Dice, Output, Player, QUIT, RandomDice, TrollAi, Verb, Vocabulary, handle_close,
    handle_drop, handle_go, handle_help, handle_inventory, handle_look, handle_look_at,
    handle_look_under, handle_open, handle_pull, handle_push, handle_take, handle_wait,
    render_room,
};
use error::ActionResult;
use world::World;

pub use config::GameConfig;
pub use error::{ActionError, GameError};
pub use world::load_builtin_world;

/// How the session stands after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Quit,
    Dead,
    Won,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Playing
    }
}

/// One play-through: the world, the player, the troll and the vocabulary
/// used to read commands.
pub struct Game {
    pub world: World,
    pub player: Player,
    pub troll: TrollAi,
    vocabulary: Vocabulary,
    dice: Box<dyn Dice>,
}

impl Game {
    pub fn new(world: World, vocabulary: Vocabulary, config: &GameConfig) -> Self {
        let dice: Box<dyn Dice> = match config.seed {
            Some(seed) => Box::new(RandomDice::from_seed(seed)),
            None => Box::new(RandomDice::from_entropy()),
        };
        Self::with_dice(world, vocabulary, dice)
    }

    pub fn with_dice(world: World, vocabulary: Vocabulary, dice: Box<dyn Dice>) -> Self {
        let player = Player::new(world.start_room, world.max_points);
        let troll = TrollAi::new(world.troll.clone());
        Game {
            world,
            player,
            troll,
            vocabulary,
            dice,
        }
    }

    /// Welcome banner and the first look at the starting room.
    pub fn start(&mut self) -> Output {
        let mut out = Output::new();
        out.say(self.world.welcome.as_str());
        self.world.room_mut(self.player.room).enter();
        render_room(&mut out, &self.world, self.player.room, true);
        tracing::info!(world = %self.world.name, "session started");
        out
    }

    /// Process a single player input; returns (output, status).
    pub fn step(&mut self, input: &str) -> (Output, Status) {
        let mut out = Output::new();

        let command = self.vocabulary.normalize(input);
        if command == QUIT {
            out.say("Thanks for playing!");
            tracing::info!(points = self.player.points, "player quit");
            return (out, Status::Quit);
        }

        match self.vocabulary.parse(&command) {
            Some(cmd) => {
                tracing::debug!(%command, verb = ?cmd.verb, args = ?cmd.args, "dispatch");
                if let Err(refusal) = self.execute(&mut out, &cmd) {
                    out.say(refusal.to_string());
                }
                self.troll
                    .turn(&mut out, &mut self.world, &mut self.player, self.dice.as_mut());
            }
            None => {
                tracing::debug!(%command, "unrecognized command");
                out.say("Sorry, what?");
            }
        }

        let status = self.status();
        if status.is_over() {
            tracing::info!(?status, points = self.player.points, "session over");
        }
        (out, status)
    }

    pub fn status(&self) -> Status {
        if self.player.dead {
            Status::Dead
        } else if self.player.win {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Runs the verb's handler. A refusal is still a dispatched command.
    pub fn execute(&mut self, out: &mut Output, cmd: &Command) -> ActionResult {
        let world = &mut self.world;
        let player = &mut self.player;
        let args = cmd.args.as_slice();

        match cmd.verb {
            Verb::Go => {
                handle_go(out, world, player, args)?;
                self.troll.player_moved(out, world, player);
                Ok(())
            }
            Verb::Look => handle_look(out, world, player),
            Verb::LookAt => handle_look_at(out, world, player, args),
            Verb::LookUnder => handle_look_under(out, world, player, args),
            Verb::Take => handle_take(out, world, player, args),
            Verb::Drop => handle_drop(out, world, player, args),
            Verb::Push => handle_push(out, world, player, args),
            Verb::Pull => handle_pull(out, world, player, args),
            Verb::Open => handle_open(out, world, player, args),
            Verb::Close => handle_close(out, world, player, args),
            Verb::Inventory => handle_inventory(out, world, player),
            Verb::Wait => handle_wait(out),
            Verb::Help => handle_help(out),
            Verb::Xyzzy => Ok(()),
        }
    }
}
