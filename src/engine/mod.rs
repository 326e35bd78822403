mod actions;
mod behaviors;
mod output;
mod player;
mod troll;
mod vocabulary;

pub use actions::{
    handle_close, handle_drop, handle_go, handle_help, handle_inventory, handle_look,
    handle_look_at, handle_look_under, handle_open, handle_pull, handle_push, handle_take,
    handle_wait, render_room,
};

pub use output::{Output, OutputBlock};
pub use player::Player;
pub use troll::{Dice, RandomDice, TrollAi, TrollState};
pub use vocabulary::{Command, QUIT, Verb, Vocabulary};
