//! Error types for the game.

use std::io;

use thiserror::Error;

use crate::world::ValidationError;

/// Failures that stop the game from starting or continuing.
#[derive(Debug, Error)]
pub enum GameError {
    /// The embedded world definition isn't valid TOML for our schema.
    #[error("failed to parse world definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The world definition parsed but doesn't hold together.
    #[error("invalid world definition: {}", join_errors(.0))]
    InvalidWorld(Vec<ValidationError>),

    /// Reading from or writing to the terminal failed.
    #[error("console error: {0}")]
    Console(#[from] io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A dispatched command that the world refused. The display text is what the
/// player reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0} what?")]
    MissingObject(&'static str),

    #[error("Go where?")]
    MissingDirection,

    #[error("You can't go in that direction.")]
    NoExit,

    #[error("I don't see any {0} here.")]
    NotHere(String),

    #[error("I don't know what you are referring to.")]
    UnknownTarget,

    #[error("This can't be taken.")]
    CantTake,

    #[error("I can't open that.")]
    CantOpen,

    #[error("I can't close that.")]
    CantClose,

    #[error("Already open.")]
    AlreadyOpen,

    #[error("Already closed.")]
    AlreadyClosed,

    #[error("You can't push this.")]
    CantPush,

    #[error("You can't pull this.")]
    CantPull,

    #[error("You don't see anything out of the ordinary.")]
    NothingUnder,
}

pub type ActionResult<T = ()> = Result<T, ActionError>;
