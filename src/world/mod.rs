mod entity;
mod graph;
mod loader;
mod model;
mod validator;

pub use loader::{load_builtin_world, load_world_from_str};

pub use graph::NoExit;
pub use model::{
    Behavior, Container, Direction, ExitGuard, GuardRule, Object, ObjectId, Reveal, RevealTo,
    Room, RoomId, TrollSetup, VerbTag, World,
};
pub use validator::{ValidationError, validate_world};
