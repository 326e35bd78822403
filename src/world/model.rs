use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room in [`World::rooms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Index of an object in [`World::objects`]. Object identity is this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Runtime world type used by the game loop.
#[derive(Debug, Clone)]
pub struct World {
    pub name: String,
    pub welcome: String,
    pub start_room: RoomId,
    pub max_points: u32,
    pub rooms: Vec<Room>,
    pub objects: Vec<Object>,
    pub troll: TrollSetup,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    In,
    Out,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::In,
        Direction::Out,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::In => "IN",
            Direction::Out => "OUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Case-insensitive: "north", "NORTH" and "North" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown direction '{s}'"))
    }
}

/// Insertion-ordered set of object identities. Rooms hold floor items and
/// fixtures in one, the player's inventory is another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub(super) objects: Vec<ObjectId>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub desc: String,
    pub visited: bool,
    pub exits: BTreeMap<Direction, RoomId>,
    pub guard: Option<ExitGuard>,
    pub contents: Container,
}

/// Vetoes exits while some object is closed. Rules are read against live
/// object state on every traversal attempt.
#[derive(Debug, Clone, Default)]
pub struct ExitGuard {
    pub rules: Vec<GuardRule>,
}

#[derive(Debug, Clone)]
pub struct GuardRule {
    pub directions: Vec<Direction>,
    pub requires_open: ObjectId,
}

/// Verb tags an object can carry its own behavior for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbTag {
    Push,
    Pull,
    LookUnder,
}

impl VerbTag {
    pub fn as_str(self) -> &'static str {
        match self {
            VerbTag::Push => "PUSH",
            VerbTag::Pull => "PULL",
            VerbTag::LookUnder => "LOOK UNDER",
        }
    }
}

impl FromStr for VerbTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUSH" => Ok(VerbTag::Push),
            "PULL" => Ok(VerbTag::Pull),
            "LOOK UNDER" => Ok(VerbTag::LookUnder),
            other => Err(format!("unknown object verb '{other}'")),
        }
    }
}

/// Strategy bound to an object's verb tag at world construction.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Print a fixed line, nothing else changes.
    Say(String),
    /// One-time reveal. The owning object's `open` flag records that it fired.
    Reveal(Reveal),
}

#[derive(Debug, Clone)]
pub struct Reveal {
    pub text: String,
    pub repeat_text: String,
    pub object: ObjectId,
    pub destination: RevealTo,
    pub object_desc: Option<String>,
    pub room_desc: Option<String>,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTo {
    Room,
    Inventory,
}

#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub desc: String,
    pub adjectives: Vec<String>,
    pub aliases: Vec<String>,
    pub verbs: BTreeMap<VerbTag, Behavior>,
    pub openable: bool,
    /// For non-openable objects this doubles as "one-time reveal already fired".
    pub open: bool,
    /// Not mentioned below the room description, but still interactable.
    pub fixture: bool,
    pub carryable: bool,
}

/// Where the troll starts, where it won't follow, and what it eats.
#[derive(Debug, Clone)]
pub struct TrollSetup {
    pub object: ObjectId,
    pub room: RoomId,
    pub safe_room: RoomId,
    pub prize: ObjectId,
    pub prize_points: u32,
    pub bait: ObjectId,
    pub bait_points: u32,
    pub difficulty: u32,
    pub warn_at: u32,
    pub strike_above: u32,
}
