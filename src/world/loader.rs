use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::model::{
    Behavior, Container, Direction, ExitGuard, GuardRule, Object, ObjectId, Reveal, RevealTo,
    Room, RoomId, TrollSetup, VerbTag, World,
};
use super::validator::{ValidationError, validate_world};
use crate::error::GameError;

/// The world shipped with the game.
const BUILTIN_WORLD: &str = include_str!("../../public/trollhunt.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    troll: TrollConfig,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    object: Vec<ObjectConfig>, // [[object]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    welcome: String,
    start_room: String,
    max_points: u32,
}

#[derive(Deserialize)]
struct TrollConfig {
    object: String,
    room: String,
    safe_room: String,
    prize: String,
    prize_points: u32,
    bait: String,
    bait_points: u32,
    #[serde(default = "default_difficulty")]
    difficulty: u32,
    #[serde(default = "default_warn_at")]
    warn_at: u32,
    #[serde(default = "default_strike_above")]
    strike_above: u32,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exits: BTreeMap<String, String>, // direction -> room id
    #[serde(default)]
    guard: Vec<GuardConfig>, // [[room.guard]]
}

#[derive(Deserialize)]
struct GuardConfig {
    directions: Vec<String>,
    requires_open: String,
}

#[derive(Deserialize)]
struct ObjectConfig {
    id: String,
    name: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    adjectives: Vec<String>,

    #[serde(default)]
    aliases: Vec<String>,

    #[serde(default)]
    openable: bool,

    #[serde(default)]
    open: bool,

    #[serde(default)]
    fixture: bool,

    #[serde(default)]
    carryable: bool,

    /// Rooms the object starts in. Empty means hidden until revealed.
    #[serde(default)]
    locations: Vec<String>,

    #[serde(default)]
    verb: Vec<VerbConfig>, // [[object.verb]]
}

#[derive(Deserialize)]
struct VerbConfig {
    verb: String,
    text: String,

    // Everything below only applies to one-time reveals.
    #[serde(default)]
    reveal: Option<String>,

    #[serde(default)]
    reveal_to: Option<String>,

    #[serde(default)]
    repeat_text: Option<String>,

    #[serde(default)]
    object_desc: Option<String>,

    #[serde(default)]
    room_desc: Option<String>,

    #[serde(default)]
    points: u32,
}

// Helpers for serde defaults
fn default_difficulty() -> u32 {
    5
}

fn default_warn_at() -> u32 {
    3
}

fn default_strike_above() -> u32 {
    70
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: the built-in world.
pub fn load_builtin_world() -> Result<World, GameError> {
    load_world_from_str(BUILTIN_WORLD)
}

/// Public API: load a world from a TOML string.
pub fn load_world_from_str(contents: &str) -> Result<World, GameError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let room_ids = index_ids(world_file.room.iter().map(|r| r.id.as_str()), "room")?;
    let object_ids = index_ids(world_file.object.iter().map(|o| o.id.as_str()), "object")?;

    let room_ref = |id: &str, ctx: &str| -> Result<RoomId, GameError> {
        room_ids
            .get(id)
            .map(|idx| RoomId(*idx))
            .ok_or_else(|| invalid(format!("{ctx} references unknown room '{id}'")))
    };
    let object_ref = |id: &str, ctx: &str| -> Result<ObjectId, GameError> {
        object_ids
            .get(id)
            .map(|idx| ObjectId(*idx))
            .ok_or_else(|| invalid(format!("{ctx} references unknown object '{id}'")))
    };

    // Build rooms
    let mut rooms: Vec<Room> = Vec::with_capacity(world_file.room.len());

    for room_cfg in &world_file.room {
        let mut exits = BTreeMap::new();
        for (dir, target) in &room_cfg.exits {
            let dir = parse_direction(dir, &room_cfg.id)?;
            let ctx = format!("room '{}' exit {}", room_cfg.id, dir);
            exits.insert(dir, room_ref(target, &ctx)?);
        }

        let mut rules = Vec::new();
        for g in &room_cfg.guard {
            let directions = g
                .directions
                .iter()
                .map(|d| parse_direction(d, &room_cfg.id))
                .collect::<Result<Vec<_>, _>>()?;
            let ctx = format!("room '{}' guard", room_cfg.id);
            rules.push(GuardRule {
                directions,
                requires_open: object_ref(&g.requires_open, &ctx)?,
            });
        }

        rooms.push(Room {
            name: room_cfg.name.clone(),
            desc: normalize_multiline_desc(&room_cfg.desc),
            visited: false,
            exits,
            guard: (!rules.is_empty()).then_some(ExitGuard { rules }),
            contents: Container::new(),
        });
    }

    // Build objects, placing them as we go so room listings follow file order
    let mut objects: Vec<Object> = Vec::with_capacity(world_file.object.len());

    for (idx, oc) in world_file.object.iter().enumerate() {
        if oc.name.trim().is_empty() {
            return Err(invalid(format!("object '{}' has an empty name", oc.id)));
        }

        let mut verbs = BTreeMap::new();
        for vc in &oc.verb {
            let tag: VerbTag = vc
                .verb
                .parse()
                .map_err(|e| invalid(format!("object '{}': {e}", oc.id)))?;
            let ctx = format!("object '{}' verb {}", oc.id, tag.as_str());
            let behavior = build_behavior(vc, &ctx, &object_ref)?;
            if verbs.insert(tag, behavior).is_some() {
                return Err(invalid(format!("duplicate {ctx}")));
            }
        }

        for loc in &oc.locations {
            let ctx = format!("object '{}' location", oc.id);
            let room = room_ref(loc, &ctx)?;
            rooms[room.0].contents.add([ObjectId(idx)]);
        }

        objects.push(Object {
            name: oc.name.trim().to_string(),
            desc: normalize_multiline_desc(&oc.desc),
            adjectives: oc.adjectives.clone(),
            aliases: oc.aliases.clone(),
            verbs,
            openable: oc.openable,
            open: oc.open,
            fixture: oc.fixture,
            carryable: oc.carryable,
        });
    }

    let tc = &world_file.troll;
    let troll = TrollSetup {
        object: object_ref(&tc.object, "troll")?,
        room: room_ref(&tc.room, "troll")?,
        safe_room: room_ref(&tc.safe_room, "troll safe_room")?,
        prize: object_ref(&tc.prize, "troll prize")?,
        prize_points: tc.prize_points,
        bait: object_ref(&tc.bait, "troll bait")?,
        bait_points: tc.bait_points,
        difficulty: tc.difficulty,
        warn_at: tc.warn_at,
        strike_above: tc.strike_above,
    };

    let world = World {
        name: world_file.world.name.clone(),
        welcome: normalize_multiline_desc(&world_file.world.welcome),
        start_room: room_ref(&world_file.world.start_room, "world start_room")?,
        max_points: world_file.world.max_points,
        rooms,
        objects,
        troll,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(GameError::InvalidWorld(errors));
    }

    tracing::debug!(
        rooms = world.rooms.len(),
        objects = world.objects.len(),
        "world loaded"
    );

    Ok(world)
}

fn build_behavior<F>(vc: &VerbConfig, ctx: &str, object_ref: &F) -> Result<Behavior, GameError>
where
    F: Fn(&str, &str) -> Result<ObjectId, GameError>,
{
    let text = normalize_multiline_desc(&vc.text);

    let Some(reveal) = &vc.reveal else {
        return Ok(Behavior::Say(text));
    };

    let destination = match vc.reveal_to.as_deref().map(str::trim) {
        None | Some("room") => RevealTo::Room,
        Some("inventory") => RevealTo::Inventory,
        Some(other) => {
            return Err(invalid(format!("{ctx} has unknown reveal_to '{other}'")));
        }
    };

    Ok(Behavior::Reveal(Reveal {
        text,
        repeat_text: vc
            .repeat_text
            .as_deref()
            .map(normalize_multiline_desc)
            .unwrap_or_default(),
        object: object_ref(reveal, ctx)?,
        destination,
        object_desc: vc.object_desc.as_deref().map(normalize_multiline_desc),
        room_desc: vc.room_desc.as_deref().map(normalize_multiline_desc),
        points: vc.points,
    }))
}

fn index_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
) -> Result<HashMap<String, usize>, GameError> {
    let mut map = HashMap::new();
    for (idx, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(invalid(format!("{kind} #{idx} has an empty id")));
        }
        if map.insert(id.to_string(), idx).is_some() {
            return Err(invalid(format!("Duplicate {kind} id: {id}")));
        }
    }
    Ok(map)
}

fn parse_direction(raw: &str, room_id: &str) -> Result<Direction, GameError> {
    raw.parse::<Direction>()
        .map_err(|e| invalid(format!("room '{room_id}': {e}")))
}

fn invalid(msg: String) -> GameError {
    GameError::InvalidWorld(vec![ValidationError::new(msg)])
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation in TOML shouldn't reach the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                // Wrapped line: single newline in TOML -> space in output
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
