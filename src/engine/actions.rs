use crate::engine::behaviors::perform;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::error::{ActionError, ActionResult};
use crate::world::{Direction, NoExit, ObjectId, RoomId, VerbTag, World};

const HELP_TEXT: &[&str] = &[
    "This is a text adventure game, the goal is to find and kill the troll.",
    "The game only understands very simple single-verb, single-object sentences, for instance: PICK UP HAT, or OPEN DOOR etc.",
    "The Verbs this game understands are: LOOK, LOOK AT, LOOK UNDER, PUSH, PULL, TAKE, DROP, WAIT, OPEN, CLOSE and INVENTORY.",
    "Directions are: NORTH, SOUTH, EAST, WEST, UP, DOWN, IN and OUT.",
    "There are also many aliases for verbs and directions.",
];

const NOTHING_SPECIAL: &str = "You don't see anything special about this.";

/// Room name, description (when `long`), and what's lying around.
pub fn render_room(out: &mut Output, world: &World, room_id: RoomId, long: bool) {
    let room = world.room(room_id);
    out.title(room.name.as_str());
    if long {
        out.say(room.desc.as_str());
    }
    if let Some(names) = room.contents.object_names(&world.objects) {
        out.say(format!("There is {names} here."));
    }
}

/// Moves the player. Returns the room that was entered; the caller owes the
/// troll a "player moved" notification.
pub fn handle_go(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult<RoomId> {
    let Some(first) = args.first() else {
        return Err(ActionError::MissingDirection);
    };
    let dir: Direction = first.parse().map_err(|_| ActionError::NoExit)?;

    let target = match world.room(player.room).exit_direction(dir, &world.objects) {
        Ok(target) => target,
        Err(NoExit::Guarded) => {
            tracing::debug!(room = %world.room(player.room).name, %dir, "exit guard vetoed move");
            return Err(ActionError::NoExit);
        }
        Err(NoExit::Unwired) => return Err(ActionError::NoExit),
    };

    player.room = target;
    let first_visit = !world.room(target).visited;
    render_room(out, world, target, first_visit);
    world.room_mut(target).enter();

    Ok(target)
}

pub fn handle_look(out: &mut Output, world: &World, player: &Player) -> ActionResult {
    render_room(out, world, player.room, true);
    Ok(())
}

pub fn handle_look_at(
    out: &mut Output,
    world: &World,
    player: &Player,
    args: &[String],
) -> ActionResult {
    if args.is_empty() {
        return handle_look(out, world, player);
    }
    let obj = player
        .find_near(world, args)
        .ok_or_else(|| not_here(args))?;

    let desc = world.object(obj).describe();
    if desc.is_empty() {
        out.say(NOTHING_SPECIAL);
    } else {
        out.say(desc);
    }
    Ok(())
}

pub fn handle_take(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Take")?;
    let room = world.room(player.room);
    let obj = room
        .contents
        .find(&world.objects, args)
        .ok_or_else(|| not_here(args))?;

    let o = world.object(obj);
    if !o.carryable || o.fixture {
        return Err(ActionError::CantTake);
    }

    world.room_mut(player.room).contents.remove(obj);
    player.inventory.add([obj]);
    out.say("Taken.");
    Ok(())
}

pub fn handle_drop(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Drop")?;
    let obj = player
        .inventory
        .find(&world.objects, args)
        .ok_or_else(|| not_here(args))?;

    player.inventory.remove(obj);
    world.room_mut(player.room).contents.add([obj]);
    out.say("Dropped.");
    Ok(())
}

pub fn handle_push(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Push")?;
    let target = player.find_near(world, args);
    run_object_verb(out, world, player, target, VerbTag::Push, ActionError::CantPush)
}

pub fn handle_pull(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Pull")?;
    let target = player.find_near(world, args);
    run_object_verb(out, world, player, target, VerbTag::Pull, ActionError::CantPull)
}

/// Only looks at the floor; you can't look under what you're holding.
pub fn handle_look_under(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Look under")?;
    let target = world.room(player.room).contents.find(&world.objects, args);
    run_object_verb(
        out,
        world,
        player,
        target,
        VerbTag::LookUnder,
        ActionError::NothingUnder,
    )
}

fn run_object_verb(
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
    target: Option<ObjectId>,
    tag: VerbTag,
    unsupported: ActionError,
) -> ActionResult {
    let target = target.ok_or(ActionError::UnknownTarget)?;
    let behavior = world
        .object(target)
        .verbs
        .get(&tag)
        .cloned()
        .ok_or(unsupported)?;

    perform(&behavior, target, out, world, player);
    Ok(())
}

pub fn handle_open(
    out: &mut Output,
    world: &mut World,
    player: &Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Open")?;
    let obj = player.find_near(world, args).ok_or_else(|| not_here(args))?;
    let o = world.object_mut(obj);
    if !o.openable {
        return Err(ActionError::CantOpen);
    }
    if o.open {
        return Err(ActionError::AlreadyOpen);
    }
    o.open = true;
    out.say("Opened.");
    Ok(())
}

pub fn handle_close(
    out: &mut Output,
    world: &mut World,
    player: &Player,
    args: &[String],
) -> ActionResult {
    require_object(args, "Close")?;
    let obj = player.find_near(world, args).ok_or_else(|| not_here(args))?;
    let o = world.object_mut(obj);
    if !o.openable {
        return Err(ActionError::CantClose);
    }
    if !o.open {
        return Err(ActionError::AlreadyClosed);
    }
    o.open = false;
    out.say("Closed.");
    Ok(())
}

pub fn handle_inventory(out: &mut Output, world: &World, player: &Player) -> ActionResult {
    match player.inventory.object_names(&world.objects) {
        Some(names) => out.say(format!("You are carrying {names}.")),
        None => out.say("You are empty handed."),
    }
    Ok(())
}

pub fn handle_wait(out: &mut Output) -> ActionResult {
    out.say("Time passes.");
    Ok(())
}

pub fn handle_help(out: &mut Output) -> ActionResult {
    for line in HELP_TEXT {
        out.say(*line);
    }
    Ok(())
}

fn require_object(args: &[String], verb: &'static str) -> ActionResult {
    if args.iter().all(|a| a.is_empty()) {
        return Err(ActionError::MissingObject(verb));
    }
    Ok(())
}

fn not_here(args: &[String]) -> ActionError {
    ActionError::NotHere(args.join(" "))
}
