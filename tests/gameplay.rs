//! Whole-game scenarios driven through `Game::step`, the same path the
//! console loop uses.

use trollhunt::engine::{Dice, Output, TrollState, Vocabulary};
use trollhunt::world::{ObjectId, RoomId, World};
use trollhunt::{Game, Status, load_builtin_world};

/// Always rolls the same number.
struct Fixed(u32);

impl Dice for Fixed {
    fn roll_percent(&mut self) -> u32 {
        self.0
    }
}

fn new_game(roll: u32) -> Game {
    let world = load_builtin_world().expect("built-in world");
    let mut game = Game::with_dice(world, Vocabulary::standard(), Box::new(Fixed(roll)));
    game.start();
    game
}

fn play(game: &mut Game, commands: &[&str]) -> Output {
    let mut all = Output::new();
    for cmd in commands {
        let (out, status) = game.step(cmd);
        all.append(out);
        if status.is_over() {
            break;
        }
    }
    all
}

fn room(world: &World, name: &str) -> RoomId {
    RoomId(
        world
            .rooms
            .iter()
            .position(|r| r.name == name)
            .unwrap_or_else(|| panic!("no room named {name}")),
    )
}

fn object(world: &World, name: &str) -> ObjectId {
    ObjectId(
        world
            .objects
            .iter()
            .position(|o| o.name == name)
            .unwrap_or_else(|| panic!("no object named {name}")),
    )
}

const TO_KITCHEN: &[&str] = &["n", "e", "open window", "w"];

#[test]
fn pulling_the_rug_reveals_the_trapdoor() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["west"]);
    assert_eq!(g.player.room, room(&g.world, "Living Room"));

    let before = play(&mut g, &["look"]);
    assert!(!before.contains("Trapdoor"));

    let pulled = play(&mut g, &["pull rug"]);
    assert!(pulled.contains("Pulling the rug aside, revealed a trapdoor."));
    assert_eq!(g.player.points, 1);

    let after = play(&mut g, &["look"]);
    assert!(after.contains("There is a Trapdoor (closed) here."));
    assert!(after.contains("A large rug lies rolled up on the floor."));

    let again = play(&mut g, &["pull large oriental rug"]);
    assert!(again.contains("Pulling the rug further won't accomplish anything."));
    assert_eq!(g.player.points, 1);
}

#[test]
fn looking_under_the_bed_finds_the_trout_once() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["up"]);
    assert_eq!(g.player.room, room(&g.world, "Bedroom"));

    let first = play(&mut g, &["look beneath bed"]);
    assert!(first.contains("Under the bed is a large smelly trout.\nTaken."));
    let trout = object(&g.world, "Trout");
    assert!(g.player.inventory.contains(trout));
    assert_eq!(g.player.points, 3);

    let second = play(&mut g, &["look under bed"]);
    assert!(second.contains("There is nothing under the bed."));
    assert_eq!(g.player.points, 3);
    assert_eq!(g.player.inventory.len(), 1);
}

#[test]
fn a_dropped_trout_can_be_picked_up_again() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["up", "look under bed"]);
    let trout = object(&g.world, "Trout");

    play(&mut g, &["drop trout"]);
    assert!(g.world.room(g.player.room).contents.contains(trout));

    let out = play(&mut g, &["take smelly fish"]);
    assert_eq!(out.lines(), vec!["Taken."]);
    assert!(g.player.inventory.contains(trout));
}

#[test]
fn feeding_the_trout_to_the_troll_wins() {
    let mut g = new_game(99);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["up", "look under bed", "down", "w", "pull rug", "open trapdoor"]);
    play(&mut g, &["go down", "n"]);
    assert_eq!(g.player.room, room(&g.world, "Troll Room"));
    assert_eq!(g.troll.state, TrollState::Stalking);

    let (out, status) = g.step("drop fish");
    assert_eq!(status, Status::Won);
    assert!(g.player.win);
    assert!(out.contains("The rotten fish killed the troll, by giving him food poisoning!"));
    assert!(out.contains("(Your score increased by 5 points, you now have 9/11 points.)"));
    assert!(out.contains(" **** CONGRATULATIONS! YOU WON THE GAME!"));
}

#[test]
fn window_guard_is_rechecked_on_every_attempt() {
    let mut g = new_game(0);
    play(&mut g, &["n", "e"]);
    let behind = room(&g.world, "Behind House");
    let kitchen = room(&g.world, "Kitchen");
    assert_eq!(g.player.room, behind);

    let blocked = play(&mut g, &["w"]);
    assert!(blocked.contains("You can't go in that direction."));
    assert_eq!(g.player.room, behind);

    play(&mut g, &["open small window", "enter"]);
    assert_eq!(g.player.room, kitchen);

    let closed = play(&mut g, &["close window"]);
    assert_eq!(closed.lines(), vec!["Closed."]);
    assert!(!g.world.object(object(&g.world, "Window")).open);
    let blocked = play(&mut g, &["out"]);
    assert!(blocked.contains("You can't go in that direction."));
    assert_eq!(g.player.room, kitchen);

    play(&mut g, &["open window", "e"]);
    assert_eq!(g.player.room, behind);
}

#[test]
fn fixtures_and_heavy_things_stay_put() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["w"]);
    let here = g.player.room;
    let before = g.world.room(here).contents.clone();

    let out = play(&mut g, &["take rug"]);
    assert!(out.contains("This can't be taken."));
    assert_eq!(g.world.room(here).contents, before);
    assert!(g.player.inventory.is_empty());

    play(&mut g, &["pull rug"]);
    let before = g.world.room(here).contents.clone();
    let out = play(&mut g, &["take trapdoor"]);
    assert!(out.contains("This can't be taken."));
    assert_eq!(g.world.room(here).contents, before);
}

#[test]
fn take_then_drop_round_trips() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);
    let kitchen = g.player.room;
    let can = object(&g.world, "Can");

    let out = play(&mut g, &["get can"]);
    assert!(out.contains("Taken."));
    assert!(g.player.inventory.contains(can));
    assert!(!g.world.room(kitchen).contents.contains(can));

    let inv = play(&mut g, &["i"]);
    assert!(inv.contains("You are carrying a Can."));

    let out = play(&mut g, &["throw can"]);
    assert!(out.contains("Dropped."));
    assert!(g.world.room(kitchen).contents.contains(can));
    assert!(g.player.inventory.is_empty());

    let inv = play(&mut g, &["inventory"]);
    assert!(inv.contains("You are empty handed."));
}

#[test]
fn opening_twice_is_refused() {
    let mut g = new_game(0);
    play(&mut g, &["n", "e"]);
    let window = object(&g.world, "Window");

    let first = play(&mut g, &["open window"]);
    assert_eq!(first.lines(), vec!["Opened."]);

    let second = play(&mut g, &["open window"]);
    assert_eq!(second.lines(), vec!["Already open."]);
    assert!(g.world.object(window).open);

    let out = play(&mut g, &["open house"]);
    assert!(out.contains("I don't see any HOUSE here."));
}

#[test]
fn closing_and_opening_refusals_leave_state_alone() {
    let mut g = new_game(0);
    play(&mut g, &["n", "e"]);
    let window = object(&g.world, "Window");

    let out = play(&mut g, &["close window"]);
    assert_eq!(out.lines(), vec!["Already closed."]);
    assert!(!g.world.object(window).open);

    play(&mut g, &["open window", "w"]);
    let can = object(&g.world, "Can");

    let out = play(&mut g, &["open can"]);
    assert_eq!(out.lines(), vec!["I can't open that."]);
    assert!(!g.world.object(can).open);

    let out = play(&mut g, &["close can"]);
    assert_eq!(out.lines(), vec!["I can't close that."]);
    assert!(!g.world.object(can).open);

    let out = play(&mut g, &["close window"]);
    assert_eq!(out.lines(), vec!["Closed."]);
    assert!(!g.world.object(window).open);
}

#[test]
fn the_troll_kills_a_dawdler() {
    let mut g = new_game(99);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["w", "pull rug", "open door", "down", "north"]);
    assert_eq!(g.troll.state, TrollState::Stalking);

    let out = play(&mut g, &["wait"; 10]);
    assert!(out.contains("The troll looks at you threateningly."));
    assert!(out.contains("The troll strikes at you with his club, hitting you on the head."));
    assert!(out.contains(" **** GAME OVER! You are dead."));
    assert_eq!(g.status(), Status::Dead);
}

#[test]
fn a_lucky_player_survives_the_first_swing() {
    let mut g = new_game(10);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["w", "pull rug", "open door", "down", "north"]);

    let out = play(&mut g, &["z"; 5]);
    assert!(out.contains("but misses!"));
    assert_eq!(g.status(), Status::Playing);
}

#[test]
fn the_troll_follows_but_not_outside() {
    let mut g = new_game(99);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["w", "pull rug", "open door", "down", "n"]);

    let out = play(&mut g, &["s"]);
    assert!(out.contains("The monstrous creature follows you into the room!"));
    assert_eq!(g.troll.room, room(&g.world, "Passage"));

    play(&mut g, &["up", "e"]);
    assert_eq!(g.troll.room, room(&g.world, "Kitchen"));

    let out = play(&mut g, &["e"]);
    assert!(!out.contains("follows you"));
    assert_eq!(g.player.room, room(&g.world, "Behind House"));
    assert_eq!(g.troll.room, room(&g.world, "Kitchen"));
    assert_eq!(g.troll.state, TrollState::Dormant);
    assert_eq!(g.status(), Status::Playing);
}

#[test]
fn the_can_keeps_the_troll_busy() {
    let mut g = new_game(99);
    play(&mut g, TO_KITCHEN);
    play(&mut g, &["take can", "w", "pull rug", "open door", "down", "n"]);

    let out = play(&mut g, &["drop can"]);
    assert!(out.contains("Still the beast looks hungry at you."));
    assert_eq!(g.player.points, 3);
    assert!(!g.world.room(g.player.room).contents.contains(object(&g.world, "Can")));
    assert_eq!(g.status(), Status::Playing);
}

#[test]
fn revisits_skip_the_long_description() {
    let mut g = new_game(0);
    let first = play(&mut g, &["n"]);
    assert!(first.contains("The path leads around the house to the east."));

    let back = play(&mut g, &["w", "n"]);
    assert!(back.contains("North of House"));
    assert!(!back.contains("The path leads around the house to the east."));

    let look = play(&mut g, &["look"]);
    assert!(look.contains("The path leads around the house to the east."));
}

#[test]
fn object_verbs_without_a_behavior_are_refused() {
    let mut g = new_game(0);
    play(&mut g, TO_KITCHEN);

    assert!(play(&mut g, &["push can"]).contains("You can't push this."));
    assert!(play(&mut g, &["pull window"]).contains("You can't pull this."));
    assert!(play(&mut g, &["look under can"]).contains("You don't see anything out of the ordinary."));
    assert!(play(&mut g, &["push piano"]).contains("I don't know what you are referring to."));
    assert!(play(&mut g, &["push"]).contains("Push what?"));
    assert!(play(&mut g, &["go"]).contains("Go where?"));
}

#[test]
fn examine_aliases_describe_objects() {
    let mut g = new_game(0);
    play(&mut g, &["n", "e"]);
    let out = play(&mut g, &["x window"]);
    assert!(out.contains("A small window, it is too dirty to look inside the house.\nThe Window is closed."));

    let out = play(&mut g, &["look at"]);
    assert!(out.contains("Behind House"));
}
