use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{Behavior, ObjectId, RevealTo, World};

/// Run `target`'s behavior for some verb tag.
pub fn perform(
    behavior: &Behavior,
    target: ObjectId,
    out: &mut Output,
    world: &mut World,
    player: &mut Player,
) {
    let reveal = match behavior {
        Behavior::Say(text) => {
            out.say(text.as_str());
            return;
        }
        Behavior::Reveal(reveal) => reveal,
    };

    // `open` on a non-openable object means "already revealed"
    if world.object(target).open {
        out.say(reveal.repeat_text.as_str());
        return;
    }

    out.say(reveal.text.as_str());

    if let Some(desc) = &reveal.object_desc {
        world.object_mut(target).desc = desc.clone();
    }
    if let Some(desc) = &reveal.room_desc {
        world.room_mut(player.room).desc = desc.clone();
    }

    match reveal.destination {
        RevealTo::Room => world.room_mut(player.room).contents.add([reveal.object]),
        RevealTo::Inventory => player.inventory.add([reveal.object]),
    }
    world.object_mut(target).open = true;

    tracing::debug!(
        object = %world.object(target).name,
        revealed = %world.object(reveal.object).name,
        "one-time reveal fired"
    );

    if reveal.points > 0 {
        player.give_points(reveal.points, out);
    }
}
