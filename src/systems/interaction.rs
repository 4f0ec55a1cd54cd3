//! Interaction entry point handling.
//!
//! The platform's gesture/raycast layer translates taps and button presses
//! into [`InteractionCmd`](crate::events::interaction::InteractionCmd)
//! messages; this module resolves them against the world:
//!
//! - `Activate(id)` finds the matching affordance (by branch id, or by label
//!   for console input), consumes it if it is a button — the whole choice
//!   group at once for choices — and spawns the branch script the current
//!   scene registers under that id. Tap targets stay armed and can fire
//!   again.
//! - `Advance`/`Retreat` request wraparound navigation; the pending-scene
//!   pump applies it on the same tick.
//!
//! A tap that matches nothing (e.g. it raced a scene transition) is logged
//! and ignored.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::affordance::{Affordance, AffordanceKind};
use crate::components::script::Script;
use crate::events::interaction::InteractionCmd;
use crate::resources::director::{Director, NextScene};
use crate::resources::storybook::StoryBook;

/// Advance the ECS message queue for [`InteractionCmd`].
pub fn update_interaction_cmds(mut msgs: ResMut<Messages<InteractionCmd>>) {
    msgs.update();
}

/// Resolve interaction commands against affordances and navigation.
pub fn interaction_system(
    mut commands: Commands,
    mut reader: MessageReader<InteractionCmd>,
    affordances: Query<(Entity, &Affordance)>,
    director: Res<Director>,
    mut next_scene: ResMut<NextScene>,
    book: Res<StoryBook>,
) {
    for cmd in reader.read() {
        match cmd {
            InteractionCmd::Activate(target) => {
                let found = affordances
                    .iter()
                    .find(|(_, a)| a.id == *target)
                    .or_else(|| {
                        affordances
                            .iter()
                            .find(|(_, a)| a.label.eq_ignore_ascii_case(target))
                    });
                let Some((entity, affordance)) = found else {
                    debug!("activation of '{target}' ignored; no such affordance");
                    continue;
                };

                if affordance.kind == AffordanceKind::Button {
                    if let Some(group) = &affordance.choice_group {
                        // Picking either option removes both.
                        for (other, a) in affordances.iter() {
                            if a.choice_group.as_deref() == Some(group.as_str()) {
                                commands.entity(other).try_despawn();
                            }
                        }
                    } else {
                        commands.entity(entity).try_despawn();
                    }
                }

                let branch = book
                    .scene(director.current())
                    .and_then(|scene| scene.branch(&affordance.id));
                match branch {
                    Some(steps) => {
                        commands.spawn((
                            Script::new(steps.clone()),
                            ChildOf(director.content_root()),
                        ));
                    }
                    None => warn!(
                        "affordance '{}' has no branch in scene {}",
                        affordance.id,
                        director.current()
                    ),
                }
            }
            InteractionCmd::Advance => {
                if director.entered() {
                    next_scene.set(director.next_index());
                }
            }
            InteractionCmd::Retreat => {
                if director.entered() {
                    next_scene.set(director.prev_index());
                }
            }
        }
    }
}
