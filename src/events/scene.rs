//! Scene transition event and observer.
//!
//! Systems request a transition by setting
//! [`NextScene`](crate::resources::director::NextScene) (directly or through
//! [`crate::systems::director::request_scene`]). Emitting a
//! [`SceneChangedEvent`] then triggers [`observe_scene_change_event`], which
//! applies the transition: unconditional teardown of the active content
//! root, then setup of the requested scene from its
//! [`SceneDefinition`](crate::resources::storybook::SceneDefinition).
//!
//! This decouples the intent to change scenes from the mechanics of
//! teardown/setup and keeps the teardown-before-setup ordering in one place.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

use crate::components::affordance::Affordance;
use crate::components::clip::ActiveClip;
use crate::components::position::Position;
use crate::components::prop::Prop;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::script::Script;
use crate::resources::director::{Director, NextScene};
use crate::resources::models::ModelCatalog;
use crate::resources::storybook::StoryBook;
use crate::resources::worldsignals::WorldSignals;

/// Event indicating that a pending scene transition should be applied.
///
/// If [`NextScene`] holds a request, the observer tears down the active
/// content root and builds the requested scene; if not, nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene transition.
///
/// Contract, in order:
/// 1. Consume the pending index from [`NextScene`]; validate it against the
///    scene count. Out-of-range requests are logged and dropped with no
///    state change.
/// 2. Despawn every child of the active content root. The despawns are
///    queued ahead of all setup commands, so the root is empty before any
///    new content exists — in-flight scripts, tweens, captions, and
///    affordances of the old scene are destroyed, not paused.
/// 3. Clear the actor registry and all transient flags.
/// 4. Record the new index (locking the render mode on first entry) and
///    publish the scene's title/instruction strings.
/// 5. Spawn the scene's props (skipping any whose model the catalog does not
///    know) and its opening script.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: ResMut<NextScene>,
    mut director: ResMut<Director>,
    mut signals: ResMut<WorldSignals>,
    book: Res<StoryBook>,
    catalog: Res<ModelCatalog>,
    children_query: Query<(Entity, &ChildOf)>,
) {
    let Some(index) = next_scene.take() else {
        debug!("SceneChangedEvent with no pending scene");
        return;
    };

    if let Err(e) = director.check_index(index) {
        error!("rejected scene request: {e}");
        return;
    }
    let Some(scene) = book.scene(index) else {
        error!("storybook has no scene {index}");
        return;
    };

    let root = director.content_root();

    // Teardown first. These despawns are queued before every setup command
    // below, so the new scene always starts from an empty root.
    for (child, child_of) in children_query.iter() {
        if child_of.0 == root {
            commands.entity(child).try_despawn();
        }
    }
    signals.reset_scene_state();

    director.enter_scene(index);
    signals.set_string("scene_title", scene.title);
    signals.set_string("scene_instructions", scene.instructions);
    info!("entering scene {} '{}'", index, scene.id);

    for spec in &scene.props {
        let asset = match catalog.require(&spec.model_key) {
            Ok(asset) => asset,
            Err(e) => {
                warn!("{e}; prop skipped");
                continue;
            }
        };
        let scale = spec.scale.unwrap_or(asset.scale);
        let prop = if spec.visible {
            Prop::new(&spec.model_key)
        } else {
            Prop::hidden(&spec.model_key)
        };

        let mut ecmd = commands.spawn((
            prop,
            Position { pos: spec.position },
            Rotation {
                degrees: spec.rotation,
            },
            Scale { scale },
            ChildOf(root),
        ));

        if let Some(clip) = &spec.clip {
            match catalog.resolve_clip(&spec.model_key, clip) {
                Ok(_) => {
                    ecmd.insert(ActiveClip::new(clip));
                }
                Err(e) => warn!("{e}; prop spawns without animation"),
            }
        }
        if let Some(branch_id) = &spec.tap {
            ecmd.insert(Affordance::tap_target(branch_id, branch_id));
        }

        let id = ecmd.id();
        if let Some(actor) = &spec.actor {
            signals.set_actor(actor, id);
        }
    }

    if !scene.opening.is_empty() {
        commands.spawn((Script::new(scene.opening.clone()), ChildOf(root)));
    }
}
