//! Scene controller public API and the pending-scene pump.
//!
//! The navigation surface consumed by the session bootstrap and the
//! interaction entry points:
//! - [`request_scene`] – validated jump to a specific scene
//! - [`advance_scene`] / [`retreat_scene`] – wraparound navigation
//! - [`set_render_mode`] – AR/fallback selection, before the first load
//!
//! These operate on `&mut World` and apply transitions immediately via
//! [`SceneChangedEvent`](crate::events::scene::SceneChangedEvent), the same
//! way the main loop drives them. Systems that cannot take `&mut World`
//! (the interaction handler, the step runner) instead set
//! [`NextScene`](crate::resources::director::NextScene) and rely on
//! [`check_pending_scene`] to fire the event on the next tick.

use bevy_ecs::prelude::*;
use log::error;

use crate::error::StoryError;
use crate::events::scene::SceneChangedEvent;
use crate::resources::director::{Director, NextScene, RenderMode};
use crate::resources::storybook::{SceneDefinition, StoryBook};

/// Load a specific scene.
///
/// Precondition: `index` is within the story. Out-of-range requests are
/// logged and rejected without touching any state. On success the
/// transition (teardown + setup) has been applied when this returns; the
/// scene's own narrative chain then runs over subsequent ticks.
pub fn request_scene(world: &mut World, index: usize) -> Result<(), StoryError> {
    if let Err(e) = world.resource::<Director>().check_index(index) {
        error!("loadScene rejected: {e}");
        return Err(e);
    }
    world.resource_mut::<NextScene>().set(index);
    world.trigger(SceneChangedEvent {});
    world.flush();
    Ok(())
}

/// Go to the next scene, wrapping from the last back to the first.
pub fn advance_scene(world: &mut World) {
    let index = world.resource::<Director>().next_index();
    world.resource_mut::<NextScene>().set(index);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

/// Go to the previous scene, wrapping from the first to the last.
pub fn retreat_scene(world: &mut World) {
    let index = world.resource::<Director>().prev_index();
    world.resource_mut::<NextScene>().set(index);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

/// The definition of the scene currently on stage, or `None` before the
/// first load.
pub fn current_scene(world: &World) -> Option<&SceneDefinition> {
    let director = world.resource::<Director>();
    if !director.entered() {
        return None;
    }
    world.resource::<StoryBook>().scene(director.current())
}

/// Select AR or fallback presentation.
///
/// Must be called before the first scene load; afterwards the mode is
/// locked and the call fails with [`StoryError::RenderModeLocked`].
pub fn set_render_mode(world: &mut World, mode: RenderMode) -> Result<(), StoryError> {
    world
        .resource_mut::<Director>()
        .set_render_mode(mode)
        .inspect_err(|e| error!("{e}"))
}

/// Fire the scene-change event whenever a request is pending.
///
/// Deferred requests (from messages or script steps) land here; requests
/// made in the same tick coalesce, last one wins.
pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if next_scene.pending().is_some() {
        commands.trigger(SceneChangedEvent {});
    }
}
