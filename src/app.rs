//! World and schedule construction.
//!
//! [`build_world`] inserts every resource the engine needs, spawns the two
//! content roots and the scene-change observer, and leaves the world in the
//! uninitialized pre-state (no scene entered). [`build_schedule`] assembles
//! the per-tick systems in their required order. [`tick`] is the single
//! entry point the platform loop (and the tests) drive.
//!
//! Audio mailboxes are registered here so the systems can always run; the
//! bridge itself is attached separately via
//! [`setup_audio`](crate::resources::audio::setup_audio) or
//! [`setup_audio_with_channels`](crate::resources::audio::setup_audio_with_channels),
//! depending on who owns the player.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::persistent::Persistent;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::interaction::InteractionCmd;
use crate::events::scene::observe_scene_change_event;
use crate::resources::config::StoryConfig;
use crate::resources::director::{Director, NextScene};
use crate::resources::models::ModelCatalog;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::story;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::director::check_pending_scene;
use crate::systems::interaction::{interaction_system, update_interaction_cmds};
use crate::systems::script::script_runner;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;
use crate::systems::tween::tween_position_system;

/// Build the story world: resources, content roots, and the scene observer.
pub fn build_world(config: StoryConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(config);
    world.insert_resource(ModelCatalog::builtin());

    let book = story::storybook();
    let scene_count = book.len();
    world.insert_resource(book);

    world.insert_resource(Messages::<InteractionCmd>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
    world.insert_resource(Messages::<AudioMessage>::default());

    // The two content roots exist for the whole session; only one is active,
    // selected by the render mode.
    let ar_root = world.spawn(Persistent).id();
    let fallback_root = world.spawn(Persistent).id();
    world.insert_resource(Director::new(scene_count, ar_root, fallback_root));
    world.insert_resource(NextScene::default());

    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    // Ensure the observer is registered before anything can trigger events.
    world.flush();

    world
}

/// Assemble the per-tick schedule.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain(),
    );
    schedule.add_systems((update_interaction_cmds, interaction_system).chain());
    // Branch scripts spawned by an activation start running the same tick.
    schedule.add_systems(script_runner.after(interaction_system));
    // Deferred scene requests (messages, script steps) apply before the
    // frame's animation so the new scene ticks from a consistent state.
    schedule.add_systems(check_pending_scene.after(script_runner));
    schedule.add_systems(tween_position_system.after(check_pending_scene));
    schedule.add_systems(ttl_system.after(tween_position_system));
    schedule
}

/// Advance the world by one tick of `dt` seconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers(); // Clear changed components for next tick
}
