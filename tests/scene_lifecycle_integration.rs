//! Integration tests for the scene lifecycle controller: load/teardown,
//! navigation wraparound, render-mode locking, and content-root hygiene.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test scene_lifecycle_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use fablestage::app;
use fablestage::components::affordance::Affordance;
use fablestage::components::caption::Narration;
use fablestage::components::position::Position;
use fablestage::components::prop::Prop;
use fablestage::error::StoryError;
use fablestage::events::audio::{AudioCmd, AudioMessage};
use fablestage::events::interaction::InteractionCmd;
use fablestage::resources::audio::setup_audio_with_channels;
use fablestage::resources::config::StoryConfig;
use fablestage::resources::director::{Director, RenderMode};
use fablestage::resources::worldsignals::WorldSignals;
use fablestage::systems::director::{
    advance_scene, current_scene, request_scene, retreat_scene, set_render_mode,
};

const DT: f32 = 0.25;

struct Harness {
    world: World,
    schedule: Schedule,
    #[allow(dead_code)]
    rx_cmd: Receiver<AudioCmd>,
    #[allow(dead_code)]
    tx_msg: Sender<AudioMessage>,
}

fn harness() -> Harness {
    let mut world = app::build_world(StoryConfig::new());
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
    setup_audio_with_channels(&mut world, tx_cmd, rx_msg);
    set_render_mode(&mut world, RenderMode::Fallback).unwrap();
    Harness {
        world,
        schedule: app::build_schedule(),
        rx_cmd,
        tx_msg,
    }
}

impl Harness {
    fn tick(&mut self) {
        app::tick(&mut self.world, &mut self.schedule, DT);
    }

    fn run_seconds(&mut self, seconds: f32) {
        let steps = (seconds / DT).ceil() as usize;
        for _ in 0..steps {
            self.tick();
        }
    }

    fn current_scene_id(&self) -> &'static str {
        current_scene(&self.world).expect("no scene entered yet").id
    }

    fn root(&self) -> Entity {
        self.world.resource::<Director>().content_root()
    }

    /// Model keys of the props currently under the active content root.
    fn prop_keys(&mut self) -> Vec<String> {
        let root = self.root();
        let mut query = self.world.query::<(&Prop, &ChildOf)>();
        let mut keys: Vec<String> = query
            .iter(&self.world)
            .filter(|(_, child_of)| child_of.0 == root)
            .map(|(prop, _)| prop.model_key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn affordance_ids(&mut self) -> Vec<String> {
        let mut query = self.world.query::<&Affordance>();
        let mut ids: Vec<String> = query
            .iter(&self.world)
            .map(|a| a.id.clone())
            .collect();
        ids.sort();
        ids
    }

    fn activate(&mut self, id: &str) {
        self.world
            .resource_mut::<Messages<InteractionCmd>>()
            .write(InteractionCmd::Activate(id.to_string()));
        self.tick();
    }
}

#[test]
fn load_scene_spawns_exactly_the_scene_props() {
    let mut h = harness();
    request_scene(&mut h.world, 0).unwrap();

    assert_eq!(h.current_scene_id(), "intro");
    assert_eq!(
        h.prop_keys(),
        vec!["dirtPath", "grassPatch", "hare", "tortoise", "tree"]
    );

    // actors sit where the story places them
    let signals = h.world.resource::<WorldSignals>();
    let tortoise = signals.actor("tortoise").unwrap();
    let hare = signals.actor("hare").unwrap();
    let tortoise_pos = h.world.get::<Position>(tortoise).unwrap().pos;
    let hare_pos = h.world.get::<Position>(hare).unwrap().pos;
    assert_eq!(tortoise_pos, glam::Vec3::new(-0.6, 0.3, 0.0));
    assert_eq!(hare_pos, glam::Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn every_scene_loads_with_its_own_id() {
    let mut h = harness();
    let expected = [
        "intro",
        "race-begins",
        "tortoise-keeps-going",
        "nap-scene",
        "finish-line",
        "moral-ending",
    ];
    for (i, id) in expected.iter().enumerate() {
        request_scene(&mut h.world, i).unwrap();
        assert_eq!(h.current_scene_id(), *id);
    }
}

#[test]
fn teardown_leaves_no_stale_content() {
    let mut h = harness();
    request_scene(&mut h.world, 0).unwrap();
    // run deep into the intro: a narration banner exists, then the talk button
    h.run_seconds(10.0);
    assert_eq!(h.affordance_ids(), vec!["talk"]);

    request_scene(&mut h.world, 1).unwrap();

    // only scene 1's props remain; the old affordance and captions are gone
    assert_eq!(
        h.prop_keys(),
        vec!["dirtPath", "grassPatch", "hare", "tortoise", "tree", "tree"]
    );
    assert!(h.affordance_ids().is_empty());
    let mut narration_query = h.world.query::<&Narration>();
    assert_eq!(narration_query.iter(&h.world).count(), 0);

    // stale flags and actors were reset; the registry now points at scene 1
    let signals = h.world.resource::<WorldSignals>();
    assert!(signals.actor("tortoise").is_some());
}

#[test]
fn invalid_scene_index_is_rejected_without_state_change() {
    let mut h = harness();
    request_scene(&mut h.world, 0).unwrap();
    let props_before = h.prop_keys();

    let result = request_scene(&mut h.world, 6);
    assert_eq!(
        result,
        Err(StoryError::InvalidSceneIndex { index: 6, count: 6 })
    );
    let result = request_scene(&mut h.world, usize::MAX);
    assert!(matches!(
        result,
        Err(StoryError::InvalidSceneIndex { .. })
    ));

    assert_eq!(h.current_scene_id(), "intro");
    assert_eq!(h.prop_keys(), props_before);
}

#[test]
fn navigation_wraps_both_ways() {
    let mut h = harness();
    request_scene(&mut h.world, 5).unwrap();
    advance_scene(&mut h.world);
    assert_eq!(h.current_scene_id(), "intro");

    retreat_scene(&mut h.world);
    assert_eq!(h.current_scene_id(), "moral-ending");
}

#[test]
fn navigation_messages_wrap_too() {
    let mut h = harness();
    request_scene(&mut h.world, 5).unwrap();
    h.world
        .resource_mut::<Messages<InteractionCmd>>()
        .write(InteractionCmd::Advance);
    h.tick();
    assert_eq!(h.current_scene_id(), "intro");

    h.world
        .resource_mut::<Messages<InteractionCmd>>()
        .write(InteractionCmd::Retreat);
    h.tick();
    assert_eq!(h.current_scene_id(), "moral-ending");
}

#[test]
fn render_mode_locks_after_first_load() {
    let mut h = harness();
    let fallback_root = h.root();
    request_scene(&mut h.world, 0).unwrap();

    assert_eq!(
        set_render_mode(&mut h.world, RenderMode::Ar),
        Err(StoryError::RenderModeLocked)
    );
    // still presenting on the fallback root
    assert_eq!(h.root(), fallback_root);
    assert_eq!(
        h.world.resource::<Director>().render_mode(),
        RenderMode::Fallback
    );
}

#[test]
fn ar_mode_uses_the_ar_root() {
    let mut world = app::build_world(StoryConfig::new());
    let (tx_cmd, _rx_cmd) = unbounded::<AudioCmd>();
    let (_tx_msg, rx_msg) = unbounded::<AudioMessage>();
    setup_audio_with_channels(&mut world, tx_cmd, rx_msg);

    let fallback_root = world.resource::<Director>().content_root();
    set_render_mode(&mut world, RenderMode::Ar).unwrap();
    let ar_root = world.resource::<Director>().content_root();
    assert_ne!(ar_root, fallback_root);

    request_scene(&mut world, 0).unwrap();

    // all content landed under the AR root, none under the fallback root
    let mut by_parent = (0usize, 0usize);
    let mut query = world.query::<(&Prop, &ChildOf)>();
    for (_, child_of) in query.iter(&world) {
        if child_of.0 == ar_root {
            by_parent.0 += 1;
        } else if child_of.0 == fallback_root {
            by_parent.1 += 1;
        }
    }
    assert_eq!(by_parent, (5, 0));
}

#[test]
fn reentering_a_scene_mid_animation_is_clean() {
    let mut h = harness();
    request_scene(&mut h.world, 1).unwrap();
    // the race tweens are mid-flight
    h.run_seconds(7.5);

    request_scene(&mut h.world, 1).unwrap();

    // fresh entry: actors back at their spawn points, script restarted
    let signals = h.world.resource::<WorldSignals>();
    let tortoise = signals.actor("tortoise").unwrap();
    let pos = h.world.get::<Position>(tortoise).unwrap().pos;
    assert_eq!(pos, glam::Vec3::new(-1.0, 0.3, 0.6));
    assert!(h.affordance_ids().is_empty());
}

#[test]
fn stale_activation_is_ignored() {
    let mut h = harness();
    request_scene(&mut h.world, 4).unwrap();
    let props_before = h.prop_keys();

    // "talk" belongs to the intro scene; a tap racing a transition must not
    // disturb anything
    h.activate("talk");

    assert_eq!(h.current_scene_id(), "finish-line");
    assert_eq!(h.prop_keys(), props_before);
}
