//! Scene definition shapes and the story book resource.
//!
//! A [`SceneDefinition`] is pure data: prop placements, an opening step
//! list, and a branch table keyed by affordance id. The six concrete scenes
//! live in [`crate::story`]; they are built once at startup and never
//! mutated. Every scene is a value of this one shape — there are no
//! per-scene types.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::script::Step;

/// Placement record for one prop a scene spawns on entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropSpec {
    /// Catalog key of the model to instantiate.
    pub model_key: String,
    /// Stable lookup key registered in the actor registry, for props that
    /// branch steps address later.
    pub actor: Option<String>,
    pub position: Vec3,
    /// Euler rotation in degrees.
    pub rotation: Vec3,
    /// Per-axis scale override; the catalog default applies when absent.
    pub scale: Option<Vec3>,
    /// Clip to start playing on spawn.
    pub clip: Option<String>,
    /// Spawn hidden (the finish-line hare).
    pub visible: bool,
    /// Attach a tap-target affordance with this branch id.
    pub tap: Option<String>,
}

impl PropSpec {
    pub fn new(model_key: impl Into<String>, position: Vec3) -> Self {
        PropSpec {
            model_key: model_key.into(),
            actor: None,
            position,
            rotation: Vec3::ZERO,
            scale: None,
            clip: None,
            visible: true,
            tap: None,
        }
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Some(Vec3::new(x, y, z));
        self
    }

    pub fn as_actor(mut self, key: impl Into<String>) -> Self {
        self.actor = Some(key.into());
        self
    }

    pub fn playing(mut self, clip: impl Into<String>) -> Self {
        self.clip = Some(clip.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn tappable(mut self, branch_id: impl Into<String>) -> Self {
        self.tap = Some(branch_id.into());
        self
    }
}

/// One staged segment of the story: placements, opening sequence, branches.
#[derive(Clone, Debug)]
pub struct SceneDefinition {
    /// Stable scene id, e.g. `"nap-scene"`.
    pub id: &'static str,
    pub title: &'static str,
    /// Instruction line shown to the user while the scene is active.
    pub instructions: &'static str,
    /// Props spawned on scene entry, in order.
    pub props: Vec<PropSpec>,
    /// Step list run on a fresh script entity after the props are placed.
    pub opening: Vec<Step>,
    /// Branch step lists by affordance id.
    pub branches: FxHashMap<String, Vec<Step>>,
}

impl SceneDefinition {
    pub fn branch(&self, id: &str) -> Option<&Vec<Step>> {
        self.branches.get(id)
    }
}

/// The immutable, ordered scene list. Lives for the process lifetime.
#[derive(Resource, Debug)]
pub struct StoryBook {
    scenes: Vec<SceneDefinition>,
}

impl StoryBook {
    pub fn new(scenes: Vec<SceneDefinition>) -> Self {
        StoryBook { scenes }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scene(&self, index: usize) -> Option<&SceneDefinition> {
        self.scenes.get(index)
    }
}
