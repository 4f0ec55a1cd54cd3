//! Logical model catalog.
//!
//! Maps a model key ("tortoise", "grassPatch") to a loadable asset, a
//! default scale, and the set of named animation clips the rig provides.
//! Prop spawning and clip playback consult the catalog; unknown keys are
//! logged and skipped, never fatal, so missing content degrades to absent
//! flourishes rather than a halted story.
//!
//! The built-in catalog mirrors the story's asset set. A deployment can
//! override it from a JSON file.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::StoryError;

/// One catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelAsset {
    /// Asset path for the platform loader. Empty for primitive stand-ins
    /// built from geometry (grass, path, quote board).
    pub path: String,
    /// Default scale applied when the prop spec has no override.
    pub scale: Vec3,
    /// Logical clip name → rig clip identifier.
    pub clips: FxHashMap<String, String>,
}

impl ModelAsset {
    fn simple(path: &str, scale: f32) -> Self {
        ModelAsset {
            path: path.into(),
            scale: Vec3::splat(scale),
            clips: FxHashMap::default(),
        }
    }

    fn with_clips(path: &str, scale: f32, clips: &[(&str, &str)]) -> Self {
        let mut asset = Self::simple(path, scale);
        for (name, rig_clip) in clips {
            asset.clips.insert((*name).into(), (*rig_clip).into());
        }
        asset
    }
}

/// String-keyed store of model assets.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    models: FxHashMap<String, ModelAsset>,
}

impl ModelCatalog {
    /// The story's asset set: both characters with their rigs, the scenery
    /// models, and the primitive stand-ins.
    pub fn builtin() -> Self {
        let mut models = FxHashMap::default();
        models.insert(
            "tortoise".into(),
            ModelAsset::with_clips(
                "models/tortoise.glb",
                0.5,
                &[
                    ("idle", "Idle"),
                    ("walk", "Walk"),
                    ("blink", "Blink"),
                    ("nod", "Nod"),
                ],
            ),
        );
        models.insert(
            "hare".into(),
            ModelAsset::with_clips(
                "models/hare2.glb",
                0.5,
                &[
                    ("idle", "Idle"),
                    ("run", "Run"),
                    ("smug", "Smug"),
                    ("sleep", "Sleep"),
                ],
            ),
        );
        models.insert("tree".into(), ModelAsset::simple("models/tree.glb", 0.007));
        models.insert(
            "finish".into(),
            ModelAsset::simple("models/finish.glb", 0.3),
        );
        models.insert("grassPatch".into(), ModelAsset::simple("", 1.0));
        models.insert("dirtPath".into(), ModelAsset::simple("", 1.0));
        models.insert("quoteBoard".into(), ModelAsset::simple("", 1.0));
        ModelCatalog { models }
    }

    /// Parse a catalog from JSON, e.g. a deployment override file.
    pub fn from_json(json: &str) -> Result<Self, StoryError> {
        serde_json::from_str(json).map_err(|e| StoryError::Config {
            reason: format!("model catalog: {e}"),
        })
    }

    pub fn get(&self, key: &str) -> Option<&ModelAsset> {
        self.models.get(key)
    }

    /// Validate a model key, mapping absence to the error taxonomy.
    pub fn require(&self, key: &str) -> Result<&ModelAsset, StoryError> {
        self.models.get(key).ok_or_else(|| StoryError::UnknownModel {
            key: key.to_string(),
        })
    }

    /// Resolve a logical clip name on a model to the rig's clip identifier.
    pub fn resolve_clip(&self, model: &str, clip: &str) -> Result<&str, StoryError> {
        let asset = self.require(model)?;
        asset
            .clips
            .get(clip)
            .map(String::as_str)
            .ok_or_else(|| StoryError::UnknownClip {
                model: model.to_string(),
                clip: clip.to_string(),
            })
    }
}
