//! Error taxonomy for the story engine.
//!
//! Nothing here is fatal to the process. Every failure degrades to "skip the
//! enhancement, keep the story moving": invalid requests are rejected without
//! mutating state, missing assets are logged and skipped, and playback
//! failures never hold up the narrative text.

use thiserror::Error;

/// Errors surfaced by the scene controller and its collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// A scene load was requested with an index outside `0..count`.
    #[error("scene index {index} out of bounds (story has {count} scenes)")]
    InvalidSceneIndex { index: usize, count: usize },

    /// A prop referenced a model key the catalog does not know.
    #[error("model '{key}' not in catalog")]
    UnknownModel { key: String },

    /// A step asked a model to play a clip it does not have.
    #[error("model '{model}' has no clip '{clip}'")]
    UnknownClip { model: String, clip: String },

    /// A step referenced an actor key with no registered entity. This is the
    /// stale-reference case after a scene transition; callers treat it as a
    /// no-op.
    #[error("no actor registered under '{key}'")]
    UnknownActor { key: String },

    /// `set_render_mode` was called after the first scene load.
    #[error("render mode is locked once the first scene has loaded")]
    RenderModeLocked,

    /// Audio playback failed to start. Reported by the audio bridge; the
    /// caption stays on its original schedule.
    #[error("playback of '{id}' failed: {reason}")]
    Playback { id: String, reason: String },

    /// Configuration file could not be read or parsed.
    #[error("config error: {reason}")]
    Config { reason: String },
}
