//! Caption components: narration banners and dialogue bubbles.
//!
//! Captions are the presentation-surface seam. The engine spawns them as
//! content-root children with a [`Position`](super::position::Position)
//! anchor and a [`Ttl`](super::ttl::Ttl) equal to the display duration; the
//! platform layer renders them however it likes (the console binary just
//! prints them). Their completion signal is the script's own wait on the
//! same duration — audio playback never extends or shortens it.

use bevy_ecs::prelude::Component;

/// A narrator banner, anchored above the scene.
#[derive(Component, Clone, Debug)]
pub struct Narration {
    pub text: String,
}

impl Narration {
    pub fn new(text: impl Into<String>) -> Self {
        Narration { text: text.into() }
    }
}

/// A character dialogue bubble, anchored near the speaker.
#[derive(Component, Clone, Debug)]
pub struct Dialogue {
    pub speaker: String,
    pub text: String,
}

impl Dialogue {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Dialogue {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}
