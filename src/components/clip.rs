use bevy_ecs::prelude::Component;

/// The named animation clip a prop is currently playing.
///
/// Clip names are logical ("idle", "walk", "sleep"); the catalog maps them to
/// the rig's clip identifiers. Rig playback itself is the platform's job —
/// this component only records what should be playing.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct ActiveClip {
    pub clip: String,
}

impl ActiveClip {
    pub fn new(clip: impl Into<String>) -> Self {
        ActiveClip { clip: clip.into() }
    }
}
