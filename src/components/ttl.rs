//! Time-to-live component for automatic entity despawning.
//!
//! The [`Ttl`] component counts down each frame; when the remaining time
//! reaches zero the entity is despawned. Captions use it as their display
//! duration — a narration banner shown for nine seconds is simply spawned
//! with `Ttl::new(9.0)`.
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – updates and despawns

use bevy_ecs::prelude::Component;

/// Despawns the entity after a duration.
///
/// The countdown respects
/// [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
