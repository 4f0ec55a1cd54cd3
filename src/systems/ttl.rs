//! TTL (time-to-live) system.
//!
//! Decrements [`Ttl`](crate::components::ttl::Ttl) countdowns and despawns
//! entities whose time runs out. Captions ride on this: their display
//! duration is their TTL, so a narration banner disappears exactly when its
//! configured duration elapses, whatever the audio did.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrement TTLs and despawn entities that reach zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
