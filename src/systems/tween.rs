//! Position tween system.
//!
//! Advances every [`TweenPosition`](crate::components::tween::TweenPosition)
//! by the tick delta and writes the interpolated value into the entity's
//! [`Position`](crate::components::position::Position). Interpolation is
//! linear and position-only; completion clamps to the exact end point and
//! stops the tween.
//!
//! Tweens notify through
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals): an
//! optional completion flag, and an optional milestone flag raised the first
//! time progress crosses a fraction (the finish-line scene releases the hare
//! at 80% of the tortoise's run). Tween tasks never block each other; an
//! entity despawned by a scene transition simply drops out of the query, so
//! a stale tween is a no-op rather than a fault.

use bevy_ecs::prelude::*;

use crate::components::position::Position;
use crate::components::tween::TweenPosition;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Advance playing tweens and apply their sampled positions.
pub fn tween_position_system(
    world_time: Res<WorldTime>,
    mut signals: ResMut<WorldSignals>,
    mut query: Query<(&mut Position, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut position, mut tween) in query.iter_mut() {
        if !tween.playing {
            continue;
        }
        tween.elapsed += dt;
        let progress = tween.progress();

        if let Some(milestone) = tween.milestone.as_mut()
            && !milestone.reached
            && progress >= milestone.at
        {
            milestone.reached = true;
            signals.set_flag(milestone.flag.clone());
        }

        position.pos = tween.sample();

        if progress >= 1.0 {
            tween.playing = false;
            if let Some(flag) = &tween.done_flag {
                signals.set_flag(flag.clone());
            }
        }
    }
}
