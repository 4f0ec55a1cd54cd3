use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Euler rotation in degrees, applied per axis.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: Vec3,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Rotation {
            degrees: Vec3::new(x, y, z),
        }
    }
}
