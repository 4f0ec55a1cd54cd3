use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug)]
pub struct Scale {
    pub scale: Vec3,
}

impl Scale {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Scale {
            scale: Vec3::new(x, y, z),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}
