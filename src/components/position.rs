use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Copy, Debug)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Position {
            pos: Vec3::new(x, y, z),
        }
    }
}
