use bevy_ecs::prelude::Component;

/// Velocity of an entity, fixed for the entity's lifetime.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }
}
