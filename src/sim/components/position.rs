use bevy_ecs::prelude::Component;

/// Position of an entity. Treated as a value: updates replace the whole
/// struct, a coordinate is never mutated in place.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
