use bevy_ecs::prelude::Component;

/// Marker component tagging an entity as a unit.
#[derive(Component, Clone, Copy, Debug)]
pub struct Unit;
