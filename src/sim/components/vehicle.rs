use bevy_ecs::prelude::Component;

/// Marker component tagging an entity as a vehicle.
#[derive(Component, Clone, Copy, Debug)]
pub struct Vehicle;
