use bevy_ecs::prelude::*;
use cgmath::{Point2, Vector2};

use crate::sim::components::{Position, Velocity};

/// Advance a position by one application of a velocity. Pure; this is the
/// only arithmetic in the simulation.
pub fn advance(position: &Position, velocity: &Velocity) -> Position {
    let moved = Point2::new(position.x, position.y) + Vector2::new(velocity.vx, velocity.vy);
    Position {
        x: moved.x,
        y: moved.y,
    }
}

/// System: replace every entity's position with its advanced position.
pub fn move_system(mut query: Query<(&mut Position, &Velocity)>) {
    for (mut position, velocity) in &mut query {
        *position = advance(&position, velocity);
    }
}
