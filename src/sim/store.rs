use std::fmt;
use std::time::Duration;

use bevy_ecs::prelude::{Entity, Schedule, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::settings::SimSettings;
use crate::sim::components::{Position, Unit, Vehicle, Velocity};
use crate::sim::systems::move_system;

/// Sequential identity of a stored entity, equal to its insertion index.
/// Identities are never reused; the store never removes entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker kind optionally attached to an entity at creation. Markers never
/// affect movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Unit,
    Vehicle,
}

/// Read-only snapshot of one stored entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
    pub kind: Option<EntityKind>,
}

/// Append-only, insertion-ordered collection of moving entities, backed by a
/// `bevy_ecs` world with the movement schedule built in.
pub struct EntityStore {
    world: World,
    schedule: Schedule,
    order: Vec<Entity>,
    rng: StdRng,
    settings: SimSettings,
}

impl EntityStore {
    pub fn new(settings: SimSettings) -> Self {
        let mut schedule = Schedule::default();
        schedule.add_systems(move_system);

        Self {
            world: World::new(),
            schedule,
            order: Vec::new(),
            rng: StdRng::from_entropy(),
            settings,
        }
    }

    /// Insert an entity with explicit position and velocity.
    pub fn spawn(&mut self, position: Position, velocity: Velocity) -> EntityId {
        let entity = self.world.spawn((position, velocity)).id();
        self.order.push(entity);
        EntityId(self.order.len() - 1)
    }

    /// Create an entity. Omitted coordinates are sampled uniformly from
    /// `[0, spawn_range)`; velocity components are always sampled from
    /// `[-velocity_range, velocity_range)`.
    pub fn create(&mut self, x: Option<f32>, y: Option<f32>) -> EntityId {
        let spawn_range = self.settings.spawn_range;
        let velocity_range = self.settings.velocity_range;

        let x = x.unwrap_or_else(|| self.rng.gen_range(0.0..spawn_range));
        let y = y.unwrap_or_else(|| self.rng.gen_range(0.0..spawn_range));
        let velocity = Velocity::new(
            self.rng.gen_range(-velocity_range..velocity_range),
            self.rng.gen_range(-velocity_range..velocity_range),
        );

        self.spawn(Position::new(x, y), velocity)
    }

    /// `create` plus a marker component classifying the entity.
    pub fn create_kind(&mut self, kind: EntityKind) -> EntityId {
        let id = self.create(None, None);
        let mut entity = self.world.entity_mut(self.order[id.0]);
        match kind {
            EntityKind::Unit => {
                entity.insert(Unit);
            }
            EntityKind::Vehicle => {
                entity.insert(Vehicle);
            }
        }
        id
    }

    /// Apply one movement tick to every entity. Each call advances positions
    /// again; this is deliberately not idempotent.
    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<EntityView> {
        let entity = *self.order.get(id.0)?;
        let position = *self.world.get::<Position>(entity)?;
        let velocity = *self.world.get::<Velocity>(entity)?;
        let kind = if self.world.get::<Unit>(entity).is_some() {
            Some(EntityKind::Unit)
        } else if self.world.get::<Vehicle>(entity).is_some() {
            Some(EntityKind::Vehicle)
        } else {
            None
        };

        Some(EntityView {
            id,
            position,
            velocity,
            kind,
        })
    }

    /// Snapshots of all entities in insertion order.
    pub fn all(&self) -> Vec<EntityView> {
        (0..self.order.len())
            .filter_map(|index| self.get(EntityId(index)))
            .collect()
    }

    /// Period of the automatic advance-all timer, from settings.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f32(self.settings.tick_period_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EntityStore {
        EntityStore::new(SimSettings::default())
    }

    #[test]
    fn create_assigns_sequential_identities() {
        let mut store = store();
        assert!(store.is_empty());

        for expected in 0..3 {
            let id = store.create(None, None);
            assert_eq!(id.index(), expected);
            assert_eq!(store.len(), expected + 1);
        }

        let ids: Vec<usize> = store.all().iter().map(|e| e.id.index()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn create_honors_explicit_coordinates() {
        let mut store = store();
        let id = store.create(Some(1.5), None);
        let entity = store.get(id).unwrap();
        assert_eq!(entity.position.x, 1.5);
        assert!((0.0..100.0).contains(&entity.position.y));
    }

    #[test]
    fn create_samples_within_ranges() {
        let mut store = store();
        for _ in 0..50 {
            store.create(None, None);
        }
        for entity in store.all() {
            assert!((0.0..100.0).contains(&entity.position.x));
            assert!((0.0..100.0).contains(&entity.position.y));
            assert!((-1.0..1.0).contains(&entity.velocity.vx));
            assert!((-1.0..1.0).contains(&entity.velocity.vy));
        }
    }

    #[test]
    fn tick_advances_each_position_once() {
        let mut store = store();
        store.spawn(Position::new(0.0, 0.0), Velocity::new(1.0, 0.0));

        store.tick();
        assert_eq!(store.get(EntityId(0)).unwrap().position, Position::new(1.0, 0.0));

        store.tick();
        assert_eq!(store.get(EntityId(0)).unwrap().position, Position::new(2.0, 0.0));
    }

    #[test]
    fn tick_leaves_velocity_and_identity_alone() {
        let mut store = store();
        store.spawn(Position::new(5.0, 5.0), Velocity::new(-0.5, 0.25));
        store.spawn(Position::new(1.0, 1.0), Velocity::new(0.0, 1.0));

        store.tick();

        let entities = store.all();
        assert_eq!(entities[0].id.index(), 0);
        assert_eq!(entities[0].velocity, Velocity::new(-0.5, 0.25));
        assert_eq!(entities[0].position, Position::new(4.5, 5.25));
        assert_eq!(entities[1].id.index(), 1);
        assert_eq!(entities[1].velocity, Velocity::new(0.0, 1.0));
        assert_eq!(entities[1].position, Position::new(1.0, 2.0));
    }

    #[test]
    fn create_kind_attaches_one_marker() {
        let mut store = store();
        let plain = store.create(None, None);
        let unit = store.create_kind(EntityKind::Unit);
        let vehicle = store.create_kind(EntityKind::Vehicle);

        assert_eq!(store.get(plain).unwrap().kind, None);
        assert_eq!(store.get(unit).unwrap().kind, Some(EntityKind::Unit));
        assert_eq!(store.get(vehicle).unwrap().kind, Some(EntityKind::Vehicle));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let store = store();
        assert!(store.get(EntityId(0)).is_none());
    }
}
