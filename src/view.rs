//! Text rendering of the entity store: one block per entity, in insertion
//! order. Pure function of store state.

use std::fmt::Write;

use crate::sim::store::{EntityKind, EntityStore, EntityView};

/// Render the store as human-readable blocks. An empty store renders to an
/// empty string.
pub fn render(store: &EntityStore) -> String {
    let mut out = String::new();
    for entity in store.all() {
        render_block(&mut out, &entity);
    }
    out
}

fn render_block(out: &mut String, entity: &EntityView) {
    let tag = match entity.kind {
        Some(EntityKind::Unit) => " (unit)",
        Some(EntityKind::Vehicle) => " (vehicle)",
        None => "",
    };
    // writing into a String cannot fail
    let _ = writeln!(out, "Entity {}{}", entity.id, tag);
    let _ = writeln!(
        out,
        "  position: ({:.2}, {:.2})",
        entity.position.x, entity.position.y
    );
    let _ = writeln!(
        out,
        "  velocity: ({:.2}, {:.2})",
        entity.velocity.vx, entity.velocity.vy
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimSettings;
    use crate::sim::components::{Position, Velocity};

    fn store() -> EntityStore {
        EntityStore::new(SimSettings::default())
    }

    #[test]
    fn empty_store_renders_to_empty_string() {
        assert_eq!(render(&store()), "");
    }

    #[test]
    fn block_shows_identity_and_two_decimal_components() {
        let mut store = store();
        store.spawn(Position::new(1.5, 2.0), Velocity::new(-0.5, 0.25));

        let text = render(&store);
        assert_eq!(
            text,
            "Entity 0\n  position: (1.50, 2.00)\n  velocity: (-0.50, 0.25)\n"
        );
    }

    #[test]
    fn blocks_follow_insertion_order() {
        let mut store = store();
        store.spawn(Position::new(9.0, 9.0), Velocity::new(0.0, 0.0));
        store.spawn(Position::new(1.0, 1.0), Velocity::new(0.0, 0.0));
        store.spawn(Position::new(4.0, 4.0), Velocity::new(0.0, 0.0));

        let text = render(&store);
        let first = text.find("Entity 0").unwrap();
        let second = text.find("Entity 1").unwrap();
        let third = text.find("Entity 2").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn marked_entities_carry_a_kind_tag() {
        let mut store = store();
        store.create_kind(EntityKind::Unit);
        store.create_kind(EntityKind::Vehicle);

        let text = render(&store);
        assert!(text.contains("Entity 0 (unit)"));
        assert!(text.contains("Entity 1 (vehicle)"));
    }
}
