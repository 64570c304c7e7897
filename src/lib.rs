pub mod launcher;
pub mod settings;
pub mod sim;
pub mod view;

use std::time::Duration;

use log::{error, info};

use crate::sim::store::{EntityKind, EntityStore};

/// Lifecycle of a demo session. Entity operations only take effect in
/// `Ready`; the transition happens at most once, after the simulation module
/// finishes loading.
pub enum SessionState {
    Uninitialized,
    Ready(EntityStore),
}

/// A trigger arriving from the input surface, either a typed command or the
/// recurring timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddEntity(Option<EntityKind>),
    AdvanceAll,
}

/// Owns all session state: the lifecycle, the entity store once loaded, and
/// the user-visible status line. One `Session` per run; nothing is ambient.
pub struct Session {
    state: SessionState,
    status: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            status: String::from("loading simulation module..."),
        }
    }

    /// Complete the one-shot module load. On success the session becomes
    /// `Ready` and spawns its initial entity; the caller renders afterwards.
    /// On failure the session stays `Uninitialized` with the reason in the
    /// status line. There is no retry.
    pub fn complete_load(&mut self, result: anyhow::Result<EntityStore>) {
        match result {
            Ok(mut store) => {
                let id = store.create(None, None);
                info!("simulation module loaded, spawned initial entity {id}");
                self.status = String::from("simulation module loaded");
                self.state = SessionState::Ready(store);
            }
            Err(err) => {
                error!("simulation module failed to load: {err:#}");
                self.status = format!("error loading simulation module: {err:#}");
            }
        }
    }

    /// Apply a trigger. Triggers arriving while `Uninitialized` are accepted
    /// and dropped: the input surface exists before the module does, and the
    /// source behavior neither queues nor errors in that window.
    pub fn handle_action(&mut self, action: Action) {
        let SessionState::Ready(store) = &mut self.state else {
            return;
        };
        match action {
            Action::AddEntity(None) => {
                store.create(None, None);
            }
            Action::AddEntity(Some(kind)) => {
                store.create_kind(kind);
            }
            Action::AdvanceAll => store.tick(),
        }
    }

    /// Render the entity list, or `None` while the module is not loaded.
    pub fn render(&self) -> Option<String> {
        match &self.state {
            SessionState::Ready(store) => Some(view::render(store)),
            SessionState::Uninitialized => None,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    pub fn store(&self) -> Option<&EntityStore> {
        match &self.state {
            SessionState::Ready(store) => Some(store),
            SessionState::Uninitialized => None,
        }
    }

    /// Timer period once loaded; the launcher keeps a default until then.
    pub fn tick_period(&self) -> Option<Duration> {
        self.store().map(EntityStore::tick_period)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
