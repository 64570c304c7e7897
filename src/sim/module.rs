//! Loading of the simulation module. The session awaits this exactly once at
//! startup; a failure here leaves the session uninitialized for good.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::settings::Settings;
use crate::sim::store::EntityStore;

/// Load the simulation module: read and validate settings, then build the
/// entity store with its movement schedule.
pub async fn load(settings_path: Option<&Path>) -> Result<EntityStore> {
    let settings = match settings_path {
        Some(path) => {
            info!("loading settings from {}", path.display());
            Settings::load_from_file(path).await?
        }
        None => {
            debug!("no settings file given, using defaults");
            Settings::default()
        }
    };
    settings.sim.validate().context("invalid simulation settings")?;

    Ok(EntityStore::new(settings.sim))
}
