use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Operator-facing settings, stored as JSON wherever `--settings` points.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Settings {
    pub sim: SimSettings,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimSettings {
    /// Positions with no explicit coordinate are sampled from `[0, spawn_range)`.
    pub spawn_range: f32,
    /// Velocity components are sampled from `[-velocity_range, velocity_range)`.
    pub velocity_range: f32,
    /// Period of the automatic advance-all timer, in seconds.
    pub tick_period_secs: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            spawn_range: 100.0,
            velocity_range: 1.0,
            tick_period_secs: 1.0,
        }
    }
}

impl SimSettings {
    /// Reject ranges the sampler and the timer cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spawn_range.is_finite() && self.spawn_range > 0.0,
            "spawn_range must be positive and finite, got {}",
            self.spawn_range
        );
        ensure!(
            self.velocity_range.is_finite() && self.velocity_range > 0.0,
            "velocity_range must be positive and finite, got {}",
            self.velocity_range
        );
        ensure!(
            self.tick_period_secs.is_finite() && self.tick_period_secs > 0.0,
            "tick_period_secs must be positive and finite, got {}",
            self.tick_period_secs
        );
        Ok(())
    }
}

impl Settings {
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        Ok(settings)
    }

    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, serialized)
            .await
            .with_context(|| format!("writing settings file {}", path.display()))?;
        Ok(())
    }
}
