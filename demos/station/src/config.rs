//! Run parameters for the station demo.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use al_core::AirlockConfig;

/// Everything the demo needs to build and run a station.
///
/// Every field has a default, so a JSON file only needs the keys it wants
/// to change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub seed:           u64,
    pub total_ticks:    u64,
    /// Personnel airlocks carrying the default tag.
    pub airlocks:       usize,
    /// Cargo airlocks carrying `switch_tag`.
    pub cargo_airlocks: usize,
    /// Per airlock, per tick probability that someone works a door by hand.
    pub crew_activity:  f64,
    /// Tag handed to the program at `switch_at_tick`, if any.
    pub switch_tag:     Option<String>,
    pub switch_at_tick: u64,
    pub output_dir:     PathBuf,
    pub interlock:      AirlockConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            total_ticks:    2_000,
            airlocks:       4,
            cargo_airlocks: 2,
            crew_activity:  0.02,
            switch_tag:     Some("[cargo]".into()),
            switch_at_tick: 1_000,
            output_dir:     PathBuf::from("output/station"),
            interlock:      AirlockConfig { snapshot_interval_ticks: 50, ..AirlockConfig::default() },
        }
    }
}

impl StationConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: StationConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.interlock.validate()?;
        Ok(config)
    }
}
