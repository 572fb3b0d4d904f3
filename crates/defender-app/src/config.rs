use std::path::PathBuf;

use defender_core::enums::TurretClass;
use defender_sim::SimConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `profile.json`
    pub data_dir: PathBuf,
    /// RNG seed for the simulation
    pub seed: u64,
    /// Class requested for the first run
    pub turret_class: TurretClass,
    /// Stream every n-th snapshot to stdout as JSON lines instead of logging
    pub json_every: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".core-defender"),
            seed: SimConfig::default().seed,
            turret_class: TurretClass::Standard,
            json_every: None,
        }
    }
}

impl AppConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Bad values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("CORE_DEFENDER_DATA_DIR") {
            if dir.trim().is_empty() {
                tracing::warn!("CORE_DEFENDER_DATA_DIR is empty, using default");
            } else {
                config.data_dir = PathBuf::from(dir);
            }
        }

        if let Some(seed) = lookup("CORE_DEFENDER_SEED") {
            if let Ok(parsed) = seed.trim().parse::<u64>() {
                config.seed = parsed;
            } else {
                tracing::warn!("Invalid CORE_DEFENDER_SEED '{}', using default", seed);
            }
        }

        if let Some(class) = lookup("CORE_DEFENDER_CLASS") {
            match crate::console::parse_class(class.trim()) {
                Some(parsed) => config.turret_class = parsed,
                None => tracing::warn!("Invalid CORE_DEFENDER_CLASS '{}', using default", class),
            }
        }

        if let Some(every) = lookup("CORE_DEFENDER_JSON") {
            match every.trim().parse::<u64>() {
                Ok(parsed) if parsed > 0 => config.json_every = Some(parsed),
                _ => tracing::warn!("CORE_DEFENDER_JSON must be a frame count > 0, ignoring"),
            }
        }

        config
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            turret_class: self.turret_class,
            ..SimConfig::default()
        }
    }
}
