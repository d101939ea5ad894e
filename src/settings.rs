//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/pieceline/settings.toml (or platform
//! equivalent). Capacities and the block-swap policy live here so a run can
//! reshape the inventory without touching code.

use crate::exchange::ReservePolicy;
use crate::queue::DEFAULT_QUEUE_CAPACITY;
use crate::reserve::DEFAULT_RESERVE_CAPACITY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default number of queue positions a block swap covers
pub const DEFAULT_BLOCK_LEN: usize = 3;

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Container capacities
    pub inventory: InventorySettings,
    /// Block-swap tuning
    pub exchange: ExchangeSettings,
}

/// Container capacities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    /// Upcoming-piece queue capacity
    pub queue_capacity: usize,
    /// Reserve stack capacity
    pub reserve_capacity: usize,
}

/// Block-swap tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeSettings {
    /// How many queue positions a block swap covers
    pub block_len: usize,
    /// How full the reserve must be before a block swap
    pub reserve_policy: ReservePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inventory: InventorySettings::default(),
            exchange: ExchangeSettings::default(),
        }
    }
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            reserve_capacity: DEFAULT_RESERVE_CAPACITY,
        }
    }
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            block_len: DEFAULT_BLOCK_LEN,
            reserve_policy: ReservePolicy::ExactlyFull,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "pieceline", "pieceline")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }

    /// Clamp unusable values back to workable ones
    pub fn validated(mut self) -> Self {
        if self.inventory.queue_capacity == 0 {
            tracing::warn!("queue_capacity 0 is unusable, using default");
            self.inventory.queue_capacity = DEFAULT_QUEUE_CAPACITY;
        }
        if self.inventory.reserve_capacity == 0 {
            tracing::warn!("reserve_capacity 0 is unusable, using default");
            self.inventory.reserve_capacity = DEFAULT_RESERVE_CAPACITY;
        }
        if self.exchange.block_len == 0 {
            tracing::warn!("block_len 0 is unusable, using default");
            self.exchange.block_len = DEFAULT_BLOCK_LEN;
        }
        let max_block = self
            .inventory
            .queue_capacity
            .min(self.inventory.reserve_capacity);
        if self.exchange.block_len > max_block {
            tracing::warn!(
                block_len = self.exchange.block_len,
                max_block,
                "block_len exceeds a container capacity, clamping"
            );
            self.exchange.block_len = max_block;
        }
        self
    }
}
