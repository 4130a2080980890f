//! TOML-based application configuration.
//!
//! Covers the settings a user may tune between sessions: default
//! interval timer shape, nutrition targets and notification behavior.
//! Stored at `~/.config/blaze/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, CoreError};
use crate::nutrition::MacroTargets;
use crate::timer::IntervalConfig;

/// Default interval timer shape, matching the HIIT session in the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_work_secs")]
    pub work_secs: u32,
    #[serde(default = "default_rest_secs")]
    pub rest_secs: u32,
    #[serde(default = "default_stopwatch_target_min")]
    pub stopwatch_target_min: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_calories")]
    pub calories: u32,
    #[serde(default = "default_protein")]
    pub protein_g: u32,
    #[serde(default = "default_carbs")]
    pub carbs_g: u32,
    #[serde(default = "default_fat")]
    pub fat_g: u32,
    #[serde(default = "default_hydration_ml")]
    pub hydration_ml: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub vibration: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_rounds() -> u32 {
    10
}
fn default_work_secs() -> u32 {
    40
}
fn default_rest_secs() -> u32 {
    20
}
fn default_stopwatch_target_min() -> u32 {
    45
}
fn default_calories() -> u32 {
    2200
}
fn default_protein() -> u32 {
    180
}
fn default_carbs() -> u32 {
    200
}
fn default_fat() -> u32 {
    70
}
fn default_hydration_ml() -> u32 {
    3000
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            work_secs: default_work_secs(),
            rest_secs: default_rest_secs(),
            stopwatch_target_min: default_stopwatch_target_min(),
        }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            calories: default_calories(),
            protein_g: default_protein(),
            carbs_g: default_carbs(),
            fat_g: default_fat(),
            hydration_ml: default_hydration_ml(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            vibration: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, CoreError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default file on first run.
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = json.pointer(&format!("/{}", key.replace('.', "/")))?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, preserving the field's type,
    /// and persist the result.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut json = serde_json::to_value(&*self).map_err(CoreError::Json)?;
        let pointer = format!("/{}", key.replace('.', "/"));
        let slot = json
            .pointer_mut(&pointer)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let new_value = match slot {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as bool"),
                    })?,
            ),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as number"),
                    })?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "key does not name a scalar setting".into(),
                }
                .into())
            }
        };
        *slot = new_value;

        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Interval config from the timer section.
    pub fn interval_config(&self) -> Result<IntervalConfig, CoreError> {
        Ok(IntervalConfig::new(
            self.timer.rounds,
            self.timer.work_secs,
            self.timer.rest_secs,
        )?)
    }

    pub fn macro_targets(&self) -> MacroTargets {
        MacroTargets {
            calories: self.targets.calories,
            protein_g: self.targets.protein_g,
            carbs_g: self.targets.carbs_g,
            fat_g: self.targets.fat_g,
        }
    }
}
