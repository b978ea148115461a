//! Stats refresh policy
//!
//! The stats source polls faster on mains power than on battery. The policy
//! tracks the current power mode and reports a new poll interval only when the
//! mode flips.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Battery status reported by the stats source while unplugged
pub const DISCHARGING: &str = "discharging";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerMode {
    #[default]
    Mains,
    Battery,
}

impl PowerMode {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some(DISCHARGING) => PowerMode::Battery,
            _ => PowerMode::Mains,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshPolicy {
    /// Poll interval on mains power, in milliseconds
    #[serde(default = "default_power_ms")]
    pub power_ms: u64,

    /// Poll interval on battery, in milliseconds
    #[serde(default = "default_battery_ms")]
    pub battery_ms: u64,

    #[serde(skip)]
    mode: PowerMode,
}

fn default_power_ms() -> u64 {
    1000
}

fn default_battery_ms() -> u64 {
    10_000
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(default_power_ms(), default_battery_ms())
    }
}

impl RefreshPolicy {
    pub fn new(power_ms: u64, battery_ms: u64) -> Self {
        Self {
            power_ms,
            battery_ms,
            mode: PowerMode::Mains,
        }
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    /// Interval for the current power mode
    pub fn interval(&self) -> Duration {
        match self.mode {
            PowerMode::Mains => Duration::from_millis(self.power_ms),
            PowerMode::Battery => Duration::from_millis(self.battery_ms),
        }
    }

    /// Feed the latest battery status; returns the new interval on a mode change
    pub fn observe(&mut self, battery_status: Option<&str>) -> Option<Duration> {
        let mode = PowerMode::from_status(battery_status);
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(self.interval())
    }
}
