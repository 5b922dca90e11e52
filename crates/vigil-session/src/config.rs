// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning knobs for the pressure engine.
///
/// The defaults encode the production policy; embedders normally only touch
/// these in tests or on unusually constrained hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureConfig {
    /// Interval of the light periodic timer.
    pub light_timer_interval: Duration,
    /// Interval of the full periodic timer.
    pub full_timer_interval: Duration,
    /// Interval between heap usage samples.
    pub heap_sample_interval: Duration,
    /// Used/limit ratio above which heap usage registers as pressure.
    pub heap_pressure_ratio: f64,
    /// Error tally that, once exceeded, escalates a burst to a full pass.
    pub error_burst_threshold: u32,
    /// Delay after each error before its tally contribution decays.
    pub error_decay_delay: Duration,
    /// Delay before a cleared media source is reattached.
    pub media_restore_delay: Duration,
    /// Delay before a stopped tracking subsystem is restarted.
    pub tracking_restart_delay: Duration,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            light_timer_interval: Duration::from_secs(120),
            full_timer_interval: Duration::from_secs(600),
            heap_sample_interval: Duration::from_secs(30),
            heap_pressure_ratio: 0.8,
            error_burst_threshold: 3,
            error_decay_delay: Duration::from_secs(300),
            media_restore_delay: Duration::from_millis(100),
            tracking_restart_delay: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_production_policy() {
        let config = PressureConfig::default();
        assert_eq!(config.light_timer_interval, Duration::from_secs(120));
        assert_eq!(config.full_timer_interval, Duration::from_secs(600));
        assert_eq!(config.heap_sample_interval, Duration::from_secs(30));
        assert!((config.heap_pressure_ratio - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.error_burst_threshold, 3);
        assert_eq!(config.error_decay_delay, Duration::from_secs(300));
        assert_eq!(config.media_restore_delay, Duration::from_millis(100));
        assert_eq!(config.tracking_restart_delay, Duration::from_millis(1000));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PressureConfig {
            heap_pressure_ratio: 0.9,
            ..PressureConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serialize should succeed");
        let back: PressureConfig = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(back, config);
    }
}
