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

//! Pressure signals and reclamation levels.

use serde::{Deserialize, Serialize};

/// How aggressively a reclamation pass releases resources.
///
/// `Light` releases what can be released without user-visible disruption:
/// playback state, graphics bindings, texture objects. `Full` is a superset
/// that additionally restarts the tracking subsystem and cycles media
/// sources, at the cost of a bounded, predictable interruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReclamationLevel {
    /// Pause/rewind media, release graphics bindings and textures, hint GC.
    Light,
    /// `Light` plus tracking restart and media source cycling.
    Full,
}

impl ReclamationLevel {
    /// Returns true for the `Full` level.
    pub fn is_full(self) -> bool {
        matches!(self, ReclamationLevel::Full)
    }
}

/// The cadence class of a periodic pressure timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerCadence {
    /// The short-interval timer; maps to a light pass.
    Light,
    /// The long-interval timer; maps to a full pass.
    Full,
}

/// An event indicating resource strain, carrying enough data for the
/// coordinator to pick a [`ReclamationLevel`].
///
/// The error tally behind `ErrorBurst` is deliberately *not* part of the
/// signal: it is state owned by the coordinator, so that delivery order on
/// the single event-processing timeline fully determines the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PressureSignal {
    /// A periodic timer fired.
    Timer(TimerCadence),
    /// The tracking subsystem reported one error occurrence.
    ErrorBurst,
    /// The heap sampler observed the given used/limit ratio.
    HeapUsage {
        /// Used bytes divided by limit bytes, in `[0, 1]`.
        ratio: f64,
    },
    /// The host transitioned the session from visible to hidden.
    VisibilityLost,
    /// The session is ending (tab hidden for good, navigation, unload).
    SessionEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_superset_marker() {
        assert!(ReclamationLevel::Full.is_full());
        assert!(!ReclamationLevel::Light.is_full());
    }

    #[test]
    fn signals_serialize() {
        let signal = PressureSignal::HeapUsage { ratio: 0.81 };
        let json = serde_json::to_string(&signal).expect("serialize should succeed");
        let back: PressureSignal = serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(back, signal);
    }
}
