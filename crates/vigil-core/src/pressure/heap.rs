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

//! Heap usage telemetry seam.
//!
//! Heap telemetry is an optional host feature: some environments expose
//! used/limit figures, most do not. Absence degrades gracefully — the heap
//! sampler simply does not arm.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A point-in-time snapshot of heap usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapSample {
    /// The number of bytes currently in use.
    pub used_bytes: u64,
    /// The heap limit in bytes, as reported by the host.
    pub limit_bytes: u64,
}

impl HeapSample {
    /// Returns used/limit as a ratio in `[0, 1]`, or 0.0 when no limit is
    /// reported (an unknown limit can never register as pressure).
    pub fn usage_ratio(&self) -> f64 {
        if self.limit_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.limit_bytes as f64
        }
    }
}

/// A host seam for polling heap usage.
///
/// Implementations live outside the core (see `vigil-infra` for a
/// `sysinfo`-backed one). A `None` sample means telemetry was momentarily
/// unavailable; the sampler skips the cycle.
pub trait HeapTelemetry: Send + Sync + Debug + 'static {
    /// Returns the current heap usage, if the host can report it.
    fn sample(&self) -> Option<HeapSample>;
}
