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

//! Process heap telemetry via the `sysinfo` crate.

use anyhow::Context as _;
use std::fmt;
use std::sync::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};
use vigil_core::pressure::{HeapSample, HeapTelemetry};

/// Heap telemetry backed by `sysinfo`.
///
/// Reports the current process's resident memory as the used figure and
/// total system memory as the limit. That is a coarser limit than a managed
/// host's heap ceiling, but the pressure ratio it produces degrades in the
/// right direction: a process approaching total memory is under pressure on
/// any host.
pub struct SysinfoHeapTelemetry {
    system: Mutex<System>,
    pid: Pid,
}

impl fmt::Debug for SysinfoHeapTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SysinfoHeapTelemetry")
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

impl SysinfoHeapTelemetry {
    /// Creates a sampler for the current process.
    pub fn new() -> anyhow::Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to resolve the current pid")?;
        let mut system = System::new();
        system.refresh_memory();
        Ok(Self {
            system: Mutex::new(system),
            pid,
        })
    }
}

impl HeapTelemetry for SysinfoHeapTelemetry {
    fn sample(&self) -> Option<HeapSample> {
        let mut system = self.system.lock().ok()?;
        system.refresh_memory();
        system.refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);

        let process = system.process(self.pid)?;
        Some(HeapSample {
            used_bytes: process.memory(),
            limit_bytes: system.total_memory(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_the_current_process() {
        let telemetry = SysinfoHeapTelemetry::new().expect("current pid should resolve");
        let sample = telemetry.sample().expect("sampling should succeed");

        assert!(sample.used_bytes > 0);
        assert!(sample.limit_bytes > sample.used_bytes);
        let ratio = sample.usage_ratio();
        assert!(ratio > 0.0 && ratio < 1.0);
    }

    #[test]
    fn repeated_samples_stay_consistent() {
        let telemetry = SysinfoHeapTelemetry::new().expect("current pid should resolve");
        let first = telemetry.sample().expect("first sample");
        let second = telemetry.sample().expect("second sample");

        // Total memory does not change between samples.
        assert_eq!(first.limit_bytes, second.limit_bytes);
    }
}
