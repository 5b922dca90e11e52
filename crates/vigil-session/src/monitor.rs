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

//! The pressure monitor.
//!
//! Arms four independent trigger families — two periodic timers, the heap
//! sampler, and the tracking-error observer — plus visibility edge
//! detection. No trigger ever starts reclamation itself: `poll` only emits
//! [`PressureSignal`]s, and the service feeds each one through the
//! coordinator. This keeps trigger cadence fully decoupled from
//! reclamation concurrency.

use crate::config::PressureConfig;
use std::sync::Arc;
use std::time::Instant;
use vigil_core::host::VisibilityProbe;
use vigil_core::pressure::{HeapTelemetry, PressureSignal, TimerCadence};
use vigil_core::scene::TrackingEvent;

/// Watches the session for resource pressure.
#[derive(Debug)]
pub struct PressureMonitor {
    config: PressureConfig,
    visibility: Arc<dyn VisibilityProbe>,
    heap: Option<Arc<dyn HeapTelemetry>>,
    tracking_events: flume::Receiver<TrackingEvent>,
    last_light_tick: Instant,
    last_full_tick: Instant,
    last_heap_sample: Instant,
    was_hidden: bool,
}

impl PressureMonitor {
    /// Arms the monitor's triggers at `now`.
    ///
    /// When `heap` is `None` the host exposes no usage telemetry and the
    /// heap sampler simply does not arm. `tracking_events` is a
    /// subscription on the tracking subsystem's scene-level event surface.
    pub fn new(
        config: &PressureConfig,
        visibility: Arc<dyn VisibilityProbe>,
        heap: Option<Arc<dyn HeapTelemetry>>,
        tracking_events: flume::Receiver<TrackingEvent>,
        now: Instant,
    ) -> Self {
        if heap.is_none() {
            log::info!("No heap telemetry exposed; heap sampler not armed.");
        }
        let was_hidden = visibility.is_hidden();
        Self {
            config: config.clone(),
            visibility,
            heap,
            tracking_events,
            last_light_tick: now,
            last_full_tick: now,
            last_heap_sample: now,
            was_hidden,
        }
    }

    /// Collects every pressure signal due at `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<PressureSignal> {
        let mut signals = Vec::new();

        // Error observer: each occurrence is one burst.
        while let Ok(event) = self.tracking_events.try_recv() {
            let TrackingEvent::Error { detail } = event;
            log::debug!("Tracking error observed: {detail}");
            signals.push(PressureSignal::ErrorBurst);
        }

        // Visibility is read synchronously at each tick; a visible-to-hidden
        // edge is itself pressure.
        let hidden = self.visibility.is_hidden();
        if hidden && !self.was_hidden {
            log::info!("Session became hidden.");
            signals.push(PressureSignal::VisibilityLost);
        }
        self.was_hidden = hidden;

        // Periodic timers. A due tick while hidden consumes its interval
        // and emits nothing.
        if now.duration_since(self.last_light_tick) >= self.config.light_timer_interval {
            self.last_light_tick = now;
            if hidden {
                log::trace!("Light timer tick suppressed while hidden.");
            } else {
                signals.push(PressureSignal::Timer(TimerCadence::Light));
            }
        }
        if now.duration_since(self.last_full_tick) >= self.config.full_timer_interval {
            self.last_full_tick = now;
            if hidden {
                log::trace!("Full timer tick suppressed while hidden.");
            } else {
                signals.push(PressureSignal::Timer(TimerCadence::Full));
            }
        }

        // Heap sampler, only armed when the host exposes telemetry.
        if let Some(heap) = &self.heap {
            if now.duration_since(self.last_heap_sample) >= self.config.heap_sample_interval {
                self.last_heap_sample = now;
                if let Some(sample) = heap.sample() {
                    let ratio = sample.usage_ratio();
                    if ratio > self.config.heap_pressure_ratio {
                        log::warn!("Heap usage at {:.0}% of limit.", ratio * 100.0);
                        signals.push(PressureSignal::HeapUsage { ratio });
                    }
                }
            }
        }

        signals
    }
}
