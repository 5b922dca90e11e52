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

//! Service facade for the pressure engine.

use crate::config::PressureConfig;
use crate::coordinator::{ReclamationCoordinator, RequestOutcome};
use crate::lifecycle::LifecycleEvent;
use crate::monitor::PressureMonitor;
use crate::reclaimer::ResourceReclaimer;
use std::sync::Arc;
use vigil_core::host::{GcHint, VisibilityProbe};
use vigil_core::pressure::{HeapTelemetry, PressureSignal};
use vigil_core::scene::{SceneQuery, TrackingEvent};
use vigil_core::time::Clock;

/// The collaborator handles the engine runs against.
///
/// All of them are owned elsewhere; the engine only holds references. The
/// optional seams degrade gracefully when absent: without heap telemetry
/// the sampler does not arm, without a GC hint that step is skipped.
#[derive(Debug)]
pub struct SessionEnvironment {
    /// Read-only lookup of the session's reclaimable collaborators.
    pub scene: Arc<dyn SceneQuery>,
    /// Reports whether the host currently hides the session.
    pub visibility: Arc<dyn VisibilityProbe>,
    /// Heap usage telemetry, when the host exposes it.
    pub heap_telemetry: Option<Arc<dyn HeapTelemetry>>,
    /// The host's garbage-collection hint, when exposed.
    pub gc_hint: Option<Arc<dyn GcHint>>,
    /// Subscription on the tracking subsystem's event surface.
    pub tracking_events: flume::Receiver<TrackingEvent>,
}

/// The engine facade the embedding application owns.
///
/// Drive it from one logical thread: call [`tick`](Self::tick) on a cadence
/// of the application's choosing (once per frame is plenty) and forward the
/// host's session-end signals to
/// [`notify_session_end`](Self::notify_session_end). Everything else —
/// trigger cadence, pass serialization, delayed restores — happens inside.
#[derive(Debug)]
pub struct PressureService {
    clock: Arc<dyn Clock>,
    monitor: PressureMonitor,
    coordinator: ReclamationCoordinator,
}

impl PressureService {
    /// Builds the engine over the given environment.
    pub fn new(config: PressureConfig, env: SessionEnvironment, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let reclaimer = ResourceReclaimer::new(env.scene, env.gc_hint, &config);
        let monitor = PressureMonitor::new(
            &config,
            env.visibility,
            env.heap_telemetry,
            env.tracking_events,
            now,
        );
        let coordinator = ReclamationCoordinator::new(config, reclaimer);
        log::info!("Pressure service initialized.");
        Self {
            clock,
            monitor,
            coordinator,
        }
    }

    /// Advances the engine: releases due deferred actions, polls the
    /// monitor, and feeds every emitted signal through the coordinator.
    ///
    /// Returns the coordinator's outcome for each signal, in order.
    pub fn tick(&mut self) -> Vec<RequestOutcome> {
        let now = self.clock.now();
        let applied = self.coordinator.process_due(now);
        if applied > 0 {
            log::debug!("Applied {applied} deferred action(s).");
        }
        self.monitor
            .poll(now)
            .into_iter()
            .map(|signal| self.coordinator.request_reclamation(signal, now))
            .collect()
    }

    /// Handles a session-end lifecycle signal with an immediate full
    /// reclamation request. Fires regardless of the in-flight gate; the
    /// coordinator's own guard handles suppression.
    pub fn notify_session_end(&mut self, event: LifecycleEvent) -> RequestOutcome {
        log::info!("Session end signal: {event:?}.");
        let now = self.clock.now();
        self.coordinator
            .request_reclamation(PressureSignal::SessionEnd, now)
    }

    /// Requests a reclamation pass directly, outside the monitor's
    /// triggers.
    pub fn request_reclamation(&mut self, signal: PressureSignal) -> RequestOutcome {
        let now = self.clock.now();
        self.coordinator.request_reclamation(signal, now)
    }

    /// The current error-burst tally.
    pub fn error_count(&self) -> u32 {
        self.coordinator.error_count()
    }

    /// How many deferred actions are still waiting.
    pub fn pending_deferred(&self) -> usize {
        self.coordinator.pending_deferred()
    }
}
