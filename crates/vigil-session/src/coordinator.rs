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

//! The reclamation coordinator.
//!
//! The coordinator is the only component that starts reclamation passes. It
//! serializes them behind an in-flight gate (at most one pass at any time),
//! maps each pressure signal to a reclamation level, keeps the error-burst
//! tally, and releases the deferred side effects recorded by passes once
//! they come due.
//!
//! All of its state is owned here and only ever touched from the single
//! event-processing timeline, so the gate is a plain [`Cell`] and no lock
//! exists anywhere in the pass path.

use crate::reclaimer::{ReclaimReport, ResourceReclaimer};
use crate::PressureConfig;
use std::cell::Cell;
use std::sync::Arc;
use std::time::Instant;
use vigil_core::pressure::{PressureSignal, ReclamationLevel, TimerCadence};
use vigil_core::scene::{MediaSurface, TrackingSubsystem};
use vigil_core::time::TaskScheduler;

/// A side effect recorded by a pass and released later by `process_due`.
#[derive(Debug, Clone)]
pub enum DeferredAction {
    /// Reduce the error tally by one, floored at zero.
    DecayErrorCount,
    /// Reattach a media source cleared by a full pass.
    RestoreMediaSource {
        /// The surface whose source was cleared.
        surface: Arc<dyn MediaSurface>,
        /// The URI to reattach.
        uri: String,
    },
    /// Restart the tracking subsystem stopped by a full pass.
    RestartTracking {
        /// The subsystem to restart.
        tracking: Arc<dyn TrackingSubsystem>,
    },
}

/// What the coordinator did with one reclamation request.
#[derive(Debug, PartialEq)]
pub enum RequestOutcome {
    /// A pass was already in flight; the request was silently dropped.
    /// The next periodic or event trigger will naturally re-request.
    Dropped,
    /// The signal did not clear its pressure threshold; no pass ran.
    BelowThreshold,
    /// A pass ran to completion at the derived level.
    Reclaimed(ReclaimReport),
}

/// The in-flight gate. Held for the entire duration of exactly one pass.
///
/// Only ever mutated on the single event-processing timeline; the RAII
/// guard releases it on every exit path, unwinds included.
#[derive(Debug, Default)]
struct InFlightGate {
    engaged: Cell<bool>,
}

impl InFlightGate {
    fn in_flight(&self) -> bool {
        self.engaged.get()
    }

    fn begin(&self) -> PassGuard<'_> {
        self.engaged.set(true);
        PassGuard { gate: self }
    }
}

struct PassGuard<'a> {
    gate: &'a InFlightGate,
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.gate.engaged.set(false);
    }
}

/// Serializes reclamation passes and maps signals to levels.
#[derive(Debug)]
pub struct ReclamationCoordinator {
    config: PressureConfig,
    gate: InFlightGate,
    error_count: u32,
    last_reclamation: Option<Instant>,
    scheduler: TaskScheduler<DeferredAction>,
    reclaimer: ResourceReclaimer,
}

impl ReclamationCoordinator {
    /// Creates a coordinator that dispatches passes to `reclaimer`.
    pub fn new(config: PressureConfig, reclaimer: ResourceReclaimer) -> Self {
        Self {
            config,
            gate: InFlightGate::default(),
            error_count: 0,
            last_reclamation: None,
            scheduler: TaskScheduler::new(),
            reclaimer,
        }
    }

    /// Requests a reclamation pass for `signal`.
    ///
    /// Dropped outright when a pass is already in flight — no queueing, no
    /// coalescing. Otherwise the gate is held, a level is derived, and the
    /// reclaimer runs; the gate is released on every exit path.
    pub fn request_reclamation(&mut self, signal: PressureSignal, now: Instant) -> RequestOutcome {
        if self.gate.in_flight() {
            log::trace!("Request {signal:?} dropped: a pass is already in flight.");
            return RequestOutcome::Dropped;
        }
        let _pass = self.gate.begin();

        let level = match signal {
            PressureSignal::Timer(TimerCadence::Light) => Some(ReclamationLevel::Light),
            PressureSignal::Timer(TimerCadence::Full) => Some(ReclamationLevel::Full),
            PressureSignal::VisibilityLost | PressureSignal::SessionEnd => {
                Some(ReclamationLevel::Full)
            }
            PressureSignal::HeapUsage { ratio } => {
                if ratio > self.config.heap_pressure_ratio {
                    Some(ReclamationLevel::Full)
                } else {
                    log::debug!(
                        "Heap ratio {ratio:.2} below pressure threshold {:.2}.",
                        self.config.heap_pressure_ratio
                    );
                    None
                }
            }
            PressureSignal::ErrorBurst => {
                // Tally first, decay later: each occurrence contributes for
                // a fixed window regardless of the pass outcome.
                self.error_count += 1;
                self.scheduler.schedule(
                    now + self.config.error_decay_delay,
                    DeferredAction::DecayErrorCount,
                );
                if self.error_count > self.config.error_burst_threshold {
                    log::warn!(
                        "Error tally {} exceeded threshold {}; escalating to a full pass.",
                        self.error_count,
                        self.config.error_burst_threshold
                    );
                    self.error_count = 0;
                    Some(ReclamationLevel::Full)
                } else {
                    Some(ReclamationLevel::Light)
                }
            }
        };

        let Some(level) = level else {
            return RequestOutcome::BelowThreshold;
        };

        let report = self.reclaimer.reclaim(level, &mut self.scheduler, now);
        self.last_reclamation = Some(now);
        RequestOutcome::Reclaimed(report)
    }

    /// Releases every deferred action due at `now`. Returns how many ran.
    pub fn process_due(&mut self, now: Instant) -> usize {
        let due = self.scheduler.pop_due(now);
        let count = due.len();
        for action in due {
            match action {
                DeferredAction::DecayErrorCount => {
                    self.error_count = self.error_count.saturating_sub(1);
                    log::trace!("Error tally decayed to {}.", self.error_count);
                }
                DeferredAction::RestoreMediaSource { surface, uri } => {
                    self.reclaimer.restore_media_source(surface.as_ref(), &uri);
                }
                DeferredAction::RestartTracking { tracking } => {
                    self.reclaimer.restart_tracking(tracking.as_ref());
                }
            }
        }
        count
    }

    /// The current error-burst tally.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Whether a pass is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.gate.in_flight()
    }

    /// When the last pass ran, if any has.
    pub fn last_reclamation(&self) -> Option<Instant> {
        self.last_reclamation
    }

    /// How many deferred actions are still waiting.
    pub fn pending_deferred(&self) -> usize {
        self.scheduler.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A scene with nothing in it: passes run and succeed trivially, which
    /// is all the coordinator's own bookkeeping needs.
    #[derive(Debug)]
    struct EmptyScene;

    impl vigil_core::scene::SceneQuery for EmptyScene {
        fn media_surfaces(&self) -> Vec<Arc<dyn MediaSurface>> {
            Vec::new()
        }

        fn graphics_context(&self) -> Option<Arc<dyn vigil_core::scene::GraphicsContext>> {
            None
        }

        fn tracking(&self) -> Option<Arc<dyn TrackingSubsystem>> {
            None
        }
    }

    fn coordinator() -> ReclamationCoordinator {
        let config = PressureConfig::default();
        let reclaimer = ResourceReclaimer::new(Arc::new(EmptyScene), None, &config);
        ReclamationCoordinator::new(config, reclaimer)
    }

    fn level_of(outcome: &RequestOutcome) -> ReclamationLevel {
        match outcome {
            RequestOutcome::Reclaimed(report) => report.level,
            other => panic!("Expected a pass to run, got {other:?}"),
        }
    }

    #[test]
    fn requests_are_dropped_while_a_pass_is_in_flight() {
        let mut coord = coordinator();
        let now = Instant::now();

        coord.gate.engaged.set(true);
        assert_eq!(
            coord.request_reclamation(PressureSignal::VisibilityLost, now),
            RequestOutcome::Dropped
        );
        coord.gate.engaged.set(false);

        // With the gate free, the same signal always runs a full pass.
        assert_eq!(
            level_of(&coord.request_reclamation(PressureSignal::VisibilityLost, now)),
            ReclamationLevel::Full
        );
    }

    #[test]
    fn timer_cadences_map_to_their_levels() {
        let mut coord = coordinator();
        let now = Instant::now();

        let light = coord.request_reclamation(PressureSignal::Timer(TimerCadence::Light), now);
        assert_eq!(level_of(&light), ReclamationLevel::Light);

        let full = coord.request_reclamation(PressureSignal::Timer(TimerCadence::Full), now);
        assert_eq!(level_of(&full), ReclamationLevel::Full);
    }

    #[test]
    fn session_end_maps_to_full() {
        let mut coord = coordinator();
        let now = Instant::now();
        assert_eq!(
            level_of(&coord.request_reclamation(PressureSignal::SessionEnd, now)),
            ReclamationLevel::Full
        );
    }

    #[test]
    fn heap_usage_respects_the_threshold() {
        let mut coord = coordinator();
        let now = Instant::now();

        assert_eq!(
            coord.request_reclamation(PressureSignal::HeapUsage { ratio: 0.79 }, now),
            RequestOutcome::BelowThreshold
        );
        assert!(!coord.in_flight());

        let over = coord.request_reclamation(PressureSignal::HeapUsage { ratio: 0.81 }, now);
        assert_eq!(level_of(&over), ReclamationLevel::Full);
    }

    #[test]
    fn three_bursts_stay_light_and_the_fourth_escalates() {
        let mut coord = coordinator();
        let now = Instant::now();

        for expected_count in 1..=3 {
            let outcome = coord.request_reclamation(PressureSignal::ErrorBurst, now);
            assert_eq!(level_of(&outcome), ReclamationLevel::Light);
            assert_eq!(coord.error_count(), expected_count);
        }

        let fourth = coord.request_reclamation(PressureSignal::ErrorBurst, now);
        assert_eq!(level_of(&fourth), ReclamationLevel::Full);
        assert_eq!(coord.error_count(), 0);
    }

    #[test]
    fn error_tally_decays_by_one_per_elapsed_window() {
        let mut coord = coordinator();
        let now = Instant::now();
        let decay = coord.config.error_decay_delay;

        coord.request_reclamation(PressureSignal::ErrorBurst, now);
        coord.request_reclamation(PressureSignal::ErrorBurst, now + Duration::from_secs(1));
        assert_eq!(coord.error_count(), 2);
        assert_eq!(coord.pending_deferred(), 2);

        // Only the first burst's window has elapsed.
        assert_eq!(coord.process_due(now + decay), 1);
        assert_eq!(coord.error_count(), 1);

        assert_eq!(coord.process_due(now + decay + Duration::from_secs(1)), 1);
        assert_eq!(coord.error_count(), 0);
    }

    #[test]
    fn decay_never_drives_the_tally_below_zero() {
        let mut coord = coordinator();
        let now = Instant::now();
        let decay = coord.config.error_decay_delay;

        // The escalating burst resets the tally to zero, but its decay task
        // (and the three before it) still fire later; all must floor at 0.
        for _ in 0..4 {
            coord.request_reclamation(PressureSignal::ErrorBurst, now);
        }
        assert_eq!(coord.error_count(), 0);

        assert_eq!(coord.process_due(now + decay), 4);
        assert_eq!(coord.error_count(), 0);
    }

    #[test]
    fn passes_record_their_instant() {
        let mut coord = coordinator();
        let now = Instant::now();
        assert!(coord.last_reclamation().is_none());

        coord.request_reclamation(PressureSignal::SessionEnd, now);
        assert_eq!(coord.last_reclamation(), Some(now));
    }
}
