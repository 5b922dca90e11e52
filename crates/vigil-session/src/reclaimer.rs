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

//! The resource reclaimer.
//!
//! A reclamation pass walks the session's collaborators in a fixed order
//! and releases what it can. Every step is best-effort: a collaborator that
//! refuses one operation never prevents the remaining steps from running.
//! Failures are logged, tallied per step, and collected into the returned
//! [`ReclaimReport`] — they are never propagated.

use crate::config::PressureConfig;
use crate::coordinator::DeferredAction;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use vigil_core::host::GcHint;
use vigil_core::pressure::ReclamationLevel;
use vigil_core::scene::graphics::{TextureTarget, ALL_BUFFER_TARGETS};
use vigil_core::scene::{MediaSurface, SceneQuery, TrackingSubsystem};
use vigil_core::time::TaskScheduler;

/// One of the ordered side-effect families of a reclamation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReclaimStep {
    /// Pausing and rewinding playing media surfaces.
    MediaPlayback,
    /// Clearing media sources and scheduling their delayed reattachment.
    MediaSourceCycle,
    /// Disposing registered textures and dropping every binding.
    GraphicsRelease,
    /// Requesting the host's garbage-collection hint.
    GcHint,
    /// Stopping the tracking subsystem and scheduling its delayed restart.
    TrackingRestart,
}

/// The tally of one executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Which step this tally belongs to.
    pub step: ReclaimStep,
    /// Collaborator operations attempted.
    pub actions: u32,
    /// Operations the collaborator refused; each is logged where it failed.
    pub failures: u32,
}

impl StepReport {
    fn new(step: ReclaimStep) -> Self {
        Self {
            step,
            actions: 0,
            failures: 0,
        }
    }

    /// True when every attempted operation succeeded.
    pub fn succeeded(&self) -> bool {
        self.failures == 0
    }
}

/// The outcome of one reclamation pass.
///
/// Steps appear in execution order. A step whose collaborator is absent
/// (no graphics context, no GC hint, no tracking subsystem) is omitted
/// rather than reported as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReclaimReport {
    /// The level the pass ran at.
    pub level: ReclamationLevel,
    /// Per-step tallies, in execution order.
    pub steps: Vec<StepReport>,
}

impl ReclaimReport {
    /// True when no step recorded a failure.
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(StepReport::succeeded)
    }

    /// The tally for the given step, if the pass executed it.
    pub fn step(&self, step: ReclaimStep) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }
}

/// Releases session resources at a requested [`ReclamationLevel`].
///
/// The reclaimer owns no long-lived state of its own; it re-queries the
/// scene at the start of every pass and writes through the collaborator
/// seams. Delayed effects (media source reattachment, tracking restart) are
/// recorded in the coordinator's scheduler rather than performed inline.
#[derive(Debug)]
pub struct ResourceReclaimer {
    scene: Arc<dyn SceneQuery>,
    gc_hint: Option<Arc<dyn GcHint>>,
    media_restore_delay: Duration,
    tracking_restart_delay: Duration,
}

impl ResourceReclaimer {
    /// Creates a reclaimer over the given scene and optional GC hint.
    pub fn new(
        scene: Arc<dyn SceneQuery>,
        gc_hint: Option<Arc<dyn GcHint>>,
        config: &PressureConfig,
    ) -> Self {
        Self {
            scene,
            gc_hint,
            media_restore_delay: config.media_restore_delay,
            tracking_restart_delay: config.tracking_restart_delay,
        }
    }

    /// Runs one reclamation pass.
    ///
    /// Steps are issued in a fixed order; the report is returned once every
    /// immediate effect has been issued. The delayed effects recorded in
    /// `scheduler` are fire-and-forget from this pass's point of view.
    pub fn reclaim(
        &self,
        level: ReclamationLevel,
        scheduler: &mut TaskScheduler<DeferredAction>,
        now: Instant,
    ) -> ReclaimReport {
        log::info!("Reclamation pass started ({level:?}).");
        let surfaces = self.scene.media_surfaces();
        let mut steps = Vec::new();

        steps.push(self.quiesce_playback(&surfaces));
        if level.is_full() {
            steps.push(self.cycle_media_sources(&surfaces, scheduler, now));
        }
        steps.extend(self.release_graphics());
        steps.extend(self.request_gc_hint());
        if level.is_full() {
            steps.extend(self.stop_tracking(scheduler, now));
        }

        let report = ReclaimReport { level, steps };
        if report.is_clean() {
            log::info!("Reclamation pass finished cleanly.");
        } else {
            log::warn!("Reclamation pass finished with failures: {report:?}");
        }
        report
    }

    /// Reattaches a media source cleared by an earlier full pass.
    pub fn restore_media_source(&self, surface: &dyn MediaSurface, uri: &str) {
        log::debug!("Reattaching media source '{uri}'.");
        if let Err(e) = surface.attach_source(uri) {
            log::warn!("Media source reattach failed: {e}");
        }
    }

    /// Restarts the tracking subsystem stopped by an earlier full pass.
    pub fn restart_tracking(&self, tracking: &dyn TrackingSubsystem) {
        log::debug!("Restarting tracking subsystem.");
        if let Err(e) = tracking.start() {
            log::warn!("Tracking restart failed: {e}");
        }
    }

    fn quiesce_playback(&self, surfaces: &[Arc<dyn MediaSurface>]) -> StepReport {
        let mut report = StepReport::new(ReclaimStep::MediaPlayback);
        for surface in surfaces.iter().filter(|s| s.is_playing()) {
            report.actions += 1;
            if let Err(e) = surface.pause() {
                report.failures += 1;
                log::warn!("Media pause failed: {e}");
            }
            report.actions += 1;
            if let Err(e) = surface.rewind() {
                report.failures += 1;
                log::warn!("Media rewind failed: {e}");
            }
        }
        report
    }

    fn cycle_media_sources(
        &self,
        surfaces: &[Arc<dyn MediaSurface>],
        scheduler: &mut TaskScheduler<DeferredAction>,
        now: Instant,
    ) -> StepReport {
        let mut report = StepReport::new(ReclaimStep::MediaSourceCycle);
        for surface in surfaces {
            let Some(uri) = surface.source_uri() else {
                continue;
            };
            report.actions += 1;
            surface.clear_source();
            scheduler.schedule(
                now + self.media_restore_delay,
                DeferredAction::RestoreMediaSource {
                    surface: Arc::clone(surface),
                    uri,
                },
            );
        }
        report
    }

    fn release_graphics(&self) -> Option<StepReport> {
        let context = self.scene.graphics_context()?;
        let mut report = StepReport::new(ReclaimStep::GraphicsRelease);

        for id in context.registered_textures() {
            report.actions += 1;
            if let Err(e) = context.dispose_texture(id) {
                report.failures += 1;
                log::warn!("Texture dispose failed: {e}");
            }
        }
        for unit in 0..context.max_texture_units() {
            context.unbind_texture(unit, TextureTarget::TwoD);
            context.unbind_texture(unit, TextureTarget::CubeMap);
            report.actions += 2;
        }
        for target in ALL_BUFFER_TARGETS {
            context.unbind_buffer(target);
            report.actions += 1;
        }
        Some(report)
    }

    fn request_gc_hint(&self) -> Option<StepReport> {
        let hint = self.gc_hint.as_ref()?;
        let mut report = StepReport::new(ReclaimStep::GcHint);
        report.actions = 1;
        if let Err(e) = hint.request() {
            report.failures = 1;
            log::warn!("GC hint failed: {e:#}");
        }
        Some(report)
    }

    fn stop_tracking(
        &self,
        scheduler: &mut TaskScheduler<DeferredAction>,
        now: Instant,
    ) -> Option<StepReport> {
        let tracking = self.scene.tracking()?;
        let mut report = StepReport::new(ReclaimStep::TrackingRestart);
        report.actions = 1;
        if let Err(e) = tracking.stop() {
            report.failures = 1;
            log::warn!("Tracking stop failed: {e}");
        }
        scheduler.schedule(
            now + self.tracking_restart_delay,
            DeferredAction::RestartTracking { tracking },
        );
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_has_no_failures() {
        let report = ReclaimReport {
            level: ReclamationLevel::Light,
            steps: vec![StepReport {
                step: ReclaimStep::MediaPlayback,
                actions: 4,
                failures: 0,
            }],
        };
        assert!(report.is_clean());
        assert!(report.step(ReclaimStep::MediaPlayback).is_some());
        assert!(report.step(ReclaimStep::GcHint).is_none());
    }

    #[test]
    fn a_single_step_failure_taints_the_report() {
        let report = ReclaimReport {
            level: ReclamationLevel::Full,
            steps: vec![
                StepReport {
                    step: ReclaimStep::MediaPlayback,
                    actions: 2,
                    failures: 0,
                },
                StepReport {
                    step: ReclaimStep::GraphicsRelease,
                    actions: 9,
                    failures: 1,
                },
            ],
        };
        assert!(!report.is_clean());
        assert!(report.step(ReclaimStep::MediaPlayback).unwrap().succeeded());
        assert!(!report.step(ReclaimStep::GraphicsRelease).unwrap().succeeded());
    }
}
