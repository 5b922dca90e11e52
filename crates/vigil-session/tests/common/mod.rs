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

//! Recording collaborator doubles shared by the integration tests.
//!
//! Every mutation a mock receives is appended to a shared call log, so the
//! tests can assert the exact order in which a reclamation pass touches the
//! collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use vigil_core::error::{GraphicsError, MediaError, TrackingError};
use vigil_core::host::{GcHint, VisibilityProbe};
use vigil_core::pressure::{HeapSample, HeapTelemetry};
use vigil_core::scene::{
    BufferTarget, GraphicsContext, MediaSurface, SceneQuery, TextureId, TextureTarget,
    TrackingSubsystem,
};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Index of `entry` in the log; panics with the full log when absent.
pub fn position(log: &CallLog, entry: &str) -> usize {
    let entries = entries(log);
    entries
        .iter()
        .position(|e| e == entry)
        .unwrap_or_else(|| panic!("'{entry}' not found in call log {entries:?}"))
}

fn record(log: &CallLog, entry: String) {
    log.lock().unwrap().push(entry);
}

#[derive(Debug)]
pub struct RecordingMedia {
    name: &'static str,
    playing: AtomicBool,
    source: Mutex<Option<String>>,
    log: CallLog,
}

impl RecordingMedia {
    pub fn new(name: &'static str, playing: bool, source: Option<&str>, log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            name,
            playing: AtomicBool::new(playing),
            source: Mutex::new(source.map(str::to_string)),
            log,
        })
    }

    pub fn current_source(&self) -> Option<String> {
        self.source.lock().unwrap().clone()
    }
}

impl MediaSurface for RecordingMedia {
    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    fn pause(&self) -> Result<(), MediaError> {
        record(&self.log, format!("media.pause:{}", self.name));
        self.playing.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn rewind(&self) -> Result<(), MediaError> {
        record(&self.log, format!("media.rewind:{}", self.name));
        Ok(())
    }

    fn source_uri(&self) -> Option<String> {
        self.current_source()
    }

    fn clear_source(&self) {
        record(&self.log, format!("media.clear_source:{}", self.name));
        *self.source.lock().unwrap() = None;
    }

    fn attach_source(&self, uri: &str) -> Result<(), MediaError> {
        record(&self.log, format!("media.attach_source:{}:{uri}", self.name));
        *self.source.lock().unwrap() = Some(uri.to_string());
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordingGraphics {
    textures: Mutex<Vec<TextureId>>,
    units: u32,
    fail_dispose: bool,
    log: CallLog,
}

impl RecordingGraphics {
    pub fn new(texture_ids: &[u64], units: u32, log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            textures: Mutex::new(texture_ids.iter().copied().map(TextureId).collect()),
            units,
            fail_dispose: false,
            log,
        })
    }

    /// A context whose every texture dispose fails.
    pub fn failing(texture_ids: &[u64], units: u32, log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            textures: Mutex::new(texture_ids.iter().copied().map(TextureId).collect()),
            units,
            fail_dispose: true,
            log,
        })
    }

    pub fn registered_count(&self) -> usize {
        self.textures.lock().unwrap().len()
    }
}

impl GraphicsContext for RecordingGraphics {
    fn registered_textures(&self) -> Vec<TextureId> {
        self.textures.lock().unwrap().clone()
    }

    fn dispose_texture(&self, id: TextureId) -> Result<(), GraphicsError> {
        record(&self.log, format!("gfx.dispose:{id}"));
        if self.fail_dispose {
            return Err(GraphicsError::DisposeFailed {
                id,
                detail: "simulated dispose failure".to_string(),
            });
        }
        self.textures.lock().unwrap().retain(|t| *t != id);
        Ok(())
    }

    fn max_texture_units(&self) -> u32 {
        self.units
    }

    fn unbind_texture(&self, unit: u32, target: TextureTarget) {
        record(&self.log, format!("gfx.unbind_texture:{unit}:{target:?}"));
    }

    fn unbind_buffer(&self, target: BufferTarget) {
        record(&self.log, format!("gfx.unbind_buffer:{target:?}"));
    }
}

#[derive(Debug)]
pub struct RecordingTracking {
    fail_stop: bool,
    fail_start: bool,
    log: CallLog,
}

impl RecordingTracking {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            fail_stop: false,
            fail_start: false,
            log,
        })
    }

    pub fn failing(fail_stop: bool, fail_start: bool, log: CallLog) -> Arc<Self> {
        Arc::new(Self {
            fail_stop,
            fail_start,
            log,
        })
    }
}

impl TrackingSubsystem for RecordingTracking {
    fn stop(&self) -> Result<(), TrackingError> {
        record(&self.log, "tracking.stop".to_string());
        if self.fail_stop {
            return Err(TrackingError::Stop {
                detail: "simulated stop failure".to_string(),
            });
        }
        Ok(())
    }

    fn start(&self) -> Result<(), TrackingError> {
        record(&self.log, "tracking.start".to_string());
        if self.fail_start {
            return Err(TrackingError::Start {
                detail: "simulated start failure".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordingGcHint {
    fail: bool,
    log: CallLog,
}

impl RecordingGcHint {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self { fail: false, log })
    }

    pub fn failing(log: CallLog) -> Arc<Self> {
        Arc::new(Self { fail: true, log })
    }
}

impl GcHint for RecordingGcHint {
    fn request(&self) -> anyhow::Result<()> {
        record(&self.log, "gc.hint".to_string());
        if self.fail {
            anyhow::bail!("simulated hint failure");
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct StaticScene {
    pub media: Vec<Arc<RecordingMedia>>,
    pub graphics: Option<Arc<RecordingGraphics>>,
    pub tracking: Option<Arc<RecordingTracking>>,
}

impl SceneQuery for StaticScene {
    fn media_surfaces(&self) -> Vec<Arc<dyn MediaSurface>> {
        self.media
            .iter()
            .map(|m| Arc::clone(m) as Arc<dyn MediaSurface>)
            .collect()
    }

    fn graphics_context(&self) -> Option<Arc<dyn GraphicsContext>> {
        self.graphics
            .as_ref()
            .map(|g| Arc::clone(g) as Arc<dyn GraphicsContext>)
    }

    fn tracking(&self) -> Option<Arc<dyn TrackingSubsystem>> {
        self.tracking
            .as_ref()
            .map(|t| Arc::clone(t) as Arc<dyn TrackingSubsystem>)
    }
}

#[derive(Debug, Default)]
pub struct ToggleVisibility {
    hidden: AtomicBool,
}

impl ToggleVisibility {
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::Relaxed);
    }
}

impl VisibilityProbe for ToggleVisibility {
    fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct ScriptedHeap {
    sample: Mutex<Option<HeapSample>>,
}

impl ScriptedHeap {
    pub fn set(&self, used_bytes: u64, limit_bytes: u64) {
        *self.sample.lock().unwrap() = Some(HeapSample {
            used_bytes,
            limit_bytes,
        });
    }
}

impl HeapTelemetry for ScriptedHeap {
    fn sample(&self) -> Option<HeapSample> {
        *self.sample.lock().unwrap()
    }
}
