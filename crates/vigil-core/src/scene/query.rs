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

//! Read-only scene lookup seam.

use crate::scene::graphics::GraphicsContext;
use crate::scene::media::MediaSurface;
use crate::scene::tracking::TrackingSubsystem;
use std::fmt::Debug;
use std::sync::Arc;

/// Read-only lookup of the session's reclaimable collaborators.
///
/// The scene graph owns these objects; the engine queries them afresh at
/// the start of every pass so that surfaces added or removed between passes
/// are picked up naturally.
pub trait SceneQuery: Send + Sync + Debug + 'static {
    /// Every media surface currently known to the scene.
    fn media_surfaces(&self) -> Vec<Arc<dyn MediaSurface>>;

    /// The graphics rendering context, if one is attached.
    fn graphics_context(&self) -> Option<Arc<dyn GraphicsContext>>;

    /// The tracking subsystem, if one is attached.
    fn tracking(&self) -> Option<Arc<dyn TrackingSubsystem>>;
}
