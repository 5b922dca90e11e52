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

//! Media surface seam.

use crate::error::MediaError;
use std::fmt::Debug;

/// A handle to a media playback surface owned by the scene graph.
///
/// Reclamation passes pause and rewind playing surfaces; a full pass
/// additionally clears the source URI and reattaches it after a short delay,
/// which forces the underlying decode pipeline to reinitialize and release
/// whatever it has accumulated.
pub trait MediaSurface: Send + Sync + Debug + 'static {
    /// Whether the surface is currently playing.
    fn is_playing(&self) -> bool;

    /// Pauses playback.
    fn pause(&self) -> Result<(), MediaError>;

    /// Resets the playback position to the start.
    fn rewind(&self) -> Result<(), MediaError>;

    /// The currently attached source URI, if any.
    fn source_uri(&self) -> Option<String>;

    /// Detaches the current source, stalling the decode pipeline.
    fn clear_source(&self);

    /// Attaches the given source URI, reinitializing the decode pipeline.
    fn attach_source(&self, uri: &str) -> Result<(), MediaError>;
}
