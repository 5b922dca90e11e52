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

//! Defines the hierarchy of error types for the collaborator seams.
//!
//! None of these errors are fatal to the engine: a reclamation pass treats
//! every one of them as transient, logs it, and moves on to the next step.

use crate::scene::graphics::TextureId;
use std::fmt;

/// An error reported by a media surface while mutating its playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The underlying playback pipeline rejected a pause or rewind request.
    Playback {
        /// Description of the rejected operation.
        operation: String,
        /// Detail from the media pipeline.
        detail: String,
    },
    /// A source URI could not be attached to the surface.
    SourceAttach {
        /// The URI that failed to attach.
        uri: String,
        /// Detail from the media pipeline.
        detail: String,
    },
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Playback { operation, detail } => {
                write!(f, "Media playback operation '{operation}' failed: {detail}")
            }
            MediaError::SourceAttach { uri, detail } => {
                write!(f, "Failed to attach media source '{uri}': {detail}")
            }
        }
    }
}

impl std::error::Error for MediaError {}

/// An error reported by the graphics context while releasing resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A registered texture object could not be disposed.
    DisposeFailed {
        /// The texture that failed to dispose.
        id: TextureId,
        /// Detail from the graphics backend.
        detail: String,
    },
    /// The context has been lost and can no longer service requests.
    ContextLost,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::DisposeFailed { id, detail } => {
                write!(f, "Failed to dispose texture {id}: {detail}")
            }
            GraphicsError::ContextLost => {
                write!(f, "Graphics context has been lost")
            }
        }
    }
}

impl std::error::Error for GraphicsError {}

/// An error reported by the tracking subsystem on a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// The subsystem failed to stop cleanly.
    Stop {
        /// Detail from the tracking engine.
        detail: String,
    },
    /// The subsystem failed to (re)start.
    Start {
        /// Detail from the tracking engine.
        detail: String,
    },
}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingError::Stop { detail } => {
                write!(f, "Tracking subsystem failed to stop: {detail}")
            }
            TrackingError::Start { detail } => {
                write!(f, "Tracking subsystem failed to start: {detail}")
            }
        }
    }
}

impl std::error::Error for TrackingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_error_display() {
        let err = MediaError::Playback {
            operation: "pause".to_string(),
            detail: "decoder stalled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Media playback operation 'pause' failed: decoder stalled"
        );
    }

    #[test]
    fn graphics_error_display() {
        let err = GraphicsError::DisposeFailed {
            id: TextureId(7),
            detail: "already freed".to_string(),
        };
        assert!(err.to_string().contains("texture #7"));
    }

    #[test]
    fn tracking_error_display() {
        let err = TrackingError::Start {
            detail: "engine busy".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Tracking subsystem failed to start: engine busy"
        );
    }
}
