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

//! Tracking subsystem seam.

use crate::error::TrackingError;
use std::fmt::Debug;

/// A handle to the continuously-running tracking subsystem.
///
/// The engine never drives tracking itself; it only stops the subsystem
/// during a full pass and schedules a delayed restart, because the
/// underlying engine cannot restart instantaneously after a stop. Both
/// calls are fire-and-forget: errors are caught and logged at the call
/// site, never propagated.
pub trait TrackingSubsystem: Send + Sync + Debug + 'static {
    /// Stops the subsystem.
    fn stop(&self) -> Result<(), TrackingError>;

    /// Starts the subsystem.
    fn start(&self) -> Result<(), TrackingError>;
}

/// An event emitted on the tracking subsystem's scene-level event surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    /// The subsystem reported an error occurrence.
    Error {
        /// Detail from the tracking engine, for logging only.
        detail: String,
    },
}
