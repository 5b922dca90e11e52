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

//! # Vigil Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for session resource-pressure management.
//!
//! A long-running interactive session holds onto scarce, leak-prone
//! resources: a live media stream, a graphics rendering context, and a
//! continuously-running tracking subsystem. This crate defines the "common
//! language" for detecting pressure on those resources and reclaiming them:
//! pressure signals and reclamation levels, the trait seams behind which the
//! external collaborators live, and the clock/scheduler abstractions that
//! keep the engine deterministic under test.

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod host;
pub mod pressure;
pub mod scene;
pub mod time;

pub use error::{GraphicsError, MediaError, TrackingError};
pub use pressure::{HeapSample, HeapTelemetry, PressureSignal, ReclamationLevel, TimerCadence};
pub use time::{Clock, MonotonicClock, TaskScheduler};
