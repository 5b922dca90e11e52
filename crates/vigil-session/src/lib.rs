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

//! # Vigil Session
//!
//! The resource-pressure management engine for a long-running interactive
//! session. It watches for pressure — elapsed time, tracking-error bursts,
//! heap growth, lost visibility — and runs graduated, non-overlapping
//! reclamation passes over the session's media surfaces, graphics context
//! and tracking subsystem.
//!
//! The embedding application owns a [`service::PressureService`] and drives
//! it from a single logical thread: `tick()` on a cadence of its choosing,
//! plus the lifecycle entry points when the host signals session end. No
//! thread is spawned and no timer is armed by this crate; all delayed
//! effects are recorded in a scheduler and released by `tick()`.

#![warn(missing_docs)]

pub mod config;
pub mod coordinator;
pub mod lifecycle;
pub mod monitor;
pub mod reclaimer;
pub mod service;

pub use config::PressureConfig;
pub use coordinator::{ReclamationCoordinator, RequestOutcome};
pub use lifecycle::LifecycleEvent;
pub use monitor::PressureMonitor;
pub use reclaimer::{ReclaimReport, ReclaimStep, ResourceReclaimer, StepReport};
pub use service::{PressureService, SessionEnvironment};
