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

//! Provides the core data types for resource-pressure detection.
//!
//! "Pressure" is any indication that the session's scarce resources are
//! degrading: elapsed time, a burst of tracking errors, heap growth, or the
//! host hiding the session. Each indication is carried as a
//! [`PressureSignal`]; the coordinator maps signals to a
//! [`ReclamationLevel`].

pub mod heap;
pub mod signal;

pub use self::heap::{HeapSample, HeapTelemetry};
pub use self::signal::{PressureSignal, ReclamationLevel, TimerCadence};
