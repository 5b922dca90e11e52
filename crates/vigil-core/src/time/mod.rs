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

//! Clock and scheduling abstractions.
//!
//! The engine never sleeps and never spawns timers of its own. All delayed
//! effects are recorded in a [`TaskScheduler`] and released when the
//! injected [`Clock`] says they are due, so tests simulate elapsed time
//! deterministically instead of waiting out real delays.

pub mod clock;
pub mod scheduler;

pub use self::clock::{Clock, MonotonicClock, VirtualClock};
pub use self::scheduler::TaskScheduler;
