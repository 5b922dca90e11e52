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

//! Host-environment seams: visibility and the garbage-collection hint.

use std::fmt::Debug;

/// Reports whether the host currently hides the session.
///
/// Read synchronously at each monitor tick; periodic timers are suppressed
/// while hidden, and a visible-to-hidden edge is itself a pressure signal.
pub trait VisibilityProbe: Send + Sync + Debug + 'static {
    /// True when the session is not visible to the user.
    fn is_hidden(&self) -> bool;
}

/// An optional zero-argument garbage-collection hint exposed by some hosts.
///
/// The hint is a black box: its failure modes are opaque and of no interest
/// beyond a log line, so the boundary is `anyhow`.
pub trait GcHint: Send + Sync + Debug + 'static {
    /// Asks the host to consider collecting garbage now.
    fn request(&self) -> anyhow::Result<()>;
}
