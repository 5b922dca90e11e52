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

//! Session-end lifecycle signals.
//!
//! The host delivers these when the session is going away: the tab was
//! hidden for good, the page is being hidden for navigation, or the page is
//! unloading. Each one maps unconditionally to a full reclamation request.
//! The host may terminate the process before any delayed effect runs, so
//! session-end reclamation is synchronous-effort only: whatever the pass
//! can issue inline is all that is guaranteed.

/// A host signal that the session is ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The tab or window became hidden.
    TabHidden,
    /// The page is being hidden for navigation away.
    PageHide,
    /// The page is being unloaded.
    Unload,
}
