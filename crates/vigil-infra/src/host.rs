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

//! Host probes for environments without the corresponding signal.

use vigil_core::host::VisibilityProbe;

/// A visibility probe pinned to one answer.
///
/// Headless and embedded hosts have no visibility signal; pinning the probe
/// to "visible" keeps the periodic timers armed, which is the conservative
/// choice for a host that can never hide the session.
#[derive(Debug, Clone, Copy)]
pub struct StaticVisibility {
    hidden: bool,
}

impl StaticVisibility {
    /// A probe that always reports the session as visible.
    pub fn visible() -> Self {
        Self { hidden: false }
    }

    /// A probe that always reports the session as hidden.
    pub fn hidden() -> Self {
        Self { hidden: true }
    }
}

impl VisibilityProbe for StaticVisibility {
    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_report_their_pinned_state() {
        assert!(!StaticVisibility::visible().is_hidden());
        assert!(StaticVisibility::hidden().is_hidden());
    }
}
