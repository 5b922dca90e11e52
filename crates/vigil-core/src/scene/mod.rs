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

//! Trait seams for the external session collaborators.
//!
//! The scene graph, its media surfaces, the graphics context and the
//! tracking subsystem are black boxes owned by the embedding application.
//! The engine only needs the narrow contracts defined here: it reads and
//! writes through them during a reclamation pass but never takes ownership
//! of their lifetimes.

pub mod graphics;
pub mod media;
pub mod query;
pub mod tracking;

pub use self::graphics::{BufferTarget, GraphicsContext, TextureId, TextureTarget};
pub use self::media::MediaSurface;
pub use self::query::SceneQuery;
pub use self::tracking::{TrackingEvent, TrackingSubsystem};
