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

//! Graphics context seam.
//!
//! The rendering context's lifetime is managed externally; the engine only
//! uses the low-level primitives below to drop every binding and dispose
//! every registered texture during a pass.

use crate::error::GraphicsError;
use std::fmt;
use std::fmt::Debug;

/// Identifier of a texture object in the context's texture-memory registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bindable texture targets on a texture unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    /// The two-dimensional texture target.
    TwoD,
    /// The cube-map texture target.
    CubeMap,
}

/// Bindable buffer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// The active vertex buffer binding.
    Vertex,
    /// The active index buffer binding.
    Index,
    /// The active renderbuffer binding.
    Renderbuffer,
    /// The active framebuffer binding.
    Framebuffer,
}

/// All buffer targets, in the order a pass unbinds them.
pub const ALL_BUFFER_TARGETS: [BufferTarget; 4] = [
    BufferTarget::Vertex,
    BufferTarget::Index,
    BufferTarget::Renderbuffer,
    BufferTarget::Framebuffer,
];

/// A handle to the session's graphics rendering context.
pub trait GraphicsContext: Send + Sync + Debug + 'static {
    /// Every texture object currently in the texture-memory registry.
    fn registered_textures(&self) -> Vec<TextureId>;

    /// Disposes one registered texture object, releasing its memory.
    fn dispose_texture(&self, id: TextureId) -> Result<(), GraphicsError>;

    /// The number of texture units the platform exposes.
    fn max_texture_units(&self) -> u32;

    /// Unbinds the given target on the given texture unit.
    fn unbind_texture(&self, unit: u32, target: TextureTarget);

    /// Unbinds the given buffer target.
    fn unbind_buffer(&self, target: BufferTarget);
}
