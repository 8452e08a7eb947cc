//! Primitive Mesh Generation
//!
//! Pure constructors producing flat, interleaved vertex buffers for a
//! small closed set of shapes. No GL context is required; generation is
//! deterministic and a given set of parameters always produces the same
//! buffer, byte for byte.

mod cube;
mod rectangle;
mod torus;

pub use cube::create_cube;
pub use rectangle::create_rectangle;
pub use torus::{TorusOptions, create_torus};

use crate::errors::{RenderError, Result};

/// One named per-vertex input and its component count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub dims: u32,
}

/// Ordered attribute list describing how one vertex is laid out inside
/// an interleaved buffer. Every vertex in a buffer shares this layout,
/// so the stride is simply the sum of the attribute dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

pub(crate) const BYTES_PER_FLOAT: u32 = 4;

impl VertexLayout {
    #[must_use]
    pub fn new(attributes: Vec<VertexAttribute>) -> Self {
        Self { attributes }
    }

    #[must_use]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Floats per vertex.
    #[must_use]
    pub fn float_count(&self) -> u32 {
        self.attributes.iter().map(|a| a.dims).sum()
    }

    /// Byte distance between consecutive vertices.
    #[must_use]
    pub fn stride_bytes(&self) -> u32 {
        self.float_count() * BYTES_PER_FLOAT
    }

    /// Byte offset of the attribute at `index` within one vertex.
    #[must_use]
    pub fn offset_bytes(&self, index: usize) -> u32 {
        self.attributes[..index]
            .iter()
            .map(|a| a.dims * BYTES_PER_FLOAT)
            .sum()
    }
}

/// A flat, interleaved, immutable triangle-list vertex buffer.
#[derive(Debug, Clone)]
pub struct Mesh {
    data: Vec<f32>,
    layout: VertexLayout,
}

impl Mesh {
    /// Wraps an interleaved float buffer. The buffer length must be a
    /// whole number of vertices under `layout`.
    pub fn from_interleaved(data: Vec<f32>, layout: VertexLayout) -> Result<Self> {
        let floats = layout.float_count() as usize;
        if floats == 0 {
            return Err(RenderError::InvalidGeometryParameters {
                reason: "vertex layout has no attributes".into(),
            });
        }
        if data.len() % floats != 0 {
            return Err(RenderError::InvalidGeometryParameters {
                reason: format!(
                    "buffer of {} floats is not a multiple of the {floats}-float vertex",
                    data.len()
                ),
            });
        }
        Ok(Self { data, layout })
    }

    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The raw buffer bytes, as uploaded to the vertex buffer object.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[must_use]
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        (self.data.len() / self.layout.float_count() as usize) as u32
    }

    #[must_use]
    pub fn triangle_count(&self) -> u32 {
        self.vertex_count() / 3
    }
}

/// The closed set of shapes the core can generate.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle,
    Cube,
    Torus(TorusOptions),
}

impl Primitive {
    /// Generates the mesh for this shape. Only [`Primitive::Torus`]
    /// carries parameters that can be rejected.
    pub fn generate(&self) -> Result<Mesh> {
        match self {
            Primitive::Rectangle => Ok(create_rectangle()),
            Primitive::Cube => Ok(create_cube()),
            Primitive::Torus(options) => create_torus(options),
        }
    }
}
