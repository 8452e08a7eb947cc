//! Resource Store
//!
//! The host owns resource files (shader source text, compressed image
//! assets) and everything about reading and decoding them. The core
//! only consumes the results, through the [`ResourceStore`] capability
//! handed to the renderer at construction. This keeps the core runnable
//! against plain in-memory data, with no windowing or asset host behind
//! it.

use crate::device::ShaderStage;
use crate::errors::Result;
use crate::texture::Image;

/// Built-in GLSL ES vertex stage: MVP transform plus a model-space
/// normal carried to the fragment stage. Matches the position / normal /
/// uv vertex layouts.
pub const BUILTIN_VERTEX_SHADER: &str = include_str!("../shaders/mesh.vert");

/// Built-in GLSL ES fragment stage: Lambert directional diffuse with an
/// ambient floor, modulating a sampled texture.
pub const BUILTIN_FRAGMENT_SHADER: &str = include_str!("../shaders/mesh.frag");

/// Source of decoded render resources.
pub trait ResourceStore {
    /// The GLSL source text for one shader stage.
    fn shader_source(&self, stage: ShaderStage) -> Result<String>;

    /// The decoded texture image, if the host ships one. `Ok(None)`
    /// means "render untextured"; an error means the host's decode step
    /// failed.
    fn texture_image(&self) -> Result<Option<Image>>;
}

/// In-memory [`ResourceStore`] over owned strings and pixels.
#[derive(Debug, Clone)]
pub struct StaticStore {
    vertex_source: String,
    fragment_source: String,
    image: Option<Image>,
}

impl StaticStore {
    #[must_use]
    pub fn new(vertex_source: impl Into<String>, fragment_source: impl Into<String>) -> Self {
        Self {
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
            image: None,
        }
    }

    /// A store serving the crate's embedded shader pair.
    #[must_use]
    pub fn with_builtin_shaders() -> Self {
        Self::new(BUILTIN_VERTEX_SHADER, BUILTIN_FRAGMENT_SHADER)
    }

    /// Attaches a decoded texture image.
    #[must_use]
    pub fn with_texture(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }
}

impl ResourceStore for StaticStore {
    fn shader_source(&self, stage: ShaderStage) -> Result<String> {
        Ok(match stage {
            ShaderStage::Vertex => self.vertex_source.clone(),
            ShaderStage::Fragment => self.fragment_source.clone(),
        })
    }

    fn texture_image(&self) -> Result<Option<Image>> {
        Ok(self.image.clone())
    }
}
