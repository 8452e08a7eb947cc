//! GL Device Capability
//!
//! Every GPU-facing call the core makes goes through the [`GlApi`] trait:
//! the renderer, shader pipeline and texture loader never touch a raw
//! context. Production code wraps a [`glow::Context`] in [`GlowDevice`];
//! the test suite substitutes an in-memory recording device.
//!
//! Handles are opaque associated types with a manual lifecycle: creation
//! returns `Option` (GL reports allocation failure by returning object
//! name zero) and release is an explicit `delete_*` call. Nothing here is
//! dropped implicitly.

mod glow_backend;

pub use glow_backend::GlowDevice;

use std::fmt;
use std::hash::Hash;

/// The two programmable pipeline stages the core compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// The slice of a GL ES class rasterization context used by the core.
///
/// All operations must run on the single thread that owns the underlying
/// context; the trait does not require `Send` or `Sync`. Object creation
/// returns `None` when the implementation refuses to allocate a name;
/// every other operation is infallible at this layer (GL errors are
/// sticky context state, not per-call results).
pub trait GlApi {
    type Shader: Copy + Eq + Hash + fmt::Debug;
    type Program: Copy + Eq + Hash + fmt::Debug;
    type Buffer: Copy + Eq + Hash + fmt::Debug;
    type Texture: Copy + Eq + Hash + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;

    // ------------------------------------------------------------------
    // Frame and surface state
    // ------------------------------------------------------------------
    fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn enable_depth_test(&self);
    fn enable_back_face_culling(&self);
    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Clears both the color and depth planes of the current framebuffer.
    fn clear_frame(&self);

    // ------------------------------------------------------------------
    // Shader objects
    // ------------------------------------------------------------------
    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compiles the shader and returns the compile status.
    fn compile_shader(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // ------------------------------------------------------------------
    // Programs
    // ------------------------------------------------------------------
    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Links the program and returns the link status.
    fn link_program(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    /// Asks the implementation whether the program would run in the
    /// current context state. Diagnostic only.
    fn validate_program(&self, program: Self::Program) -> bool;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: Self::Program, name: &str)
    -> Option<Self::UniformLocation>;

    // ------------------------------------------------------------------
    // Uniform upload
    // ------------------------------------------------------------------
    fn set_uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]);
    fn set_uniform_vec3(&self, location: &Self::UniformLocation, value: [f32; 3]);
    fn set_uniform_f32(&self, location: &Self::UniformLocation, value: f32);
    fn set_uniform_i32(&self, location: &Self::UniformLocation, value: i32);

    // ------------------------------------------------------------------
    // Vertex buffers
    // ------------------------------------------------------------------
    /// Allocates a buffer object, uploads `data` and leaves it unbound.
    fn create_vertex_buffer(&self, data: &[u8]) -> Option<Self::Buffer>;
    fn bind_vertex_buffer(&self, buffer: Option<Self::Buffer>);
    fn delete_vertex_buffer(&self, buffer: Self::Buffer);
    /// Points `location` at float data in the bound vertex buffer and
    /// enables the attribute array.
    fn set_vertex_attribute(&self, location: u32, dims: i32, stride_bytes: i32, offset_bytes: i32);

    // ------------------------------------------------------------------
    // Textures
    // ------------------------------------------------------------------
    fn create_texture(&self) -> Option<Self::Texture>;
    fn bind_texture(&self, unit: u32, texture: Option<Self::Texture>);
    /// Configures trilinear minification and linear magnification on the
    /// texture bound to the active unit.
    fn set_texture_filters(&self);
    /// Uploads tightly packed RGBA8 pixels to the texture bound to the
    /// active unit.
    fn upload_texture_rgba(&self, width: i32, height: i32, pixels: &[u8]);
    /// Generates the full mipmap chain for the texture bound to the
    /// active unit.
    fn generate_mipmaps(&self);
    fn delete_texture(&self, texture: Self::Texture);

    // ------------------------------------------------------------------
    // Draw
    // ------------------------------------------------------------------
    /// Issues one non-indexed triangle draw over the bound vertex state.
    fn draw_triangles(&self, first: i32, count: i32);
}
