//! # Glint
//!
//! A minimal real-time 3D rendering core for OpenGL ES class contexts.
//! It generates interleaved vertex buffers for a small set of primitive
//! shapes, runs the shader-program lifecycle (compile → link → resolve),
//! keeps per-frame transform and lighting state, and issues one draw
//! call per frame.
//!
//! The host owns the window, the GL context and resource files; it
//! drives the three lifecycle entry points on [`FrameRenderer`] in
//! order (surface created, surface changed, draw frame) on the thread
//! that owns the context.

pub mod assets;
pub mod clock;
pub mod device;
pub mod errors;
pub mod geometry;
pub mod light;
pub mod renderer;
pub mod shader;
pub mod texture;

pub use assets::{BUILTIN_FRAGMENT_SHADER, BUILTIN_VERTEX_SHADER, ResourceStore, StaticStore};
pub use clock::{MonotonicClock, ROTATION_PERIOD_MS, TimeSource, rotation_angle_degrees};
pub use device::{GlApi, GlowDevice, ShaderStage};
pub use errors::{RenderError, Result};
pub use geometry::{
    Mesh, Primitive, TorusOptions, VertexAttribute, VertexLayout, create_cube, create_rectangle,
    create_torus,
};
pub use light::{LightControl, LightHandle, LightUniforms};
pub use renderer::FrameRenderer;
pub use shader::{LinkedProgram, ProgramBindings, Symbol, SymbolKind};
pub use texture::Image;
