//! Frame Renderer
//!
//! The orchestrator behind the three surface-lifecycle entry points the
//! host drives, in order, on the thread that owns the GL context:
//!
//! - [`FrameRenderer::on_surface_created`], once per surface: fixed
//!   raster state, vertex upload, shader pipeline, texture upload.
//! - [`FrameRenderer::on_surface_changed`]: viewport and projection.
//! - [`FrameRenderer::on_draw_frame`]: per-frame transforms, uniform
//!   upload and the draw call. Synchronous, non-blocking, no I/O.
//!
//! Shader or texture failures during surface creation are caught here,
//! logged, and leave the renderer in a degraded mode that still clears
//! the frame but draws nothing. The surface stays alive either way.

use glam::{Mat4, Vec3};

use crate::assets::ResourceStore;
use crate::clock::{TimeSource, rotation_angle_degrees};
use crate::device::{GlApi, ShaderStage};
use crate::errors::{RenderError, Result};
use crate::geometry::Mesh;
use crate::light::{LightControl, LightHandle};
use crate::shader::{self, LinkedProgram, Symbol};
use crate::texture;

const A_POSITION: &str = "a_Position";
const U_MVP: &str = "u_MVP";
const U_MODEL_MATRIX: &str = "u_ModelMatrix";
const U_LIGHT_DIRECTION: &str = "u_LightDirection";
const U_LIGHT_INTENSITY: &str = "u_LightIntensity";
const U_AMBIENT_STRENGTH: &str = "u_AmbientStrength";
const U_TEXTURE: &str = "u_Texture";

const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 1.0;
const FAR_PLANE: f32 = 10.0;
const MODEL_DISTANCE: f32 = 3.0;
const ROTATION_AXIS: Vec3 = Vec3::new(0.0, 1.0, 0.5);

pub struct FrameRenderer<D: GlApi, T: TimeSource> {
    device: D,
    store: Box<dyn ResourceStore>,
    mesh: Mesh,
    clock: T,
    light: LightHandle,

    program: Option<LinkedProgram<D>>,
    vertex_buffer: Option<D::Buffer>,
    texture: Option<D::Texture>,

    projection: Mat4,
    aspect: f32,
}

impl<D: GlApi, T: TimeSource> FrameRenderer<D, T> {
    #[must_use]
    pub fn new(device: D, store: Box<dyn ResourceStore>, mesh: Mesh, clock: T) -> Self {
        Self {
            device,
            store,
            mesh,
            clock,
            light: LightHandle::new(LightControl::new()),
            program: None,
            vertex_buffer: None,
            texture: None,
            projection: Mat4::IDENTITY,
            aspect: 1.0,
        }
    }

    /// A clone of the shared light controller, for input handlers.
    #[must_use]
    pub fn light(&self) -> LightHandle {
        self.light.clone()
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// True when surface setup failed and frames only clear.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.program.is_none() || self.vertex_buffer.is_none()
    }

    /// Runs once per surface lifetime, after the host has created the
    /// GL context. Never propagates pipeline failures: they are logged
    /// and the renderer degrades to clear-only frames.
    pub fn on_surface_created(&mut self) {
        // Handles from a previous surface died with its context.
        self.forget_surface_objects();

        self.device.set_clear_color(0.0, 0.0, 0.0, 1.0);
        self.device.enable_depth_test();
        self.device.enable_back_face_culling();

        match self.device.create_vertex_buffer(self.mesh.as_bytes()) {
            Some(buffer) => self.vertex_buffer = Some(buffer),
            None => {
                log::error!("vertex buffer allocation failed, rendering disabled");
            }
        }

        match self.build_program() {
            Ok(program) => {
                self.program = Some(program);
                self.configure_vertex_attributes();
            }
            Err(err) => {
                log::error!("shader pipeline failed, rendering disabled: {err}");
            }
        }

        match self.load_texture() {
            Ok(Some(texture)) => self.texture = Some(texture),
            Ok(None) => log::debug!("no texture supplied, rendering untextured"),
            Err(err) => {
                log::error!("texture setup failed, rendering untextured: {err}");
            }
        }
    }

    /// Updates the viewport and recomputes the projection for the new
    /// aspect ratio. A zero height cannot produce a valid projection;
    /// the resize is skipped and the previous state kept.
    pub fn on_surface_changed(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::warn!("ignoring resize to {width}x0: {}", RenderError::DegenerateViewport);
            return;
        }

        self.device.set_viewport(0, 0, width as i32, height as i32);
        self.aspect = width as f32 / height as f32;
        self.projection = Mat4::perspective_rh_gl(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            self.aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );
    }

    /// Renders one frame: clear, derive the rotation from the clock,
    /// upload uniforms and issue the draw. In degraded mode only the
    /// clear happens.
    pub fn on_draw_frame(&mut self) {
        self.device.clear_frame();

        let (Some(program), Some(_)) = (&self.program, &self.vertex_buffer) else {
            return;
        };

        let angle = rotation_angle_degrees(self.clock.now_millis());
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -MODEL_DISTANCE))
            * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), angle.to_radians());
        let mvp = self.projection * model;

        self.device.use_program(Some(program.program));

        if let Some(location) = program.bindings.uniform(U_MVP) {
            self.device.set_uniform_mat4(location, &mvp.to_cols_array());
        }
        if let Some(location) = program.bindings.uniform(U_MODEL_MATRIX) {
            self.device.set_uniform_mat4(location, &model.to_cols_array());
        }

        let light = self.light.uniform_payload();
        if let Some(location) = program.bindings.uniform(U_LIGHT_DIRECTION) {
            self.device.set_uniform_vec3(location, light.direction);
        }
        if let Some(location) = program.bindings.uniform(U_LIGHT_INTENSITY) {
            self.device.set_uniform_f32(location, light.intensity);
        }
        if let Some(location) = program.bindings.uniform(U_AMBIENT_STRENGTH) {
            self.device.set_uniform_f32(location, light.ambient_strength);
        }

        if let Some(texture) = self.texture {
            self.device.bind_texture(0, Some(texture));
            if let Some(location) = program.bindings.uniform(U_TEXTURE) {
                self.device.set_uniform_i32(location, 0);
            }
        }

        self.device.draw_triangles(0, self.mesh.vertex_count() as i32);
    }

    /// The host destroyed the surface: every GPU handle is already
    /// invalid and is dropped without touching the device. The next
    /// [`Self::on_surface_created`] rebuilds everything.
    pub fn invalidate_surface(&mut self) {
        log::debug!("surface invalidated, dropping GPU handles");
        self.forget_surface_objects();
    }

    fn forget_surface_objects(&mut self) {
        self.program = None;
        self.vertex_buffer = None;
        self.texture = None;
    }

    fn build_program(&self) -> Result<LinkedProgram<D>> {
        let vertex_source = self.store.shader_source(ShaderStage::Vertex)?;
        let fragment_source = self.store.shader_source(ShaderStage::Fragment)?;
        shader::build_program(&self.device, &vertex_source, &fragment_source, &self.symbols())
    }

    fn load_texture(&self) -> Result<Option<D::Texture>> {
        match self.store.texture_image()? {
            Some(image) => Ok(Some(texture::upload(&self.device, &image)?)),
            None => Ok(None),
        }
    }

    /// The symbol set this renderer needs from a program: one attribute
    /// per layout entry, plus the transform, lighting and sampler
    /// uniforms. Position and the transforms are load-bearing; the rest
    /// a shader may legitimately not declare.
    fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self
            .mesh
            .layout()
            .attributes()
            .iter()
            .map(|attribute| Symbol::attribute(attribute.name, attribute.name == A_POSITION))
            .collect();

        symbols.extend([
            Symbol::uniform(U_MVP, true),
            Symbol::uniform(U_MODEL_MATRIX, true),
            Symbol::uniform(U_LIGHT_DIRECTION, false),
            Symbol::uniform(U_LIGHT_INTENSITY, false),
            Symbol::uniform(U_AMBIENT_STRENGTH, false),
            Symbol::uniform(U_TEXTURE, false),
        ]);
        symbols
    }

    /// Points the program's attributes into the interleaved vertex
    /// buffer. Pointer state is captured per attribute, so the buffer
    /// binding itself does not need to persist.
    fn configure_vertex_attributes(&self) {
        let (Some(program), Some(buffer)) = (&self.program, self.vertex_buffer) else {
            return;
        };

        self.device.bind_vertex_buffer(Some(buffer));
        let layout = self.mesh.layout();
        let stride = layout.stride_bytes() as i32;
        for (index, attribute) in layout.attributes().iter().enumerate() {
            if let Some(location) = program.bindings.attribute(attribute.name) {
                self.device.set_vertex_attribute(
                    location,
                    attribute.dims as i32,
                    stride,
                    layout.offset_bytes(index) as i32,
                );
            }
        }
        self.device.bind_vertex_buffer(None);
    }
}
