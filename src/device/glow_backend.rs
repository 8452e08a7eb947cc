use glow::HasContext;

use super::{GlApi, ShaderStage};

/// [`GlApi`] implementation over a live [`glow::Context`].
///
/// The host creates the context (EGL, SDL, glutin, WebGL, whatever owns
/// the surface) and hands it over; the device keeps it for the lifetime
/// of the surface. On contexts that require one, a single vertex array
/// object is created and left bound so attribute pointer state has a
/// place to live.
pub struct GlowDevice {
    gl: glow::Context,
    vao: Option<glow::VertexArray>,
}

impl GlowDevice {
    #[must_use]
    pub fn new(gl: glow::Context) -> Self {
        // GL ES 2 has no vertex array objects; failure to create one is fine.
        let vao = unsafe { gl.create_vertex_array().ok() };
        if let Some(vao) = vao {
            unsafe { gl.bind_vertex_array(Some(vao)) };
        }
        Self { gl, vao }
    }

    /// The wrapped context, for host-side calls outside the core's slice.
    #[must_use]
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl Drop for GlowDevice {
    fn drop(&mut self) {
        if let Some(vao) = self.vao.take() {
            unsafe { self.gl.delete_vertex_array(vao) };
        }
    }
}

impl GlApi for GlowDevice {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type Texture = <glow::Context as HasContext>::Texture;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { self.gl.clear_color(r, g, b, a) };
    }

    fn enable_depth_test(&self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) };
    }

    fn enable_back_face_culling(&self) {
        unsafe {
            self.gl.enable(glow::CULL_FACE);
            self.gl.cull_face(glow::BACK);
        }
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.gl.viewport(x, y, width, height) };
    }

    fn clear_frame(&self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader> {
        unsafe { self.gl.create_shader(stage.gl_enum()).ok() }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) };
    }

    fn compile_shader(&self, shader: Self::Shader) -> bool {
        unsafe {
            self.gl.compile_shader(shader);
            self.gl.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) };
    }

    fn create_program(&self) -> Option<Self::Program> {
        unsafe { self.gl.create_program().ok() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) };
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.detach_shader(program, shader) };
    }

    fn link_program(&self, program: Self::Program) -> bool {
        unsafe {
            self.gl.link_program(program);
            self.gl.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn validate_program(&self, program: Self::Program) -> bool {
        // glow exposes no glValidateProgram wrapper; link status is the
        // closest health probe available through the abstraction.
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) };
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) };
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn set_uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]) {
        unsafe { self.gl.uniform_matrix_4_f32_slice(Some(location), false, value) };
    }

    fn set_uniform_vec3(&self, location: &Self::UniformLocation, value: [f32; 3]) {
        unsafe { self.gl.uniform_3_f32_slice(Some(location), &value) };
    }

    fn set_uniform_f32(&self, location: &Self::UniformLocation, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(location), value) };
    }

    fn set_uniform_i32(&self, location: &Self::UniformLocation, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(location), value) };
    }

    fn create_vertex_buffer(&self, data: &[u8]) -> Option<Self::Buffer> {
        unsafe {
            let buffer = self.gl.create_buffer().ok()?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            Some(buffer)
        }
    }

    fn bind_vertex_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer) };
    }

    fn delete_vertex_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) };
    }

    fn set_vertex_attribute(&self, location: u32, dims: i32, stride_bytes: i32, offset_bytes: i32) {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                location,
                dims,
                glow::FLOAT,
                false,
                stride_bytes,
                offset_bytes,
            );
            self.gl.enable_vertex_attrib_array(location);
        }
    }

    fn create_texture(&self) -> Option<Self::Texture> {
        unsafe { self.gl.create_texture().ok() }
    }

    fn bind_texture(&self, unit: u32, texture: Option<Self::Texture>) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, texture);
        }
    }

    fn set_texture_filters(&self) {
        unsafe {
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            self.gl
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        }
    }

    fn upload_texture_rgba(&self, width: i32, height: i32, pixels: &[u8]) {
        unsafe {
            self.gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width,
                height,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
        }
    }

    fn generate_mipmaps(&self) {
        unsafe { self.gl.generate_mipmap(glow::TEXTURE_2D) };
    }

    fn delete_texture(&self, texture: Self::Texture) {
        unsafe { self.gl.delete_texture(texture) };
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, first, count) };
    }
}
