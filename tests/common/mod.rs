//! In-memory test doubles: a recording [`GlApi`] implementation and a
//! scripted clock. Everything runs without a GPU; live-object counters
//! double as leak probes.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use glint::{GlApi, ShaderStage, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeShader(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeProgram(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeBuffer(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeTexture(pub u32);

/// Everything the fake device observed, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ClearColor(f32, f32, f32, f32),
    EnableDepthTest,
    EnableBackFaceCulling,
    Viewport(i32, i32, i32, i32),
    Clear,
    UseProgram(Option<u32>),
    LocationQuery(String),
    UniformMat4(String, [f32; 16]),
    UniformVec3(String, [f32; 3]),
    UniformF32(String, f32),
    UniformI32(String, i32),
    BindBuffer(Option<u32>),
    VertexAttribute {
        location: u32,
        dims: i32,
        stride: i32,
        offset: i32,
    },
    BindTexture(u32, Option<u32>),
    TextureFilters,
    TextureUpload(i32, i32),
    GenerateMipmaps,
    Draw(i32, i32),
}

#[derive(Debug, Default)]
struct FakeState {
    next_id: u32,
    shader_stages: HashMap<u32, ShaderStage>,
    live_shaders: HashSet<u32>,
    live_programs: HashSet<u32>,
    live_buffers: HashSet<u32>,
    live_textures: HashSet<u32>,
    buffer_bytes: HashMap<u32, usize>,
    compile_failures: HashMap<ShaderStage, String>,
    link_failure: Option<String>,
    hidden_symbols: HashSet<String>,
    uniform_names: HashMap<u32, String>,
    events: Vec<Event>,
}

impl FakeState {
    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Recording [`GlApi`] double. Clones share state, so a test can keep
/// one clone for assertions after handing the other to a renderer.
#[derive(Debug, Clone, Default)]
pub struct FakeDevice {
    state: Rc<RefCell<FakeState>>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Scripting knobs
    // ------------------------------------------------------------------

    /// Makes compilation of `stage` fail with `log` as its diagnostic.
    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.state
            .borrow_mut()
            .compile_failures
            .insert(stage, log.to_string());
    }

    /// Makes the next link report failure with `log` as its diagnostic.
    pub fn fail_link(&self, log: &str) {
        self.state.borrow_mut().link_failure = Some(log.to_string());
    }

    /// Makes location queries for `name` come back empty.
    pub fn hide_symbol(&self, name: &str) {
        self.state.borrow_mut().hidden_symbols.insert(name.to_string());
    }

    // ------------------------------------------------------------------
    // Probes
    // ------------------------------------------------------------------

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().live_buffers.len()
    }

    pub fn live_textures(&self) -> usize {
        self.state.borrow().live_textures.len()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn draw_calls(&self) -> Vec<(i32, i32)> {
        self.state
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Draw(first, count) => Some((*first, *count)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.state
            .borrow()
            .events
            .iter()
            .filter(|event| matches!(event, Event::Clear))
            .count()
    }

    pub fn last_viewport(&self) -> Option<(i32, i32, i32, i32)> {
        self.state
            .borrow()
            .events
            .iter()
            .rev()
            .find_map(|event| match event {
                Event::Viewport(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
    }

    /// Byte length of the first uploaded vertex buffer.
    pub fn uploaded_buffer_len(&self) -> Option<usize> {
        self.state.borrow().buffer_bytes.values().next().copied()
    }

    /// The most recent mat4 uploaded to the uniform called `name`.
    pub fn uniform_mat4(&self, name: &str) -> Option<[f32; 16]> {
        self.state
            .borrow()
            .events
            .iter()
            .rev()
            .find_map(|event| match event {
                Event::UniformMat4(n, value) if n == name => Some(*value),
                _ => None,
            })
    }

    /// The most recent vec3 uploaded to the uniform called `name`.
    pub fn uniform_vec3(&self, name: &str) -> Option<[f32; 3]> {
        self.state
            .borrow()
            .events
            .iter()
            .rev()
            .find_map(|event| match event {
                Event::UniformVec3(n, value) if n == name => Some(*value),
                _ => None,
            })
    }

    /// The most recent f32 uploaded to the uniform called `name`.
    pub fn uniform_f32(&self, name: &str) -> Option<f32> {
        self.state
            .borrow()
            .events
            .iter()
            .rev()
            .find_map(|event| match event {
                Event::UniformF32(n, value) if n == name => Some(*value),
                _ => None,
            })
    }

    fn record(&self, event: Event) {
        self.state.borrow_mut().events.push(event);
    }
}

impl GlApi for FakeDevice {
    type Shader = FakeShader;
    type Program = FakeProgram;
    type Buffer = FakeBuffer;
    type Texture = FakeTexture;
    type UniformLocation = u32;

    fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Event::ClearColor(r, g, b, a));
    }

    fn enable_depth_test(&self) {
        self.record(Event::EnableDepthTest);
    }

    fn enable_back_face_culling(&self) {
        self.record(Event::EnableBackFaceCulling);
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Event::Viewport(x, y, width, height));
    }

    fn clear_frame(&self) {
        self.record(Event::Clear);
    }

    fn create_shader(&self, stage: ShaderStage) -> Option<FakeShader> {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        state.shader_stages.insert(id, stage);
        state.live_shaders.insert(id);
        Some(FakeShader(id))
    }

    fn shader_source(&self, _shader: FakeShader, _source: &str) {}

    fn compile_shader(&self, shader: FakeShader) -> bool {
        let state = self.state.borrow();
        let stage = state.shader_stages[&shader.0];
        !state.compile_failures.contains_key(&stage)
    }

    fn shader_info_log(&self, shader: FakeShader) -> String {
        let state = self.state.borrow();
        let stage = state.shader_stages[&shader.0];
        state.compile_failures.get(&stage).cloned().unwrap_or_default()
    }

    fn delete_shader(&self, shader: FakeShader) {
        self.state.borrow_mut().live_shaders.remove(&shader.0);
    }

    fn create_program(&self) -> Option<FakeProgram> {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        state.live_programs.insert(id);
        Some(FakeProgram(id))
    }

    fn attach_shader(&self, _program: FakeProgram, _shader: FakeShader) {}

    fn detach_shader(&self, _program: FakeProgram, _shader: FakeShader) {}

    fn link_program(&self, _program: FakeProgram) -> bool {
        self.state.borrow().link_failure.is_none()
    }

    fn program_info_log(&self, _program: FakeProgram) -> String {
        self.state.borrow().link_failure.clone().unwrap_or_default()
    }

    fn validate_program(&self, _program: FakeProgram) -> bool {
        true
    }

    fn delete_program(&self, program: FakeProgram) {
        self.state.borrow_mut().live_programs.remove(&program.0);
    }

    fn use_program(&self, program: Option<FakeProgram>) {
        self.record(Event::UseProgram(program.map(|p| p.0)));
    }

    fn attrib_location(&self, _program: FakeProgram, name: &str) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::LocationQuery(name.to_string()));
        if state.hidden_symbols.contains(name) {
            return None;
        }
        let id = state.allocate();
        Some(id)
    }

    fn uniform_location(&self, _program: FakeProgram, name: &str) -> Option<u32> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::LocationQuery(name.to_string()));
        if state.hidden_symbols.contains(name) {
            return None;
        }
        let id = state.allocate();
        state.uniform_names.insert(id, name.to_string());
        Some(id)
    }

    fn set_uniform_mat4(&self, location: &u32, value: &[f32; 16]) {
        let name = self.state.borrow().uniform_names[location].clone();
        self.record(Event::UniformMat4(name, *value));
    }

    fn set_uniform_vec3(&self, location: &u32, value: [f32; 3]) {
        let name = self.state.borrow().uniform_names[location].clone();
        self.record(Event::UniformVec3(name, value));
    }

    fn set_uniform_f32(&self, location: &u32, value: f32) {
        let name = self.state.borrow().uniform_names[location].clone();
        self.record(Event::UniformF32(name, value));
    }

    fn set_uniform_i32(&self, location: &u32, value: i32) {
        let name = self.state.borrow().uniform_names[location].clone();
        self.record(Event::UniformI32(name, value));
    }

    fn create_vertex_buffer(&self, data: &[u8]) -> Option<FakeBuffer> {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        state.live_buffers.insert(id);
        state.buffer_bytes.insert(id, data.len());
        Some(FakeBuffer(id))
    }

    fn bind_vertex_buffer(&self, buffer: Option<FakeBuffer>) {
        self.record(Event::BindBuffer(buffer.map(|b| b.0)));
    }

    fn delete_vertex_buffer(&self, buffer: FakeBuffer) {
        self.state.borrow_mut().live_buffers.remove(&buffer.0);
    }

    fn set_vertex_attribute(&self, location: u32, dims: i32, stride_bytes: i32, offset_bytes: i32) {
        self.record(Event::VertexAttribute {
            location,
            dims,
            stride: stride_bytes,
            offset: offset_bytes,
        });
    }

    fn create_texture(&self) -> Option<FakeTexture> {
        let mut state = self.state.borrow_mut();
        let id = state.allocate();
        state.live_textures.insert(id);
        Some(FakeTexture(id))
    }

    fn bind_texture(&self, unit: u32, texture: Option<FakeTexture>) {
        self.record(Event::BindTexture(unit, texture.map(|t| t.0)));
    }

    fn set_texture_filters(&self) {
        self.record(Event::TextureFilters);
    }

    fn upload_texture_rgba(&self, width: i32, height: i32, _pixels: &[u8]) {
        self.record(Event::TextureUpload(width, height));
    }

    fn generate_mipmaps(&self) {
        self.record(Event::GenerateMipmaps);
    }

    fn delete_texture(&self, texture: FakeTexture) {
        self.state.borrow_mut().live_textures.remove(&texture.0);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Event::Draw(first, count));
    }
}

/// [`TimeSource`] the test advances by hand.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClock {
    millis: Rc<Cell<u64>>,
}

impl ScriptedClock {
    pub fn at(millis: u64) -> Self {
        let clock = Self::default();
        clock.set(millis);
        clock
    }

    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }
}

impl TimeSource for ScriptedClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }
}
