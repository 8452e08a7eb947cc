//! Shader Program Pipeline
//!
//! Three-stage lifecycle, terminal on first failure:
//!
//! 1. [`compile`]: source text into a shader object, capturing the
//!    driver's diagnostic log on failure.
//! 2. [`link`]: two shader objects into a program. The shader objects
//!    are released on both the success and the failure path; a program
//!    owns no reference back to its sources after linking.
//! 3. [`resolve`]: named attributes and uniforms into locations,
//!    queried against the bound program.
//!
//! [`build_program`] runs the full pipeline and is what the renderer
//! calls at surface creation. Nothing in here is retried; a failed
//! compile stays failed until the surface is recreated.

use std::collections::HashMap;

use crate::device::{GlApi, ShaderStage};
use crate::errors::{RenderError, Result};

/// What kind of program input a [`Symbol`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Attribute,
    Uniform,
}

/// One attribute or uniform the renderer expects the program to expose.
///
/// A `required` symbol that fails to resolve aborts program setup; an
/// optional one is logged and skipped (the driver may legitimately have
/// optimized it out).
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    pub name: &'static str,
    pub kind: SymbolKind,
    pub required: bool,
}

impl Symbol {
    #[must_use]
    pub const fn attribute(name: &'static str, required: bool) -> Self {
        Self { name, kind: SymbolKind::Attribute, required }
    }

    #[must_use]
    pub const fn uniform(name: &'static str, required: bool) -> Self {
        Self { name, kind: SymbolKind::Uniform, required }
    }
}

/// Resolved attribute and uniform locations of a linked program.
#[derive(Debug)]
pub struct ProgramBindings<D: GlApi> {
    attributes: HashMap<&'static str, u32>,
    uniforms: HashMap<&'static str, D::UniformLocation>,
}

impl<D: GlApi> ProgramBindings<D> {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<u32> {
        self.attributes.get(name).copied()
    }

    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<&D::UniformLocation> {
        self.uniforms.get(name)
    }
}

/// A linked program together with its resolved symbol locations.
#[derive(Debug)]
pub struct LinkedProgram<D: GlApi> {
    pub program: D::Program,
    pub bindings: ProgramBindings<D>,
}

/// Compiles one shader stage. On a failed compile status the object is
/// deleted before returning, so no handle leaks.
pub fn compile<D: GlApi>(device: &D, stage: ShaderStage, source: &str) -> Result<D::Shader> {
    let shader = device
        .create_shader(stage)
        .ok_or(RenderError::ObjectCreation { what: "shader" })?;

    device.shader_source(shader, source);
    if device.compile_shader(shader) {
        log::debug!("compiled {stage} shader");
        Ok(shader)
    } else {
        let log = device.shader_info_log(shader);
        device.delete_shader(shader);
        Err(RenderError::ShaderCompile { stage, log })
    }
}

/// Links a vertex and a fragment shader into a program. Both shader
/// objects are detached and deleted whether or not linking succeeds.
pub fn link<D: GlApi>(device: &D, vertex: D::Shader, fragment: D::Shader) -> Result<D::Program> {
    let Some(program) = device.create_program() else {
        device.delete_shader(vertex);
        device.delete_shader(fragment);
        return Err(RenderError::ObjectCreation { what: "program" });
    };

    device.attach_shader(program, vertex);
    device.attach_shader(program, fragment);
    let linked = device.link_program(program);

    device.detach_shader(program, vertex);
    device.detach_shader(program, fragment);
    device.delete_shader(vertex);
    device.delete_shader(fragment);

    if linked {
        log::debug!("linked shader program");
        Ok(program)
    } else {
        let log = device.program_info_log(program);
        device.delete_program(program);
        Err(RenderError::ProgramLink { log })
    }
}

/// Resolves `symbols` to locations. Binds `program` first: location
/// queries are defined relative to the active program, and resolution
/// must never run before a successful link.
pub fn resolve<D: GlApi>(
    device: &D,
    program: D::Program,
    symbols: &[Symbol],
) -> Result<ProgramBindings<D>> {
    device.use_program(Some(program));

    let mut attributes = HashMap::new();
    let mut uniforms = HashMap::new();

    for symbol in symbols {
        let found = match symbol.kind {
            SymbolKind::Attribute => match device.attrib_location(program, symbol.name) {
                Some(location) => {
                    attributes.insert(symbol.name, location);
                    true
                }
                None => false,
            },
            SymbolKind::Uniform => match device.uniform_location(program, symbol.name) {
                Some(location) => {
                    uniforms.insert(symbol.name, location);
                    true
                }
                None => false,
            },
        };

        if !found {
            if symbol.required {
                return Err(RenderError::MissingSymbol {
                    identifier: symbol.name.to_string(),
                });
            }
            log::warn!("optional shader symbol {} not found, skipping", symbol.name);
        }
    }

    Ok(ProgramBindings { attributes, uniforms })
}

/// Reports whether the implementation considers the program healthy.
/// Diagnostic only; callers gate it behind debug configurations.
pub fn validate<D: GlApi>(device: &D, program: D::Program) -> bool {
    device.validate_program(program)
}

/// Full pipeline: compile both stages, link, resolve. Any failure
/// releases every GPU object created so far.
pub fn build_program<D: GlApi>(
    device: &D,
    vertex_source: &str,
    fragment_source: &str,
    symbols: &[Symbol],
) -> Result<LinkedProgram<D>> {
    let vertex = compile(device, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile(device, ShaderStage::Fragment, fragment_source) {
        Ok(fragment) => fragment,
        Err(err) => {
            device.delete_shader(vertex);
            return Err(err);
        }
    };

    let program = link(device, vertex, fragment)?;

    if cfg!(debug_assertions) {
        let healthy = validate(device, program);
        log::debug!("program validation status: {healthy}");
    }

    match resolve(device, program, symbols) {
        Ok(bindings) => Ok(LinkedProgram { program, bindings }),
        Err(err) => {
            device.use_program(None);
            device.delete_program(program);
            Err(err)
        }
    }
}
