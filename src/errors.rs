//! Error Types
//!
//! This module defines the error types used throughout the rendering core.
//!
//! # Overview
//!
//! The main error type [`RenderError`] covers all failure modes including:
//! - Shader compilation, linking and symbol resolution
//! - Texture decode and upload failures
//! - Geometry construction precondition violations
//! - Degenerate per-frame state (zero-height viewport, zero-length light)
//!
//! # Propagation policy
//!
//! Geometry errors are surfaced synchronously at construction. Shader and
//! texture failures during surface setup are caught at the renderer
//! boundary, logged, and degrade to an invisible render; they are never
//! retried. Degenerate per-frame state is skipped for that frame.

use thiserror::Error;

use crate::device::ShaderStage;

/// The main error type for the rendering core.
#[derive(Error, Debug)]
pub enum RenderError {
    // ========================================================================
    // Shader Pipeline Errors
    // ========================================================================
    /// A shader stage failed to compile; carries the driver's diagnostic log.
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile {
        /// Which stage failed
        stage: ShaderStage,
        /// Diagnostic log reported by the GL compiler
        log: String,
    },

    /// Program linking failed; carries the driver's diagnostic log.
    #[error("shader program linking failed: {log}")]
    ProgramLink {
        /// Diagnostic log reported by the GL linker
        log: String,
    },

    /// A required attribute or uniform was not found in the linked program.
    #[error("shader symbol not found: {identifier}")]
    MissingSymbol {
        /// The attribute/uniform name that failed to resolve
        identifier: String,
    },

    /// The GL implementation refused to allocate an object name.
    #[error("failed to create GL {what} object")]
    ObjectCreation {
        /// What kind of object was being created
        what: &'static str,
    },

    // ========================================================================
    // Texture Errors
    // ========================================================================
    /// The external decode step produced no image.
    #[error("texture image could not be decoded")]
    TextureDecode,

    /// The GL implementation refused to allocate a texture object.
    #[error("failed to allocate a GL texture object")]
    TextureUpload,

    /// Decoded pixel data does not match the declared dimensions.
    #[error("image pixel data mismatch: {reason}")]
    ImageData {
        /// What was inconsistent
        reason: String,
    },

    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// Shape construction parameters violate a precondition.
    #[error("invalid geometry parameters: {reason}")]
    InvalidGeometryParameters {
        /// Which precondition was violated
        reason: String,
    },

    // ========================================================================
    // Frame State Errors
    // ========================================================================
    /// Resize was requested with a zero height.
    #[error("viewport height must be positive")]
    DegenerateViewport,

    /// A light direction with zero length cannot be normalized.
    #[error("light direction must have non-zero length")]
    DegenerateLightDirection,

    // ========================================================================
    // Resource Store Errors
    // ========================================================================
    /// The resource store could not provide shader source text.
    #[error("shader source unavailable: {0}")]
    ShaderSourceUnavailable(String),
}

/// Alias for `Result<T, RenderError>`.
pub type Result<T> = std::result::Result<T, RenderError>;
