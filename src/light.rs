//! Directional Light Controller
//!
//! Owns the scene's single directional light: a unit-length direction
//! vector, an intensity and an ambient floor. The direction can be set
//! directly or driven incrementally from accumulated rotation angles
//! (an input handler feeding pointer deltas, typically). Either way the
//! stored direction is renormalized after every mutation.

use glam::Vec3;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::errors::{RenderError, Result};

/// Per-draw lighting constants, ready for uniform upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightUniforms {
    pub direction: [f32; 3],
    pub intensity: f32,
    pub ambient_strength: f32,
}

/// Directional light state. Invariant: `direction` is unit length after
/// construction and after every public mutation.
#[derive(Debug, Clone)]
pub struct LightControl {
    direction: Vec3,
    intensity: f32,
    ambient_strength: f32,
    angle_x: f32,
    angle_y: f32,
    rotating: bool,
}

impl Default for LightControl {
    fn default() -> Self {
        Self::new()
    }
}

impl LightControl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, -1.0).normalize(),
            intensity: 1.0,
            ambient_strength: 0.1,
            angle_x: 0.0,
            angle_y: 0.0,
            rotating: false,
        }
    }

    /// Stores a new direction, renormalized. A zero-length (or
    /// non-finite) vector cannot be normalized and is rejected, leaving
    /// the previous direction in place.
    pub fn set_direction(&mut self, x: f32, y: f32, z: f32) -> Result<()> {
        let candidate = Vec3::new(x, y, z);
        match candidate.try_normalize() {
            Some(unit) => {
                self.direction = unit;
                Ok(())
            }
            None => Err(RenderError::DegenerateLightDirection),
        }
    }

    /// Accumulates rotation around the X axis. Ignored while rotation is
    /// disabled.
    pub fn rotate_x(&mut self, angle: f32) {
        if self.rotating {
            self.angle_x += angle;
            self.update_direction();
        }
    }

    /// Accumulates rotation around the Y axis. Ignored while rotation is
    /// disabled.
    pub fn rotate_y(&mut self, angle: f32) {
        if self.rotating {
            self.angle_y += angle;
            self.update_direction();
        }
    }

    pub fn set_rotating(&mut self, rotating: bool) {
        self.rotating = rotating;
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn set_ambient_strength(&mut self, ambient_strength: f32) {
        self.ambient_strength = ambient_strength;
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Snapshot of the current lighting constants. Read-only.
    #[must_use]
    pub fn uniform_payload(&self) -> LightUniforms {
        LightUniforms {
            direction: self.direction.to_array(),
            intensity: self.intensity,
            ambient_strength: self.ambient_strength,
        }
    }

    fn update_direction(&mut self) {
        let (sin_x, cos_x) = self.angle_x.sin_cos();
        let (sin_y, cos_y) = self.angle_y.sin_cos();

        // Spherical parametrization shared with set_direction callers:
        // identity angles look down -Z.
        self.direction = Vec3::new(sin_y, -sin_x * cos_y, -cos_x * cos_y).normalize();
    }
}

/// Cloneable, thread-safe handle to a [`LightControl`].
///
/// The renderer samples the payload once per frame under the lock; an
/// input handler on another thread may mutate through its own clone.
#[derive(Debug, Clone, Default)]
pub struct LightHandle {
    inner: Arc<Mutex<LightControl>>,
}

impl LightHandle {
    #[must_use]
    pub fn new(control: LightControl) -> Self {
        Self {
            inner: Arc::new(Mutex::new(control)),
        }
    }

    pub fn set_direction(&self, x: f32, y: f32, z: f32) -> Result<()> {
        self.inner.lock().set_direction(x, y, z)
    }

    pub fn rotate_x(&self, angle: f32) {
        self.inner.lock().rotate_x(angle);
    }

    pub fn rotate_y(&self, angle: f32) {
        self.inner.lock().rotate_y(angle);
    }

    pub fn set_rotating(&self, rotating: bool) {
        self.inner.lock().set_rotating(rotating);
    }

    pub fn set_intensity(&self, intensity: f32) {
        self.inner.lock().set_intensity(intensity);
    }

    pub fn set_ambient_strength(&self, ambient_strength: f32) {
        self.inner.lock().set_ambient_strength(ambient_strength);
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.inner.lock().direction()
    }

    #[must_use]
    pub fn uniform_payload(&self) -> LightUniforms {
        self.inner.lock().uniform_payload()
    }
}
