use std::f32::consts::TAU;

use super::{Mesh, VertexAttribute, VertexLayout};
use crate::errors::{RenderError, Result};

/// Construction parameters for [`create_torus`].
#[derive(Debug, Clone, PartialEq)]
pub struct TorusOptions {
    /// Distance from the torus center to the tube center.
    pub major_radius: f32,
    /// Radius of the tube itself.
    pub minor_radius: f32,
    /// Steps around the major circle. Minimum 3.
    pub major_segments: u32,
    /// Steps around the tube. Minimum 3.
    pub minor_segments: u32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            major_radius: 0.7,
            minor_radius: 0.3,
            major_segments: 48,
            minor_segments: 24,
        }
    }
}

/// A parametric torus, two triangles per grid cell, position(3) +
/// normal(3) + color(3) per vertex.
///
/// The grid wraps in both parameters, so the generated surface is
/// seamless: the vertex computed at `u = 1` is the vertex computed at
/// `u = 0`, bit for bit, and likewise for `v`. Normals come from the
/// analytic surface gradient and are unit length by construction.
pub fn create_torus(options: &TorusOptions) -> Result<Mesh> {
    options.check()?;

    let major = options.major_segments;
    let minor = options.minor_segments;

    let layout = VertexLayout::new(vec![
        VertexAttribute { name: "a_Position", dims: 3 },
        VertexAttribute { name: "a_Normal", dims: 3 },
        VertexAttribute { name: "a_Color", dims: 3 },
    ]);

    let floats_per_vertex = layout.float_count() as usize;
    let mut data = Vec::with_capacity((major * minor * 6) as usize * floats_per_vertex);

    for i in 0..major {
        for j in 0..minor {
            // Two triangles per cell; wrapped indices close the seams.
            for (ci, cj) in [
                (i, j),
                (i + 1, j),
                (i, j + 1),
                (i + 1, j),
                (i + 1, j + 1),
                (i, j + 1),
            ] {
                push_vertex(&mut data, options, ci % major, cj % minor);
            }
        }
    }

    Ok(Mesh { data, layout })
}

fn push_vertex(data: &mut Vec<f32>, options: &TorusOptions, i: u32, j: u32) {
    let u = i as f32 / options.major_segments as f32;
    let v = j as f32 / options.minor_segments as f32;
    let major_angle = u * TAU;
    let minor_angle = v * TAU;

    let ring = options.major_radius + options.minor_radius * minor_angle.cos();
    let x = ring * major_angle.cos();
    let y = ring * major_angle.sin();
    let z = options.minor_radius * minor_angle.sin();

    // Gradient of the implicit torus surface, unit length already.
    let nx = minor_angle.cos() * major_angle.cos();
    let ny = minor_angle.cos() * major_angle.sin();
    let nz = minor_angle.sin();

    #[rustfmt::skip]
    let vertex = [
        x, y, z,
        nx, ny, nz,
        0.7, 0.3 + u, 0.3 + v,
    ];
    data.extend_from_slice(&vertex);
}

impl TorusOptions {
    fn check(&self) -> Result<()> {
        if self.major_segments < 3 || self.minor_segments < 3 {
            return Err(RenderError::InvalidGeometryParameters {
                reason: format!(
                    "segment counts {}x{} are below the minimum of 3",
                    self.major_segments, self.minor_segments
                ),
            });
        }
        if !(self.major_radius.is_finite() && self.major_radius > 0.0)
            || !(self.minor_radius.is_finite() && self.minor_radius > 0.0)
        {
            return Err(RenderError::InvalidGeometryParameters {
                reason: format!(
                    "radii {}/{} must be finite and positive",
                    self.major_radius, self.minor_radius
                ),
            });
        }
        Ok(())
    }
}
