use super::{Mesh, VertexAttribute, VertexLayout};

/// Corner positions of each face in counter-clockwise order when viewed
/// from outside, with the face normal and the matching texture corners.
#[rustfmt::skip]
const FACES: [([f32; 3], [[f32; 3]; 4], [[f32; 2]; 4]); 6] = [
    // Front (+Z)
    ([0.0, 0.0, 1.0],
     [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
     [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    // Back (-Z)
    ([0.0, 0.0, -1.0],
     [[-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5]],
     [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]]),
    // Top (+Y)
    ([0.0, 1.0, 0.0],
     [[-0.5, 0.5, -0.5], [-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5]],
     [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]),
    // Bottom (-Y)
    ([0.0, -1.0, 0.0],
     [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
     [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    // Right (+X)
    ([1.0, 0.0, 0.0],
     [[0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5]],
     [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    // Left (-X)
    ([-1.0, 0.0, 0.0],
     [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
     [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
];

/// A unit cube centered at the origin, two triangles per face,
/// position(3) + normal(3) + uv(2) per vertex.
#[must_use]
pub fn create_cube() -> Mesh {
    let layout = VertexLayout::new(vec![
        VertexAttribute { name: "a_Position", dims: 3 },
        VertexAttribute { name: "a_Normal", dims: 3 },
        VertexAttribute { name: "a_TexCoord", dims: 2 },
    ]);

    let mut data = Vec::with_capacity(6 * 6 * layout.float_count() as usize);
    for (normal, corners, uvs) in &FACES {
        // 0-1-2 / 0-2-3 keeps each face counter-clockwise.
        for index in [0, 1, 2, 0, 2, 3] {
            data.extend_from_slice(&corners[index]);
            data.extend_from_slice(normal);
            data.extend_from_slice(&uvs[index]);
        }
    }

    Mesh { data, layout }
}
