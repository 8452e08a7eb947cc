use super::{Mesh, VertexAttribute, VertexLayout};

/// A folded rectangle strip: four triangles with baked-in vertex colors,
/// position(3) + color(3) per vertex.
#[must_use]
pub fn create_rectangle() -> Mesh {
    #[rustfmt::skip]
    let data = vec![
        // Triangle 1
        -0.5, -0.5, 1.0,    0.0, 1.0, 1.0,
         0.5,  0.5, 1.0,    0.0, 0.0, 1.0,
        -0.5,  0.5, 1.0,    0.0, 0.0, 0.5,

        // Triangle 2
        -0.5, -0.5, 1.0,    1.0, 0.0, 0.5,
         0.5, -0.5, 1.0,    0.0, 1.0, 0.0,
         0.5,  0.5, 1.0,    0.0, 0.0, 1.0,

        // Triangle 3
        -0.5, -0.5, 1.0,    0.5, 0.25, 0.25,
        -0.5, -0.5, 0.0,    1.0, 0.5, 1.0,
         0.5, -0.5, 1.0,    0.0, 1.0, 0.0,

        // Triangle 4
         0.5, -0.5, 1.0,    0.0, 1.0, 0.0,
         0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
        -0.5, -0.5, 0.0,    1.0, 0.5, 1.0,
    ];

    let layout = VertexLayout::new(vec![
        VertexAttribute { name: "a_Position", dims: 3 },
        VertexAttribute { name: "a_Color", dims: 3 },
    ]);

    Mesh { data, layout }
}
