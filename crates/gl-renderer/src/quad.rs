use glium::implement_vertex;

/// A corner of the capture quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position in window pixels.
    pub position: [f32; 2],
    /// Texture coordinate, `(0, 0)` samples the first row of the capture.
    pub tex_coords: [f32; 2],
}

implement_vertex!(Vertex, position, tex_coords);

/// A triangle strip covering `(0, 0)..(width, height)` with the texture
/// mapped corner to corner.
pub fn quad_vertices(width: f32, height: f32) -> [Vertex; 4] {
    [
        Vertex {
            position: [0.0, 0.0],
            tex_coords: [0.0, 0.0],
        },
        Vertex {
            position: [0.0, height],
            tex_coords: [0.0, 1.0],
        },
        Vertex {
            position: [width, 0.0],
            tex_coords: [1.0, 0.0],
        },
        Vertex {
            position: [width, height],
            tex_coords: [1.0, 1.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::quad_vertices;

    #[test]
    fn covers_the_window() {
        let quad = quad_vertices(800.0, 600.0);

        let positions: Vec<[f32; 2]> = quad.iter().map(|vertex| vertex.position).collect();
        assert_eq!(
            positions,
            [[0.0, 0.0], [0.0, 600.0], [800.0, 0.0], [800.0, 600.0]]
        );
    }

    #[test]
    fn texture_follows_position() {
        for (width, height) in [(800.0, 600.0), (1.0, 1.0)] {
            for vertex in quad_vertices(width, height) {
                assert_eq!(
                    vertex.tex_coords,
                    [vertex.position[0] / width, vertex.position[1] / height]
                );
            }
        }
    }
}
