use raster_core::{fill_triangle, stroke_triangle, Color, Point, Surface};

use crate::obj::WavefrontObj;

/// A triangle mesh ready for rendering: owned vertex data and triangles
/// referencing it by 0-based index.
#[derive(Debug, Default)]
pub struct Model {
    pub vertices: Vec<[f32; 4]>,
    /// Each element is a face's three `v` indices, converted from 1-based
    /// to 0-based. A face whose source index was negative (relative to the
    /// end of the vertex list) keeps that sign after the conversion; this
    /// core does not resolve it to an absolute position.
    pub triangles: Vec<[i32; 3]>,
}

/// Builds a [`Model`] from a parsed [`WavefrontObj`], taking only the `v`
/// index of each face's three corners.
pub fn create_model_from_wavefront_obj(obj: &WavefrontObj) -> Model {
    let triangles = obj
        .faces
        .iter()
        .map(|face| [face.corners[0].v - 1, face.corners[1].v - 1, face.corners[2].v - 1])
        .collect();

    Model {
        vertices: obj.vertices.clone(),
        triangles,
    }
}

/// Projects `(x, y)` orthographically onto a `width` x `height` surface:
/// `(x, y) -> ((x+1)*(width-1)/2, (y+1)*(height-1)/2)`. `z` and `w` are
/// unused; there is no perspective divide or depth test.
fn project(vertex: [f32; 4], width: usize, height: usize) -> Point {
    let x = ((vertex[0] + 1.0) * (width as f32 - 1.0) / 2.0).round() as i32;
    let y = ((vertex[1] + 1.0) * (height as f32 - 1.0) / 2.0).round() as i32;
    Point::new(x, y)
}

/// Renders every triangle of `model` into `surface` with `color`, either as
/// a wireframe outline or filled.
///
/// Vertices are expected to lie in `[-1, 1]^2`; a vertex outside that range
/// projects outside the surface, and this renderer does not clip -- the
/// caller is responsible for keeping the model in bounds.
pub fn render_model(surface: &mut Surface<'_>, model: &Model, color: Color, wireframe: bool) {
    let width = surface.width();
    let height = surface.height();

    for triangle in &model.triangles {
        let a = project(model.vertices[triangle[0] as usize], width, height);
        let b = project(model.vertices[triangle[1] as usize], width, height);
        let c = project(model.vertices[triangle[2] as usize], width, height);

        if wireframe {
            stroke_triangle(surface, a, b, c, color);
        } else {
            fill_triangle(surface, a, b, c, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::{Origin, PixelFormat};

    #[test]
    fn one_based_face_indices_become_zero_based() {
        let obj = WavefrontObj {
            vertices: vec![[0.0; 4]; 3],
            faces: vec![crate::parser::parse_face("1 2 3").unwrap()],
        };
        let model = create_model_from_wavefront_obj(&obj);
        assert_eq!(model.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn negative_indices_are_kept_as_read() {
        let obj = WavefrontObj {
            vertices: vec![[0.0; 4]; 3],
            faces: vec![crate::parser::parse_face("-1 -2 -3").unwrap()],
        };
        let model = create_model_from_wavefront_obj(&obj);
        assert_eq!(model.triangles, vec![[-2, -3, -4]]);
    }

    #[test]
    fn project_maps_corners_of_the_unit_square() {
        assert_eq!(project([-1.0, -1.0, 0.0, 1.0], 9, 9), Point::new(0, 0));
        assert_eq!(project([1.0, 1.0, 0.0, 1.0], 9, 9), Point::new(8, 8));
    }

    #[test]
    fn render_model_fills_a_triangle_into_the_surface() {
        let mut surface = Surface::new_owned(PixelFormat::Bgra8888, Origin::TopLeft, 16, 16).unwrap();
        let model = Model {
            vertices: vec![[-0.8, -0.8, 0.0, 1.0], [0.8, -0.8, 0.0, 1.0], [-0.8, 0.8, 0.0, 1.0]],
            triangles: vec![[0, 1, 2]],
        };
        render_model(&mut surface, &model, Color::RED, false);
        assert!(surface.as_bytes().iter().any(|&b| b != 0));
    }
}
