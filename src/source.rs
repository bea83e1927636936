use hedron::{AttributeType, AttributeUsage, Geometry, VertexAttribute};

use crate::Nested;

/// Authored mesh data, grouped however the author found readable.
///
/// Indices are unsigned by construction; everything else is accepted as-is and only checked once
/// packed (see [Geometry::validate]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometrySource {
    /// Vertex positions; 3 components per vertex.
    pub position: Nested<f64>,
    /// Vertex normals; 3 components per vertex.
    pub normal: Nested<f64>,
    /// Texture coordinates; 2 components per vertex.
    pub uv: Nested<f64>,
    /// Triangle corners; 3 indices per triangle.
    pub index: Nested<u32>,
}

impl GeometrySource {
    /// Flatten every input and pack the results into a triangle [Geometry].
    pub fn pack(&self) -> Geometry {
        Geometry::new(
            [
                (
                    AttributeUsage::Position,
                    VertexAttribute::new(self.position.pack::<f32>(), AttributeType::Vec3),
                ),
                (
                    AttributeUsage::Normal,
                    VertexAttribute::new(self.normal.pack::<f32>(), AttributeType::Vec3),
                ),
                (
                    AttributeUsage::Texcoord(0),
                    VertexAttribute::new(self.uv.pack::<f32>(), AttributeType::Vec2),
                ),
            ],
            self.index.pack::<u32>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use hedron::{GeometryError, Mode};

    use super::*;
    use crate::nested;

    fn single_triangle() -> GeometrySource {
        GeometrySource {
            position: nested![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normal: nested![[0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
            uv: nested![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            index: nested![[0, 1, 2]],
        }
    }

    #[test]
    fn pack_single_triangle() {
        let geo = single_triangle().pack();
        assert_eq!(geo.mode(), Mode::Triangles);
        assert_eq!(geo[AttributeUsage::Position].len(), 9);
        assert_eq!(geo[AttributeUsage::Position].size(), 3);
        assert_eq!(geo[AttributeUsage::Normal].size(), 3);
        assert_eq!(geo[AttributeUsage::Texcoord(0)].size(), 2);
        assert_eq!(geo.index().as_slice(), [0, 1, 2]);
        assert_eq!(geo.vertex_count(), 3);
        assert_eq!(geo.validate(), Ok(()));
    }

    #[test]
    fn pack_keeps_order() {
        let geo = single_triangle().pack();
        assert_eq!(
            geo[AttributeUsage::Position].data().as_slice(),
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(
            geo[AttributeUsage::Texcoord(0)].data().as_slice(),
            [0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn pack_stores_f32() {
        let source = GeometrySource {
            position: nested![[0.1, 0.2, 0.3]],
            ..single_triangle()
        };
        let geo = source.pack();
        let data = geo[AttributeUsage::Position].data();
        assert_eq!(data.as_slice(), [0.1f32, 0.2f32, 0.3f32]);
        assert_eq!(data.component(), hedron::AttributeComponent::F32);
        assert_eq!(geo.index().component(), hedron::AttributeComponent::U32);
    }

    #[test]
    fn pack_does_not_validate() {
        let source = GeometrySource {
            index: nested![[0, 1, 7]],
            ..single_triangle()
        };
        let geo = source.pack();
        assert_eq!(geo.index().as_slice(), [0, 1, 7]);
        assert_eq!(
            geo.validate(),
            Err(GeometryError::IndexOutOfRange {
                offset: 2,
                value: 7,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn empty_source() {
        let geo = GeometrySource::default().pack();
        assert_eq!(geo.vertex_count(), 0);
        assert_eq!(geo.primitive_count(), 0);
        assert_eq!(geo.validate(), Ok(()));
    }
}
