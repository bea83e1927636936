use std::collections::HashMap;

use crate::{Aabb, Buffer};

mod attribute;
pub use attribute::*;

/// The method by which indexed vertices are interpreted as topological primitives.
///
/// Discriminants match the glTF primitive modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Points = 0,
    Lines = 1,
    #[default]
    Triangles = 4,
}

impl Mode {
    /// Number of indices consumed by each primitive.
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            Mode::Points => 1,
            Mode::Lines => 2,
            Mode::Triangles => 3,
        }
    }
}

/// Ways in which a [Geometry] can fail to describe a drawable mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("geometry has no {0} attribute")]
    MissingAttribute(AttributeUsage),
    #[error("{usage} attribute must hold {expected:?} tuples, found {found:?}")]
    TypeMismatch {
        usage: AttributeUsage,
        expected: AttributeType,
        found: AttributeType,
    },
    #[error("{usage} attribute has {len} components, which is not a multiple of its tuple size {size}")]
    ComponentCount {
        usage: AttributeUsage,
        len: usize,
        size: usize,
    },
    #[error("{usage} attribute describes {found} vertices, but position describes {expected}")]
    VertexCountMismatch {
        usage: AttributeUsage,
        expected: usize,
        found: usize,
    },
    #[error("index buffer has {len} entries, which is not a multiple of the primitive size {arity}")]
    IndexArity { len: usize, arity: usize },
    #[error("index {value} at offset {offset} is out of range: 0..{vertex_count} ∌ {value}")]
    IndexOutOfRange {
        offset: usize,
        value: u32,
        vertex_count: usize,
    },
}

/// An immutable indexed mesh: some [vertex attributes](VertexAttribute), an index [Buffer], and the
/// [Mode] by which the indices form primitives.
///
/// # Invariants
///
/// Construction doesn't check anything; call [Geometry::validate] to ensure that
///
/// * there is a position attribute,
/// * every attribute has its usage's [expected type](AttributeUsage::expected_type) and a whole
///   number of tuples,
/// * every attribute has as many vertices as the position attribute,
/// * the index count is a multiple of [Mode::vertices_per_primitive],
/// * and every index names an existing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    mode: Mode,
    attributes: HashMap<AttributeUsage, VertexAttribute>,
    index: Buffer<u32>,
}

strata_common::impl_index!(self: Geometry => VertexAttribute, usage: AttributeUsage;
    &self.attributes[&usage]);

impl Geometry {
    /// Assemble a triangle [Geometry] from attribute data and an index buffer.
    pub fn new(
        attributes: impl IntoIterator<Item = (AttributeUsage, VertexAttribute)>,
        index: impl Into<Buffer<u32>>,
    ) -> Self {
        Self {
            mode: Mode::default(),
            attributes: attributes.into_iter().collect(),
            index: index.into(),
        }
    }

    #[inline]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[inline(always)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline(always)]
    pub fn attributes(&self) -> &HashMap<AttributeUsage, VertexAttribute> {
        &self.attributes
    }

    #[inline]
    pub fn attribute(&self, usage: AttributeUsage) -> Option<&VertexAttribute> {
        self.attributes.get(&usage)
    }

    #[inline]
    pub fn position(&self) -> Option<&VertexAttribute> {
        self.attribute(AttributeUsage::Position)
    }

    #[inline]
    pub fn normal(&self) -> Option<&VertexAttribute> {
        self.attribute(AttributeUsage::Normal)
    }

    #[inline]
    pub fn texcoord(&self, set: u32) -> Option<&VertexAttribute> {
        self.attribute(AttributeUsage::Texcoord(set))
    }

    #[inline(always)]
    pub fn index(&self) -> &Buffer<u32> {
        &self.index
    }

    /// Number of vertices, as given by the position attribute.
    pub fn vertex_count(&self) -> usize {
        self.position().map_or(0, VertexAttribute::vertex_count)
    }

    /// Number of complete primitives described by the index buffer.
    pub fn primitive_count(&self) -> usize {
        self.index.len() / self.mode.vertices_per_primitive()
    }

    /// Iterate over vertex positions. Empty if there is no `Vec3` position attribute.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.position()
            .and_then(|attr| attr.iter::<Position>().ok())
            .into_iter()
            .flatten()
    }

    /// The bounding box of all vertex positions.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions())
    }

    /// Check the invariants listed on [Geometry], reporting the first one violated.
    ///
    /// Attributes are checked in [AttributeUsage] order, so the result is deterministic.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self
            .position()
            .ok_or(GeometryError::MissingAttribute(AttributeUsage::Position))?
            .vertex_count();

        let mut usages: Vec<AttributeUsage> = self.attributes.keys().copied().collect();
        usages.sort_unstable();
        for usage in usages {
            let attr = &self.attributes[&usage];
            let expected = usage.expected_type();
            if attr.attr_type() != expected {
                return Err(GeometryError::TypeMismatch {
                    usage,
                    expected,
                    found: attr.attr_type(),
                });
            }
            if !attr.is_whole() {
                return Err(GeometryError::ComponentCount {
                    usage,
                    len: attr.len(),
                    size: attr.size(),
                });
            }
            if attr.vertex_count() != vertex_count {
                return Err(GeometryError::VertexCountMismatch {
                    usage,
                    expected: vertex_count,
                    found: attr.vertex_count(),
                });
            }
        }

        let arity = self.mode.vertices_per_primitive();
        if self.index.len() % arity != 0 {
            return Err(GeometryError::IndexArity {
                len: self.index.len(),
                arity,
            });
        }

        if let Some((offset, &value)) = self
            .index
            .iter()
            .enumerate()
            .find(|&(_, &value)| value as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                offset,
                value,
                vertex_count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Geometry {
        Geometry::new(
            [
                (
                    AttributeUsage::Position,
                    VertexAttribute::new(
                        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                        AttributeType::Vec3,
                    ),
                ),
                (
                    AttributeUsage::Normal,
                    VertexAttribute::new(
                        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
                        AttributeType::Vec3,
                    ),
                ),
                (
                    AttributeUsage::Texcoord(0),
                    VertexAttribute::new(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0], AttributeType::Vec2),
                ),
            ],
            vec![0u32, 1, 2],
        )
    }

    fn with_attr(usage: AttributeUsage, attr: VertexAttribute) -> Geometry {
        let base = triangle();
        let mut attributes = base.attributes().clone();
        attributes.insert(usage, attr);
        Geometry::new(attributes, base.index().clone())
    }

    #[test]
    fn valid() {
        let tri = triangle();
        assert_eq!(tri.validate(), Ok(()));
        assert_eq!(tri.vertex_count(), 3);
        assert_eq!(tri.primitive_count(), 1);
        assert_eq!(tri.mode(), Mode::Triangles);
        assert_eq!(tri[AttributeUsage::Texcoord(0)].size(), 2);
    }

    #[test]
    fn missing_position() {
        let geo = Geometry::new(HashMap::new(), Vec::<u32>::new());
        assert_eq!(
            geo.validate(),
            Err(GeometryError::MissingAttribute(AttributeUsage::Position))
        );
        assert_eq!(geo.vertex_count(), 0);
        assert_eq!(geo.bounds(), None);
    }

    #[test]
    fn type_mismatch() {
        let geo = with_attr(
            AttributeUsage::Normal,
            VertexAttribute::new(vec![0.0; 6], AttributeType::Vec2),
        );
        assert_eq!(
            geo.validate(),
            Err(GeometryError::TypeMismatch {
                usage: AttributeUsage::Normal,
                expected: AttributeType::Vec3,
                found: AttributeType::Vec2,
            })
        );
    }

    #[test]
    fn ragged_attribute() {
        let geo = with_attr(
            AttributeUsage::Normal,
            VertexAttribute::new(vec![0.0; 8], AttributeType::Vec3),
        );
        assert_eq!(
            geo.validate(),
            Err(GeometryError::ComponentCount {
                usage: AttributeUsage::Normal,
                len: 8,
                size: 3,
            })
        );
    }

    #[test]
    fn vertex_count_mismatch() {
        let geo = with_attr(
            AttributeUsage::Texcoord(0),
            VertexAttribute::new(vec![0.0; 8], AttributeType::Vec2),
        );
        assert_eq!(
            geo.validate(),
            Err(GeometryError::VertexCountMismatch {
                usage: AttributeUsage::Texcoord(0),
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn index_arity() {
        let tri = triangle();
        let geo = Geometry::new(tri.attributes().clone(), vec![0u32, 1, 2, 0]);
        assert_eq!(
            geo.validate(),
            Err(GeometryError::IndexArity { len: 4, arity: 3 })
        );
        // the same indices are fine as lines
        assert_eq!(geo.with_mode(Mode::Lines).validate(), Ok(()));
    }

    #[test]
    fn index_out_of_range() {
        let tri = triangle();
        let geo = Geometry::new(tri.attributes().clone(), vec![0u32, 1, 2, 2, 1, 3]);
        let err = geo.validate().unwrap_err();
        assert_eq!(
            err,
            GeometryError::IndexOutOfRange {
                offset: 5,
                value: 3,
                vertex_count: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "index 3 at offset 5 is out of range: 0..3 ∌ 3"
        );
    }

    #[test]
    fn clones_share_buffers() {
        let a = triangle();
        let b = a.clone();
        assert!(a.index().ptr_eq(b.index()));
        assert!(a[AttributeUsage::Position]
            .data()
            .ptr_eq(b[AttributeUsage::Position].data()));
    }
}
