use std::fmt;

use nalgebra::{Point2, Point3, Vector3, Vector4};

use crate::Buffer;

/// What a [VertexAttribute] describes about each vertex.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeUsage {
    Position,
    Normal,
    /// Texture coordinates; the inner value selects a coordinate set.
    Texcoord(u32),
}

impl AttributeUsage {
    /// The tuple type a renderer expects for this attribute.
    pub const fn expected_type(self) -> AttributeType {
        match self {
            AttributeUsage::Position | AttributeUsage::Normal => AttributeType::Vec3,
            AttributeUsage::Texcoord(_) => AttributeType::Vec2,
        }
    }
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeUsage::Position => f.write_str("position"),
            AttributeUsage::Normal => f.write_str("normal"),
            AttributeUsage::Texcoord(0) => f.write_str("uv"),
            AttributeUsage::Texcoord(set) => write!(f, "uv{set}"),
        }
    }
}

/// The inner components of an [AttributeType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeComponent {
    U16,
    U32,
    F32,
}

impl AttributeComponent {
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::U16 => size_of::<u16>(),
            AttributeComponent::U32 => size_of::<u32>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }
}

/// The shape of one attribute tuple.
///
/// Values taken from the [glTF specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    /// Number of components in one tuple of this type.
    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Scalar => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    pub const fn size_bytes(self, comp: AttributeComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

/// Numeric types which can be stored in a [Buffer].
pub trait AttributeComponentType: Copy + 'static {
    const COMPONENT: AttributeComponent;
}

macro_rules! impl_attr_comp_type {
    ($Target:ident: $comp:expr) => {
        impl AttributeComponentType for $Target {
            const COMPONENT: AttributeComponent = $comp;
        }
    };
}

impl_attr_comp_type!(u16: AttributeComponent::U16);
impl_attr_comp_type!(u32: AttributeComponent::U32);
impl_attr_comp_type!(f32: AttributeComponent::F32);

/// Types which one `f32` attribute tuple can be read as.
pub trait Attribute: Sized + 'static {
    const TYPE: AttributeType;
    /// Build a value from exactly `Self::TYPE.size_elements()` components.
    fn from_components(c: &[f32]) -> Self;
}

macro_rules! impl_attr {
    ($t:ident => $Target:ty, |$c:ident| $make:expr) => {
        const _: () = {
            // "size of type $Target == size of attribute $t with f32 components"
            static_assertions::const_assert_eq!(
                std::mem::size_of::<$Target>(),
                AttributeType::$t.size_bytes(AttributeComponent::F32)
            );
            impl Attribute for $Target {
                const TYPE: AttributeType = AttributeType::$t;
                #[inline]
                fn from_components($c: &[f32]) -> Self {
                    $make
                }
            }
        };
    };
}

impl_attr!(Scalar => f32, |c| c[0]);
impl_attr!(Scalar => [f32; 1], |c| [c[0]]);

impl_attr!(Vec2 => Point2<f32>, |c| Point2::new(c[0], c[1]));
impl_attr!(Vec2 => [f32; 2], |c| [c[0], c[1]]);

impl_attr!(Vec3 => Point3<f32>, |c| Point3::new(c[0], c[1], c[2]));
impl_attr!(Vec3 => Vector3<f32>, |c| Vector3::new(c[0], c[1], c[2]));
impl_attr!(Vec3 => [f32; 3], |c| [c[0], c[1], c[2]]);

impl_attr!(Vec4 => Vector4<f32>, |c| Vector4::new(c[0], c[1], c[2], c[3]));
impl_attr!(Vec4 => [f32; 4], |c| [c[0], c[1], c[2], c[3]]);

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;
pub type Texcoord = Point2<f32>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("cannot read {found:?} attribute as {requested:?} tuples (width mismatch)")]
    Width {
        found: AttributeType,
        requested: AttributeType,
    },
}

/// Per-vertex data: a flat [Buffer] of `f32` plus the number of components in each vertex's tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexAttribute {
    data: Buffer<f32>,
    ty: AttributeType,
}

impl VertexAttribute {
    pub fn new(data: impl Into<Buffer<f32>>, ty: AttributeType) -> Self {
        Self {
            data: data.into(),
            ty,
        }
    }

    #[inline(always)]
    pub fn data(&self) -> &Buffer<f32> {
        &self.data
    }

    #[inline(always)]
    pub fn attr_type(&self) -> AttributeType {
        self.ty
    }

    /// Components per vertex.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.ty.size_elements()
    }

    /// Total number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of complete tuples.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.size()
    }

    /// Whether the component count is a whole number of tuples.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.data.len() % self.size() == 0
    }

    /// Read each tuple as a `T`.
    pub fn iter<T: Attribute>(&self) -> Result<impl Iterator<Item = T> + '_, AttributeError> {
        if T::TYPE != self.ty {
            return Err(AttributeError::Width {
                found: self.ty,
                requested: T::TYPE,
            });
        }
        Ok(self.data.tuples(self.size()).map(T::from_components))
    }
}
