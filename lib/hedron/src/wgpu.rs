//! Glue between [Geometry](crate::Geometry) data and [wgpu] pipeline descriptions.
//!
//! Nothing here touches a device; uploading the bytes is up to the renderer.

use crate::{AttributeComponent, AttributeComponentType, AttributeType, Buffer, VertexAttribute};

impl AttributeType {
    /// The [wgpu::VertexFormat] for tuples of this type, if wgpu has one.
    pub const fn vertex_format(self, comp: AttributeComponent) -> Option<wgpu::VertexFormat> {
        use wgpu::VertexFormat as F;
        use AttributeComponent as C;
        use AttributeType as T;
        match (comp, self) {
            (C::F32, T::Scalar) => Some(F::Float32),
            (C::F32, T::Vec2) => Some(F::Float32x2),
            (C::F32, T::Vec3) => Some(F::Float32x3),
            (C::F32, T::Vec4) => Some(F::Float32x4),
            (C::U32, T::Scalar) => Some(F::Uint32),
            (C::U32, T::Vec2) => Some(F::Uint32x2),
            (C::U32, T::Vec3) => Some(F::Uint32x3),
            (C::U32, T::Vec4) => Some(F::Uint32x4),
            (C::U16, T::Vec2) => Some(F::Uint16x2),
            (C::U16, T::Vec4) => Some(F::Uint16x4),
            (C::U16, T::Scalar | T::Vec3) => None,
        }
    }
}

impl AttributeComponent {
    /// The [wgpu::IndexFormat] for index buffers of this component, if wgpu has one.
    pub const fn index_format(self) -> Option<wgpu::IndexFormat> {
        match self {
            AttributeComponent::U16 => Some(wgpu::IndexFormat::Uint16),
            AttributeComponent::U32 => Some(wgpu::IndexFormat::Uint32),
            AttributeComponent::F32 => None,
        }
    }
}

impl<C: AttributeComponentType + bytemuck::Pod> Buffer<C> {
    /// The buffer's contents, ready for `wgpu::util::DeviceExt::create_buffer_init`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl VertexAttribute {
    /// Distance in bytes between consecutive tuples, for [wgpu::VertexBufferLayout::array_stride].
    #[inline]
    pub fn array_stride(&self) -> wgpu::BufferAddress {
        self.attr_type().size_bytes(AttributeComponent::F32) as wgpu::BufferAddress
    }

    /// Describe this attribute as the sole member of a vertex buffer bound at `shader_location`.
    pub fn wgpu_attribute(&self, shader_location: u32) -> Option<wgpu::VertexAttribute> {
        Some(wgpu::VertexAttribute {
            format: self.attr_type().vertex_format(AttributeComponent::F32)?,
            offset: 0,
            shader_location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(
            AttributeType::Vec3.vertex_format(AttributeComponent::F32),
            Some(wgpu::VertexFormat::Float32x3)
        );
        assert_eq!(
            AttributeType::Vec3.vertex_format(AttributeComponent::U16),
            None
        );
        assert_eq!(
            AttributeComponent::U32.index_format(),
            Some(wgpu::IndexFormat::Uint32)
        );
    }

    #[test]
    fn bytes() {
        let uv = VertexAttribute::new(vec![0.0f32, 1.0], AttributeType::Vec2);
        assert_eq!(uv.array_stride(), 8);
        assert_eq!(uv.data().as_bytes().len(), 8);
        let attr = uv.wgpu_attribute(2).unwrap();
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attr.shader_location, 2);
    }
}
