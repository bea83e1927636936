//! Static mesh data, packed for the GPU.
//!
//! A [Geometry] is a set of [vertex attributes](VertexAttribute) plus an index [Buffer], all of
//! which are immutable once built and cheap to share: cloning any of them clones an [Arc](std::sync::Arc),
//! not the underlying data.
//!
//! # See Also
//!
//! * [glTF 2.0 accessor types](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types),
//!   which [AttributeType] and [AttributeComponent] mirror

mod data;
pub use data::*;

#[cfg(feature = "wgpu")]
mod wgpu;
