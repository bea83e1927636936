//! Static terrain geometry, packed into GPU-ready buffers on first use and shared from then on.
//!
//! Mesh data is authored as [Nested] sequences of numbers grouped however is convenient, collected
//! into a [GeometrySource], and [packed](GeometrySource::pack) into a [hedron::Geometry] of flat
//! typed buffers. A [LazyGeometry] does that packing exactly once and hands every caller the same
//! instance; [terrain_geometry] is one such provider over the crate's built-in terrain.
//!
//! ```
//! let a = strata::terrain_geometry().unwrap();
//! let b = strata::terrain_geometry().unwrap();
//! assert!(std::ptr::eq(a, b));
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod error;
mod nested;
mod provider;
mod source;
pub mod terrain;

pub use error::*;
pub use nested::*;
pub use provider::*;
pub use source::*;
pub use terrain::terrain_geometry;

pub use hedron;
