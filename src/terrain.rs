//! The terrain surface shipped with this crate.

mod data;

use hedron::Geometry;

use crate::{Error, GeometrySource, LazyGeometry};

static TERRAIN: LazyGeometry = LazyGeometry::new(data::source as fn() -> GeometrySource);

/// Get the terrain geometry, packing it on first call.
///
/// Every call returns the same instance; only the first does any work.
#[inline]
pub fn terrain_geometry() -> Result<&'static Geometry, Error> {
    TERRAIN.get()
}

/// The provider behind [terrain_geometry], for inspecting its build state.
#[inline]
pub fn provider() -> &'static LazyGeometry {
    &TERRAIN
}

/// A fresh copy of the nested data the terrain is packed from.
pub fn source() -> GeometrySource {
    data::source()
}
