use hedron::GeometryError;

/// Errors produced while providing geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The packed geometry broke one of its invariants.
    #[error("invalid geometry data: {0}")]
    InvalidGeometryData(#[from] GeometryError),
}
