//! Build-once, read-many geometry.

use std::{
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, OnceLock,
    },
};

use hedron::Geometry;

use crate::{Error, GeometrySource};

/// Whether a [LazyGeometry] checks what it packs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validation {
    /// Run [Geometry::validate] after packing; a violation fails the build.
    #[default]
    Strict,
    /// Hand over whatever the source packs into, malformed or not.
    Skip,
}

/// Whether a [LazyGeometry] has packed its source yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// Nothing has been packed yet.
    Unbuilt,
    /// The build has finished, successfully or not; its result is cached.
    Built,
}

/// A [Geometry] that is packed from its [GeometrySource] on first access, then shared.
///
/// Every successful [get](Self::get) returns a reference to the same instance. The source is
/// packed at most once per provider: concurrent first callers block until a single build
/// finishes, and later calls only read the cached result. A failed build is cached as well.
///
/// The cache is never invalidated; changes to whatever `source` reads after the first access are
/// not observed.
///
/// If `source` panics, the provider stays [BuildState::Unbuilt] and the next access tries again.
///
/// ```
/// use strata::{nested, GeometrySource, LazyGeometry};
///
/// let triangle = LazyGeometry::new(|| GeometrySource {
///     position: nested![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     normal: nested![[0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
///     uv: nested![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
///     index: nested![[0, 1, 2]],
/// });
///
/// let a = triangle.get().unwrap();
/// let b = triangle.get().unwrap();
/// assert!(std::ptr::eq(a, b));
/// assert_eq!(triangle.build_count(), 1);
/// ```
pub struct LazyGeometry<F = fn() -> GeometrySource> {
    source: F,
    validation: Validation,
    slot: OnceLock<Result<Arc<Geometry>, Error>>,
    builds: AtomicUsize,
}

impl<F> LazyGeometry<F> {
    /// Construct a provider which validates its geometry. Nothing is built until first access.
    pub const fn new(source: F) -> Self {
        Self::with_validation(source, Validation::Strict)
    }

    /// Construct a provider which never validates its geometry.
    pub const fn unchecked(source: F) -> Self {
        Self::with_validation(source, Validation::Skip)
    }

    /// Construct a provider with an explicit [Validation] mode.
    pub const fn with_validation(source: F, validation: Validation) -> Self {
        Self {
            source,
            validation,
            slot: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Whether builds are validated.
    #[inline(always)]
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Whether the source has been packed yet.
    pub fn state(&self) -> BuildState {
        match self.slot.get() {
            Some(_) => BuildState::Built,
            None => BuildState::Unbuilt,
        }
    }

    /// Number of times the source has been packed.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }
}

impl<F: Fn() -> GeometrySource> LazyGeometry<F> {
    /// Get the geometry, packing it first if this is the first access.
    pub fn get(&self) -> Result<&Geometry, Error> {
        match self.slot() {
            Ok(geometry) => Ok(&**geometry),
            Err(e) => Err(e.clone()),
        }
    }

    /// As [get](Self::get), but as an owned handle to the same instance.
    pub fn shared(&self) -> Result<Arc<Geometry>, Error> {
        self.slot().clone()
    }

    #[inline]
    fn slot(&self) -> &Result<Arc<Geometry>, Error> {
        self.slot.get_or_init(|| self.build())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(validation = ?self.validation))]
    fn build(&self) -> Result<Arc<Geometry>, Error> {
        self.builds.fetch_add(1, Ordering::AcqRel);
        let geometry = (self.source)().pack();
        if self.validation == Validation::Strict {
            if let Err(e) = geometry.validate() {
                tracing::error!(error = %e, "packed geometry is malformed");
                return Err(e.into());
            }
        }
        tracing::debug!(
            vertices = geometry.vertex_count(),
            primitives = geometry.primitive_count(),
            "packed geometry"
        );
        Ok(Arc::new(geometry))
    }
}

impl<F> fmt::Debug for LazyGeometry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyGeometry")
            .field("validation", &self.validation)
            .field("state", &self.state())
            .field("builds", &self.build_count())
            .finish_non_exhaustive()
    }
}
