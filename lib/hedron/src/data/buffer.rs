use std::{ops::Deref, slice::ChunksExact, sync::Arc};

use crate::{AttributeComponent, AttributeComponentType};

/// An immutable run of numeric components, which can be sent to the GPU or read in tuples.
///
/// Cloning a Buffer shares its storage; nothing hands out mutable access to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer<C> {
    data: Arc<[C]>,
}

impl<C> Default for Buffer<C> {
    fn default() -> Self {
        Self {
            data: Arc::from(Vec::new()),
        }
    }
}

impl<C> Buffer<C> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `self` and `other` are views of the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Iterate over consecutive `width`-sized groups of components. Trailing components which
    /// don't fill a whole group are skipped.
    ///
    /// # Panics
    ///
    /// * `width` == 0
    #[inline]
    pub fn tuples(&self, width: usize) -> ChunksExact<'_, C> {
        self.data.chunks_exact(width)
    }
}

impl<C: AttributeComponentType> Buffer<C> {
    /// The component type stored in this buffer.
    #[inline(always)]
    pub fn component(&self) -> AttributeComponent {
        C::COMPONENT
    }
}

impl<C> From<Vec<C>> for Buffer<C> {
    fn from(data: Vec<C>) -> Self {
        Self {
            data: Arc::from(data),
        }
    }
}

impl<C: Clone> From<&[C]> for Buffer<C> {
    fn from(data: &[C]) -> Self {
        Self {
            data: Arc::from(data),
        }
    }
}

impl<C> FromIterator<C> for Buffer<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<C> Deref for Buffer<C> {
    type Target = [C];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<C> AsRef<[C]> for Buffer<C> {
    #[inline]
    fn as_ref(&self) -> &[C] {
        &self.data
    }
}
