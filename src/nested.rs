//! Arbitrarily deep, possibly ragged sequences of numbers, and their depth-first flattening.

use std::{iter::FusedIterator, slice};

use hedron::Buffer;
use num_traits::AsPrimitive;

/// Create a [Nested] list containing the arguments, as with `std::vec![]`.
///
/// Each argument may be anything convertible into a [Nested]: a scalar, an array, a [Vec], or
/// another [Nested].
///
/// ```
/// use strata::{nested, Nested};
///
/// let rows: Nested<u32> = nested![[0, 1, 2], [3], nested![[4, 5]]];
/// assert_eq!(rows.flatten().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! nested {
    [] => {
        $crate::Nested::List(Vec::new())
    };
    [$($x:expr),+ $(,)?] => {
        $crate::Nested::List(vec![$($crate::Nested::from($x)),+])
    };
}

/// A tree of values, read in depth-first order.
///
/// The shape carries no meaning of its own; it exists so that authored data can be grouped
/// however is most readable (per vertex, per row, per patch...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A terminal value.
    Value(T),
    /// A sequence of nested values, possibly empty.
    List(Vec<Nested<T>>),
}

impl<T> Default for Nested<T> {
    /// An empty list.
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl<T> Nested<T> {
    /// Iterate through all terminal values, depth-first and left-to-right.
    #[inline]
    pub fn flatten(&self) -> Flatten<'_, T> {
        Flatten {
            root: Some(self),
            stack: Vec::new(),
        }
    }

    /// Number of terminal values.
    pub fn len(&self) -> usize {
        self.flatten().count()
    }

    /// Whether there are no terminal values, regardless of how many (empty) lists there are.
    pub fn is_empty(&self) -> bool {
        self.flatten().next().is_none()
    }

    /// The number of list levels enclosing the deepest terminal value (or empty list).
    ///
    /// A bare value has depth 0; `[]` and `[1, 2]` have depth 1; `[[1], 2]` has depth 2.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Nested::Value(_) => deepest = deepest.max(depth),
                Nested::List(items) => {
                    deepest = deepest.max(depth + 1);
                    stack.extend(items.iter().map(|item| (item, depth + 1)));
                }
            }
        }
        deepest
    }

    /// Flatten `self` into a contiguous [Buffer], converting each value with `as`.
    ///
    /// Order and count are preserved exactly. Narrowing float conversions round to the nearest
    /// representable value.
    pub fn pack<C>(&self) -> Buffer<C>
    where
        T: AsPrimitive<C>,
        C: Copy + 'static,
    {
        self.flatten().map(|v| v.as_()).collect()
    }
}

strata_common::item_with! {S: f32, f64, u16, u32 => impl From<S> for Nested<S> {
    #[inline]
    fn from(value: S) -> Self {
        Self::Value(value)
    }
}}

impl<T, U: Into<Nested<T>>, const N: usize> From<[U; N]> for Nested<T> {
    fn from(items: [U; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T, U: Into<Nested<T>>> From<Vec<U>> for Nested<T> {
    fn from(items: Vec<U>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Depth-first iterator over the terminal values of a [Nested].
///
/// Uses an explicit stack, so nesting depth is limited only by memory.
#[derive(Debug, Clone)]
pub struct Flatten<'a, T> {
    root: Option<&'a Nested<T>>,
    stack: Vec<slice::Iter<'a, Nested<T>>>,
}

impl<'a, T> FusedIterator for Flatten<'a, T> {}

impl<'a, T> Iterator for Flatten<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            match root {
                Nested::Value(v) => return Some(v),
                Nested::List(items) => self.stack.push(items.iter()),
            }
        }
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(Nested::Value(v)) => return Some(v),
                // descend; the parent level resumes once this one is exhausted
                Some(Nested::List(items)) => self.stack.push(items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
