use std::{cmp::Ordering, ops::Deref};

/// Lexicographic three-way comparison of two vectors of equal length
///
/// Elements are compared left to right and the first index where they differ decides the result.
/// Pairs that are neither greater nor less than each other (e.g. `NaN`) count as equal
/// and the scan moves on.
///
/// **Panics** in debug builds if `lhs` and `rhs` do not have the same length
pub fn veccmp<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len(), "compared vectors have the same length");
    for (l, r) in lhs.iter().zip(rhs) {
        if l > r {
            return Ordering::Greater;
        }
        if l < r {
            return Ordering::Less;
        }
    }
    Ordering::Equal
}

/// A vector ordered by [`veccmp`]
///
/// Useful to keep numeric vectors (e.g. value functions) in sorted containers,
/// since `f64` slices have no total order of their own.
#[derive(Debug, Clone, Default)]
pub struct LexVec<T>(pub Vec<T>);

impl<T> Deref for LexVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<T>> for LexVec<T> {
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<T: PartialOrd> PartialEq for LexVec<T> {
    fn eq(&self, other: &Self) -> bool {
        veccmp(self, other) == Ordering::Equal
    }
}

impl<T: PartialOrd> PartialOrd for LexVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(veccmp(self, other))
    }
}
