use std::{
    array, iter,
    ops::{Range, RangeInclusive},
    slice, str, vec,
};

/// Capability of an iterator to hand back the iterator it adapts
///
/// Adaptors that wrap another iterator (like [`Reversed`]) unwrap to it; plain iterators
/// are their own base. Which case applies is decided by the implementing type, at compile time.
pub trait BaseIter {
    /// The underlying iterator type
    type Base;

    /// Consume the iterator and return its base
    fn into_base(self) -> Self::Base;
}

/// Returns the base iterator of `it`, or `it` itself if it does not adapt another iterator
///
/// Works for any type implementing [`BaseIter`]: [`Reversed`] unwraps, while the slice, `Vec`,
/// array, range and `str` iterators and the std adaptors (`Rev`, `Map`, `Filter`, `FilterMap`,
/// `Enumerate`, `Copied`, `Cloned`, `Skip`, `Take`, `StepBy`, `Peekable`, `Zip`, `Chain`) come
/// back unchanged. Other iterator types opt in by implementing [`BaseIter`].
pub fn base_iter<I: BaseIter>(it: I) -> I::Base {
    it.into_base()
}

/// A reverse-traversal adaptor that can be unwrapped back to the forward iterator
///
/// Unlike [`std::iter::Rev`], the wrapped iterator is recoverable through [`BaseIter`],
/// which yields the forward iterator over the elements not yet visited.
#[derive(Debug, Clone)]
pub struct Reversed<I> {
    iter: I,
}

impl<I: DoubleEndedIterator> Reversed<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: DoubleEndedIterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Reversed<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<I: DoubleEndedIterator + ExactSizeIterator> ExactSizeIterator for Reversed<I> {}

impl<I> BaseIter for Reversed<I> {
    type Base = I;

    fn into_base(self) -> I {
        self.iter
    }
}

macro_rules! identity_base {
    ($([$($g:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($g)*> BaseIter for $ty {
                type Base = Self;

                fn into_base(self) -> Self {
                    self
                }
            }
        )*
    };
}

// `Rev` and the other std adaptors do not expose what they wrap
identity_base! {
    [T] slice::Iter<'_, T>,
    [T] slice::IterMut<'_, T>,
    [T] vec::IntoIter<T>,
    [T, const N: usize] array::IntoIter<T, N>,
    [Idx] Range<Idx>,
    [Idx] RangeInclusive<Idx>,
    [] str::Chars<'_>,
    [] str::CharIndices<'_>,
    [] str::Bytes<'_>,
    [I] iter::Rev<I>,
    [I, F] iter::Map<I, F>,
    [I, P] iter::Filter<I, P>,
    [I, F] iter::FilterMap<I, F>,
    [I] iter::Enumerate<I>,
    [I] iter::Copied<I>,
    [I] iter::Cloned<I>,
    [I] iter::Skip<I>,
    [I] iter::Take<I>,
    [I] iter::StepBy<I>,
    [I: Iterator] iter::Peekable<I>,
    [A, B] iter::Zip<A, B>,
    [A, B] iter::Chain<A, B>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_iterator_is_its_own_base() {
        let v = [1, 2, 3];
        let mut it = v.iter();
        it.next();
        let base = base_iter(it);
        assert_eq!(base.as_slice(), [2, 3], "position is preserved");
        assert_eq!(base_iter(0..4).collect::<Vec<_>>(), [0, 1, 2, 3]);
    }

    #[test]
    fn reversed_unwraps_to_forward() {
        let v = [1, 2, 3, 4];
        let mut rev = Reversed::new(v.iter());
        assert_eq!(rev.next(), Some(&4));
        assert_eq!(rev.len(), 3);

        let base: slice::Iter<'_, i32> = base_iter(rev);
        assert_eq!(base.as_slice(), [1, 2, 3], "forward view of what is left");
    }

    #[test]
    fn std_adaptors_are_their_own_base() {
        let v = [1, 2, 3];
        assert_eq!(base_iter(v.iter().rev()).collect::<Vec<_>>(), [&3, &2, &1]);
        assert_eq!(base_iter(v.iter().map(|x| x * 2)).collect::<Vec<_>>(), [2, 4, 6]);
        assert_eq!(base_iter(v.iter().copied().enumerate().skip(1)).count(), 2);
        assert_eq!(base_iter("ab".chars()).collect::<String>(), "ab");
        assert_eq!(base_iter(v.into_iter().peekable()).last(), Some(3));
    }

    #[test]
    fn reversed_is_double_ended() {
        let rev = Reversed::new(vec![1, 2, 3].into_iter());
        assert_eq!(rev.rev().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
