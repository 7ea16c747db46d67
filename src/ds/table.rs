use std::ops::{Index, IndexMut};

use crate::util::{Grid3, Grid3Mut};

/// A dense two-dimensional table stored row-major in a flat buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Table2<T> {
    data: Vec<T>,
    dims: [usize; 2],
}

impl<T: Copy + Default> Table2<T> {
    /// Allocate a `d1 × d2` table filled with `T::default()`
    pub fn new(d1: usize, d2: usize) -> Self {
        Self {
            data: vec![T::default(); d1 * d2],
            dims: [d1, d2],
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Table2<T> {
    pub fn dims(&self) -> [usize; 2] {
        self.dims
    }

    /// Get a reference to the cell at `(i, j)`, or `None` if either index is out of range
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        let [d1, d2] = self.dims;
        (i < d1 && j < d2).then(|| &self.data[i * d2 + j])
    }

    /// Get a slice view of row `i`
    pub fn row(&self, i: usize) -> &[T] {
        let d2 = self.dims[1];
        &self.data[i * d2..(i + 1) * d2]
    }

    /// Get a slice view of the whole buffer, in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        let [d1, d2] = self.dims;
        debug_assert!(
            i < d1 && j < d2,
            "index ({i}, {j}) out of range for {d1}x{d2} table"
        );
        i * d2 + j
    }
}

impl<T> Index<(usize, usize)> for Table2<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let ix = self.offset(i, j);
        &mut self.data[ix]
    }
}

/// A dense three-dimensional table stored row-major in a flat buffer
///
/// The last axis is contiguous, so [`row`](Table3::row) is a plain slice. In release builds
/// an out-of-range component that still lands inside the buffer is not detected, debug builds
/// assert on every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Table3<T> {
    data: Vec<T>,
    dims: [usize; 3],
}

impl<T: Copy + Default> Table3<T> {
    /// Allocate a `d1 × d2 × d3` table filled with `T::default()`
    pub fn new(d1: usize, d2: usize, d3: usize) -> Self {
        Self {
            data: vec![T::default(); d1 * d2 * d3],
            dims: [d1, d2, d3],
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Table3<T> {
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Get a reference to the cell at `(i, j, k)`, or `None` if any index is out of range
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&T> {
        let [d1, d2, d3] = self.dims;
        (i < d1 && j < d2 && k < d3).then(|| &self.data[(i * d2 + j) * d3 + k])
    }

    /// Get a slice view over the last axis at `(i, j)`
    pub fn row(&self, i: usize, j: usize) -> &[T] {
        let [d1, d2, d3] = self.dims;
        debug_assert!(i < d1 && j < d2, "row ({i}, {j}) out of range for {d1}x{d2}x{d3} table");
        let start = (i * d2 + j) * d3;
        &self.data[start..start + d3]
    }

    /// Get a slice view of the whole buffer, in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        let [d1, d2, d3] = self.dims;
        debug_assert!(
            i < d1 && j < d2 && k < d3,
            "index ({i}, {j}, {k}) out of range for {d1}x{d2}x{d3} table"
        );
        (i * d2 + j) * d3 + k
    }
}

impl<T> Index<(usize, usize, usize)> for Table3<T> {
    type Output = T;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Self::Output {
        &self.data[self.offset(i, j, k)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Table3<T> {
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut Self::Output {
        let ix = self.offset(i, j, k);
        &mut self.data[ix]
    }
}

impl<T: Copy> Grid3<T> for Table3<T> {
    fn at(&self, i: usize, j: usize, k: usize) -> T {
        self[(i, j, k)]
    }
}

impl<T> Grid3Mut<T> for Table3<T> {
    fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        self[(i, j, k)] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table2_functional() {
        let mut table = Table2::<u64>::new(2, 3);
        assert_eq!(table.dims(), [2, 3]);
        assert!(table.as_slice().iter().all(|&x| x == 0), "zero initialized");

        table[(1, 2)] = 7;
        assert_eq!(table[(1, 2)], 7);
        assert_eq!(table.row(1), [0, 0, 7], "row view");
        assert_eq!(table.get(1, 2), Some(&7));
        assert_eq!(table.get(2, 0), None, "checked access out of range");

        table.fill(1);
        assert_eq!(table.as_slice(), [1; 6]);
    }

    #[test]
    fn table3_functional() {
        let mut table = Table3::<f64>::new(2, 2, 3);
        assert_eq!(table.dims(), [2, 2, 3]);
        assert_eq!(table.as_slice().len(), 12);

        table[(1, 0, 2)] = 0.5;
        table[(1, 1, 0)] = 1.5;
        assert_eq!(table.row(1, 0), [0.0, 0.0, 0.5]);
        assert_eq!(table.row(1, 1), [1.5, 0.0, 0.0], "rows do not bleed into each other");
        assert_eq!(table.get(1, 0, 2), Some(&0.5));
        assert_eq!(table.get(0, 0, 3), None);

        table.fill(0.0);
        assert!(table.as_slice().iter().all(|&x| x == 0.0), "fill resets every cell");
    }

    #[test]
    fn table3_is_a_grid() {
        let mut table = Table3::<u64>::new(1, 2, 2);
        table.set(0, 1, 1, 4);
        assert_eq!(table.at(0, 1, 1), 4);
        assert_eq!(table[(0, 1, 1)], 4);
    }

    #[test]
    #[should_panic]
    fn table3_out_of_buffer_panics() {
        let table = Table3::<u64>::new(2, 2, 2);
        let _ = table[(2, 0, 0)];
    }
}
