/// A container readable three levels deep, as in `c[i][j][k]`
///
/// This is the seam through which externally computed tables are imported, see
/// [`Experience::set_visits`](crate::mdp::Experience::set_visits). Implementations do
/// not need to know their own dimensions: callers pass them in and are trusted.
pub trait Grid3<T> {
    /// Read the element at `[i][j][k]`
    fn at(&self, i: usize, j: usize, k: usize) -> T;
}

/// A container writable three levels deep, as in `c[i][j][k] = v`
pub trait Grid3Mut<T> {
    /// Overwrite the element at `[i][j][k]`
    fn set(&mut self, i: usize, j: usize, k: usize, value: T);
}

impl<T, G: Grid3<T> + ?Sized> Grid3<T> for &G {
    fn at(&self, i: usize, j: usize, k: usize) -> T {
        (**self).at(i, j, k)
    }
}

impl<T: Copy> Grid3<T> for Vec<Vec<Vec<T>>> {
    fn at(&self, i: usize, j: usize, k: usize) -> T {
        self[i][j][k]
    }
}

impl<T: Copy> Grid3<T> for [Vec<Vec<T>>] {
    fn at(&self, i: usize, j: usize, k: usize) -> T {
        self[i][j][k]
    }
}

impl<T: Copy, const I: usize, const J: usize, const K: usize> Grid3<T> for [[[T; K]; J]; I] {
    fn at(&self, i: usize, j: usize, k: usize) -> T {
        self[i][j][k]
    }
}

impl<T> Grid3Mut<T> for Vec<Vec<Vec<T>>> {
    fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        self[i][j][k] = value;
    }
}

impl<T> Grid3Mut<T> for [Vec<Vec<T>>] {
    fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        self[i][j][k] = value;
    }
}

impl<T, const I: usize, const J: usize, const K: usize> Grid3Mut<T> for [[[T; K]; J]; I] {
    fn set(&mut self, i: usize, j: usize, k: usize, value: T) {
        self[i][j][k] = value;
    }
}

/// Copies a 3d container into another 3d container
///
/// Every `input[i][j][k]` with `i < d1`, `j < d2`, `k < d3` is converted and written
/// to `output[i][j][k]`. No size checks are performed on either container: both must
/// be at least `d1 × d2 × d3`. Indexing past a container's end panics like any
/// out-of-bounds access.
pub fn copy_table_3d<T, U, In, Out>(input: &In, output: &mut Out, d1: usize, d2: usize, d3: usize)
where
    In: Grid3<T> + ?Sized,
    Out: Grid3Mut<U> + ?Sized,
    U: From<T>,
{
    for i in 0..d1 {
        for j in 0..d2 {
            for k in 0..d3 {
                output.set(i, j, k, U::from(input.at(i, j, k)));
            }
        }
    }
}
