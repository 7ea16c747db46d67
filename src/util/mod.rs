mod cmp;
mod float;
mod iter;
mod sorted;
mod table;

pub use cmp::{veccmp, LexVec};
pub use float::{
    check_different_general, check_different_small, check_equal_general, check_equal_small,
};
pub use iter::{base_iter, BaseIter, Reversed};
pub use sorted::sequential_sorted_contains;
pub use table::{copy_table_3d, Grid3, Grid3Mut};

/// Asserts that a dimension is strictly positive and panics with a helpful message if not
///
/// ### Example
/// ```should_panic
/// use mdp_experience::assert_positive;
///
/// let states = 0;
/// assert_positive!(states);
/// ```
/// This will panic with the message "Invalid value for \`states\`. Must be positive."
#[macro_export]
macro_rules! assert_positive {
    ($var:expr) => {
        assert!(
            $var > 0,
            "Invalid value for `{}`. Must be positive.",
            stringify!($var),
        );
    };
}
