/// Returns whether a sorted slice contains an element, via sequential scan
///
/// For the short sorted vectors this is used on, a linear scan beats binary search.
/// The scan stops at the first element not less than `elem`.
///
/// The result is unspecified if `v` is not sorted in ascending order.
#[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must stop the scan
pub fn sequential_sorted_contains<T: PartialOrd>(v: &[T], elem: &T) -> bool {
    v.iter().find(|e| !(*e < elem)).is_some_and(|e| e == elem)
}
