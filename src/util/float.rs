/// Checks whether two numbers expected to lie near `[0,1]` are reasonably equal
///
/// The tolerance is absolute: `|a - b| <= 5ε`, with ε the machine epsilon of `f64`.
/// Outside of `[0,1]` the result may not be what you expect, use [`check_equal_general`] there.
/// The order of the parameters does not matter.
pub fn check_equal_small(a: f64, b: f64) -> bool {
    (a - b).abs() <= 5.0 * f64::EPSILON
}

/// Negation of [`check_equal_small`]
pub fn check_different_small(a: f64, b: f64) -> bool {
    !check_equal_small(a, b)
}

/// Checks whether two numbers of any magnitude are reasonably equal
///
/// Tries the absolute test of [`check_equal_small`] first, then falls back to a relative
/// test: `|a - b| / min(|a|, |b|) < ε`. The absolute tier keeps values near zero from
/// blowing up the relative quotient.
pub fn check_equal_general(a: f64, b: f64) -> bool {
    if check_equal_small(a, b) {
        return true;
    }
    (a - b).abs() / a.abs().min(b.abs()) < f64::EPSILON
}

/// Negation of [`check_equal_general`]
pub fn check_different_general(a: f64, b: f64) -> bool {
    !check_equal_general(a, b)
}
