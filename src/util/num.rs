/// The numeric type shared by tokens, the tree and the evaluator.
///
/// Rust has no stable extended-precision float, so the engine runs on `f64`.
/// NaN and the infinities are ordinary values here: nothing in the engine
/// treats them as failures.
pub type Number = f64;

/// Number of units in the last place tolerated by [`is_nearly_odd`].
const ODD_TOLERANCE_ULPS: Number = 4.0;

/// Returns `true` if `value` has no fractional part.
///
/// Infinities count as whole, NaN does not.
///
/// ## Example
/// ```
/// use calculon::util::num::is_whole;
///
/// assert!(is_whole(4.0));
/// assert!(is_whole(f64::NEG_INFINITY));
/// assert!(!is_whole(4.5));
/// assert!(!is_whole(f64::NAN));
/// ```
#[must_use]
pub fn is_whole(value: Number) -> bool {
    value.is_infinite() || value.fract() == 0.0
}

/// Returns `true` if `value` is a finite, odd whole number.
#[must_use]
pub fn is_odd(value: Number) -> bool {
    value.is_finite() && value.fract() == 0.0 && value % 2.0 != 0.0
}

/// Returns `true` if `value` lies within a few ulps of a finite odd whole
/// number.
///
/// Used to recognise odd root exponents: `1 / (1 / 49)` is not exactly `49`
/// in binary floating point, but it is meant to be.
///
/// ## Example
/// ```
/// use calculon::util::num::is_nearly_odd;
///
/// assert!(is_nearly_odd(1.0 / (1.0 / 49.0)));
/// assert!(is_nearly_odd(-3.0));
/// assert!(!is_nearly_odd(4.0));
/// assert!(!is_nearly_odd(3.001));
/// ```
#[must_use]
pub fn is_nearly_odd(value: Number) -> bool {
    if !value.is_finite() {
        return false;
    }

    let rounded = value.round();
    (value - rounded).abs() <= rounded.abs() * ODD_TOLERANCE_ULPS * Number::EPSILON
    && is_odd(rounded)
}

/// Returns `1` for non-negative values and `-1` otherwise.
///
/// Unlike [`f64::signum`], zero of either sign maps to `1`.
#[must_use]
pub fn sign(value: Number) -> Number {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Converts a non-negative whole number to `u32`.
///
/// Returns `None` for fractional, negative, non-finite or out-of-range
/// values.
///
/// ## Example
/// ```
/// use calculon::util::num::whole_to_u32;
///
/// assert_eq!(whole_to_u32(170.0), Some(170));
/// assert_eq!(whole_to_u32(-1.0), None);
/// assert_eq!(whole_to_u32(2.5), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_to_u32(value: Number) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > Number::from(u32::MAX) {
        return None;
    }

    Some(value as u32)
}
