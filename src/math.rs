//! Math utility functions.

use num_traits::{cast, Float, NumCast, ToPrimitive};

/// Wrap a hue angle in degrees into `[0, 360)`. Negative angles wrap
/// forward.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = degrees::<T>();
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };

    // Adding a tiny negative remainder to 360 can land exactly on 360.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// Round to the nearest integer, away from zero at the midpoint.
pub fn round_half_away<T: Float>(value: T) -> T {
    value.round()
}

/// Round a value in `[0, 255]` to a byte. Values outside the range are
/// clamped and NaN maps to 0.
pub fn to_byte<T: Float>(value: T) -> u8 {
    let max = constant::<T, _>(u8::MAX);
    let value = round_half_away(value);
    if value.is_nan() {
        return 0;
    }
    value.max(T::zero()).min(max).to_u8().unwrap_or(0)
}

/// Brighten (positive) or darken (negative) a single channel by a fraction of
/// the full 256 step range.
pub fn shift_channel<T: Float>(channel: u8, percentage: T) -> u8 {
    let steps = constant::<T, _>(256);
    let shift = round_half_away(percentage * steps);
    let base = constant::<T, _>(channel);
    to_byte(base + shift)
}

fn degrees<T: Float>() -> T {
    constant(360)
}

fn constant<T: Float, N: NumCast>(n: N) -> T {
    cast(n).unwrap_or_else(T::zero)
}
