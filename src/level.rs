//! The level of a single channel as an exact fraction of its maximum.

use std::fmt;

use crate::Component;

/// A channel value expressed as `channel / 255`.
///
/// The ratio is kept exact, so displaying it never shows binary rounding
/// artifacts. `Display` prints a percentage, honoring the formatter's
/// precision (default 0), rounded half away from zero:
///
/// ```rust
/// use bandcolor::ChannelLevel;
///
/// let level = ChannelLevel::new(0x80);
/// assert_eq!(level.to_string(), "50%");
/// assert_eq!(format!("{level:.3}"), "50.196%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelLevel(u8);

impl ChannelLevel {
    /// Create the level of the given channel value.
    pub fn new(channel: u8) -> Self {
        Self(channel)
    }

    /// The channel value this level was created from.
    pub fn channel(&self) -> u8 {
        self.0
    }

    /// The level as a floating point fraction in `[0, 1]`.
    pub fn as_component(&self) -> Component {
        Component::from(self.0) / Component::from(u8::MAX)
    }
}

impl fmt::Display for ChannelLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Beyond this the value would not fit in a u128.
        let precision = f.precision().unwrap_or(0).min(30);
        let scale = 10_u128.pow(precision as u32);

        // percentage * scale = channel * 100 * scale / 255, rounded.
        let numerator = u128::from(self.0) * 100 * scale;
        let denominator = u128::from(u8::MAX);
        let scaled = (2 * numerator + denominator) / (2 * denominator);

        let whole = scaled / scale;
        if precision == 0 {
            write!(f, "{whole}%")
        } else {
            let fraction = scaled % scale;
            write!(f, "{whole}.{fraction:0precision$}%")
        }
    }
}
