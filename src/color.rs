//! A [`Color`] is an immutable 8-bit RGB color with an optional alpha
//! channel. The HSV notation of the color is derived once, when the color is
//! created.

use std::fmt;
use std::hash::{Hash, Hasher};

use bitflags::bitflags;

use crate::{error::Error, hsv::Hsv, level::ChannelLevel, math};

/// A 64-bit floating point value that all derived components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Normalize three bytes into `[0, 1]`.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let max = Component::from(u8::MAX);
        Self(
            Component::from(bytes[0]) / max,
            Component::from(bytes[1]) / max,
            Component::from(bytes[2]) / max,
        )
    }

    /// Scale components in `[0, 1]` back to bytes, rounding half away from
    /// zero and clamping to `[0, 255]`.
    pub fn to_bytes(&self) -> [u8; 3] {
        let Self(c0, c1, c2) = self.map(|c| c * Component::from(u8::MAX));
        [math::to_byte(c0), math::to_byte(c1), math::to_byte(c2)]
    }
}

bitflags! {
    /// Flags describing how a [`Color`] was specified.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the color was specified without an alpha channel. Such a
        /// color is fully opaque and formats as `#RRGGBB`.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// An 8-bit RGB color with an optional alpha channel.
///
/// ```rust
/// use bandcolor::Color;
///
/// let color = Color::new(0x33, 0x66, 0xCC);
/// assert_eq!(color.to_string(), "#3366CC");
/// assert_eq!(color.hue(), 220.0);
///
/// let parsed: Color = "#f0a".parse().unwrap();
/// assert_eq!(parsed, Color::new(0xFF, 0x00, 0xAA));
/// ```
///
/// Two colors are equal when all four channels are equal. A color without
/// alpha counts as fully opaque, so `Color::new(r, g, b)` equals
/// `Color::argb(0xFF, r, g, b)`.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
    hsv: Hsv,
    flags: Flags,
}

impl Color {
    /// Create a new color from red, green and blue channels. The color has no
    /// alpha channel.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::from_parts(u8::MAX, red, green, blue, Flags::ALPHA_IS_NONE)
    }

    /// Create a new color with an alpha channel.
    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::from_parts(alpha, red, green, blue, Flags::empty())
    }

    /// Create a color from the HSV notation. The hue is wrapped into
    /// `[0, 360)`; saturation and value must be in `[0, 1]`.
    ///
    /// The returned color keeps the given HSV components and has no alpha
    /// channel.
    pub fn from_hsv(
        hue: Component,
        saturation: Component,
        value: Component,
    ) -> Result<Self, Error> {
        if !hue.is_finite() {
            return Err(Error::OutOfRange {
                component: "hue",
                value: hue,
            });
        }
        if !(0.0..=1.0).contains(&saturation) {
            return Err(Error::OutOfRange {
                component: "saturation",
                value: saturation,
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::OutOfRange {
                component: "value",
                value,
            });
        }

        let hsv = Hsv::new(math::normalize_hue(hue), saturation, value);
        let [red, green, blue] = hsv.to_rgb();

        Ok(Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
            hsv,
            flags: Flags::ALPHA_IS_NONE,
        })
    }

    fn from_parts(alpha: u8, red: u8, green: u8, blue: u8, flags: Flags) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            hsv: Hsv::from_rgb(red, green, blue),
            flags,
        }
    }

    /// Return the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Return the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Return the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Return the alpha channel, if the color was specified with one.
    pub fn alpha(&self) -> Option<u8> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// Return the alpha channel, or 255 for colors specified without one.
    pub fn opacity(&self) -> u8 {
        self.alpha
    }

    /// Return the flags describing how this color was specified.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Return the hue in degrees, `[0, 360)`. Hues derived from RGB channels
    /// are whole degrees; colors built with [`Color::from_hsv`] keep the
    /// given (wrapped) hue.
    pub fn hue(&self) -> Component {
        self.hsv.hue
    }

    /// Return the HSV saturation, `[0, 1]`.
    pub fn saturation(&self) -> Component {
        self.hsv.saturation
    }

    /// Return the HSV value (brightness), `[0, 1]`.
    pub fn value(&self) -> Component {
        self.hsv.value
    }

    /// Return the HSV notation of this color.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The red channel as a fraction of its maximum.
    pub fn red_level(&self) -> ChannelLevel {
        ChannelLevel::new(self.red)
    }

    /// The green channel as a fraction of its maximum.
    pub fn green_level(&self) -> ChannelLevel {
        ChannelLevel::new(self.green)
    }

    /// The blue channel as a fraction of its maximum.
    pub fn blue_level(&self) -> ChannelLevel {
        ChannelLevel::new(self.blue)
    }

    /// The alpha channel as a fraction of its maximum.
    pub fn alpha_level(&self) -> ChannelLevel {
        ChannelLevel::new(self.alpha)
    }

    /// Shift a single channel by `percentage` of the full range. See
    /// [`Color::luminance`].
    pub fn shift_channel(channel: u8, percentage: Component) -> u8 {
        math::shift_channel(channel, percentage)
    }

    /// Brighten (positive `percentage`) or darken (negative) the red, green
    /// and blue channels. Each channel moves by `percentage * 256` steps,
    /// rounded half away from zero and clamped to `[0, 255]`. The alpha
    /// channel is left as is.
    pub fn luminance(&self, percentage: Component) -> Self {
        Self::from_parts(
            self.alpha,
            Self::shift_channel(self.red, percentage),
            Self::shift_channel(self.green, percentage),
            Self::shift_channel(self.blue, percentage),
            self.flags,
        )
    }

    /// Return the red, green and blue channels.
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Return the alpha, red, green and blue channels. Colors without alpha
    /// report 255.
    pub fn to_argb_bytes(&self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }

    fn key(&self) -> [u8; 4] {
        self.to_argb_bytes()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#")?;
        if let Some(alpha) = self.alpha() {
            write!(f, "{alpha:02X}")?;
        }
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 4]> for Color {
    fn from([alpha, red, green, blue]: [u8; 4]) -> Self {
        Self::argb(alpha, red, green, blue)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_argb_bytes()
    }
}
