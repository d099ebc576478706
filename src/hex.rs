//! Parse colors from hexadecimal strings.
//!
//! The accepted input is optional surrounding whitespace, an optional `#` and
//! a run of hexadecimal digits whose length is allowed by a [`HexGrammar`].
//! Digits are case-insensitive. The 3 digit shorthand duplicates each digit,
//! so `f0a` reads as `ff00aa`.

use std::str::FromStr;

use bitflags::bitflags;

use crate::{error::Error, Color};

bitflags! {
    /// The digit counts accepted when parsing a hexadecimal color.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HexGrammar : u8 {
        /// `RGB`, each digit duplicated.
        const SHORT = 1 << 0;
        /// `RRGGBB`.
        const LONG = 1 << 1;
        /// `AARRGGBB`.
        const ALPHA = 1 << 2;

        /// Colors without alpha: `RGB` or `RRGGBB`.
        const RGB = Self::SHORT.bits() | Self::LONG.bits();
        /// Colors with alpha: `AARRGGBB` only.
        const ARGB = Self::ALPHA.bits();
    }
}

impl Color {
    /// Parse a color using the given grammar.
    pub fn parse_with(s: &str, grammar: HexGrammar) -> Result<Self, Error> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidDigit(c));
        }

        // Only ASCII digits remain, so bytes and characters line up.
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 if grammar.contains(HexGrammar::SHORT) => {
                let [red, green, blue] = [bytes[0], bytes[1], bytes[2]].map(|b| nibble(b) * 17);
                Ok(Color::new(red, green, blue))
            }
            6 if grammar.contains(HexGrammar::LONG) => {
                let [red, green, blue] = pairs::<3>(bytes);
                Ok(Color::new(red, green, blue))
            }
            8 if grammar.contains(HexGrammar::ALPHA) => {
                let [alpha, red, green, blue] = pairs::<4>(bytes);
                Ok(Color::argb(alpha, red, green, blue))
            }
            len => Err(Error::InvalidLength(len)),
        }
    }

    /// Parse a color without alpha from `RGB` or `RRGGBB` digits.
    pub fn parse_rgb(s: &str) -> Result<Self, Error> {
        Self::parse_with(s, HexGrammar::RGB)
    }

    /// Parse a color with alpha from `AARRGGBB` digits.
    pub fn parse_argb(s: &str) -> Result<Self, Error> {
        Self::parse_with(s, HexGrammar::ARGB)
    }

    /// Like [`Color::parse_rgb`], but discards the reason for a failure.
    pub fn try_parse_rgb(s: &str) -> Option<Self> {
        Self::parse_rgb(s).ok()
    }

    /// Like [`Color::parse_argb`], but discards the reason for a failure.
    pub fn try_parse_argb(s: &str) -> Option<Self> {
        Self::parse_argb(s).ok()
    }
}

/// Accepts `RGB`, `RRGGBB` and `AARRGGBB`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, HexGrammar::RGB | HexGrammar::ARGB)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

fn pairs<const N: usize>(digits: &[u8]) -> [u8; N] {
    std::array::from_fn(|i| nibble(digits[2 * i]) << 4 | nibble(digits[2 * i + 1]))
}
