//! bandcolor provides the color value type used to personalize a Band
//! device: 8-bit RGB colors with an optional alpha channel, their HSV
//! notation, hexadecimal parsing and formatting, luminance adjustment and the
//! six slot device theme.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod hsv;
mod level;
mod math;
mod theme;


pub use color::{Color, Component, Components, Flags};
pub use error::Error;
pub use hex::HexGrammar;
pub use hsv::Hsv;
pub use level::ChannelLevel;
pub use theme::{Slot, Theme};
