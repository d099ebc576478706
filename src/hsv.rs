//! Model a color with the HSV (hue, saturation, value) notation.

use crate::color::Component;

bandcolor_macros::gen_model! {
    /// A color specified with the HSV notation, also known as HSB.
    pub struct Hsv {
        /// The hue in degrees, `[0, 360)`.
        hue: Component,
        /// The saturation, `[0, 1]`.
        saturation: Component,
        /// The value (brightness), `[0, 1]`.
        value: Component,
    }
}
