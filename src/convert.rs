//! Conversions between 8-bit RGB channels and the HSV notation.
//!
//! Both directions round: hue is rounded to whole degrees when derived from
//! RGB, and channels are rounded to the nearest byte when derived from HSV.
//! Ties round away from zero.

use crate::{color::Components, hsv::Hsv};

impl Hsv {
    /// Derive the HSV notation of three 8-bit RGB channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        util::rgb_to_hsv(&Components::from_bytes([red, green, blue])).into()
    }

    /// Convert this color to three 8-bit RGB channels. The hue is wrapped
    /// into `[0, 360)` first; saturation and value are not validated.
    pub fn to_rgb(&self) -> [u8; 3] {
        util::hsv_to_rgb(&self.to_components()).to_bytes()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{normalize_hue, round_half_away},
    };

    /// Convert normalized RGB components to the HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else {
            60.0 * if max == red {
                ((green - blue) / delta) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };
        let hue = normalize_hue(round_half_away(hue));

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Components(hue, saturation, max)
    }

    /// Convert from the HSV notation to normalized RGB components.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let chroma = value * saturation;
        let sextant = normalize_hue(hue) / 60.0;
        let x = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());
        let m = value - chroma;

        let primes: (Component, Component, Component) = if sextant < 1.0 {
            (chroma, x, 0.0)
        } else if sextant < 2.0 {
            (x, chroma, 0.0)
        } else if sextant < 3.0 {
            (0.0, chroma, x)
        } else if sextant < 4.0 {
            (0.0, x, chroma)
        } else if sextant < 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Components(primes.0, primes.1, primes.2).map(|prime| prime + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (0x00, 0x00, 0x00,   0.0, 0.000000, 0.000000),
            (0xFF, 0xFF, 0xFF,   0.0, 0.000000, 1.000000),
            (0x80, 0x80, 0x80,   0.0, 0.000000, 0.501961),
            (0xFF, 0x00, 0x00,   0.0, 1.000000, 1.000000),
            (0xFF, 0xFF, 0x00,  60.0, 1.000000, 1.000000),
            (0x00, 0xFF, 0x00, 120.0, 1.000000, 1.000000),
            (0x00, 0xFF, 0xFF, 180.0, 1.000000, 1.000000),
            (0x00, 0x00, 0xFF, 240.0, 1.000000, 1.000000),
            (0xFF, 0x00, 0xFF, 300.0, 1.000000, 1.000000),
            (0x33, 0x66, 0xCC, 220.0, 0.750000, 0.800000),
            (0xD2, 0x69, 0x1E,  25.0, 0.857143, 0.823529),
            (0x80, 0x00, 0x00,   0.0, 1.000000, 0.501961),
        ];

        for &(red, green, blue, hue, saturation, value) in TESTS {
            let hsv = Hsv::from_rgb(red, green, blue);
            assert_eq!(hsv.hue, hue, "hue of {red:02X}{green:02X}{blue:02X}");
            assert_component_eq!(hsv.saturation, saturation);
            assert_component_eq!(hsv.value, value);

            assert_eq!(
                hsv.to_rgb(),
                [red, green, blue],
                "round trip of {red:02X}{green:02X}{blue:02X}"
            );
        }
    }

    #[test]
    fn hue_is_rounded_to_whole_degrees() {
        // 60 * (1 / 255) = 0.235 degrees.
        assert_eq!(Hsv::from_rgb(0xFF, 0x01, 0x00).hue, 0.0);
        // Negative red-dominant hues wrap forward; 359.76 rounds up to 360.
        assert_eq!(Hsv::from_rgb(0xFF, 0x00, 0x01).hue, 0.0);
        // 60 * (-20 / 255) + 360 = 355.29.
        assert_eq!(Hsv::from_rgb(0xFF, 0x00, 0x14).hue, 355.0);
    }

    #[test]
    fn hue_is_always_in_range() {
        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(15) {
                for blue in (0..=255).step_by(15) {
                    let hsv = Hsv::from_rgb(red, green, blue);
                    assert!((0.0..360.0).contains(&hsv.hue));
                    assert!((0.0..=1.0).contains(&hsv.saturation));
                    assert!((0.0..=1.0).contains(&hsv.value));
                }
            }
        }
    }

    #[test]
    fn rgb_round_trip_is_within_hue_rounding() {
        // Rounding the hue moves it by at most half a degree, which shifts the
        // middle channel by at most 255 / 120 before byte rounding. Over the
        // full 256^3 cube the worst error is exactly 2; this test samples it.
        for red in 0..=255_u8 {
            for green in (0..=255_u8).step_by(5) {
                for blue in (0..=255_u8).step_by(3) {
                    let [r, g, b] = Hsv::from_rgb(red, green, blue).to_rgb();
                    assert!(r.abs_diff(red) <= 2, "{red} {green} {blue}");
                    assert!(g.abs_diff(green) <= 2, "{red} {green} {blue}");
                    assert!(b.abs_diff(blue) <= 2, "{red} {green} {blue}");
                }
            }
        }
    }

    #[test]
    fn hsv_round_trip() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component)] = &[
            (  0.0, 0.0, 0.0),
            (  0.0, 0.0, 1.0),
            (  0.0, 1.0, 1.0),
            ( 60.0, 1.0, 1.0),
            (120.0, 1.0, 0.2),
            (180.0, 0.6, 1.0),
            (220.0, 0.75, 0.8),
            (240.0, 1.0, 0.6),
            (300.0, 0.8, 1.0),
        ];

        for &(hue, saturation, value) in TESTS {
            let [red, green, blue] = Hsv::new(hue, saturation, value).to_rgb();
            let back = Hsv::from_rgb(red, green, blue);
            assert_eq!(back.hue, hue);
            assert_component_eq!(back.saturation, saturation);
            assert_component_eq!(back.value, value);
        }
    }

    #[test]
    fn hsv_to_rgb_wraps_hue() {
        assert_eq!(Hsv::new(360.0, 1.0, 1.0).to_rgb(), [0xFF, 0x00, 0x00]);
        assert_eq!(Hsv::new(-120.0, 1.0, 1.0).to_rgb(), [0x00, 0x00, 0xFF]);
        assert_eq!(Hsv::new(480.0, 1.0, 1.0).to_rgb(), [0x00, 0xFF, 0x00]);
    }
}
