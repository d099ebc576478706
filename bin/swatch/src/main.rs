//! Render a device theme into a PNG swatch. Every slot gets a column, every
//! luminance step a row.
//!
//! ```text
//! bandcolor-swatch <out.png> <base> <high-contrast> <lowlight> <highlight> <muted> <secondary-text>
//! ```

use std::error::Error;

use bandcolor::{Color, Component, Slot, Theme};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

const CELL_WIDTH: u32 = 120;
const CELL_HEIGHT: u32 = 60;
const STEPS: [Component; 5] = [-0.25, -0.125, 0.0, 0.125, 0.25];

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 + Slot::ALL.len() {
        return Err(format!(
            "usage: bandcolor-swatch <out.png> {}",
            Slot::ALL.map(|slot| format!("<{slot}>")).join(" ")
        )
        .into());
    }

    let mut colors = [Color::new(0, 0, 0); 6];
    for (color, arg) in colors.iter_mut().zip(&args[1..]) {
        *color = Color::parse_rgb(arg).map_err(|err| format!("{arg:?}: {err}"))?;
    }
    let theme = Theme::from(colors);

    for (slot, color) in theme.iter() {
        println!(
            "{slot:>14} {color} hsv({}, {:.2}, {:.2})",
            color.hue(),
            color.saturation(),
            color.value()
        );
    }

    let img = render(&theme);
    img.save(&args[0])?;
    println!("wrote {}", args[0]);

    Ok(())
}

fn render(theme: &Theme) -> RgbaImage {
    let width = CELL_WIDTH * Slot::ALL.len() as u32;
    let height = CELL_HEIGHT * STEPS.len() as u32;

    let mut img = RgbaImage::new(width, height);

    for (row, step) in STEPS.iter().enumerate() {
        let shaded = theme.luminance(*step);
        for (column, (_, color)) in shaded.iter().enumerate() {
            let rect = Rect::at(
                (column as u32 * CELL_WIDTH) as i32,
                (row as u32 * CELL_HEIGHT) as i32,
            )
            .of_size(CELL_WIDTH, CELL_HEIGHT);
            draw_filled_rect_mut(&mut img, rect, to_rgba(color));
        }
    }

    img
}

fn to_rgba(color: Color) -> Rgba<u8> {
    let [alpha, red, green, blue] = color.to_argb_bytes();
    Rgba([red, green, blue, alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_hold_shaded_slot_colors() {
        let theme = Theme::from([
            Color::new(0x33, 0x66, 0xCC),
            Color::new(0xFF, 0x00, 0x00),
            Color::new(0x00, 0xFF, 0x00),
            Color::new(0x00, 0x00, 0xFF),
            Color::new(0x80, 0x80, 0x80),
            Color::argb(0x80, 0x10, 0x20, 0x30),
        ]);

        let img = render(&theme);
        assert_eq!(img.dimensions(), (CELL_WIDTH * 6, CELL_HEIGHT * 5));

        // Middle row is unshaded.
        assert_eq!(*img.get_pixel(1, CELL_HEIGHT * 2 + 1), Rgba([0x33, 0x66, 0xCC, 0xFF]));
        assert_eq!(
            *img.get_pixel(CELL_WIDTH * 5 + 1, CELL_HEIGHT * 2 + 1),
            Rgba([0x10, 0x20, 0x30, 0x80])
        );
        // Top row is darkened by a quarter.
        assert_eq!(*img.get_pixel(1, 1), Rgba([0x00, 0x26, 0x8C, 0xFF]));
    }
}
