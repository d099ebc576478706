//! A [`Theme`] assigns a color to each of the six slots a Band device
//! personalizes.

use std::fmt;

use crate::{Color, Component};

/// The named color slots of a device theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Tile and header background.
    Base,
    /// Accent drawn on top of the base color.
    HighContrast,
    /// Dimmed variant of the base color.
    Lowlight,
    /// Emphasized elements.
    Highlight,
    /// De-emphasized elements.
    Muted,
    /// Secondary text.
    SecondaryText,
}

impl Slot {
    /// All slots, in device order.
    pub const ALL: [Slot; 6] = [
        Slot::Base,
        Slot::HighContrast,
        Slot::Lowlight,
        Slot::Highlight,
        Slot::Muted,
        Slot::SecondaryText,
    ];

    /// Return the name of the slot.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Base => "Base",
            Slot::HighContrast => "HighContrast",
            Slot::Lowlight => "Lowlight",
            Slot::Highlight => "Highlight",
            Slot::Muted => "Muted",
            Slot::SecondaryText => "SecondaryText",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One color for every [`Slot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Theme {
    colors: [Color; 6],
}

impl Theme {
    /// Create a theme from its six colors.
    pub fn new(
        base: Color,
        high_contrast: Color,
        lowlight: Color,
        highlight: Color,
        muted: Color,
        secondary_text: Color,
    ) -> Self {
        Self {
            colors: [base, high_contrast, lowlight, highlight, muted, secondary_text],
        }
    }

    /// Return the color in the given slot.
    pub fn get(&self, slot: Slot) -> Color {
        self.colors[slot.index()]
    }

    /// Return a copy of this theme with the color in `slot` replaced.
    pub fn with(&self, slot: Slot, color: Color) -> Self {
        let mut colors = self.colors;
        colors[slot.index()] = color;
        Self { colors }
    }

    /// Iterate the slots and their colors, in device order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::ALL.into_iter().zip(self.colors.iter().copied())
    }

    /// Apply [`Color::luminance`] to every slot.
    pub fn luminance(&self, percentage: Component) -> Self {
        Self {
            colors: self.colors.map(|c| c.luminance(percentage)),
        }
    }
}

impl From<[Color; 6]> for Theme {
    fn from(colors: [Color; 6]) -> Self {
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Theme {
        Theme::new(
            Color::new(0x33, 0x66, 0xCC),
            Color::new(0x40, 0x80, 0xFF),
            Color::new(0x20, 0x40, 0x80),
            Color::new(0xFF, 0xFF, 0xFF),
            Color::new(0x80, 0x80, 0x80),
            Color::new(0xC0, 0xC0, 0xC0),
        )
    }

    #[test]
    fn slots_map_to_colors() {
        let theme = sample();
        assert_eq!(theme.get(Slot::Base), Color::new(0x33, 0x66, 0xCC));
        assert_eq!(theme.get(Slot::HighContrast), Color::new(0x40, 0x80, 0xFF));
        assert_eq!(theme.get(Slot::SecondaryText), Color::new(0xC0, 0xC0, 0xC0));

        let slots: Vec<Slot> = theme.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, Slot::ALL);
        assert_eq!(theme.iter().nth(4), Some((Slot::Muted, Color::new(0x80, 0x80, 0x80))));
    }

    #[test]
    fn with_replaces_one_slot() {
        let theme = sample();
        let changed = theme.with(Slot::Muted, Color::new(0, 0, 0));
        assert_eq!(changed.get(Slot::Muted), Color::new(0, 0, 0));
        assert_eq!(theme.get(Slot::Muted), Color::new(0x80, 0x80, 0x80));
        for slot in Slot::ALL.into_iter().filter(|s| *s != Slot::Muted) {
            assert_eq!(changed.get(slot), theme.get(slot));
        }
    }

    #[test]
    fn luminance_applies_to_every_slot() {
        let theme = sample().luminance(-0.25);
        assert_eq!(theme.get(Slot::Base), Color::new(0x00, 0x26, 0x8C));
        assert_eq!(theme.get(Slot::Highlight), Color::new(0xBF, 0xBF, 0xBF));
        assert_eq!(theme.get(Slot::Lowlight), Color::new(0x00, 0x00, 0x40));
    }

    #[test]
    fn names() {
        assert_eq!(Slot::Lowlight.to_string(), "Lowlight");
        assert_eq!(Slot::SecondaryText.name(), "SecondaryText");
        assert_eq!(format!("{:>6}", Slot::Base), "  Base");
    }
}
