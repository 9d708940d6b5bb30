//! Button-selected color palette
//!
//! The palette holds fixed colors plus a [`PaletteEntry::Dynamic`] entry that
//! stands for the animated [`ColorWheel`](super::ColorWheel).

use crate::color::Rgb;

/// Name of the palette entry used when the configured one is unknown
pub const FALLBACK_COLOR_NAME: &str = "green";

/// A palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEntry {
    /// Solid color
    Fixed(Rgb),
    /// Color wheel output
    Dynamic,
}

/// Palette slot with its configuration name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub entry: PaletteEntry,
}

impl PaletteColor {
    pub const fn fixed(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            entry: PaletteEntry::Fixed(Rgb { r, g, b }),
        }
    }

    pub const fn dynamic(name: &'static str) -> Self {
        Self {
            name,
            entry: PaletteEntry::Dynamic,
        }
    }
}

/// Number of entries in [`DEFAULT_PALETTE`]
pub const DEFAULT_PALETTE_LEN: usize = 12;

/// Built-in palette, in button order
pub const DEFAULT_PALETTE: [PaletteColor; DEFAULT_PALETTE_LEN] = [
    PaletteColor::fixed("white", 255, 255, 255),
    PaletteColor::fixed("yellow", 255, 255, 0),
    PaletteColor::fixed("orange", 255, 165, 0),
    PaletteColor::fixed("red", 255, 0, 0),
    PaletteColor::fixed("pink", 255, 192, 203),
    PaletteColor::fixed("purple", 255, 0, 255),
    PaletteColor::fixed("blue", 0, 0, 255),
    PaletteColor::fixed("cyan", 0, 255, 255),
    PaletteColor::fixed("green", 0, 255, 0),
    PaletteColor::fixed("lime green", 50, 205, 50),
    PaletteColor::dynamic("rainbow"),
    PaletteColor::fixed("off", 0, 0, 0),
];

/// Find a palette index by exact name
pub fn position_of(palette: &[PaletteColor], name: &str) -> Option<usize> {
    palette.iter().position(|color| color.name == name)
}

/// Cursor over a fixed, non-empty palette
#[derive(Debug, Clone)]
pub struct PaletteSelector<const N: usize> {
    palette: [PaletteColor; N],
    cursor: usize,
}

impl<const N: usize> PaletteSelector<N> {
    /// Create a selector, wrapping `start` into the palette
    pub const fn new(palette: [PaletteColor; N], start: usize) -> Self {
        const { assert!(N > 0, "palette must not be empty") };
        Self {
            palette,
            cursor: start % N,
        }
    }

    /// Create a selector starting at the entry called `name`.
    ///
    /// Unknown names fall back to [`FALLBACK_COLOR_NAME`], then to the first
    /// entry.
    pub fn with_name(palette: [PaletteColor; N], name: &str) -> Self {
        let start = position_of(&palette, name)
            .or_else(|| {
                #[cfg(feature = "esp32-log")]
                esp_println::println!(
                    "[PaletteSelector.with_name] unknown color {:?}, using {:?}",
                    name,
                    FALLBACK_COLOR_NAME
                );
                position_of(&palette, FALLBACK_COLOR_NAME)
            })
            .unwrap_or(0);
        Self::new(palette, start)
    }

    /// Move to the next entry, wrapping at the end
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % N;
    }

    pub const fn current(&self) -> PaletteEntry {
        self.palette[self.cursor].entry
    }

    pub const fn name(&self) -> &'static str {
        self.palette[self.cursor].name
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn palette(&self) -> &[PaletteColor; N] {
        &self.palette
    }
}
