mod palette;
mod wheel;

pub use palette::{
    DEFAULT_PALETTE, DEFAULT_PALETTE_LEN, FALLBACK_COLOR_NAME, PaletteColor, PaletteEntry,
    PaletteSelector, position_of,
};
use smart_leds::RGB8;
pub use wheel::{ColorWheel, wheel};

pub type Rgb = RGB8;

pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
