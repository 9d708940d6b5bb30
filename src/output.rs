//! Pixel output adapters

use core::iter::once;

use smart_leds::{SmartLedsWrite, brightness};

use crate::{PixelOutput, color::Rgb};

/// Convert a `0.0..=1.0` level to an 8-bit scale factor
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level8(level: f32) -> u8 {
    libm::roundf(level.clamp(0.0, 1.0) * 255.0) as u8
}

/// Single-pixel output over a `smart-leds` driver
///
/// Brightness is applied to the color before it is written.
pub struct SmartLedsOutput<W> {
    driver: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(driver: W) -> Self {
        Self { driver }
    }

    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W> PixelOutput for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, color: Rgb, level: f32) {
        let pixel = brightness(once(color), level8(level));
        if self.driver.write(pixel).is_err() {
            #[cfg(feature = "esp32-log")]
            esp_println::println!("[SmartLedsOutput.write] driver rejected frame");
        }
    }
}
