#![no_std]

pub mod bounds;
pub mod button;
pub mod color;
pub mod config;
pub mod control_loop;
pub mod filter;
pub mod output;

pub use bounds::{BoundedCounter, PositionSource, RelativeEncoder};
pub use button::{ButtonEdges, ButtonLevel, Debouncer};
pub use color::{ColorWheel, PaletteColor, PaletteEntry, PaletteSelector, Rgb};
pub use config::{Config, RawConfig};
pub use control_loop::{ControlLoop, Decision, Inputs};
pub use filter::{Observation, OutlierFilter};
pub use output::SmartLedsOutput;

pub use embassy_time::{Duration, Instant};

/// Abstract pixel driver trait
///
/// Implement this trait to support different hardware platforms.
/// The control loop writes exactly once per tick.
pub trait PixelOutput {
    /// Show `color` at `brightness` (`0.0..=1.0`, zero is off)
    fn write(&mut self, color: Rgb, brightness: f32);
}

/// Ambient light sensor
pub trait LightSensor {
    /// Take one raw reading
    fn read(&mut self) -> u16;
}
