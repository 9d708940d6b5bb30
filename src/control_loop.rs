//! Per-tick control loop
//!
//! Fuses the encoder, button and light sensor into one color and brightness
//! decision per tick and writes it to the pixel.
//!
//! The caller owns the timing: either call [`ControlLoop::tick`] and sleep
//! for [`ControlLoop::period`], or hand the loop to [`ControlLoop::run`].
//! The sleep is always the full period, processing time is not subtracted.

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::{BoundedCounter, MIN_POSITION, PositionSource};
use crate::button::ButtonEdges;
use crate::color::{
    ColorWheel, DEFAULT_PALETTE, DEFAULT_PALETTE_LEN, PaletteColor, PaletteEntry,
    PaletteSelector, Rgb,
};
use crate::config::Config;
use crate::filter::{MAX_WINDOW_SIZE, OutlierFilter};
use crate::{LightSensor, PixelOutput};

/// Output of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub color: Rgb,
    /// `0.0..=1.0`, zero means off
    pub brightness: f32,
}

impl Decision {
    /// Off, keeping the color already on the pixel
    pub const fn off(color: Rgb) -> Self {
        Self {
            color,
            brightness: 0.0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.brightness <= 0.0
    }
}

/// Input collaborators sampled every tick
#[derive(Debug)]
pub struct Inputs<B, E, L> {
    pub button: B,
    pub encoder: E,
    pub sensor: L,
}

/// Control loop state, owned for the lifetime of the program
pub struct ControlLoop<B, E, L, O, const P: usize = DEFAULT_PALETTE_LEN>
where
    B: ButtonEdges,
    E: PositionSource,
    L: LightSensor,
    O: PixelOutput,
{
    // External dependencies and configuration
    button: B,
    sensor: L,
    output: O,
    light_threshold: f32,
    period: Duration,

    // Internal state
    encoder: BoundedCounter<E>,
    palette: PaletteSelector<P>,
    wheel: ColorWheel,
    filter: OutlierFilter<MAX_WINDOW_SIZE>,
    /// Last color lit on the pixel
    color: Rgb,
}

impl<B, E, L, O> ControlLoop<B, E, L, O>
where
    B: ButtonEdges,
    E: PositionSource,
    L: LightSensor,
    O: PixelOutput,
{
    /// Create a control loop over the built-in palette
    pub fn new(config: &Config, inputs: Inputs<B, E, L>, output: O, now: Instant) -> Self {
        Self::with_palette(config, DEFAULT_PALETTE, inputs, output, now)
    }
}

impl<B, E, L, O, const P: usize> ControlLoop<B, E, L, O, P>
where
    B: ButtonEdges,
    E: PositionSource,
    L: LightSensor,
    O: PixelOutput,
{
    /// Create a control loop over a custom palette.
    ///
    /// Reads the light sensor once to seed the outlier window.
    pub fn with_palette(
        config: &Config,
        palette: [PaletteColor; P],
        inputs: Inputs<B, E, L>,
        output: O,
        now: Instant,
    ) -> Self {
        let Inputs {
            button,
            encoder,
            mut sensor,
        } = inputs;

        let palette = PaletteSelector::with_name(palette, &config.start_color);
        let wheel = ColorWheel::new(config.rainbow_cycle_time, now);
        let color = match palette.current() {
            PaletteEntry::Fixed(color) => color,
            PaletteEntry::Dynamic => wheel.current(),
        };
        let filter = OutlierFilter::new(
            sensor.read(),
            config.window_size,
            config.outlier_threshold,
        );

        Self {
            button,
            sensor,
            output,
            light_threshold: config.light_threshold,
            period: config.loop_cycle_time,
            encoder: BoundedCounter::new(
                encoder,
                MIN_POSITION,
                config.max_position,
                config.start_position,
            ),
            palette,
            wheel,
            filter,
            color,
        }
    }

    /// Run one tick and write the decision to the output
    pub fn tick(&mut self, now: Instant) -> Decision {
        self.button.update(now);
        let brightness = self.encoder.level();

        let decision = if brightness <= 0.0 {
            Decision::off(self.color)
        } else {
            self.lit_tick(brightness, now)
        };

        self.output.write(decision.color, decision.brightness);
        decision
    }

    fn lit_tick(&mut self, brightness: f32, now: Instant) -> Decision {
        if self.button.rose() {
            self.palette.advance();
            #[cfg(feature = "esp32-log")]
            println!("[ControlLoop.tick] palette -> {:?}", self.palette.name());
        }
        let color = self.resolve_color(now);

        let ambient = self.filter.observe(self.sensor.read());
        if ambient.value > self.light_threshold {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ControlLoop.tick] ambient {:?} above threshold, gating",
                ambient.value
            );
            return Decision::off(self.color);
        }

        self.color = color;
        Decision { color, brightness }
    }

    fn resolve_color(&mut self, now: Instant) -> Rgb {
        match self.palette.current() {
            PaletteEntry::Fixed(color) => color,
            PaletteEntry::Dynamic => self.wheel.color(now),
        }
    }

    /// Tick forever, sleeping a full period after each tick
    pub async fn run(mut self) -> ! {
        loop {
            self.tick(Instant::now());
            Timer::after(self.period).await;
        }
    }

    /// Sleep between ticks
    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn palette(&self) -> &PaletteSelector<P> {
        &self.palette
    }

    pub const fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    pub const fn filter(&self) -> &OutlierFilter<MAX_WINDOW_SIZE> {
        &self.filter
    }

    pub const fn output(&self) -> &O {
        &self.output
    }
}
