//! Animated color wheel
//!
//! Walks a 256-step piecewise-linear red/green/blue cycle. The phase advances
//! at most one step per call and only once `cycle_time` has passed since the
//! previous advance, so the animation speed does not depend on how often the
//! wheel is polled.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, WHITE};

/// Color wheel advanced by elapsed time
#[derive(Debug, Clone)]
pub struct ColorWheel {
    step: u8,
    last_advance: Instant,
    cycle_time: Duration,
    color: Rgb,
}

impl ColorWheel {
    /// Create a wheel at step 0 showing white until the first advance
    pub const fn new(cycle_time: Duration, now: Instant) -> Self {
        Self {
            step: 0,
            last_advance: now,
            cycle_time,
            color: WHITE,
        }
    }

    /// Current wheel color, advancing one step if `cycle_time` has elapsed
    pub fn color(&mut self, now: Instant) -> Rgb {
        if now.saturating_duration_since(self.last_advance) >= self.cycle_time {
            self.step = self.step.wrapping_add(1);
            self.color = wheel(self.step);
            self.last_advance = now;
        }
        self.color
    }

    /// Last computed color, without advancing
    pub const fn current(&self) -> Rgb {
        self.color
    }

    /// Current phase step
    pub const fn step(&self) -> u8 {
        self.step
    }

    pub const fn cycle_time(&self) -> Duration {
        self.cycle_time
    }
}

/// Map a phase step to a color.
///
/// The path goes green to red, red to blue, blue to green.
pub const fn wheel(step: u8) -> Rgb {
    match step {
        0..85 => Rgb {
            r: step * 3,
            g: 255 - step * 3,
            b: 0,
        },
        85..170 => {
            let step = step - 85;
            Rgb {
                r: 255 - step * 3,
                g: 0,
                b: step * 3,
            }
        }
        _ => {
            let step = step - 170;
            Rgb {
                r: 0,
                g: step * 3,
                b: 255 - step * 3,
            }
        }
    }
}
