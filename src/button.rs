//! Button debouncing and edge detection

use embassy_time::{Duration, Instant};

/// Default settle time before a level change is accepted
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(10);

/// Raw, undebounced button level
pub trait ButtonLevel {
    /// Whether the button is physically held down right now
    fn is_pressed(&mut self) -> bool;
}

/// Debounced button reporting edges once per update
pub trait ButtonEdges {
    /// Sample the button
    fn update(&mut self, now: Instant);

    /// Whether the last update committed a press
    fn rose(&self) -> bool;
}

/// Time-based debouncer
///
/// A raw level change restarts the settle timer. The level is committed once
/// it has been steady for `interval`, and the resulting edge is reported for
/// that single update only.
#[derive(Debug)]
pub struct Debouncer<P: ButtonLevel> {
    pin: P,
    interval: Duration,
    stable: bool,
    unstable: bool,
    last_change: Instant,
    rose: bool,
    fell: bool,
}

impl<P: ButtonLevel> Debouncer<P> {
    /// Create a debouncer with [`DEFAULT_DEBOUNCE_INTERVAL`]
    pub fn new(pin: P, now: Instant) -> Self {
        Self::with_interval(pin, DEFAULT_DEBOUNCE_INTERVAL, now)
    }

    /// Create a debouncer with custom settle time.
    ///
    /// The current level is taken as already settled, so a button held at
    /// startup does not produce an edge.
    pub fn with_interval(mut pin: P, interval: Duration, now: Instant) -> Self {
        let level = pin.is_pressed();
        Self {
            pin,
            interval,
            stable: level,
            unstable: level,
            last_change: now,
            rose: false,
            fell: false,
        }
    }

    /// Debounced level
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Whether the last update committed a release
    pub const fn fell(&self) -> bool {
        self.fell
    }
}

impl<P: ButtonLevel> ButtonEdges for Debouncer<P> {
    fn update(&mut self, now: Instant) {
        self.rose = false;
        self.fell = false;

        let level = self.pin.is_pressed();
        if level != self.unstable {
            self.unstable = level;
            self.last_change = now;
        }

        if self.unstable != self.stable
            && now.saturating_duration_since(self.last_change) >= self.interval
        {
            self.stable = self.unstable;
            self.rose = self.stable;
            self.fell = !self.stable;
        }
    }

    fn rose(&self) -> bool {
        self.rose
    }
}
