//! Bounded encoder position
//!
//! The rotary encoder is an unbounded incremental counter. [`BoundedCounter`]
//! pins it into `[min, max]` by writing the clamped value back into the
//! source, so further deltas compose on the clamped position.

/// Lowest encoder position, maps to brightness 0.
pub const MIN_POSITION: i32 = 0;

/// Raw incremental position reported by an encoder driver
pub trait PositionSource {
    /// Current raw position
    fn position(&self) -> i32;

    /// Overwrite the raw position
    fn set_position(&mut self, position: i32);
}

/// Software position accumulator for drivers that only report deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeEncoder {
    position: i32,
}

impl RelativeEncoder {
    pub const fn new(position: i32) -> Self {
        Self { position }
    }

    /// Apply a signed quadrature delta
    pub const fn step(&mut self, delta: i32) {
        self.position = self.position.saturating_add(delta);
    }
}

impl PositionSource for RelativeEncoder {
    fn position(&self) -> i32 {
        self.position
    }

    fn set_position(&mut self, position: i32) {
        self.position = position;
    }
}

/// Encoder position clamped into an inclusive range
#[derive(Debug)]
pub struct BoundedCounter<S: PositionSource> {
    source: S,
    min: i32,
    max: i32,
}

impl<S: PositionSource> BoundedCounter<S> {
    /// Create a counter over `source`.
    ///
    /// A `start` outside `[min, max]` is replaced by `max`, not by the
    /// nearest bound. A `max` below `min` is raised to `min`.
    pub fn new(mut source: S, min: i32, max: i32, start: i32) -> Self {
        let max = max.max(min);
        let start = if (min..=max).contains(&start) {
            start
        } else {
            max
        };
        source.set_position(start);
        Self { source, min, max }
    }

    /// Read the source, clamp it and store the clamped value back
    pub fn position(&mut self) -> i32 {
        let raw = self.source.position();
        let clamped = raw.clamp(self.min, self.max);
        if clamped != raw {
            self.source.set_position(clamped);
        }
        clamped
    }

    /// Position as a fraction of the range, `0.0..=1.0`
    ///
    /// A zero-width range always reads as `0.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn level(&mut self) -> f32 {
        let position = i64::from(self.position());
        let min = i64::from(self.min);
        let span = i64::from(self.max) - min;
        if span == 0 {
            return 0.0;
        }
        (position - min) as f32 / span as f32
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
