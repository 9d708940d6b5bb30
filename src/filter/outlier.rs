//! Outlier rejection for the ambient light sensor
//!
//! Keeps a circular window of the last `window_size` samples with a running
//! sum maintained incrementally. The standard deviation is recomputed from
//! the whole window on every observation.

use heapless::Vec;

/// Default window capacity
pub const MAX_WINDOW_SIZE: usize = 256;

/// Result of feeding one sample into the filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Raw sample that entered the window
    pub sample: u16,
    /// Whether the sample failed the deviation test
    pub is_outlier: bool,
    /// Running average after the sample entered the window
    pub running_average: f32,
    /// Sample to act on: the raw sample, or the running average from before
    /// this observation when the sample is an outlier
    pub value: f32,
}

/// Running statistics filter over a fixed window of samples
///
/// `CAPACITY` bounds the window length; the configured `window_size` is
/// clamped into `1..=CAPACITY`.
#[derive(Debug, Clone)]
pub struct OutlierFilter<const CAPACITY: usize = MAX_WINDOW_SIZE> {
    samples: Vec<u16, CAPACITY>,
    sum: u32,
    cursor: usize,
    threshold: f32,
}

impl<const CAPACITY: usize> OutlierFilter<CAPACITY> {
    /// Create a filter with every slot of the window holding `seed`
    pub fn new(seed: u16, window_size: usize, threshold: f32) -> Self {
        const { assert!(CAPACITY > 0, "window capacity must not be zero") };
        let clamped = window_size.clamp(1, CAPACITY);
        #[cfg(feature = "esp32-log")]
        if clamped != window_size {
            esp_println::println!(
                "[OutlierFilter.new] window size {:?} out of range, using {:?}",
                window_size,
                clamped
            );
        }
        let window_size = clamped;
        let samples: Vec<u16, CAPACITY> = core::iter::repeat_n(seed, window_size).collect();
        let sum = samples.iter().map(|&sample| u32::from(sample)).sum();
        Self {
            samples,
            sum,
            cursor: 0,
            threshold: threshold.max(0.0),
        }
    }

    /// Insert `sample` into the window and test it against the window
    /// statistics.
    ///
    /// The sample always enters the window; the verdict only changes the
    /// reported [`Observation::value`]. The bound is
    /// `threshold * sqrt(std_dev / window_size)`.
    pub fn observe(&mut self, sample: u16) -> Observation {
        let previous_average = self.running_average();
        self.push(sample);

        let average = self.running_average();
        let spread = libm::sqrtf(self.running_std_dev() / self.window_len());
        let is_outlier = libm::fabsf(f32::from(sample) - average) > self.threshold * spread;

        #[cfg(feature = "esp32-log")]
        if is_outlier {
            esp_println::println!(
                "[OutlierFilter.observe] rejecting {:?}, using {:?}",
                sample,
                previous_average
            );
        }

        Observation {
            sample,
            is_outlier,
            running_average: average,
            value: if is_outlier {
                previous_average
            } else {
                f32::from(sample)
            },
        }
    }

    /// Mean of the current window
    #[allow(clippy::cast_precision_loss)]
    pub fn running_average(&self) -> f32 {
        self.sum as f32 / self.window_len()
    }

    /// Population standard deviation of the current window
    pub fn running_std_dev(&self) -> f32 {
        let average = self.running_average();
        let squared: f32 = self
            .samples
            .iter()
            .map(|&sample| {
                let delta = f32::from(sample) - average;
                delta * delta
            })
            .sum();
        libm::sqrtf(squared / self.window_len())
    }

    /// Sum of the samples currently in the window
    pub const fn sum(&self) -> u32 {
        self.sum
    }

    pub fn window_size(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    fn push(&mut self, sample: u16) {
        let evicted = core::mem::replace(&mut self.samples[self.cursor], sample);
        self.sum = self.sum - u32::from(evicted) + u32::from(sample);
        self.cursor = (self.cursor + 1) % self.samples.len();
    }

    #[allow(clippy::cast_precision_loss)]
    fn window_len(&self) -> f32 {
        self.samples.len() as f32
    }
}
