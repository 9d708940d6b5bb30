//! Startup configuration
//!
//! [`RawConfig`] mirrors the configuration document with every key optional.
//! [`Config`] is the resolved form. When the document cannot be read or
//! parsed at all, [`Config::default`] applies.
//!
//! Some keys fall back differently depending on whether their section is
//! present: an absent `running_average` section gives an outlier threshold of
//! `3.0` while a section without `threshold` gives `40.0`, and an absent
//! `rainbow` section gives a cycle time of `0.03` s while a section without
//! `cycle_time` gives `0.3` s.

use core::fmt;

use embassy_time::Duration;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Longest color name kept from the document
pub const COLOR_NAME_CAPACITY: usize = 32;

/// Owned palette entry name
pub type ColorName = heapless::String<COLOR_NAME_CAPACITY>;

pub const DEFAULT_START_COLOR: &str = "green";
pub const DEFAULT_LIGHT_THRESHOLD: f32 = 1000.0;
pub const DEFAULT_LOOP_CYCLE_TIME: f32 = 0.05;
pub const DEFAULT_WINDOW_SIZE: usize = 10;
/// Outlier threshold used when the `running_average` section is absent
pub const DEFAULT_OUTLIER_THRESHOLD: f32 = 3.0;
/// Outlier threshold used when the section exists but lacks `threshold`
pub const SECTION_OUTLIER_THRESHOLD: f32 = 40.0;
pub const DEFAULT_RAINBOW_CYCLE_TIME: f32 = 0.3;
/// Rainbow cycle time used when the `rainbow` section is absent
pub const MISSING_RAINBOW_CYCLE_TIME: f32 = 0.03;
pub const DEFAULT_MAX_POSITION: i32 = 20;
pub const DEFAULT_START_POSITION: i32 = 20;
/// Longest accepted duration, in seconds
pub const MAX_DURATION_SECONDS: f32 = 86_400.0;

/// `running_average` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RunningAverageSection {
    pub window_size: Option<usize>,
    pub threshold: Option<f32>,
}

/// `rainbow` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RainbowSection {
    pub cycle_time: Option<f32>,
}

/// `encoder` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct EncoderSection {
    pub max_position: Option<i32>,
    pub start_position: Option<i32>,
}

/// Configuration document as read, before fallbacks
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfig {
    /// Names longer than [`COLOR_NAME_CAPACITY`] read as absent
    #[serde(default, deserialize_with = "color_name")]
    pub start_color: Option<ColorName>,
    pub light_threshold: Option<f32>,
    pub loop_cycle_time: Option<f32>,
    pub running_average: Option<RunningAverageSection>,
    pub rainbow: Option<RainbowSection>,
    pub encoder: Option<EncoderSection>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Palette entry selected at startup
    pub start_color: ColorName,
    /// Sensor reading above which the light is forced off
    pub light_threshold: f32,
    /// Sleep between control loop ticks
    pub loop_cycle_time: Duration,
    /// Outlier filter window length
    pub window_size: usize,
    /// Outlier filter sensitivity
    pub outlier_threshold: f32,
    /// Color wheel step interval
    pub rainbow_cycle_time: Duration,
    /// Encoder upper bound
    pub max_position: i32,
    /// Encoder position at startup
    pub start_position: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_color: default_start_color(),
            light_threshold: DEFAULT_LIGHT_THRESHOLD,
            loop_cycle_time: seconds(DEFAULT_LOOP_CYCLE_TIME),
            window_size: DEFAULT_WINDOW_SIZE,
            outlier_threshold: DEFAULT_OUTLIER_THRESHOLD,
            rainbow_cycle_time: seconds(DEFAULT_RAINBOW_CYCLE_TIME),
            max_position: DEFAULT_MAX_POSITION,
            start_position: DEFAULT_START_POSITION,
        }
    }
}

impl Config {
    /// Resolve a parsed document, applying per-key fallbacks
    pub fn from_raw(raw: &RawConfig) -> Self {
        let outlier_threshold = match raw.running_average {
            None => DEFAULT_OUTLIER_THRESHOLD,
            Some(section) => section.threshold.unwrap_or(SECTION_OUTLIER_THRESHOLD),
        };
        let rainbow_cycle_time = match raw.rainbow {
            None => MISSING_RAINBOW_CYCLE_TIME,
            Some(section) => section.cycle_time.unwrap_or(DEFAULT_RAINBOW_CYCLE_TIME),
        };
        let encoder = raw.encoder.unwrap_or_default();

        Self {
            start_color: raw.start_color.clone().unwrap_or_else(default_start_color),
            light_threshold: raw.light_threshold.unwrap_or(DEFAULT_LIGHT_THRESHOLD),
            loop_cycle_time: seconds(raw.loop_cycle_time.unwrap_or(DEFAULT_LOOP_CYCLE_TIME)),
            window_size: raw
                .running_average
                .and_then(|section| section.window_size)
                .unwrap_or(DEFAULT_WINDOW_SIZE),
            outlier_threshold,
            rainbow_cycle_time: seconds(rainbow_cycle_time),
            max_position: encoder.max_position.unwrap_or(DEFAULT_MAX_POSITION),
            start_position: encoder.start_position.unwrap_or(DEFAULT_START_POSITION),
        }
    }

    /// Resolve the outcome of reading the configuration source.
    ///
    /// A missing or malformed source gives the built-in defaults.
    pub fn from_source<E>(raw: Result<RawConfig, E>) -> Self {
        match raw {
            Ok(raw) => Self::from_raw(&raw),
            Err(_) => {
                #[cfg(feature = "esp32-log")]
                esp_println::println!("[Config.from_source] configuration unavailable, using defaults");
                Self::default()
            }
        }
    }
}

/// Convert seconds to a duration with microsecond resolution.
///
/// Negative and NaN values give zero, values above
/// [`MAX_DURATION_SECONDS`] are capped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seconds(value: f32) -> Duration {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_DURATION_SECONDS)
    };
    let micros = libm::round(f64::from(value) * 1_000_000.0);
    Duration::from_micros(micros as u64)
}

fn default_start_color() -> ColorName {
    ColorName::try_from(DEFAULT_START_COLOR).unwrap_or_default()
}

/// Read an optional color name into a [`ColorName`].
///
/// Works on escaped strings, which cannot be borrowed from the document.
/// A name that does not fit reads as absent instead of failing the document.
fn color_name<'de, D>(deserializer: D) -> Result<Option<ColorName>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ColorNameVisitor;

    impl<'de> Visitor<'de> for ColorNameVisitor {
        type Value = Option<ColorName>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a color name")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_str(self)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let name = ColorName::try_from(value).ok();
            #[cfg(feature = "esp32-log")]
            if name.is_none() {
                esp_println::println!("[Config.start_color] color name too long, ignoring");
            }
            Ok(name)
        }
    }

    deserializer.deserialize_option(ColorNameVisitor)
}
