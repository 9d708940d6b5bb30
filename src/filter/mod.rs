//! Sensor signal filters

mod outlier;

pub use outlier::{MAX_WINDOW_SIZE, Observation, OutlierFilter};
