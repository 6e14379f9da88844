//! # Weather measurements.
//!
//! [`WeatherSample`] is the payload pushed by both publishers. It is a plain
//! `Copy` value: once built it cannot change, and every subscriber receives
//! the same reading.
//!
//! ## Example
//! ```rust
//! use patternbook::WeatherSample;
//!
//! let s = WeatherSample::new(34.0, 80.0, 90.0);
//! assert_eq!(s.temperature(), 34.0);
//! assert_eq!(s.humidity(), 80.0);
//! assert_eq!(s.pressure(), 90.0);
//! ```

/// One weather reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherSample {
    temperature: f32,
    humidity: f32,
    pressure: f32,
}

impl WeatherSample {
    /// Builds a reading from raw measurements.
    pub const fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }

    /// Temperature in degrees.
    #[inline]
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Relative humidity in percent.
    #[inline]
    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Pressure in bar.
    #[inline]
    pub fn pressure(&self) -> f32 {
        self.pressure
    }
}
