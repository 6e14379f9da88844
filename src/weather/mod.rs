//! Weather data model shared by the publishers.

mod sample;

pub use sample::WeatherSample;
