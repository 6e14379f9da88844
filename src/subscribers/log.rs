//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints every update to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [measurements] temp=34 humidity=80 pressure=90
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use patternbook::{LogWriter, SubscriptionBus};
//! let mut bus = SubscriptionBus::new();
//! bus.add_subscriber(Arc::new(LogWriter));
//! bus.set_measurements(34.0, 80.0, 90.0).unwrap();
//! ```

use crate::weather::WeatherSample;

use super::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`Subscribe`] for structured logging or metrics collection.
pub struct LogWriter;

impl LogWriter {
    fn line(sample: &WeatherSample) -> String {
        format!(
            "[measurements] temp={} humidity={} pressure={}",
            sample.temperature(),
            sample.humidity(),
            sample.pressure()
        )
    }
}

impl Subscribe for LogWriter {
    fn update(&self, sample: &WeatherSample) {
        println!("{}", Self::line(sample));
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
