//! # Current-conditions display.
//!
//! [`CurrentConditions`] remembers the latest sample it was handed and renders
//! it through `Display`:
//!
//! ```text
//! Current Conditions : Temp = 34 Deg | Humidity = 80% | Pressure = 90 bar
//! ```
//!
//! ## Example
//! ```rust
//! use patternbook::{CurrentConditions, SubscriptionBus};
//!
//! let mut bus = SubscriptionBus::new();
//! let display = CurrentConditions::attach(&mut bus);
//! bus.set_measurements(34.0, 80.0, 90.0).unwrap();
//!
//! assert_eq!(
//!     display.to_string(),
//!     "Current Conditions : Temp = 34 Deg | Humidity = 80% | Pressure = 90 bar"
//! );
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::publishers::Publisher;
use crate::weather::WeatherSample;

use super::Subscribe;

/// Subscriber holding the most recent reading.
#[derive(Debug, Default)]
pub struct CurrentConditions {
    latest: Mutex<Option<WeatherSample>>,
    updates: AtomicU64,
}

impl CurrentConditions {
    /// Creates a display and registers it with `publisher`.
    pub fn attach<P: Publisher + ?Sized>(publisher: &mut P) -> Arc<Self> {
        let display = Arc::new(Self::default());
        publisher.add_subscriber(display.clone());
        display
    }

    /// Latest reading, if any arrived yet.
    pub fn latest(&self) -> Option<WeatherSample> {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// How many updates were received.
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::SeqCst)
    }
}

impl Subscribe for CurrentConditions {
    fn update(&self, sample: &WeatherSample) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(*sample);
        self.updates.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &'static str {
        "current-conditions"
    }
}

impl fmt::Display for CurrentConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.latest() {
            Some(s) => write!(
                f,
                "Current Conditions : Temp = {} Deg | Humidity = {}% | Pressure = {} bar",
                s.temperature(),
                s.humidity(),
                s.pressure()
            ),
            None => f.write_str("Current Conditions : no data"),
        }
    }
}
