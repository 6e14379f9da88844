//! # Weather subscriber trait.
//!
//! Provides [`Subscribe`] the extension point for plugging custom handlers into
//! a [`SubscriptionBus`](crate::SubscriptionBus).
//!
//! ## Rules
//! - `update` runs synchronously on the publisher's thread, in registration order.
//! - A panic inside `update` is caught by the publisher and reported to its
//!   caller as `PatternError::DeliveryFailed` (see [`DeliveryPolicy`](crate::DeliveryPolicy)).
//! - `update` takes `&self`; keep per-subscriber state behind interior mutability.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use patternbook::{Subscribe, SubscriptionBus, WeatherSample};
//!
//! #[derive(Default)]
//! struct Counter(AtomicUsize);
//!
//! impl Subscribe for Counter {
//!     fn update(&self, _sample: &WeatherSample) {
//!         self.0.fetch_add(1, Ordering::SeqCst);
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//!
//! let counter = Arc::new(Counter::default());
//! let mut bus = SubscriptionBus::new();
//! bus.add_subscriber(counter.clone());
//! bus.set_measurements(21.0, 40.0, 1.0).unwrap();
//! assert_eq!(counter.0.load(Ordering::SeqCst), 1);
//! ```

use crate::weather::WeatherSample;

/// Receiver of weather updates.
///
/// ### Implementation requirements
/// - Return quickly; the publisher waits for every subscriber in turn.
/// - Handle errors internally; a panic is reported as a delivery failure.
pub trait Subscribe: Send + Sync + 'static {
    /// Receives the sample that was just published.
    fn update(&self, sample: &WeatherSample);

    /// Returns the subscriber name used in delivery failures and logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
