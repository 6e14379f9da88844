//! # Subscription bus: observer with an explicit subscriber list.
//!
//! [`SubscriptionBus`] owns the current [`WeatherSample`] and a
//! [`SubscriberSet`]. Every `set_measurements` call replaces the current sample
//! and pushes it to each subscriber, synchronously and in registration order.
//!
//! ## Flow
//! ```text
//! set_measurements(t, h, p)
//!   ├─► current = WeatherSample::new(t, h, p)
//!   └─► SubscriberSet::emit(&current, config.delivery)
//!          ├─ Ok(n)  ──► Ok(())
//!          └─ Err(e) ──► Err(PatternError::DeliveryFailed { .. })
//! ```
//!
//! The current sample is stored before delivery, so it is updated even when a
//! subscriber fails.
//!
//! ## Example
//! ```rust
//! use patternbook::{CurrentConditions, SubscriptionBus};
//!
//! let mut bus = SubscriptionBus::new();
//! let display = CurrentConditions::attach(&mut bus);
//!
//! bus.set_measurements(34.0, 80.0, 90.0).unwrap();
//! assert_eq!(display.latest(), bus.current());
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::error::PatternError;
use crate::subscribers::{Subscribe, SubscriberId, SubscriberSet};
use crate::weather::WeatherSample;

use super::Publisher;

/// Push-model publisher backed by an ordered subscriber list.
pub struct SubscriptionBus {
    subscribers: SubscriberSet,
    current: Option<WeatherSample>,
    cfg: Config,
}

impl SubscriptionBus {
    /// Creates a bus with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a bus with explicit configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        let subscribers = match cfg.preallocation() {
            Some(n) => SubscriberSet::with_capacity(n),
            None => SubscriberSet::default(),
        };
        Self {
            subscribers,
            current: None,
            cfg,
        }
    }

    /// Registers a subscriber; duplicates are allowed.
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn Subscribe>) -> SubscriberId {
        self.subscribers.add(subscriber)
    }

    /// Unregisters the first registration of `subscriber`; `false` if absent.
    pub fn remove_subscriber(&mut self, subscriber: &Arc<dyn Subscribe>) -> bool {
        self.subscribers.remove(subscriber)
    }

    /// Unregisters by registration id; `false` if absent.
    pub fn remove_by_id(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove_by_id(id)
    }

    /// Records a new reading and pushes it to every subscriber.
    ///
    /// # Errors
    /// [`PatternError::DeliveryFailed`] if any subscriber panicked.
    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), PatternError> {
        self.current = Some(WeatherSample::new(temperature, humidity, pressure));
        self.notify_subscribers()
    }

    /// Re-delivers the current reading; no-op before the first measurement.
    ///
    /// # Errors
    /// [`PatternError::DeliveryFailed`] if any subscriber panicked.
    pub fn notify_subscribers(&self) -> Result<(), PatternError> {
        match &self.current {
            Some(sample) => self.subscribers.emit(sample, self.cfg.delivery).map(|_| ()),
            None => Ok(()),
        }
    }

    /// The latest reading.
    pub fn current(&self) -> Option<WeatherSample> {
        self.current
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl Default for SubscriptionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for SubscriptionBus {
    fn add_subscriber(&mut self, subscriber: Arc<dyn Subscribe>) -> SubscriberId {
        SubscriptionBus::add_subscriber(self, subscriber)
    }

    fn remove_subscriber(&mut self, subscriber: &Arc<dyn Subscribe>) -> bool {
        SubscriptionBus::remove_subscriber(self, subscriber)
    }

    fn notify_subscribers(&self) -> Result<(), PatternError> {
        SubscriptionBus::notify_subscribers(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::DeliveryPolicy;
    use crate::subscribers::CurrentConditions;
    use std::sync::Mutex;

    /// Records (subscriber, sample) pairs into a shared journal.
    struct Journal {
        tag: &'static str,
        seen: Seen,
    }

    impl Subscribe for Journal {
        fn update(&self, sample: &WeatherSample) {
            self.seen.lock().unwrap().push((self.tag, *sample));
        }

        fn name(&self) -> &'static str {
            self.tag
        }
    }

    struct Faulty;

    impl Subscribe for Faulty {
        fn update(&self, _sample: &WeatherSample) {
            panic!("display offline");
        }
    }

    type Seen = Arc<Mutex<Vec<(&'static str, WeatherSample)>>>;

    fn journal(tag: &'static str, seen: &Seen) -> Arc<dyn Subscribe> {
        Arc::new(Journal {
            tag,
            seen: Arc::clone(seen),
        })
    }

    #[test]
    fn test_remaining_subscribers_get_latest_sample_once_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let a = journal("a", &seen);
        let b = journal("b", &seen);
        let c = journal("c", &seen);

        let mut bus = SubscriptionBus::new();
        bus.add_subscriber(a.clone());
        bus.add_subscriber(b.clone());
        bus.add_subscriber(c.clone());
        assert!(bus.remove_subscriber(&b));
        assert!(!bus.remove_subscriber(&b));
        bus.add_subscriber(b.clone());

        bus.set_measurements(34.0, 80.0, 90.0).unwrap();

        let expected = WeatherSample::new(34.0, 80.0, 90.0);
        assert_eq!(*seen.lock().unwrap(), vec![("a", expected), ("c", expected), ("b", expected)]);
    }

    #[test]
    fn test_latest_measurement_overwrites_current() {
        let mut bus = SubscriptionBus::new();
        assert_eq!(bus.current(), None);
        bus.set_measurements(1.0, 2.0, 3.0).unwrap();
        bus.set_measurements(4.0, 5.0, 6.0).unwrap();
        assert_eq!(bus.current(), Some(WeatherSample::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn test_notify_without_measurement_is_noop() {
        let mut bus = SubscriptionBus::new();
        let display = CurrentConditions::attach(&mut bus);
        bus.notify_subscribers().unwrap();
        assert_eq!(display.updates(), 0);

        bus.set_measurements(1.0, 1.0, 1.0).unwrap();
        bus.notify_subscribers().unwrap();
        assert_eq!(display.updates(), 2);
    }

    #[test]
    fn test_remove_by_id_stops_delivery() {
        let mut bus = SubscriptionBus::new();
        let display = Arc::new(CurrentConditions::default());
        let id = bus.add_subscriber(display.clone());
        assert!(bus.remove_by_id(id));
        assert!(bus.is_empty());

        bus.set_measurements(1.0, 1.0, 1.0).unwrap();
        assert_eq!(display.latest(), None);
    }

    #[test]
    fn test_panicking_subscriber_is_reported_and_others_still_notified() {
        let mut bus = SubscriptionBus::new();
        bus.add_subscriber(Arc::new(Faulty));
        let display = CurrentConditions::attach(&mut bus);

        let err = bus.set_measurements(10.0, 20.0, 30.0).unwrap_err();
        assert_eq!(err.as_label(), "delivery_failed");
        assert_eq!(err.failures()[0].info, "display offline");
        assert_eq!(display.latest(), Some(WeatherSample::new(10.0, 20.0, 30.0)));
        assert_eq!(bus.current(), Some(WeatherSample::new(10.0, 20.0, 30.0)));
    }

    #[test]
    fn test_fail_fast_skips_later_subscribers() {
        let mut bus = SubscriptionBus::with_config(Config {
            delivery: DeliveryPolicy::FailFast,
            subscriber_capacity: 0,
        });
        bus.add_subscriber(Arc::new(Faulty));
        let display = CurrentConditions::attach(&mut bus);

        assert!(bus.set_measurements(10.0, 20.0, 30.0).is_err());
        assert_eq!(display.latest(), None);
    }
}
