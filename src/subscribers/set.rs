//! # Ordered fan-out over registered subscribers.
//!
//! [`SubscriberSet`] keeps subscribers in registration order and delivers each
//! sample to them one after another on the caller's thread.
//!
//! ## Rules
//! - **Ordering**: registration order; duplicates are delivered once per registration.
//! - **Synchronous**: `emit()` returns after every subscriber ran (or after the
//!   first failure under `DeliveryPolicy::FailFast`).
//! - **Isolation**: panics are caught with `catch_unwind` and reported.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber uses `Mutex<T>` and panics while holding the lock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{PatternError, SubscriberFailure};
use crate::policies::DeliveryPolicy;
use crate::weather::WeatherSample;

use super::Subscribe;

/// Global id counter for subscriber registrations.
static SUBSCRIBER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Handle returned by a registration, usable for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    fn next() -> Self {
        Self(SUBSCRIBER_SEQ.fetch_add(1, Ordering::Relaxed))
    }
}

struct Registration {
    id: SubscriberId,
    subscriber: Arc<dyn Subscribe>,
}

/// Registry of subscribers with synchronous, panic-isolated delivery.
#[derive(Default)]
pub struct SubscriberSet {
    entries: Vec<Registration>,
}

impl SubscriberSet {
    /// Creates an empty set with room for `capacity` registrations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends a subscriber; no duplicate detection.
    pub fn add(&mut self, subscriber: Arc<dyn Subscribe>) -> SubscriberId {
        let id = SubscriberId::next();
        self.entries.push(Registration { id, subscriber });
        id
    }

    /// Removes the first registration of this exact object (pointer identity).
    ///
    /// Returns `false` if it was not registered.
    pub fn remove(&mut self, subscriber: &Arc<dyn Subscribe>) -> bool {
        self.remove_where(|r| Arc::ptr_eq(&r.subscriber, subscriber))
    }

    /// Removes the registration with the given id.
    pub fn remove_by_id(&mut self, id: SubscriberId) -> bool {
        self.remove_where(|r| r.id == id)
    }

    fn remove_where(&mut self, pred: impl Fn(&Registration) -> bool) -> bool {
        match self.entries.iter().position(pred) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers `sample` to every subscriber in registration order.
    ///
    /// Returns the number of subscribers that returned normally.
    pub fn emit(
        &self,
        sample: &WeatherSample,
        policy: DeliveryPolicy,
    ) -> Result<usize, PatternError> {
        let mut round = Delivery::new(policy);
        for entry in &self.entries {
            let sub = &entry.subscriber;
            if !round.run(|| sub.name().to_string(), || sub.update(sample)) {
                break;
            }
        }
        round.finish()
    }
}

/// Bookkeeping for one notification round.
pub(crate) struct Delivery {
    policy: DeliveryPolicy,
    notified: usize,
    failures: Vec<SubscriberFailure>,
}

impl Delivery {
    pub(crate) fn new(policy: DeliveryPolicy) -> Self {
        Self {
            policy,
            notified: 0,
            failures: Vec::new(),
        }
    }

    /// Runs one target; returns whether the round should go on.
    pub(crate) fn run(&mut self, name: impl FnOnce() -> String, target: impl FnOnce()) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(target)) {
            Ok(()) => {
                self.notified += 1;
                true
            }
            Err(payload) => {
                self.failures.push(SubscriberFailure {
                    subscriber: name(),
                    info: panic_info(payload.as_ref()),
                });
                self.policy.continues_after_failure()
            }
        }
    }

    pub(crate) fn finish(self) -> Result<usize, PatternError> {
        if self.failures.is_empty() {
            Ok(self.notified)
        } else {
            Err(PatternError::DeliveryFailed {
                failures: self.failures,
                notified: self.notified,
            })
        }
    }
}

fn panic_info(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Subscribe for Recorder {
        fn update(&self, _sample: &WeatherSample) {
            self.log.lock().unwrap().push(self.name);
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    struct Exploding;

    impl Subscribe for Exploding {
        fn update(&self, sample: &WeatherSample) {
            panic!("cannot render {}", sample.temperature());
        }

        fn name(&self) -> &'static str {
            "exploding"
        }
    }

    fn recorder(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Arc<dyn Subscribe> {
        Arc::new(Recorder {
            name,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn test_emit_follows_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = SubscriberSet::default();
        set.add(recorder("a", &log));
        set.add(recorder("b", &log));
        set.add(recorder("c", &log));

        let n = set.emit(&WeatherSample::new(1.0, 2.0, 3.0), DeliveryPolicy::Isolate).unwrap();
        assert_eq!(n, 3);
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_takes_first_matching_registration_only() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let mut set = SubscriberSet::default();
        set.add(Arc::clone(&a));
        set.add(Arc::clone(&a));

        assert!(set.remove(&a));
        assert_eq!(set.len(), 1);
        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = SubscriberSet::default();
        let first = set.add(recorder("a", &log));
        let second = set.add(recorder("b", &log));
        assert_ne!(first, second);

        assert!(set.remove_by_id(first));
        assert!(!set.remove_by_id(first));
        set.emit(&WeatherSample::new(0.0, 0.0, 0.0), DeliveryPolicy::Isolate).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_isolate_keeps_delivering_after_panic() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = SubscriberSet::default();
        set.add(recorder("a", &log));
        set.add(Arc::new(Exploding));
        set.add(recorder("c", &log));

        let err = set
            .emit(&WeatherSample::new(7.0, 0.0, 0.0), DeliveryPolicy::Isolate)
            .unwrap_err();
        assert_eq!(*log.lock().unwrap(), vec!["a", "c"]);
        match err {
            PatternError::DeliveryFailed { failures, notified } => {
                assert_eq!(notified, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].subscriber, "exploding");
                assert_eq!(failures[0].info, "cannot render 7");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fail_fast_stops_at_first_panic() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut set = SubscriberSet::default();
        set.add(recorder("a", &log));
        set.add(Arc::new(Exploding));
        set.add(recorder("c", &log));

        let err = set
            .emit(&WeatherSample::new(7.0, 0.0, 0.0), DeliveryPolicy::FailFast)
            .unwrap_err();
        assert_eq!(*log.lock().unwrap(), vec!["a"]);
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn test_panic_info_handles_static_and_owned_payloads() {
        assert_eq!(panic_info(&"static"), "static");
        assert_eq!(panic_info(&String::from("owned")), "owned");
        assert_eq!(panic_info(&42u8), "unknown panic");
    }
}
