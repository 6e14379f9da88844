//! # Publisher configuration.
//!
//! Provides [`Config`] shared settings for [`SubscriptionBus`](crate::SubscriptionBus)
//! and [`EventChannel`](crate::EventChannel).
//!
//! ## Sentinel values
//! - `subscriber_capacity = 0` → no preallocation

use crate::policies::DeliveryPolicy;

/// Configuration for publishers.
///
/// ## Field semantics
/// - `delivery`: Reaction to a panicking subscriber (see [`DeliveryPolicy`])
/// - `subscriber_capacity`: Initial capacity of the subscriber/handler list (`0` = none)
#[derive(Clone, Debug)]
pub struct Config {
    /// Reaction to a subscriber panicking during notification.
    pub delivery: DeliveryPolicy,

    /// Initial capacity reserved for registrations.
    pub subscriber_capacity: usize,
}

impl Config {
    /// Returns the preallocation hint as an `Option`.
    ///
    /// - `None` → start with an empty, unallocated list
    /// - `Some(n)` → reserve room for `n` registrations
    #[inline]
    pub fn preallocation(&self) -> Option<usize> {
        if self.subscriber_capacity == 0 {
            None
        } else {
            Some(self.subscriber_capacity)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `delivery = DeliveryPolicy::Isolate`
    /// - `subscriber_capacity = 8`
    fn default() -> Self {
        Self {
            delivery: DeliveryPolicy::default(),
            subscriber_capacity: 8,
        }
    }
}
