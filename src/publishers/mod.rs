//! Weather publishers: two flavours of the observer pattern.
//!
//! ## Contents
//! - [`SubscriptionBus`] explicit subscriber objects behind the [`Publisher`] trait
//! - [`EventChannel`] bare callbacks with copy-on-notify snapshots
//!
//! Both build a fresh [`WeatherSample`](crate::WeatherSample) per notification,
//! deliver synchronously on the caller's thread and honour the
//! [`DeliveryPolicy`](crate::DeliveryPolicy) from their [`Config`](crate::Config).

mod bus;
mod channel;

use std::sync::Arc;

use crate::error::PatternError;
use crate::subscribers::{Subscribe, SubscriberId};

pub use bus::SubscriptionBus;
pub use channel::{Callback, EventChannel, HandlerId};

/// Publisher side of the subscriber-list observer.
///
/// Lets a subscriber register itself without knowing the concrete publisher,
/// e.g. [`CurrentConditions::attach`](crate::CurrentConditions::attach).
pub trait Publisher {
    /// Registers a subscriber for future notifications.
    fn add_subscriber(&mut self, subscriber: Arc<dyn Subscribe>) -> SubscriberId;

    /// Unregisters the first registration of `subscriber`; no-op if absent.
    fn remove_subscriber(&mut self, subscriber: &Arc<dyn Subscribe>) -> bool;

    /// Pushes the current state to every subscriber.
    fn notify_subscribers(&self) -> Result<(), PatternError>;
}
