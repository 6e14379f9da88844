//! # Weather subscribers.
//!
//! This module provides the [`Subscribe`] trait, the ordered [`SubscriberSet`]
//! used by [`SubscriptionBus`](crate::SubscriptionBus), and built-in subscribers.
//!
//! ## Architecture
//! ```text
//! set_measurements(t, h, p)
//!   └─► SubscriptionBus ──► SubscriberSet::emit(&WeatherSample)
//!                               │   (registration order, caller's thread)
//!                               ├──► Subscribe::update  ─► CurrentConditions
//!                               ├──► Subscribe::update  ─► LogWriter (feature `logging`)
//!                               └──► Subscribe::update  ─► Custom ...
//!                                        └─ panic caught → PatternError::DeliveryFailed
//! ```

mod conditions;
#[cfg(feature = "logging")]
mod log;
mod set;
mod subscriber;

pub use conditions::CurrentConditions;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub(crate) use set::Delivery;
pub use set::{SubscriberId, SubscriberSet};
pub use subscriber::Subscribe;
