//! Delivery policies.
//!
//! ## Contents
//! - [`DeliveryPolicy`] what a publisher does when a subscriber panics (isolate / fail-fast)
//!
//! ## Quick wiring
//! ```text
//! Config { delivery: DeliveryPolicy, .. }
//!      └─► SubscriptionBus / EventChannel pass it to the fan-out loop
//! ```

mod delivery;

pub use delivery::DeliveryPolicy;
