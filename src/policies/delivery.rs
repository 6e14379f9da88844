//! # Delivery policies for publishers.
//!
//! [`DeliveryPolicy`] decides what a publisher does when a subscriber panics
//! in the middle of a notification round.
//!
//! ```text
//! DeliveryPolicy::Isolate   → catch, keep notifying the rest, report at the end (default)
//! DeliveryPolicy::FailFast  → catch, stop the round, report immediately
//! ```
//!
//! In both cases the caller receives `PatternError::DeliveryFailed`; a panic
//! never escapes the publisher and is never swallowed.

/// Policy controlling delivery after a subscriber panics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Keep notifying the remaining subscribers, then report every failure (default).
    #[default]
    Isolate,
    /// Stop at the first failure; later subscribers miss this round.
    FailFast,
}

impl DeliveryPolicy {
    /// Whether delivery continues after a failure.
    #[inline]
    pub fn continues_after_failure(self) -> bool {
        matches!(self, DeliveryPolicy::Isolate)
    }
}
