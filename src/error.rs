//! Error types shared by every pattern in the crate.
//!
//! - [`PatternError`] the single error enum returned by publishers and parsers.
//! - [`SubscriberFailure`] one panicked subscriber or callback inside a delivery.
//!
//! The enum provides helper methods (`as_label`, `as_message`) for logs/metrics.

use thiserror::Error;

/// A subscriber (or channel callback) that panicked while being notified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriberFailure {
    /// Subscriber name (`Subscribe::name`) or `handler#<id>` for channel callbacks.
    pub subscriber: String,
    /// Panic payload rendered as text.
    pub info: String,
}

/// # Errors produced by publishers and domain constructors.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Call-site input that cannot be turned into a domain value.
    #[error("invalid {what}: {value:?}")]
    InvalidArgument {
        /// What was being constructed (e.g. "color", "size").
        what: &'static str,
        /// The offending input.
        value: String,
    },

    /// One or more subscribers panicked during a notification round.
    #[error("{} subscriber(s) failed during delivery; notified {notified}", .failures.len())]
    DeliveryFailed {
        /// Every failure observed, in notification order.
        failures: Vec<SubscriberFailure>,
        /// How many subscribers returned normally.
        notified: usize,
    },
}

impl PatternError {
    pub(crate) fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        PatternError::InvalidArgument {
            what,
            value: value.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use patternbook::Color;
    ///
    /// let err = "purple".parse::<Color>().unwrap_err();
    /// assert_eq!(err.as_label(), "invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PatternError::InvalidArgument { .. } => "invalid_argument",
            PatternError::DeliveryFailed { .. } => "delivery_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PatternError::InvalidArgument { what, value } => {
                format!("invalid {what}: {value:?}")
            }
            PatternError::DeliveryFailed { failures, notified } => {
                let names: Vec<&str> = failures.iter().map(|f| f.subscriber.as_str()).collect();
                format!("delivery failed for {names:?}; notified={notified}")
            }
        }
    }

    /// Failures carried by a [`PatternError::DeliveryFailed`]; empty otherwise.
    pub fn failures(&self) -> &[SubscriberFailure] {
        match self {
            PatternError::DeliveryFailed { failures, .. } => failures,
            PatternError::InvalidArgument { .. } => &[],
        }
    }
}
