//! # Event channel: observer via a multicast callback list.
//!
//! [`EventChannel`] holds plain callbacks instead of subscriber objects. The
//! list is copy-on-write: every `attach`/`detach` swaps in a new `Arc<[_]>`,
//! and `notify_displays` clones the current `Arc` before invoking anything.
//!
//! ## Rules
//! - **Snapshot**: callbacks attached or detached during a notification take
//!   effect from the next notification on; the running one is unaffected.
//! - **No lock while invoking**: callbacks may call `attach`/`detach`/`dispose`
//!   on the same channel.
//! - **Empty channel**: `notify_displays` invokes nothing and returns `Ok(0)`.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use patternbook::{EventChannel, WeatherSample};
//!
//! let channel = EventChannel::new();
//! let last = Arc::new(Mutex::new(None));
//! let sink = Arc::clone(&last);
//! channel.attach(move |s: &WeatherSample| *sink.lock().unwrap() = Some(*s));
//!
//! assert_eq!(channel.notify_displays(34.0, 80.0, 90.0).unwrap(), 1);
//! assert_eq!(*last.lock().unwrap(), Some(WeatherSample::new(34.0, 80.0, 90.0)));
//!
//! channel.dispose();
//! assert_eq!(channel.notify_displays(1.0, 1.0, 1.0).unwrap(), 0);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::Config;
use crate::error::PatternError;
use crate::subscribers::Delivery;
use crate::weather::WeatherSample;

/// Callback signature accepted by [`EventChannel::attach`].
pub type Callback = Arc<dyn Fn(&WeatherSample) + Send + Sync>;

/// Global id counter for channel handlers.
static HANDLER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Handle returned by [`EventChannel::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.0)
    }
}

#[derive(Clone)]
struct Handler {
    id: HandlerId,
    callback: Callback,
}

/// Multicast callback list with copy-on-notify semantics.
pub struct EventChannel {
    handlers: RwLock<Arc<[Handler]>>,
    cfg: Config,
}

impl EventChannel {
    /// Creates an empty channel with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty channel with explicit configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        Self {
            handlers: RwLock::new(Arc::from(Vec::new())),
            cfg,
        }
    }

    /// Attaches a callback; it runs on every later notification.
    pub fn attach<F>(&self, callback: F) -> HandlerId
    where
        F: Fn(&WeatherSample) + Send + Sync + 'static,
    {
        let id = HandlerId(HANDLER_SEQ.fetch_add(1, Ordering::Relaxed));
        let handler = Handler {
            id,
            callback: Arc::new(callback),
        };
        self.replace(|current| {
            let cap = (current.len() + 1).max(self.cfg.subscriber_capacity);
            let mut next = Vec::with_capacity(cap);
            next.extend(current.iter().cloned());
            next.push(handler);
            next
        });
        id
    }

    /// Detaches a callback; `false` if it was not attached.
    pub fn detach(&self, id: HandlerId) -> bool {
        let mut removed = false;
        self.replace(|current| {
            let next: Vec<Handler> = current.iter().filter(|h| h.id != id).cloned().collect();
            removed = next.len() != current.len();
            next
        });
        removed
    }

    /// Detaches every callback; safe to call repeatedly.
    pub fn dispose(&self) {
        self.replace(|_| Vec::new());
    }

    /// Builds a sample and invokes a snapshot of the attached callbacks.
    ///
    /// Returns how many callbacks completed.
    ///
    /// # Errors
    /// [`PatternError::DeliveryFailed`] if any callback panicked.
    pub fn notify_displays(
        &self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<usize, PatternError> {
        let sample = WeatherSample::new(temperature, humidity, pressure);
        let snapshot = self.snapshot();

        let mut round = Delivery::new(self.cfg.delivery);
        for handler in snapshot.iter() {
            if !round.run(|| handler.id.to_string(), || (handler.callback)(&sample)) {
                break;
            }
        }
        round.finish()
    }

    /// Number of attached callbacks.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether no callback is attached.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn snapshot(&self) -> Arc<[Handler]> {
        Arc::clone(&self.handlers.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn replace(&self, build: impl FnOnce(&[Handler]) -> Vec<Handler>) {
        let mut guard = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        let next = build(&guard);
        *guard = Arc::from(next);
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}
