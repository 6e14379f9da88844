//! # patternbook
//!
//! **patternbook** is a small collection of classic object-oriented design
//! patterns, written the way they are usually expressed in Rust.
//!
//! The components are independent; none calls another.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Observer (subscriber list)              Observer (callbacks)
//! ┌───────────────────────────────┐      ┌───────────────────────────────┐
//! │ SubscriptionBus               │      │ EventChannel                  │
//! │  - current: WeatherSample     │      │  - RwLock<Arc<[Handler]>>     │
//! │  - SubscriberSet (ordered)    │      │    (copy-on-write snapshot)   │
//! └──────┬────────────────────────┘      └──────┬────────────────────────┘
//!        │ Subscribe::update(&sample)           │ callback(&sample)
//!        ▼                                      ▼
//!   CurrentConditions, LogWriter, ...      any Fn(&WeatherSample)
//!        └──── panic caught → PatternError::DeliveryFailed (per DeliveryPolicy)
//!
//!  Open/Closed                               Singleton
//! ┌───────────────────────────────┐      ┌───────────────────────────────┐
//! │ Specification<T>              │      │ LazySingleton<T>              │
//! │  ColorSpecification           │      │  Uninitialized → Initializing │
//! │  SizeSpecification            │      │  → Initialized (lock-free     │
//! │  AndSpecification (&&)        │      │    fast path after init)      │
//! │ filter(items, &spec) (lazy)   │      │ Singleton::instance()         │
//! └───────────────────────────────┘      └───────────────────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------|---------------------------------------------|
//! | **Observer**      | Push weather samples to registered subscribers.              | [`SubscriptionBus`], [`Subscribe`]          |
//! | **Callbacks**     | Multicast callbacks with snapshot-on-notify.                 | [`EventChannel`]                            |
//! | **Specification** | Composable predicates and a lazy filter.                     | [`Specification`], [`filter`]               |
//! | **Singleton**     | Thread-safe lazy construction, exactly once.                 | [`LazySingleton`], [`Singleton`]            |
//! | **Errors**        | Typed errors for bad input and failed deliveries.            | [`PatternError`]                            |
//! | **Configuration** | Publisher settings.                                          | [`Config`], [`DeliveryPolicy`]              |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use patternbook::{
//!     filter, Color, ColorSpecification, CurrentConditions, EventChannel, Product, Singleton,
//!     Size, SubscriptionBus,
//! };
//!
//! // Observer
//! let mut bus = SubscriptionBus::new();
//! let display = CurrentConditions::attach(&mut bus);
//! bus.set_measurements(34.0, 80.0, 90.0)?;
//! assert_eq!(display.updates(), 1);
//!
//! // Callbacks
//! let channel = EventChannel::new();
//! channel.attach(|s| assert_eq!(s.pressure(), 90.0));
//! assert_eq!(channel.notify_displays(34.0, 80.0, 90.0)?, 1);
//!
//! // Specification
//! let products = [
//!     Product::new("Apple", "Fruit", Color::Red, Size::Small),
//!     Product::new("Tree", "Christmas Tree", Color::Green, Size::Medium),
//! ];
//! let red = ColorSpecification::new(Color::Red);
//! assert_eq!(filter(&products, &red).count(), 1);
//!
//! // Singleton
//! assert!(std::ptr::eq(Singleton::instance(), Singleton::instance()));
//! # Ok::<(), patternbook::PatternError>(())
//! ```
mod config;
mod error;
mod policies;
mod publishers;
mod singleton;
mod specs;
mod subscribers;
mod weather;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{PatternError, SubscriberFailure};
pub use policies::DeliveryPolicy;
pub use publishers::{Callback, EventChannel, HandlerId, Publisher, SubscriptionBus};
pub use singleton::{InitState, LazySingleton, Singleton};
pub use specs::{
    filter, AndSpecification, Color, ColorSpecification, Product, ProductFilter, Size,
    SizeSpecification, Specification,
};
pub use subscribers::{CurrentConditions, Subscribe, SubscriberId, SubscriberSet};
pub use weather::WeatherSample;

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
