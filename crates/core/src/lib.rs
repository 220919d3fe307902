//! twig-core: In-process hierarchical event registry
//!
//! This crate provides:
//! - Dot-delimited event paths with branch matching (`aaa` covers `aaa.bbb`)
//! - A synchronous registry that fires a whole branch, deepest path first
//! - Once subscriptions, in-place callback replacement, subtree removal
//! - A report-and-continue diagnostics sink for refused operations
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use twig_core::EventRegistry;
//!
//! let events: EventRegistry<u32> = EventRegistry::new();
//! let fired = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = Rc::clone(&fired);
//! events.on("turbo", move |path: &str, n: &u32| log.borrow_mut().push(format!("{path}:{n}")));
//! let log = Rc::clone(&fired);
//! events.one("turbo.diesel", move |path: &str, n: &u32| log.borrow_mut().push(format!("{path}:{n}")));
//!
//! assert!(events.trigger("turbo", &7));
//! assert_eq!(*fired.borrow(), vec!["turbo.diesel:7", "turbo:7"]);
//! assert_eq!(events.names(), vec!["turbo"]);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;

// Re-exports
pub use config::{Normalization, RegistryConfig};
pub use diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::{ConfigError, RegistryError};
pub use events::{path, Cascade, EventRegistry, SubscriptionState};

#[cfg(any(test, feature = "test-support"))]
pub use diagnostics::RecordingDiagnostics;
