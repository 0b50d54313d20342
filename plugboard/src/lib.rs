//! # plugboard - Name-to-Handler Registry
//!
//! `plugboard` keeps a table of named string handlers and dispatches to
//! them by name or uniformly at random.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plugboard::prelude::*;
//!
//! fn say_hello(name: &str) -> String {
//!     format!("Hello {name}")
//! }
//!
//! let registry = Registry::new();
//! // `register` hands the function back unchanged.
//! let say_hello = registry.register("say_hello", say_hello)?;
//! registry.register("greet", |name: &str| format!("Yo {name}"))?;
//!
//! let greeting = registry.dispatch_random("Kevin")?;
//! ```
//!
//! ## Registration by Annotation
//!
//! With the `macros` feature, `#[plugin]` registers a function at link time
//! under its own name:
//!
//! ```rust,ignore
//! #[plugboard::plugin]
//! fn say_hello(name: &str) -> String {
//!     format!("Hello {name}")
//! }
//!
//! let registry = Registry::collected()?;
//! assert!(registry.contains("say_hello"));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use plugboard_core::{
    // Handler
    Handler,
    HandlerEntry,
    Inspect,
    Map,
    // Error types
    PlugboardError,
    RegistryError,
    Repeat,
    SharedHandler,
};

// Registry
pub use plugboard_std::{
    config::RegistryConfig,
    logging::LoggingHandler,
    registry::{Registry, RegistryBuilder},
    select::{Selector, UniformSelector},
};

/// Selection strategies for random dispatch.
pub mod select {
    pub use plugboard_std::select::{Selector, UniformSelector};
}

/// Link-time handler collection.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use plugboard_std::collected::{PluginRegistration, register_collected, registrations};
}

/// Testing utilities.
pub mod testing {
    pub use plugboard_std::testing::{
        CountingHandler, FixedSelector, RecordingHandler, SequenceSelector,
    };
}

/// Prelude module - common imports for plugboard.
///
/// # Usage
///
/// ```rust,ignore
/// use plugboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Handler, HandlerEntry, PlugboardError, Registry, RegistryBuilder, RegistryConfig,
        RegistryError, SharedHandler,
    };
}

#[cfg(feature = "macros")]
pub use plugboard_macros::plugin;

#[cfg(feature = "inventory")]
pub use inventory;
