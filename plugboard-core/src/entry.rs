//! Named handler entries.

use crate::handler::SharedHandler;
use std::fmt;

/// A handler together with the name it is registered under.
///
/// Cloning an entry clones the `Arc`, not the handler.
#[derive(Clone)]
pub struct HandlerEntry {
    name: String,
    handler: SharedHandler,
}

impl HandlerEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, handler: SharedHandler) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// The registration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the handler.
    pub fn call(&self, input: &str) -> String {
        self.handler.call(input)
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
