//! Error types for plugboard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PlugboardError`] - Top-level error type for all plugboard operations
//! - [`RegistryError`] - Errors from registration, lookup and dispatch

use thiserror::Error;

/// Top-level error type for all plugboard operations.
#[derive(Error, Debug)]
pub enum PlugboardError {
    /// An error occurred in a registry operation.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur while registering, looking up or dispatching handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Dispatch was attempted with zero registered entries.
    #[error("no handlers registered")]
    EmptyRegistry,

    /// No handler is registered under the given name.
    #[error("no handler registered under name: {0}")]
    NotFound(String),

    /// Registration was attempted with an unusable name or handler.
    #[error("invalid handler registration: {0}")]
    InvalidHandler(String),
}

impl RegistryError {
    /// Returns `true` for [`RegistryError::EmptyRegistry`].
    pub fn is_empty_registry(&self) -> bool {
        matches!(self, RegistryError::EmptyRegistry)
    }

    /// Returns `true` for [`RegistryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
