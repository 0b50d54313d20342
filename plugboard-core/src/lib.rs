//! # plugboard-core
//!
//! Core traits for the plugboard handler registry.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only defines handlers and does not need the registry itself.
//!
//! ## Handler
//!
//! A [`Handler`] takes one string input and returns one string output. Every
//! `Fn(&str) -> String` closure or function item is a handler, so plain
//! functions can be registered without any ceremony.
//!
//! Handlers compose through adapter methods ([`Handler::map`],
//! [`Handler::inspect`], [`Handler::repeat`]) that return new handlers
//! without touching the wrapped one.
//!
//! ## Entries
//!
//! A [`HandlerEntry`] pairs a handler with the name it was registered under.
//!
//! # Error Types
//!
//! - [`PlugboardError`] - Top-level error type
//! - [`RegistryError`] - Registration, lookup and dispatch errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod entry;
mod error;
mod handler;

// Re-exports
pub use entry::HandlerEntry;
pub use error::{PlugboardError, RegistryError};
pub use handler::{Handler, Inspect, Map, Repeat, SharedHandler};
