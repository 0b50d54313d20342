//! # plugboard-std
//!
//! Standard implementations for the plugboard handler registry.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], [`RegistryBuilder`], [`RegistryConfig`]
//! - **Selection**: [`Selector`], [`UniformSelector`]
//! - **Standard handlers**: [`LoggingHandler`]
//! - **Link-time collection**: `collected` (with the `inventory` feature)
//! - **Testing utilities**: [`testing`]
//!
//! [`Registry`]: registry::Registry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`RegistryConfig`]: config::RegistryConfig
//! [`Selector`]: select::Selector
//! [`UniformSelector`]: select::UniformSelector
//! [`LoggingHandler`]: logging::LoggingHandler

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use plugboard_core;

// Modules
#[cfg(feature = "inventory")]
pub mod collected;
pub mod config;
pub mod logging;
pub mod registry;
pub mod select;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
