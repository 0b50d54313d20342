//! Name-to-handler registry with random and by-name dispatch.
//!
//! Entries are kept in first-insertion order. Registering a name again
//! replaces the handler in place (last write wins) and keeps the slot.

use crate::{
    config::RegistryConfig,
    select::{Selector, UniformSelector},
};
use indexmap::IndexMap;
use parking_lot::RwLock;
use plugboard_core::{Handler, HandlerEntry, RegistryError, SharedHandler};
use std::{fmt, sync::Arc};

/// A registry of named handlers.
///
/// The registry is `Send + Sync`; share it by reference or behind an `Arc`.
/// Handlers are invoked after the internal lock is released, so a handler
/// may itself use the registry.
///
/// # Example
///
/// ```rust,ignore
/// fn say_hello(name: &str) -> String {
///     format!("Hello {name}")
/// }
///
/// let registry = Registry::new();
/// let say_hello = registry.register("say_hello", say_hello)?;
/// assert_eq!(say_hello("Kevin"), "Hello Kevin");
/// assert_eq!(registry.dispatch_random("Kevin")?, "Hello Kevin");
/// ```
pub struct Registry {
    handlers: RwLock<IndexMap<String, SharedHandler>>,
    selector: Box<dyn Selector>,
}

impl Registry {
    /// Create an empty registry with an unseeded uniform selector.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry from a configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            handlers: RwLock::new(IndexMap::new()),
            selector: Box::new(UniformSelector::from_seed(config.seed)),
        }
    }

    /// Create an empty registry with a custom selection strategy.
    pub fn with_selector<S: Selector>(selector: S) -> Self {
        Self {
            handlers: RwLock::new(IndexMap::new()),
            selector: Box::new(selector),
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Register `handler` under `name` and hand it back unchanged.
    ///
    /// An existing entry under the same name is silently replaced.
    pub fn register<H>(&self, name: impl Into<String>, handler: H) -> Result<H, RegistryError>
    where
        H: Handler + Clone,
    {
        self.insert(name.into(), Arc::new(handler.clone()))?;
        Ok(handler)
    }

    /// Register an already shared handler and hand back the same `Arc`.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        handler: SharedHandler,
    ) -> Result<SharedHandler, RegistryError> {
        self.insert(name.into(), handler.clone())?;
        Ok(handler)
    }

    fn insert(&self, name: String, handler: SharedHandler) -> Result<(), RegistryError> {
        validate_name(&name)?;

        let mut handlers = self.handlers.write();
        #[cfg(feature = "tracing")]
        {
            if handlers.contains_key(&name) {
                tracing::debug!(name = %name, "Replacing registered handler");
            } else {
                tracing::debug!(name = %name, "Registering handler");
            }
        }
        handlers.insert(name, handler);
        Ok(())
    }

    /// Look up the handler registered under `name`.
    pub fn get(&self, name: &str) -> Result<SharedHandler, RegistryError> {
        self.handlers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Returns `true` if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.handlers.read().keys().cloned().collect()
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<HandlerEntry> {
        self.handlers
            .read()
            .iter()
            .map(|(name, handler)| HandlerEntry::new(name.clone(), handler.clone()))
            .collect()
    }

    /// Pick one entry using the registry's selector.
    pub fn choose(&self) -> Result<HandlerEntry, RegistryError> {
        let handlers = self.handlers.read();
        if handlers.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Dispatch attempted on an empty registry");
            return Err(RegistryError::EmptyRegistry);
        }

        // Out-of-range picks from a custom selector wrap around.
        let index = self.selector.select(handlers.len()) % handlers.len();
        let (name, handler) = handlers
            .get_index(index)
            .ok_or(RegistryError::EmptyRegistry)?;
        Ok(HandlerEntry::new(name.clone(), handler.clone()))
    }

    /// Invoke a randomly chosen handler with `input`.
    pub fn dispatch_random(&self, input: &str) -> Result<String, RegistryError> {
        let entry = self.choose()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name = entry.name(), input, "Dispatching to handler");
        Ok(entry.call(input))
    }

    /// Invoke the handler registered under `name` with `input`.
    pub fn dispatch(&self, name: &str, input: &str) -> Result<String, RegistryError> {
        let handler = self.get(name)?;
        Ok(handler.call(input))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::InvalidHandler(
            "handler name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Builder for constructing a [`Registry`] in one expression.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Registry::builder()
///     .register("say_hello", say_hello)
///     .register("greet", |name: &str| format!("Yo {name}"))
///     .seed(7)
///     .build()?;
/// ```
pub struct RegistryBuilder {
    entries: Vec<(String, SharedHandler)>,
    config: RegistryConfig,
    selector: Option<Box<dyn Selector>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            config: RegistryConfig::default(),
            selector: None,
        }
    }

    /// Register a handler.
    pub fn register<H: Handler>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.entries.push((name.into(), Arc::new(handler)));
        self
    }

    /// Register an already shared handler.
    pub fn register_shared(mut self, name: impl Into<String>, handler: SharedHandler) -> Self {
        self.entries.push((name.into(), handler));
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the default uniform selector.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use a custom selection strategy. Takes precedence over [`seed`](Self::seed).
    pub fn selector<S: Selector>(mut self, selector: S) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Build the registry.
    ///
    /// Fails with [`RegistryError::InvalidHandler`] if any name is empty.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let selector = match self.selector {
            Some(selector) => selector,
            None => Box::new(UniformSelector::from_seed(self.config.seed)),
        };
        let registry = Registry {
            handlers: RwLock::new(IndexMap::with_capacity(self.entries.len())),
            selector,
        };
        for (name, handler) in self.entries {
            registry.insert(name, handler)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn say_hello(name: &str) -> String {
        format!("Hello {name}")
    }

    fn greet(name: &str) -> String {
        format!("Yo {name}")
    }

    #[test]
    fn test_register_returns_handler_unchanged() {
        let registry = Registry::new();
        let returned = registry.register("say_hello", say_hello).unwrap();
        assert_eq!(returned("Kevin"), say_hello("Kevin"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_slot() {
        let registry = Registry::new();
        registry.register("a", say_hello).unwrap();
        registry.register("b", greet).unwrap();
        registry.register("a", greet).unwrap();

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.dispatch("a", "Kevin").unwrap(), "Yo Kevin");
    }

    #[test]
    fn test_empty_name_rejected() {
        let registry = Registry::new();
        assert!(matches!(
            registry.register("", say_hello),
            Err(RegistryError::InvalidHandler(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_choose_uses_selector() {
        let registry = Registry::with_selector(|len: usize| len - 1);
        registry.register("first", say_hello).unwrap();
        registry.register("second", greet).unwrap();

        let entry = registry.choose().unwrap();
        assert_eq!(entry.name(), "second");
        assert_eq!(entry.call("Kevin"), "Yo Kevin");
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let err = Registry::builder()
            .register("ok", say_hello)
            .register("", greet)
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidHandler(_)));
    }

    #[test]
    fn test_builder_last_write_wins() {
        let registry = Registry::builder()
            .register("x", say_hello)
            .register("x", greet)
            .build()
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.dispatch_random("Kevin").unwrap(), "Yo Kevin");
    }
}
