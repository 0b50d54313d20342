//! Link-time collection of annotated handlers via `inventory`.
//!
//! `#[plugin]` expands to an `inventory::submit!` of a
//! [`PluginRegistration`]; the registrations are gathered here and loaded
//! into a [`Registry`].

use crate::registry::{Registry, RegistryBuilder};
use plugboard_core::RegistryError;

/// A handler submitted for collection.
///
/// Submitted from a `static` context, so the handler is a plain function
/// pointer.
#[derive(Clone, Copy, Debug)]
pub struct PluginRegistration {
    /// Registration name.
    pub name: &'static str,
    /// The handler function.
    pub handler: fn(&str) -> String,
}

impl PluginRegistration {
    /// Create a new registration entry.
    pub const fn new(name: &'static str, handler: fn(&str) -> String) -> Self {
        Self { name, handler }
    }

    /// Invoke the registered function.
    pub fn call(&self, input: &str) -> String {
        (self.handler)(input)
    }
}

inventory::collect!(PluginRegistration);

/// All submitted registrations, sorted by name.
///
/// Submission order across object files is unspecified, so two plugins
/// sharing a name could not be resolved deterministically. Duplicates fail
/// with [`RegistryError::InvalidHandler`].
pub fn registrations() -> Result<Vec<&'static PluginRegistration>, RegistryError> {
    sort_unique(inventory::iter::<PluginRegistration>.into_iter().collect())
}

fn sort_unique(
    mut entries: Vec<&PluginRegistration>,
) -> Result<Vec<&PluginRegistration>, RegistryError> {
    entries.sort_by(|a, b| a.name.cmp(b.name));
    if let Some(pair) = entries.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(RegistryError::InvalidHandler(format!(
            "duplicate plugin name: {}",
            pair[0].name
        )));
    }
    Ok(entries)
}

/// Register every collected handler into `registry`.
///
/// Returns the number of registrations applied.
pub fn register_collected(registry: &Registry) -> Result<usize, RegistryError> {
    let entries = registrations()?;
    for entry in &entries {
        registry.register(entry.name, entry.handler)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = entries.len(), "Loaded collected handlers");

    Ok(entries.len())
}

impl Registry {
    /// Create a registry holding every `#[plugin]` handler in the binary.
    pub fn collected() -> Result<Self, RegistryError> {
        let registry = Self::new();
        register_collected(&registry)?;
        Ok(registry)
    }
}

impl RegistryBuilder {
    /// Add every `#[plugin]` handler in the binary.
    pub fn collected(self) -> Result<Self, RegistryError> {
        Ok(registrations()?
            .into_iter()
            .fold(self, |builder, entry| builder.register(entry.name, entry.handler)))
    }
}
