//! Registry configuration.

/// Construction-time settings for a [`Registry`].
///
/// # Example
///
/// ```rust,ignore
/// let config = RegistryConfig::default().with_seed(7);
/// let registry = Registry::with_config(config);
/// ```
///
/// [`Registry`]: crate::registry::Registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    /// Seed for the uniform selector. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RegistryConfig {
    /// Create the default configuration (unseeded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selector so dispatch sequences are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
