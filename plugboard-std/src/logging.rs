//! Logging wrapper for handler observation.

use plugboard_core::Handler;

/// A handler that logs each call of the wrapped handler.
///
/// With the `tracing` feature disabled this is a transparent pass-through.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Registry::new();
/// registry.register("greet", LoggingHandler::named("greet", greet))?;
/// ```
#[derive(Clone)]
pub struct LoggingHandler<H> {
    name: &'static str,
    inner: H,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner` with the default label.
    pub fn new(inner: H) -> Self {
        Self {
            name: "handler",
            inner,
        }
    }

    /// Wrap `inner` with a custom label.
    pub fn named(name: &'static str, inner: H) -> Self {
        Self { name, inner }
    }

    /// The label used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Handler> Handler for LoggingHandler<H> {
    fn call(&self, input: &str) -> String {
        let output = self.inner.call(input);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, input, output = %output, "Handler invoked");
        }

        output
    }
}
