//! Procedural macros for plugboard.

use proc_macro::TokenStream;

mod plugin;

/// Register a function as a plugin handler.
///
/// The function is emitted unchanged and a registration is submitted for
/// link-time collection, so it remains directly callable while also showing
/// up in `Registry::collected()`.
///
/// # Usage
///
/// ```rust,ignore
/// // Registered under its own name, "say_hello"
/// #[plugboard::plugin]
/// fn say_hello(name: &str) -> String {
///     format!("Hello {name}")
/// }
///
/// // Registered under an explicit name
/// #[plugboard::plugin(name = "yo")]
/// fn greet(name: &str) -> String {
///     format!("Yo {name}")
/// }
/// ```
///
/// Requires the `macros` and `inventory` features of `plugboard`.
#[proc_macro_attribute]
pub fn plugin(attr: TokenStream, item: TokenStream) -> TokenStream {
    plugin::plugin_impl(attr, item)
}
