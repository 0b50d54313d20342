//! # Handler
//!
//! The callable stored in a registry: one string in, one string out.
//!
//! # Usage Patterns
//!
//! 1. **Function item**: `fn say_hello(name: &str) -> String`
//! 2. **Closure**: `|name: &str| format!("Yo {name}")`
//! 3. **Struct implementation**: `impl Handler for MyHandler`
//!
//! Adapters wrap a handler and are handlers themselves, so a wrapped handler
//! can be registered exactly like the original:
//!
//! ```rust,ignore
//! let shout = say_hello.map(|out| out.to_uppercase());
//! registry.register("shout", shout)?;
//! ```

use std::sync::Arc;

/// A handler shared between a registry and its callers.
pub type SharedHandler = Arc<dyn Handler>;

/// A callable taking one string input and returning one string output.
///
/// Handlers are immutable once registered; any state they carry must use
/// interior mutability and be safe to share across threads.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a plugboard `Handler`",
    label = "missing `Handler` implementation",
    note = "Handlers are `Fn(&str) -> String + Send + Sync + 'static` or implement `call` directly."
)]
pub trait Handler: Send + Sync + 'static {
    /// Invoke the handler.
    fn call(&self, input: &str) -> String;

    /// Transforms the output of this handler.
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        Map {
            handler: self,
            mapper,
        }
    }

    /// Observes each input and output without changing them.
    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        Inspect {
            handler: self,
            observer,
        }
    }

    /// Invokes this handler `times` times per call and returns the last output.
    ///
    /// The handler always runs at least once.
    fn repeat(self, times: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat {
            handler: self,
            times: times.max(1),
        }
    }

    /// Moves the handler behind an `Arc`.
    fn shared(self) -> SharedHandler
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

// Blanket impl for closures and function items
impl<F> Handler for F
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    fn call(&self, input: &str) -> String {
        (self)(input)
    }
}

/// Handler returned by [`Handler::map`].
#[derive(Clone)]
pub struct Map<H, F> {
    handler: H,
    mapper: F,
}

impl<H, F> Handler for Map<H, F>
where
    H: Handler,
    F: Fn(String) -> String + Send + Sync + 'static,
{
    fn call(&self, input: &str) -> String {
        (self.mapper)(self.handler.call(input))
    }
}

/// Handler returned by [`Handler::inspect`].
#[derive(Clone)]
pub struct Inspect<H, F> {
    handler: H,
    observer: F,
}

impl<H, F> Handler for Inspect<H, F>
where
    H: Handler,
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    fn call(&self, input: &str) -> String {
        let output = self.handler.call(input);
        (self.observer)(input, &output);
        output
    }
}

/// Handler returned by [`Handler::repeat`].
#[derive(Clone)]
pub struct Repeat<H> {
    handler: H,
    times: usize,
}

impl<H> Repeat<H> {
    /// Number of invocations per call.
    pub fn times(&self) -> usize {
        self.times
    }
}

impl<H: Handler> Handler for Repeat<H> {
    fn call(&self, input: &str) -> String {
        let mut output = self.handler.call(input);
        for _ in 1..self.times {
            output = self.handler.call(input);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    fn say_hello(name: &str) -> String {
        format!("Hello {name}")
    }

    struct Exclaim;

    impl Handler for Exclaim {
        fn call(&self, input: &str) -> String {
            format!("{input}!")
        }
    }

    #[test]
    fn test_function_item_is_handler() {
        assert_eq!(Handler::call(&say_hello, "Kevin"), "Hello Kevin");
    }

    #[test]
    fn test_struct_handler() {
        assert_eq!(Exclaim.call("wee"), "wee!");
    }

    #[test]
    fn test_map_transforms_output() {
        let handler = say_hello.map(|out| out.to_uppercase());
        assert_eq!(handler.call("Kevin"), "HELLO KEVIN");
    }

    #[test]
    fn test_inspect_sees_before_and_after() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler = say_hello.inspect(move |input, output| {
            sink.lock().unwrap().push((input.to_string(), output.to_string()));
        });

        assert_eq!(handler.call("Kevin"), "Hello Kevin");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("Kevin".to_string(), "Hello Kevin".to_string())]
        );
    }

    #[test]
    fn test_repeat_invokes_n_times() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handler = (move |input: &str| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            format!("{input} #{n}")
        })
        .repeat(4);

        assert_eq!(handler.call("Hello World"), "Hello World #4");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_repeat_zero_runs_once() {
        let handler = say_hello.repeat(0);
        assert_eq!(handler.times(), 1);
        assert_eq!(handler.call("Kevin"), "Hello Kevin");
    }

    #[test]
    fn test_shared_handler_calls_through() {
        let shared = Exclaim.map(|out| format!("<{out}>")).shared();
        assert_eq!(shared.call("yo"), "<yo!>");
    }
}
