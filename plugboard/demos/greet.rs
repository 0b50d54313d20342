//! Registers a few greeters and lets the registry pick one at random.
//!
//! Run with `RUST_LOG=debug` to see registration and dispatch events.

use plugboard::{Handler, LoggingHandler, PlugboardError, Registry, plugin};
use tracing_subscriber::EnvFilter;

#[plugin]
fn say_hello(name: &str) -> String {
    format!("Hello {name}")
}

#[plugin(name = "greet")]
fn yo(name: &str) -> String {
    format!("Yo {name}")
}

fn be_awesome(name: &str) -> String {
    format!("You are awesome, {name}")
}

fn main() -> Result<(), PlugboardError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = Registry::collected()?;

    // Annotated functions stay ordinary functions.
    println!("{}", say_hello("Kevin"));

    let be_awesome =
        registry.register("be_awesome", LoggingHandler::named("be_awesome", be_awesome))?;
    println!("{}", be_awesome.call("Kevin"));

    let entry = registry.choose()?;
    println!("Using function: {}", entry.name());
    println!("{}", entry.call("Kevin"));

    let greet = registry.get("greet")?;
    let shout = (move |name: &str| greet.call(name)).map(|out| out.to_uppercase());
    println!("{}", shout.call("Kevin"));

    Ok(())
}
