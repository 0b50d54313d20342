#![allow(dead_code)]

use plugboard::Handler;

// ============================================================================
// Test Handlers
// ============================================================================

pub fn say_hello(name: &str) -> String {
    format!("Hello {name}")
}

pub fn greet(name: &str) -> String {
    format!("Yo {name}")
}

pub fn be_awesome(name: &str) -> String {
    format!("You are awesome, {name}")
}

/// A handler with state, to check registration does not copy it away.
#[derive(Clone)]
pub struct Suffix {
    pub suffix: String,
}

impl Handler for Suffix {
    fn call(&self, input: &str) -> String {
        format!("{input}{}", self.suffix)
    }
}
