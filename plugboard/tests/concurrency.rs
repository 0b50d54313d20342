//! Registry shared across threads.

use plugboard::{Registry, testing::CountingHandler};
use std::{sync::Arc, thread};

mod common;
use common::say_hello;

#[test]
fn test_concurrent_register_and_dispatch() {
    let registry = Arc::new(Registry::new());
    registry.register("seed", say_hello).unwrap();
    let counter = CountingHandler::new();

    thread::scope(|scope| {
        for worker in 0..4 {
            let registry = registry.clone();
            let counter = counter.clone();
            scope.spawn(move || {
                for i in 0..50 {
                    registry
                        .register(format!("w{worker}-{i}"), counter.clone())
                        .unwrap();
                    registry.dispatch_random("Kevin").unwrap();
                }
            });
        }
    });

    assert_eq!(registry.len(), 1 + 4 * 50);
    assert!(counter.count() <= 4 * 50);
}

#[test]
fn test_handler_may_use_registry() {
    let registry = Arc::new(Registry::new());
    registry.register("hello", say_hello).unwrap();

    let inner = Arc::downgrade(&registry);
    let _relay = registry
        .register("relay", move |input: &str| match inner.upgrade() {
            Some(registry) => registry
                .dispatch("hello", input)
                .unwrap_or_else(|err| err.to_string()),
            None => String::new(),
        })
        .unwrap();

    assert_eq!(registry.dispatch("relay", "Kevin").unwrap(), "Hello Kevin");
}
