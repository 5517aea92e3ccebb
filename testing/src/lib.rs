//! # Statefold Testing
//!
//! Testing utilities for the Statefold architecture.
//!
//! The centerpiece is [`ReducerTest`], a fluent Given-When-Then harness for
//! reducer unit tests: seed a state, apply one or more actions, assert on
//! the result.

pub use reducer_test::ReducerTest;

/// Ergonomic testing harness for reducers
pub mod reducer_test;
