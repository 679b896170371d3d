//! Shared test infrastructure.


pub use harness::{DEFAULT_CYCLES, TestContext, r};
