//! Shared test utilities for watchboard integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_upstream;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
