//! Shared test fixtures for Tether crates.
//!
//! This crate provides data types and pure functions for testing.
//! It does NOT depend on `tether-shuffle` to avoid circular dependencies.
//!
//! - [`notation`] - Compact string notation for anchored sequences
//! - [`cases`] - Named sequences with known valid outputs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tether-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use tether_test::notation::Notation;
//! use tether_test::cases::NOTATION_CASES;
//! ```

pub mod cases;
pub mod notation;

pub use cases::{choice_lists, NotationCase, NOTATION_CASES};
pub use notation::{Choice, Notation, NotationError};
