//! Tether Core - Core types for anchored shuffling
//!
//! This crate provides the vocabulary shared by the Tether crates:
//! - [`AnchorKind`] describing how a slot is held in place
//! - [`Slot`] positional indices assigned at insertion time
//! - Error types for seed generation and the facade

pub mod anchor;
pub mod error;

pub use anchor::{AnchorKind, Slot};
pub use error::{Result, SeedError, TetherError};
