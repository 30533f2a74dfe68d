//! Tether - Anchored shuffling in Rust
//!
//! Shuffle a sequence while keeping some items pinned in place and others
//! glued to a neighbor.
//!
//! # Example
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let mut shuffler = Shuffler::new();
//! shuffler.add("first", AnchorKind::Position);
//! shuffler.add("second", AnchorKind::None);
//! shuffler.add("third", AnchorKind::None);
//!
//! let values = shuffler.shuffled_values(3);
//! assert_eq!(*values[0], "first");
//! ```

// Core types
pub use tether_core::{AnchorKind, Result, SeedError, Slot, TetherError};

// Shuffle engine
pub use tether_shuffle::{
    generate_seed, generate_seed_from, AnchorGraph, OsSeedSource, SeedSource, Shuffler,
};

// Configuration
pub use tether_config::{ConfigError, ItemConfig, ShuffleConfig};

#[cfg(feature = "console")]
pub use tether_console as console;

mod run;
pub use run::{run_shuffle, run_shuffle_with, ShuffleOutcome};

pub mod prelude {
    pub use super::{generate_seed, AnchorKind, ShuffleConfig, Shuffler, Slot};
    pub use super::{run_shuffle, ShuffleOutcome};
}
