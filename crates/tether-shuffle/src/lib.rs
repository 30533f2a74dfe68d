//! Tether Shuffle Engine
//!
//! This crate provides the anchored shuffler:
//! - [`AnchorGraph`] recording adjacency and position anchors per slot
//! - [`Shuffler`] building, resolving and permuting a sequence of items
//! - Seed generation from the operating system's secure source
//!
//! # Example
//!
//! ```
//! use tether_core::AnchorKind;
//! use tether_shuffle::Shuffler;
//!
//! let mut shuffler = Shuffler::new();
//! shuffler.add("intro", AnchorKind::Position);
//! shuffler.add("red", AnchorKind::None);
//! shuffler.add("green", AnchorKind::None);
//! shuffler.add("blue", AnchorKind::ToPrevious);
//!
//! let order = shuffler.shuffle(42);
//! assert_eq!(order[0], 0);
//!
//! // "blue" always directly follows "green"
//! let green = order.iter().position(|&slot| slot == 2).unwrap();
//! assert_eq!(order[green + 1], 3);
//! ```

pub mod graph;
pub mod seed;
pub mod shuffler;


pub use graph::AnchorGraph;
pub use seed::{generate_seed, generate_seed_from, OsSeedSource, SeedSource};
pub use shuffler::Shuffler;
