//! Card Shuffles Example
//!
//! Shuffles a list of card shuffling techniques where some entries are
//! pinned in place and others stick to a neighbor.
//!
//! Pass a TOML deck file as the first argument to shuffle that instead.

use std::process::ExitCode;

use tether::prelude::*;

/// Lightly edited list of card shuffles.
fn default_deck() -> ShuffleConfig {
    ShuffleConfig::new()
        .with_item("Chemmy", AnchorKind::None) // None will be shuffled
        .with_item("Corgi", AnchorKind::None)
        .with_item("Faro", AnchorKind::None)
        .with_item("Indian", AnchorKind::None)
        .with_item("Irish", AnchorKind::ToPrevious) // sticks to Indian
        .with_item("Mexican", AnchorKind::ToPrevious) // anchors can be chained
        .with_item("Mongean", AnchorKind::None)
        .with_item("Overhand", AnchorKind::Position) // keeps its spot
        .with_item("Pile", AnchorKind::None)
        .with_item("Riffle", AnchorKind::None)
        .with_item("Stripping", AnchorKind::ToNext) // sticks to Wash
        .with_item("Wash", AnchorKind::None)
        .with_item("Weave", AnchorKind::Position)
}

fn main() -> ExitCode {
    tether::console::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ShuffleConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => default_deck(),
    };

    println!("Sorted list of shuffles:");
    for (slot, item) in config.items.iter().enumerate() {
        println!("{:>3} {:<12} {}", slot, item.value, item.anchor);
    }

    let outcome = match run_shuffle(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Shuffle failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("\nShuffled list of shuffles (seed {}):", outcome.seed);
    for (slot, value) in outcome.slots.iter().zip(&outcome.values) {
        println!("{:>3} {}", slot, value);
    }

    ExitCode::SUCCESS
}
