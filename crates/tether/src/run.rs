//! Shuffle entry point that hides all internal wiring.

use std::time::Instant;

use tracing::info;

use tether_config::ShuffleConfig;
use tether_core::{Result, Slot};
use tether_shuffle::{generate_seed_from, OsSeedSource, SeedSource, Shuffler};

/// Result of a configured shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOutcome {
    /// Seed the shuffle ran with. Feed it back to reproduce the order.
    pub seed: u64,
    /// Slot indices in output order.
    pub slots: Vec<Slot>,
    /// Item values in output order.
    pub values: Vec<String>,
}

/// Shuffles the configured items.
///
/// Uses the configured seed, or draws one from the operating system's
/// secure random source.
///
/// # Example
///
/// ```
/// use tether::prelude::*;
///
/// let config = ShuffleConfig::new()
///     .with_random_seed(11)
///     .with_item("Faro", AnchorKind::Position)
///     .with_item("Pile", AnchorKind::None)
///     .with_item("Wash", AnchorKind::None);
///
/// let outcome = run_shuffle(&config).unwrap();
/// assert_eq!(outcome.seed, 11);
/// assert_eq!(outcome.values[0], "Faro");
/// ```
pub fn run_shuffle(config: &ShuffleConfig) -> Result<ShuffleOutcome> {
    run_shuffle_with(config, &OsSeedSource)
}

/// Shuffles the configured items, drawing a missing seed from `source`.
pub fn run_shuffle_with<S>(config: &ShuffleConfig, source: &S) -> Result<ShuffleOutcome>
where
    S: SeedSource + ?Sized,
{
    config.validate()?;

    let seed = match config.random_seed {
        Some(seed) => seed,
        None => generate_seed_from(source)?,
    };

    let start = Instant::now();
    info!(event = "shuffle_start", slots = config.items.len(), seed);

    let mut shuffler: Shuffler<&str> = config
        .items
        .iter()
        .map(|item| (item.value.as_str(), item.anchor))
        .collect();
    let slots = shuffler.shuffle(seed);
    let values = slots
        .iter()
        .map(|&slot| config.items[slot].value.clone())
        .collect();

    info!(
        event = "shuffle_end",
        slots = slots.len(),
        duration_us = start.elapsed().as_micros() as u64,
    );

    Ok(ShuffleOutcome {
        seed,
        slots,
        values,
    })
}
