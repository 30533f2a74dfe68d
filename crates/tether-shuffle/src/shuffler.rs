//! Anchored shuffler.
//!
//! Items are appended with an anchor, then shuffled with a seed. Shuffling
//! returns slot indices in output order; the helpers map them back to the
//! stored values.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use tether_core::{AnchorKind, Slot};

use crate::graph::AnchorGraph;

/// Shuffles a sequence of items while honoring their anchors.
///
/// Distribution over the valid orderings is not uniform: the walk favors
/// free items drawn early from the random permutation. Only the anchors are
/// guaranteed.
///
/// # Example
///
/// ```
/// use tether_core::AnchorKind;
/// use tether_shuffle::Shuffler;
///
/// let mut shuffler = Shuffler::new();
/// shuffler.add(100, AnchorKind::None);
/// shuffler.add(200, AnchorKind::Position);
/// shuffler.add(300, AnchorKind::None);
///
/// let values = shuffler.shuffled_values(7);
/// assert_eq!(*values[1], 200);
/// ```
#[derive(Debug, Clone)]
pub struct Shuffler<T> {
    values: Vec<T>,
    anchors: Vec<AnchorKind>,
    graph: AnchorGraph,
}

impl<T> Default for Shuffler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Shuffler<T> {
    /// Creates an empty shuffler.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            anchors: Vec::new(),
            graph: AnchorGraph::new(),
        }
    }

    /// Creates an empty shuffler with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            anchors: Vec::with_capacity(capacity),
            graph: AnchorGraph::new(),
        }
    }

    /// Appends an item at the next slot.
    pub fn add(&mut self, value: T, anchor: AnchorKind) -> Slot {
        self.values.push(value);
        self.anchors.push(anchor);
        self.graph.push(anchor)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no item has been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value stored at `slot`.
    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.values.get(slot)
    }

    /// Returns the anchor the item at `slot` was added with.
    pub fn anchor(&self, slot: Slot) -> Option<AnchorKind> {
        self.anchors.get(slot).copied()
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the anchor graph.
    pub fn graph(&self) -> &AnchorGraph {
        &self.graph
    }

    /// Drops anchors that cannot be honored. See [`AnchorGraph::resolve`].
    pub fn resolve(&mut self) -> usize {
        self.graph.resolve()
    }

    /// Resolves anchors, then lays out slots following `order`.
    /// See [`AnchorGraph::arrange`].
    ///
    /// `order` plays the role of the random source and must be a
    /// permutation of `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of `0..len`.
    pub fn arrange(&mut self, order: &[Slot]) -> Vec<Slot> {
        self.graph.arrange(order)
    }

    /// Shuffles the items using `seed`, returning slot indices in output order.
    ///
    /// The same seed always yields the same order for the same items.
    pub fn shuffle(&mut self, seed: u64) -> Vec<Slot> {
        let removed = self.resolve();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<Slot> = (0..self.len()).collect();
        order.shuffle(&mut rng);
        trace!(event = "permutation", order = ?order);

        let slots = self.graph.arrange(&order);
        debug!(
            event = "shuffle",
            slots = self.len(),
            seed,
            anchors_removed = removed,
        );
        slots
    }

    /// Shuffles the items using `seed`, returning references to the values.
    pub fn shuffled_values(&mut self, seed: u64) -> Vec<&T> {
        let slots = self.shuffle(seed);
        slots.into_iter().map(|slot| &self.values[slot]).collect()
    }

    /// Consumes the shuffler, returning its values in shuffled order.
    pub fn into_shuffled(mut self, seed: u64) -> Vec<T> {
        let slots = self.shuffle(seed);
        let mut taken: Vec<Option<T>> = self.values.into_iter().map(Some).collect();
        slots
            .into_iter()
            .filter_map(|slot| taken[slot].take())
            .collect()
    }
}

impl<T> FromIterator<(T, AnchorKind)> for Shuffler<T> {
    fn from_iter<I: IntoIterator<Item = (T, AnchorKind)>>(iter: I) -> Self {
        let mut shuffler = Shuffler::new();
        shuffler.extend(iter);
        shuffler
    }
}

impl<T> Extend<(T, AnchorKind)> for Shuffler<T> {
    fn extend<I: IntoIterator<Item = (T, AnchorKind)>>(&mut self, iter: I) {
        for (value, anchor) in iter {
            self.add(value, anchor);
        }
    }
}
