//! Anchor graph for a sequence of slots.
//!
//! Adjacency anchors are stored as two maps keyed by the slot they attach to:
//!
//! - `before[s + 1] = s` when slot `s` is anchored [`AnchorKind::ToNext`]
//! - `after[s - 1] = s` when slot `s` is anchored [`AnchorKind::ToPrevious`]
//!
//! Following either map from a slot walks a chain of neighbors that must be
//! emitted together. Slots reached only through a chain carry a skip flag so
//! the permutation walk never places them on their own.
//!
//! # Examples
//!
//! ```
//! use tether_core::AnchorKind;
//! use tether_shuffle::AnchorGraph;
//!
//! let mut graph = AnchorGraph::new();
//! graph.push(AnchorKind::ToNext);     // 0 precedes 1
//! graph.push(AnchorKind::ToPrevious); // 1 follows 0
//! graph.resolve();
//!
//! // The mutual pair collapses to a single edge headed by slot 0.
//! assert!(!graph.is_skipped(0));
//! assert!(graph.is_skipped(1));
//! assert_eq!(graph.arrange(&[1, 0]), vec![0, 1]);
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

use tether_core::{AnchorKind, Slot};

/// Adjacency and position anchors for a sequence of slots.
#[derive(Debug, Clone, Default)]
pub struct AnchorGraph {
    len: usize,
    position: HashSet<Slot>,
    before: HashMap<Slot, Slot>,
    after: HashMap<Slot, Slot>,
    skip: HashSet<Slot>,
    // Slot 0 anchored to a predecessor that cannot exist.
    orphan_lead: Option<Slot>,
}

impl AnchorGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot with the given anchor and returns its index.
    ///
    /// No validation happens here; see [`AnchorGraph::resolve`].
    pub fn push(&mut self, anchor: AnchorKind) -> Slot {
        let slot = self.len;
        self.len += 1;

        match anchor {
            AnchorKind::Position => {
                self.position.insert(slot);
            }
            AnchorKind::ToPrevious => {
                match slot.checked_sub(1) {
                    Some(previous) => {
                        self.after.insert(previous, slot);
                    }
                    None => self.orphan_lead = Some(slot),
                }
                self.skip.insert(slot);
            }
            AnchorKind::ToNext => {
                self.before.insert(slot + 1, slot);
                self.skip.insert(slot);
            }
            AnchorKind::None | AnchorKind::Unknown(_) => {}
        }

        slot
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot has been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the slot keeps its original index.
    pub fn is_pinned(&self, slot: Slot) -> bool {
        self.position.contains(&slot)
    }

    /// Returns true if the slot is placed only through its chain head.
    pub fn is_skipped(&self, slot: Slot) -> bool {
        self.skip.contains(&slot)
    }

    /// Returns the slot that must appear immediately before `slot`.
    pub fn predecessor(&self, slot: Slot) -> Option<Slot> {
        self.before.get(&slot).copied()
    }

    /// Returns the slot that must appear immediately after `slot`.
    pub fn successor(&self, slot: Slot) -> Option<Slot> {
        self.after.get(&slot).copied()
    }

    /// Returns the chain of slots preceding `slot`, in output order.
    ///
    /// The farthest predecessor comes first.
    pub fn predecessors(&self, slot: Slot) -> Vec<Slot> {
        let mut chain = Vec::new();
        let mut current = slot;
        while let Some(previous) = self.predecessor(current) {
            if chain.len() == self.len {
                break;
            }
            chain.push(previous);
            current = previous;
        }
        chain.reverse();
        chain
    }

    /// Returns the chain of slots following `slot`, in output order.
    pub fn successors(&self, slot: Slot) -> Vec<Slot> {
        let mut chain = Vec::new();
        let mut current = slot;
        while let Some(next) = self.successor(current) {
            if chain.len() == self.len {
                break;
            }
            chain.push(next);
            current = next;
        }
        chain
    }

    /// Removes anchors that cannot be honored.
    ///
    /// - A [`AnchorKind::ToPrevious`] on the first slot or a
    ///   [`AnchorKind::ToNext`] on the last slot points past the sequence and
    ///   is dropped.
    /// - Mutual anchors (`A > B <`) collapse into the single edge `A B <`.
    /// - An adjacency anchor onto a pinned slot is dropped, since a pinned
    ///   slot is placed directly and never walks its chain.
    ///
    /// Every affected slot becomes free. Edges are only ever removed, so
    /// calling this repeatedly is harmless. Returns the number of edges removed.
    pub fn resolve(&mut self) -> usize {
        let mut removed = 0;

        if let Some(slot) = self.orphan_lead.take() {
            self.skip.remove(&slot);
            removed += 1;
            debug!(event = "anchor_resolved", reason = "dangling_previous", slot);
        }

        if let Some(slot) = self.before.remove(&self.len) {
            self.skip.remove(&slot);
            removed += 1;
            debug!(event = "anchor_resolved", reason = "dangling_next", slot);
        }

        let mut mutual: Vec<(Slot, Slot)> = self
            .after
            .iter()
            .filter(|&(from, to)| self.before.get(to) == Some(from))
            .map(|(&from, &to)| (from, to))
            .collect();
        mutual.sort_unstable();
        for (from, to) in mutual {
            self.before.remove(&to);
            self.skip.remove(&from);
            removed += 1;
            debug!(event = "anchor_resolved", reason = "mutual", slot = from, target = to);
        }

        let mut onto_pinned: Vec<Slot> = self
            .before
            .keys()
            .chain(self.after.keys())
            .copied()
            .filter(|target| self.position.contains(target))
            .collect();
        onto_pinned.sort_unstable();
        onto_pinned.dedup();
        for target in onto_pinned {
            for edges in [&mut self.before, &mut self.after] {
                if let Some(slot) = edges.remove(&target) {
                    self.skip.remove(&slot);
                    removed += 1;
                    debug!(event = "anchor_resolved", reason = "pinned_target", slot, target);
                }
            }
        }

        removed
    }

    /// Returns the full run a chain head places, in output order.
    ///
    /// The run covers consecutive slot indices.
    pub fn run(&self, head: Slot) -> Vec<Slot> {
        let mut run = self.predecessors(head);
        run.push(head);
        run.extend(self.successors(head));
        run
    }

    /// Resolves the graph, then lays out slots following `order`, a
    /// permutation of `0..len`.
    ///
    /// Returns slot indices in output order. Pinned slots land on their own
    /// index. Every other slot drawn from `order` heads a run: its
    /// predecessors, the slot, then its successors. Runs are packed in the
    /// order their heads are drawn, each into the first stretch of free
    /// indices long enough to hold it, so a run is never split by a pinned
    /// slot. Skipped slots in `order` are ignored since their chain head
    /// places them.
    ///
    /// When the draw order leaves a run with no stretch long enough, every
    /// run is instead packed back into the stretch it started in, still in
    /// draw order. That layout always fits.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not a permutation of `0..len`.
    pub fn arrange(&mut self, order: &[Slot]) -> Vec<Slot> {
        assert_eq!(
            order.len(),
            self.len,
            "order must hold exactly one entry per slot"
        );

        self.resolve();

        let runs: Vec<Vec<Slot>> = order
            .iter()
            .copied()
            .filter(|&slot| !self.is_skipped(slot) && !self.is_pinned(slot))
            .map(|head| self.run(head))
            .collect();

        let mut layout = Layout::new(self);
        if !layout.first_fit(&runs) {
            debug!(event = "arrange_fallback", runs = runs.len());
            layout = Layout::new(self);
            layout.in_place(&runs);
        }

        layout.finish()
    }
}

// Output buffer where pinned indices are filled up front.
struct Layout {
    out: Vec<Slot>,
    filled: Vec<bool>,
}

impl Layout {
    fn new(graph: &AnchorGraph) -> Self {
        let mut layout = Self {
            out: vec![0; graph.len()],
            filled: vec![false; graph.len()],
        };
        for slot in (0..graph.len()).filter(|&slot| graph.is_pinned(slot)) {
            layout.write(slot, &[slot]);
        }
        layout
    }

    // Places each run at the lowest index starting enough free room.
    fn first_fit(&mut self, runs: &[Vec<Slot>]) -> bool {
        for run in runs {
            match self.room_for(run.len()) {
                Some(start) => self.write(start, run),
                None => return false,
            }
        }
        true
    }

    // Packs each run into the stretch of free indices holding its own slots.
    fn in_place(&mut self, runs: &[Vec<Slot>]) {
        let mut stretch = vec![0; self.out.len()];
        for index in 1..stretch.len() {
            stretch[index] = if self.filled[index - 1] {
                index
            } else {
                stretch[index - 1]
            };
        }

        let mut next: Vec<usize> = (0..self.out.len()).collect();
        for run in runs {
            let Some(&first) = run.first() else {
                continue;
            };
            let start = stretch[first];
            self.write(next[start], run);
            next[start] += run.len();
        }
    }

    fn room_for(&self, len: usize) -> Option<usize> {
        let mut start = 0;
        for (index, &filled) in self.filled.iter().enumerate() {
            if filled {
                start = index + 1;
            } else if index + 1 - start == len {
                return Some(start);
            }
        }
        None
    }

    fn write(&mut self, start: usize, run: &[Slot]) {
        for (offset, &slot) in run.iter().enumerate() {
            debug_assert!(!self.filled[start + offset], "index {} written twice", start + offset);
            self.out[start + offset] = slot;
            self.filled[start + offset] = true;
        }
    }

    fn finish(self) -> Vec<Slot> {
        debug_assert!(
            self.filled.iter().all(|&filled| filled),
            "every index must be placed"
        );
        self.out
    }
}
