//! The open set: discovered nodes waiting to be expanded.

use std::collections::VecDeque;

use stepgrid_core::Point;

use crate::pool::{NodeId, NodePool, NodeState};

/// Open nodes kept sorted by ascending `f`.
///
/// Insertion walks past every node whose `f` is not greater than the new
/// one, so nodes with equal `f` leave in the order they arrived. Lowering
/// the cost of a node already queued does not move it.
pub(crate) struct Frontier {
    order: VecDeque<NodeId>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }

    /// Queue an open node behind all nodes of lower or equal `f`.
    pub(crate) fn insert(&mut self, pool: &NodePool, id: NodeId) {
        debug_assert_eq!(pool[id].state, NodeState::Open);
        let f = pool[id].f;
        let at = self
            .order
            .iter()
            .position(|&queued| pool[queued].f > f)
            .unwrap_or(self.order.len());
        self.order.insert(at, id);
    }

    /// Remove the head of the queue (lowest `f`, earliest among equals).
    #[inline]
    pub(crate) fn pop_cheapest(&mut self) -> Option<NodeId> {
        self.order.pop_front()
    }

    /// The open node at `pos`, if any.
    #[inline]
    pub(crate) fn find(&self, pool: &NodePool, pos: Point) -> Option<NodeId> {
        pool.lookup(pos)
            .filter(|&id| pool[id].state == NodeState::Open)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}
