//! The closed set and its cost-relaxation walk.
//!
//! Unlike textbook A*, a closed node whose cost drops is not reopened.
//! Instead the improvement is pushed down through the children recorded when
//! it was expanded, so descendants that were reached through the old, dearer
//! route pick up the cheaper one in place.

use stepgrid_core::Point;

use crate::cost::step_cost;
use crate::pool::{NodeId, NodePool, NodeState};
use crate::traits::StepPather;

pub(crate) struct VisitedSet {
    closed: Vec<NodeId>,
    // worklist for `propagate_relaxation`
    stack: Vec<NodeId>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self {
            closed: Vec::new(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.closed.clear();
        self.stack.clear();
    }

    /// Mark a node just popped from the frontier as expanded.
    pub(crate) fn insert(&mut self, pool: &mut NodePool, id: NodeId) {
        pool[id].state = NodeState::Closed;
        self.closed.push(id);
    }

    /// The expanded node at `pos`, if any.
    #[inline]
    pub(crate) fn find(&self, pool: &NodePool, pos: Point) -> Option<NodeId> {
        pool.lookup(pos)
            .filter(|&id| pool[id].state == NodeState::Closed)
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.closed.len()
    }

    /// Push a cost reduction at `root` down through its recorded children.
    ///
    /// Depth-first over an explicit stack. A child is rerouted only when the
    /// step from its would-be parent is cheaper and passes `can_step`.
    pub(crate) fn propagate_relaxation<P: StepPather>(
        &mut self,
        pool: &mut NodePool,
        pather: &P,
        root: NodeId,
    ) {
        self.stack.clear();
        self.stack.push(root);
        while let Some(old) = self.stack.pop() {
            let old_pos = pool[old].pos;
            let old_g = pool[old].g;
            for i in 0..pool[old].children().len() {
                let child = pool[old].children()[i];
                let child_pos = pool[child].pos;
                let g = old_g + step_cost(old_pos, child_pos);
                if g < pool[child].g && pather.can_step(old_pos, child_pos) {
                    log::trace!("relaxed {child_pos} via {old_pos}: g {} -> {g}", pool[child].g);
                    pool[child].relax(old, g);
                    self.stack.push(child);
                }
            }
        }
    }
}
