//! Fixed-capacity node arena for a single path search.
//!
//! Nodes refer to each other by [`NodeId`] (an index into the arena), so
//! parent and child links carry no lifetimes. The arena is cleared at the
//! start of each search and keeps its allocation between searches.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use stepgrid_core::Point;

/// A tile has at most eight neighbours, hence at most eight children.
pub(crate) const MAX_CHILDREN: usize = 8;

/// Index of a node in its [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which set a node currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// Discovered, waiting in the frontier.
    Open,
    /// Expanded; lives in the visited set.
    Closed,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) state: NodeState,
    children: [NodeId; MAX_CHILDREN],
    child_count: u8,
}

impl SearchNode {
    fn new(pos: Point, g: i32, h: i32, parent: Option<NodeId>) -> Self {
        Self {
            pos,
            g,
            h,
            f: g + h,
            parent,
            state: NodeState::Open,
            children: [NodeId(0); MAX_CHILDREN],
            child_count: 0,
        }
    }

    /// Reroute the node through `parent` at cost `g`, keeping `f = g + h`.
    #[inline]
    pub(crate) fn relax(&mut self, parent: NodeId, g: i32) {
        self.parent = Some(parent);
        self.g = g;
        self.f = g + self.h;
    }

    /// Record a forward edge.
    pub(crate) fn add_child(&mut self, child: NodeId) {
        let n = self.child_count as usize;
        debug_assert!(n < MAX_CHILDREN, "node at {} has more than 8 children", self.pos);
        if n < MAX_CHILDREN {
            self.children[n] = child;
            self.child_count += 1;
        }
    }

    #[inline]
    pub(crate) fn children(&self) -> &[NodeId] {
        &self.children[..self.child_count as usize]
    }
}

/// Arena of search nodes with a hard capacity and a position index.
pub(crate) struct NodePool {
    nodes: Vec<SearchNode>,
    capacity: usize,
    by_pos: HashMap<Point, NodeId>,
}

impl NodePool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
            by_pos: HashMap::with_capacity(capacity),
        }
    }

    /// Invalidate every node handed out so far.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.by_pos.clear();
    }

    /// Change the capacity. Takes effect immediately; callers reset first.
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.nodes.reserve(capacity.saturating_sub(self.nodes.len()));
    }

    /// Carve a fresh open node for `pos`, or `None` once the pool is full.
    ///
    /// A position may only be allocated once per search.
    pub(crate) fn allocate(
        &mut self,
        pos: Point,
        g: i32,
        h: i32,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        if self.nodes.len() >= self.capacity {
            return None;
        }
        debug_assert!(!self.by_pos.contains_key(&pos), "{pos} allocated twice");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(pos, g, h, parent));
        self.by_pos.insert(pos, id);
        Some(id)
    }

    /// The node holding `pos`, open or closed.
    #[inline]
    pub(crate) fn lookup(&self, pos: Point) -> Option<NodeId> {
        self.by_pos.get(&pos).copied()
    }

    /// Nodes allocated since the last reset.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Index<NodeId> for NodePool {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodePool {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }
}
