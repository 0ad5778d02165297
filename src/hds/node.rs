//! Search nodes and the frontier that holds them.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::config::Exploration;

/// A partial path in the branch & bound tree.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub path: Vec<usize>,
    pub visited: Vec<bool>,
    /// Length of `path` without a closing edge.
    pub cost: f64,
    pub bound: f64,
    /// Creation order, the last tie-breaker.
    pub seq: u64,
}

/// "Greater" means "expand first": smaller bound, then deeper path, then
/// earlier creation.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .total_cmp(&self.bound)
            .then_with(|| self.path.len().cmp(&other.path.len()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// Live nodes awaiting expansion.
pub(crate) enum Frontier {
    BestFirst(BinaryHeap<SearchNode>),
    DepthFirst(Vec<SearchNode>),
}

impl Frontier {
    pub fn new(exploration: Exploration) -> Self {
        match exploration {
            Exploration::BestFirst => Self::BestFirst(BinaryHeap::new()),
            Exploration::DepthFirst => Self::DepthFirst(Vec::new()),
        }
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        match self {
            Self::BestFirst(heap) => heap.pop(),
            Self::DepthFirst(stack) => stack.pop(),
        }
    }

    /// Adds the children of one expansion.
    pub fn extend(&mut self, mut children: Vec<SearchNode>) {
        match self {
            Self::BestFirst(heap) => heap.extend(children),
            Self::DepthFirst(stack) => {
                // Ascending order puts the most promising child on top.
                children.sort();
                stack.extend(children);
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::BestFirst(heap) => heap.len(),
            Self::DepthFirst(stack) => stack.len(),
        }
    }
}
