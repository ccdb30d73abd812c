// src/graph/walker.rs
use rand::Rng;

use crate::error::Result;
use crate::graph::debruijn::{DeBruijnGraph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    /// Still at `node`, edges may remain.
    Active(NodeId),
    /// Stuck at `node`, which terminates the trail.
    Done(NodeId),
}

/// Consumes edges of a graph one randomized trail at a time.
///
/// A walk leaves each node over a uniformly chosen remaining edge until it
/// reaches a node with no outgoing edges. There is no splicing of detours,
/// so a single walk may strand edges of its component; those are picked up
/// by later walks as separate, shorter trails.
pub struct EulerianWalker<'a, R: Rng + ?Sized> {
    graph: &'a mut DeBruijnGraph,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> EulerianWalker<'a, R> {
    pub fn new(graph: &'a mut DeBruijnGraph, rng: &'a mut R) -> Self {
        Self { graph, rng }
    }

    /// Walks from `start` until stuck and returns the visited nodes in
    /// start-to-end order. Every step draws exactly once from the rng.
    ///
    /// Frames of nodes still waiting for their tail are kept on an explicit
    /// stack, so trail length is not bounded by the call stack.
    pub fn walk(&mut self, start: NodeId) -> Result<Vec<NodeId>> {
        let mut pending: Vec<NodeId> = Vec::new();
        let mut state = WalkState::Active(start);

        let end = loop {
            match state {
                WalkState::Active(node) => {
                    let degree = self.graph.out_degree(node);
                    if degree == 0 {
                        state = WalkState::Done(node);
                        continue;
                    }
                    let slot = self.rng.gen_range(0..degree);
                    let next = self.graph.take_edge(node, slot)?;
                    pending.push(node);
                    state = WalkState::Active(next);
                }
                WalkState::Done(node) => break node,
            }
        };

        // Unwinding prepends each pending node to the tail, which is the
        // frames in push order followed by the terminal node.
        let mut tour = pending;
        tour.push(end);
        Ok(tour)
    }
}
