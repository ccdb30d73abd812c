// src/graph/start.rs
use rand::Rng;

use crate::error::{AssemblyError, Result};
use crate::graph::debruijn::{DeBruijnGraph, NodeId};

/// In/out degree of every node, taken in one pass over all adjacency lists.
#[derive(Debug, Clone)]
pub struct DegreeTable {
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
}

impl DegreeTable {
    pub fn from_graph(graph: &DeBruijnGraph) -> Self {
        let mut in_degree = vec![0; graph.num_nodes()];
        let mut out_degree = vec![0; graph.num_nodes()];
        for from in graph.node_ids() {
            let dests = graph.successors(from);
            out_degree[from] = dests.len();
            for &to in dests {
                in_degree[to] += 1;
            }
        }
        Self { in_degree, out_degree }
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.in_degree[id]
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.out_degree[id]
    }

    /// `out - in`; +1 marks a trail start, -1 a trail end.
    pub fn balance(&self, id: NodeId) -> isize {
        self.out_degree[id] as isize - self.in_degree[id] as isize
    }

    /// True when the given nodes satisfy the Eulerian trail or circuit
    /// degree conditions.
    pub fn admits_eulerian_trail(&self, nodes: &[NodeId]) -> bool {
        let mut starts = 0;
        let mut ends = 0;
        for &id in nodes {
            match self.balance(id) {
                0 => {}
                1 => starts += 1,
                -1 => ends += 1,
                _ => return false,
            }
        }
        starts <= 1 && ends <= 1
    }
}

/// Picks the node a walk over `component` should start from.
///
/// Computes degrees for the whole graph first; use [`select_start_with`] to
/// reuse a table across components.
pub fn select_start<R: Rng + ?Sized>(
    graph: &DeBruijnGraph,
    component: &[NodeId],
    rng: &mut R,
) -> Result<NodeId> {
    select_start_with(&DegreeTable::from_graph(graph), component, rng)
}

/// Prefers nodes with one more outgoing than incoming edge. When none exist
/// (circuit case) any node with a remaining outgoing edge qualifies. Several
/// candidates are broken with one uniform draw from `rng`; a single
/// candidate is returned without drawing.
pub fn select_start_with<R: Rng + ?Sized>(
    degrees: &DegreeTable,
    component: &[NodeId],
    rng: &mut R,
) -> Result<NodeId> {
    let mut candidates: Vec<NodeId> = component
        .iter()
        .copied()
        .filter(|&id| degrees.balance(id) == 1)
        .collect();

    if candidates.is_empty() {
        candidates = component
            .iter()
            .copied()
            .filter(|&id| degrees.out_degree(id) > 0)
            .collect();
    }

    match candidates.len() {
        0 => Err(AssemblyError::NoStartingNode),
        1 => Ok(candidates[0]),
        n => Ok(candidates[rng.gen_range(0..n)]),
    }
}
