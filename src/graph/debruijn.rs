// src/graph/debruijn.rs
use ahash::AHashMap;
use tracing::{debug, info};

use crate::error::{AssemblyError, Result};
use crate::kmer::kmer::{kmer_windows, split_kmer};

/// Interned node index. Ids are assigned in first-seen order, which keeps
/// every iteration over the graph independent of hash ordering.
pub type NodeId = usize;

/// De Bruijn multigraph over (k-1)-mer labels.
///
/// Each node owns an unordered multiset of destination ids; a destination
/// appearing twice is an edge of multiplicity two. Edges are only ever added
/// during construction and removed during traversal.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    labels: Vec<String>,
    index: AHashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl DeBruijnGraph {
    /// Empty graph for k-mers of length `k`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            labels: Vec::new(),
            index: AHashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Builds the graph from raw reads: every window of `k` characters of
    /// every read adds one edge from its prefix to its suffix. Reads shorter
    /// than `k` contribute nothing. Characters are not validated or
    /// normalized; non-ASCII characters are carried through intact.
    pub fn build<S: AsRef<str>>(reads: &[S], k: usize) -> Result<Self> {
        if k < 2 {
            return Err(AssemblyError::InvalidK(k));
        }

        let mut graph = Self::new(k);
        let mut skipped = 0usize;
        for read in reads {
            if graph.add_read(read.as_ref()) == 0 {
                skipped += 1;
            }
        }

        if graph.edge_count == 0 {
            return Err(AssemblyError::EmptyGraph);
        }

        if skipped > 0 {
            debug!("{} reads shorter than k={} contributed no edges", skipped, k);
        }
        info!(
            "Built De Bruijn graph: {} nodes, {} edges (k={})",
            graph.num_nodes(),
            graph.num_edges(),
            k
        );
        Ok(graph)
    }

    /// Adds the edges of a single read, returning how many were added.
    pub fn add_read(&mut self, read: &str) -> usize {
        let mut added = 0;
        for kmer in kmer_windows(read, self.k) {
            let (prefix, suffix) = split_kmer(kmer);
            let from = self.get_or_insert(prefix);
            let to = self.get_or_insert(suffix);
            self.add_edge_by_id(from, to);
            added += 1;
        }
        added
    }

    /// Looks up a node, creating it with no outgoing edges if absent.
    pub fn get_or_insert(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.get_or_insert(from);
        let to = self.get_or_insert(to);
        self.add_edge_by_id(from, to);
    }

    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId) {
        self.adjacency[from].push(to);
        self.edge_count += 1;
    }

    /// Removes one instance of `from -> to`.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        match (self.node_id(from), self.node_id(to)) {
            (Some(f), Some(t)) => self.remove_edge_by_id(f, t),
            _ => Err(AssemblyError::EdgeNotFound {
                from: from.to_owned(),
                to: to.to_owned(),
            }),
        }
    }

    /// Removes one instance of `from -> to` by id. Order among parallel edges
    /// is irrelevant, so the matching slot is swapped out rather than shifted.
    pub fn remove_edge_by_id(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        let slot = self
            .adjacency
            .get(from)
            .and_then(|dests| dests.iter().position(|&d| d == to));
        match slot {
            Some(slot) => {
                self.adjacency[from].swap_remove(slot);
                self.edge_count -= 1;
                Ok(())
            }
            None => Err(self.edge_not_found(from, to)),
        }
    }

    /// Consumes the outgoing edge stored at `slot` of `from` in O(1) and
    /// returns its destination.
    pub fn take_edge(&mut self, from: NodeId, slot: usize) -> Result<NodeId> {
        match self.adjacency.get_mut(from) {
            Some(dests) if slot < dests.len() => {
                let to = dests.swap_remove(slot);
                self.edge_count -= 1;
                Ok(to)
            }
            _ => Err(AssemblyError::EdgeNotFound {
                from: self.labels.get(from).cloned().unwrap_or_default(),
                to: format!("<slot {}>", slot),
            }),
        }
    }

    fn edge_not_found(&self, from: NodeId, to: NodeId) -> AssemblyError {
        AssemblyError::EdgeNotFound {
            from: self.labels.get(from).cloned().unwrap_or_default(),
            to: self.labels.get(to).cloned().unwrap_or_default(),
        }
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id]
    }

    /// Labels of a tour, in order.
    pub fn labels_of(&self, tour: &[NodeId]) -> Vec<&str> {
        tour.iter().map(|&id| self.label(id)).collect()
    }

    /// Remaining destinations of `id`, one entry per edge instance.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    /// Remaining destination labels of `label`; empty for unknown nodes.
    pub fn successor_labels(&self, label: &str) -> Vec<&str> {
        self.node_id(label)
            .map(|id| self.successors(id).iter().map(|&d| self.label(d)).collect())
            .unwrap_or_default()
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.adjacency[id].len()
    }

    /// Number of remaining copies of `from -> to`.
    pub fn multiplicity(&self, from: &str, to: &str) -> usize {
        match (self.node_id(from), self.node_id(to)) {
            (Some(f), Some(t)) => self.adjacency[f].iter().filter(|&&d| d == t).count(),
            _ => 0,
        }
    }

    pub fn node_ids(&self) -> std::ops::Range<NodeId> {
        0..self.labels.len()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Remaining edges, counting multiplicity.
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn is_exhausted(&self) -> bool {
        self.edge_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::kmer::kmer_count;

    #[test]
    fn test_build_contains_first_prefix() {
        let graph = DeBruijnGraph::build(&["ATGGC", "TGGCA"], 4).unwrap();
        let id = graph.node_id("ATG").unwrap();
        assert!(graph.out_degree(id) >= 1);
        assert_eq!(graph.successor_labels("ATG"), vec!["TGG"]);
    }

    #[test]
    fn test_edge_count_matches_kmer_count() {
        let reads = ["ATGGCGTACG", "GCGTACGTTA", "ACG", "ACGTTACCAT", ""];
        let k = 6;
        let graph = DeBruijnGraph::build(&reads, k).unwrap();
        let expected: usize = reads.iter().map(|r| kmer_count(r.len(), k)).sum();
        assert_eq!(graph.num_edges(), expected);

        let summed: usize = graph.node_ids().map(|id| graph.out_degree(id)).sum();
        assert_eq!(summed, expected);
    }

    #[test]
    fn test_parallel_edges_keep_multiplicity() {
        let graph = DeBruijnGraph::build(&["AAAA"], 3).unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.multiplicity("AA", "AA"), 2);
    }

    #[test]
    fn test_short_reads_yield_empty_graph() {
        let err = DeBruijnGraph::build(&["ACG", "TT"], 4).unwrap_err();
        assert!(matches!(err, AssemblyError::EmptyGraph));
    }

    #[test]
    fn test_invalid_k() {
        let err = DeBruijnGraph::build(&["ACGT"], 1).unwrap_err();
        assert!(matches!(err, AssemblyError::InvalidK(1)));
    }

    #[test]
    fn test_alphabet_is_not_validated() {
        let graph = DeBruijnGraph::build(&["acNNx"], 3).unwrap();
        assert_eq!(graph.successor_labels("ac"), vec!["cN"]);
        assert_eq!(graph.multiplicity("NN", "Nx"), 1);
    }

    #[test]
    fn test_multibyte_read_counts_characters() {
        let graph = DeBruijnGraph::build(&["AAéCC"], 3).unwrap();
        assert_eq!(graph.num_edges(), kmer_count("AAéCC".chars().count(), 3));
        assert_eq!(graph.successor_labels("Aé"), vec!["éC"]);
        assert!(graph.node_ids().all(|id| !graph.label(id).contains('\u{FFFD}')));
    }

    #[test]
    fn test_get_or_insert_creates_empty_node() {
        let mut graph = DeBruijnGraph::new(4);
        let id = graph.get_or_insert("GGG");
        assert_eq!(graph.get_or_insert("GGG"), id);
        assert_eq!(graph.out_degree(id), 0);
        assert_eq!(graph.num_nodes(), 1);
        assert!(graph.is_exhausted());
    }

    #[test]
    fn test_remove_edge_decrements_by_one() {
        let mut graph = DeBruijnGraph::new(4);
        graph.add_edge("ATG", "TGG");
        graph.add_edge("ATG", "TGG");
        graph.add_edge("ATG", "TGC");

        graph.remove_edge("ATG", "TGG").unwrap();
        assert_eq!(graph.multiplicity("ATG", "TGG"), 1);
        assert_eq!(graph.multiplicity("ATG", "TGC"), 1);
        assert_eq!(graph.num_edges(), 2);

        graph.remove_edge("ATG", "TGG").unwrap();
        let err = graph.remove_edge("ATG", "TGG").unwrap_err();
        assert!(matches!(err, AssemblyError::EdgeNotFound { .. }));
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_remove_unknown_edge_fails() {
        let mut graph = DeBruijnGraph::new(3);
        assert!(graph.remove_edge("AC", "CG").is_err());
    }

    #[test]
    fn test_take_edge() {
        let mut graph = DeBruijnGraph::new(3);
        graph.add_edge("AC", "CG");
        let from = graph.node_id("AC").unwrap();
        let to = graph.take_edge(from, 0).unwrap();
        assert_eq!(graph.label(to), "CG");
        assert!(graph.is_exhausted());
        assert!(graph.take_edge(from, 0).is_err());
    }
}
