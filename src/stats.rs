use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, Result};
use crate::graph::debruijn::DeBruijnGraph;

/// Summary of a contig set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyStats {
    pub num_contigs: usize,
    pub total_length: usize,
    pub longest_contig: usize,
    pub shortest_contig: usize,
    pub mean_length: f64,
    /// Running length sum at the point it first reaches half the total,
    /// walking contigs from longest to shortest.
    pub n50: usize,
}

/// Size of a freshly built graph, captured before assembly consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub avg_out_degree: f64,
}

impl GraphSummary {
    pub fn of(graph: &DeBruijnGraph) -> Self {
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();
        let avg_out_degree = if num_nodes > 0 {
            num_edges as f64 / num_nodes as f64
        } else {
            0.0
        };
        Self {
            num_nodes,
            num_edges,
            avg_out_degree,
        }
    }
}

pub fn statistics<S: AsRef<str>>(contigs: &[S]) -> Result<AssemblyStats> {
    if contigs.is_empty() {
        return Err(AssemblyError::EmptyAssembly);
    }

    let lengths = sorted_lengths(contigs);
    let num_contigs = lengths.len();
    let total_length: usize = lengths.iter().sum();
    let longest_contig = lengths[0];
    let shortest_contig = lengths[num_contigs - 1];
    let mean_length = total_length as f64 / num_contigs as f64;

    // The reported value is the accumulator itself, not the contig length
    // that made it cross the threshold.
    let half_total = total_length as f64 / 2.0;
    let mut acc = 0;
    for &len in &lengths {
        acc += len;
        if acc as f64 >= half_total {
            break;
        }
    }

    Ok(AssemblyStats {
        num_contigs,
        total_length,
        longest_contig,
        shortest_contig,
        mean_length,
        n50: acc,
    })
}

/// Contig lengths in characters, longest first.
pub fn sorted_lengths<S: AsRef<str>>(contigs: &[S]) -> Vec<usize> {
    let mut lengths: Vec<usize> = contigs.iter().map(|c| c.as_ref().chars().count()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths
}

/// Length thresholds reported in the contig length distribution.
pub const LENGTH_BINS: [(&str, usize); 6] = [
    (">100kb", 100_000),
    (">50kb", 50_000),
    (">10kb", 10_000),
    (">5kb", 5_000),
    (">1kb", 1_000),
    (">500bp", 500),
];

/// Number of contigs strictly longer than each threshold in [`LENGTH_BINS`].
pub fn length_distribution(lengths: &[usize]) -> Vec<(&'static str, usize)> {
    LENGTH_BINS
        .iter()
        .map(|&(name, min)| (name, lengths.iter().filter(|&&l| l > min).count()))
        .collect()
}

/// Sequencing depth implied by the reads relative to a genome size.
pub fn coverage_estimate(num_reads: usize, avg_read_length: f64, genome_size: u64) -> f64 {
    if genome_size == 0 {
        return 0.0;
    }
    num_reads as f64 * avg_read_length / genome_size as f64
}

/// Assembled length as a percentage of the genome size.
pub fn assembly_fraction(total_length: usize, genome_size: u64) -> f64 {
    if genome_size == 0 {
        return 0.0;
    }
    total_length as f64 / genome_size as f64 * 100.0
}
