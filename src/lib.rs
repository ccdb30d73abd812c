//! De Bruijn graph assembly by randomized Eulerian walks.
//!
//! Reads are cut into k-mers, each k-mer becomes an edge between its
//! (k-1)-mer prefix and suffix, and repeated edge-consuming walks over the
//! resulting multigraph spell out contigs.
pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use error::{AssemblyError, Result};
pub use graph::assembler::assemble;
pub use graph::debruijn::{DeBruijnGraph, NodeId};
pub use io::fasta::write_fasta;
pub use kmer::codec::tour_to_sequence;
pub use stats::{statistics, AssemblyStats};
