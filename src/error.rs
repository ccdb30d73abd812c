// src/error.rs
use thiserror::Error;

/// Errors produced while building, traversing or summarizing an assembly.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("k-mer length must be at least 2, got {0}")]
    InvalidK(usize),

    /// Every read was shorter than k, so no edges were created.
    #[error("graph construction produced no edges")]
    EmptyGraph,

    #[error("no valid starting node in a component with remaining edges")]
    NoStartingNode,

    /// Raised when the walker tries to consume an edge that is not there.
    /// This is a bookkeeping bug, never a property of the input.
    #[error("edge {from} -> {to} not found in adjacency multiset")]
    EdgeNotFound { from: String, to: String },

    #[error("cannot compute statistics for an empty contig list")]
    EmptyAssembly,

    #[error("malformed FASTQ input: {0}")]
    MalformedFastq(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
