use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AssemblyError, Result};

/// Approximate size of the mouse genome, the reference use case.
pub const DEFAULT_GENOME_SIZE: u64 = 2_700_000_000;
pub const DEFAULT_ORGANISM: &str = "Mus musculus";

/// Parameters of a single assembly run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// FASTQ(.gz) input
    pub input: PathBuf,
    /// FASTA(.gz) output for contigs
    pub output_fasta: PathBuf,
    /// Plain-text statistics report
    pub stats_file: PathBuf,
    pub k: usize,
    /// Fixed seed for reproducible runs; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many reads, 0 reads everything
    pub max_reads: usize,
    pub organism: String,
    pub genome_size: u64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/reads.fq.gz"),
            output_fasta: PathBuf::from("assembly.fasta"),
            stats_file: PathBuf::from("assembly_stats.txt"),
            k: 51,
            seed: None,
            max_reads: 10_000,
            organism: DEFAULT_ORGANISM.to_string(),
            genome_size: DEFAULT_GENOME_SIZE,
        }
    }
}

impl AssemblyConfig {
    /// Loads a JSON config; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k < 2 {
            return Err(AssemblyError::InvalidK(self.k));
        }
        Ok(())
    }
}
