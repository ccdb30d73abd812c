use std::path::PathBuf;

use clap::{Parser, Subcommand};

use eulertig::config::AssemblyConfig;

#[derive(Parser, Debug)]
#[command(name = "eulertig", version, about = "De Bruijn graph assembler using randomized Eulerian walks", long_about = None)]
pub struct Cli {
    /// Log debug output, including per-round traversal progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble reads into contigs
    Assemble {
        /// Input FASTQ(.gz) file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output FASTA(.gz) file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output statistics report
        #[arg(long)]
        stats_file: Option<PathBuf>,

        /// K-mer size
        #[arg(short, long)]
        k: Option<usize>,

        /// Random seed for reproducible assembly
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of reads to load (0 for all)
        #[arg(long)]
        max_reads: Option<usize>,

        /// Organism name written into FASTA headers
        #[arg(long)]
        organism: Option<String>,

        /// Genome size used for coverage estimates
        #[arg(long)]
        genome_size: Option<u64>,

        /// JSON config file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Calculate assembly statistics for an existing FASTA file
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (json or tsv)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

/// Flag values for the `assemble` subcommand, layered over a base config.
#[derive(Debug, Default)]
pub struct AssembleOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stats_file: Option<PathBuf>,
    pub k: Option<usize>,
    pub seed: Option<u64>,
    pub max_reads: Option<usize>,
    pub organism: Option<String>,
    pub genome_size: Option<u64>,
}

impl AssembleOverrides {
    pub fn apply(self, mut config: AssemblyConfig) -> AssemblyConfig {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output_fasta = output;
        }
        if let Some(stats_file) = self.stats_file {
            config.stats_file = stats_file;
        }
        if let Some(k) = self.k {
            config.k = k;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(max_reads) = self.max_reads {
            config.max_reads = max_reads;
        }
        if let Some(organism) = self.organism {
            config.organism = organism;
        }
        if let Some(genome_size) = self.genome_size {
            config.genome_size = genome_size;
        }
        config
    }
}
