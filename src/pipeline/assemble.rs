use std::time::Instant;

use tracing::{info, warn};

use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::graph::assembler::assemble;
use crate::graph::debruijn::DeBruijnGraph;
use crate::io::fasta::FastaWriter;
use crate::io::fastq::read_fastq;
use crate::report::{write_report, ReportContext, Timing};
use crate::stats::{
    assembly_fraction, coverage_estimate, sorted_lengths, statistics, AssemblyStats, GraphSummary,
};

/// Result of assembling an in-memory read set.
#[derive(Debug, Clone)]
pub struct ReadAssembly {
    pub contigs: Vec<String>,
    pub stats: AssemblyStats,
    /// Graph size before traversal consumed it
    pub graph: GraphSummary,
    pub seed: u64,
    pub timing: Timing,
}

/// Everything a full file-to-file run produced.
#[derive(Debug, Clone)]
pub struct AssemblyRun {
    pub assembly: ReadAssembly,
    pub num_reads: usize,
    pub avg_read_length: f64,
    pub coverage_estimate: f64,
    pub assembly_fraction: f64,
}

/// Builds the graph from `reads`, walks it to exhaustion and summarizes the
/// contigs. The read stage of the returned timing is left at zero.
pub fn assemble_reads<S: AsRef<str>>(reads: &[S], k: usize, seed: u64) -> Result<ReadAssembly> {
    let mut timing = Timing::default();

    let start = Instant::now();
    let mut graph = DeBruijnGraph::build(reads, k)?;
    let summary = GraphSummary::of(&graph);
    timing.graph = start.elapsed();

    let start = Instant::now();
    let contigs = assemble(&mut graph, seed)?;
    timing.assembly = start.elapsed();

    let stats = statistics(&contigs)?;
    info!(
        "{} contigs, total {} bp, longest {} bp, N50 {}",
        stats.num_contigs, stats.total_length, stats.longest_contig, stats.n50
    );

    Ok(ReadAssembly {
        contigs,
        stats,
        graph: summary,
        seed,
        timing,
    })
}

/// Runs the whole pipeline described by `config`: read FASTQ, assemble,
/// write the contig FASTA and the statistics report.
pub fn run_assembly(config: &AssemblyConfig) -> Result<AssemblyRun> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    if config.seed.is_none() {
        info!("No seed given, using {}", seed);
    }

    let start = Instant::now();
    let reads = read_fastq(&config.input, config.max_reads)?;
    let read_time = start.elapsed();

    let num_reads = reads.len();
    let total_bases: usize = reads.iter().map(|r| r.chars().count()).sum();
    let avg_read_length = if num_reads > 0 {
        total_bases as f64 / num_reads as f64
    } else {
        0.0
    };
    if num_reads == 0 {
        warn!("No reads found in {}", config.input.display());
    }

    let mut assembly = assemble_reads(&reads, config.k, seed)?;
    assembly.timing.read = read_time;

    let mut writer = FastaWriter::create(&config.output_fasta)?;
    writer.write_contigs(&assembly.contigs, &config.organism)?;
    writer.finish()?;
    info!(
        "Wrote {} contigs to {}",
        assembly.contigs.len(),
        config.output_fasta.display()
    );

    let coverage = coverage_estimate(num_reads, avg_read_length, config.genome_size);
    let fraction = assembly_fraction(assembly.stats.total_length, config.genome_size);
    let lengths = sorted_lengths(&assembly.contigs);
    let input_file = config.input.display().to_string();
    let ctx = ReportContext {
        input_file: &input_file,
        num_reads,
        avg_read_length,
        k: config.k,
        seed,
        graph: assembly.graph,
        stats: &assembly.stats,
        contig_lengths: &lengths,
        timing: assembly.timing,
        coverage_estimate: coverage,
        assembly_fraction: fraction,
    };
    write_report(&config.stats_file, &ctx)?;
    info!("Wrote statistics report to {}", config.stats_file.display());

    Ok(AssemblyRun {
        assembly,
        num_reads,
        avg_read_length,
        coverage_estimate: coverage,
        assembly_fraction: fraction,
    })
}
