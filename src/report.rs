//! Plain-text assembly report.
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::stats::{length_distribution, AssemblyStats, GraphSummary};

const RULE_WIDTH: usize = 80;
const TOP_CONTIGS: usize = 20;

/// Wall-clock time spent in each stage of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timing {
    pub read: Duration,
    pub graph: Duration,
    pub assembly: Duration,
}

impl Timing {
    pub fn total(&self) -> Duration {
        self.read + self.graph + self.assembly
    }
}

/// Everything the report needs about one run.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub input_file: &'a str,
    pub num_reads: usize,
    pub avg_read_length: f64,
    pub k: usize,
    pub seed: u64,
    pub graph: GraphSummary,
    pub stats: &'a AssemblyStats,
    /// Contig lengths, longest first
    pub contig_lengths: &'a [usize],
    pub timing: Timing,
    pub coverage_estimate: f64,
    pub assembly_fraction: f64,
}

/// Formats an integer with `,` thousands separators.
pub fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a non-negative float with separators in the integer part.
pub fn float_with_separators(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int, frac) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };
    match (int.parse::<u64>(), frac) {
        (Ok(int), Some(frac)) => format!("{}.{}", with_separators(int), frac),
        (Ok(int), None) => with_separators(int),
        (Err(_), _) => formatted.clone(),
    }
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn percent(part: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.as_secs_f64() / total.as_secs_f64() * 100.0
    }
}

pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render(&mut out, ctx);
    out
}

fn render(out: &mut String, ctx: &ReportContext<'_>) -> fmt::Result {
    let stats = ctx.stats;
    let total = ctx.timing.total();

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "GENOME ASSEMBLY STATISTICS")?;
    writeln!(out, "{}\n", "=".repeat(RULE_WIDTH))?;

    writeln!(out, "Assembler: {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Input File: {}", ctx.input_file)?;
    writeln!(out, "K-mer Size: {}", ctx.k)?;
    writeln!(out, "Random Seed: {}\n", ctx.seed)?;

    section(out, "INPUT DATA")?;
    writeln!(out, "Number of reads:         {}", with_separators(ctx.num_reads as u64))?;
    writeln!(out, "Average read length:     {:.1} bp", ctx.avg_read_length)?;
    writeln!(
        out,
        "Total sequencing data:   {} bp",
        float_with_separators(ctx.num_reads as f64 * ctx.avg_read_length, 0)
    )?;
    writeln!(out, "Estimated coverage:      {:.1}x", ctx.coverage_estimate)?;
    writeln!(out, "Read time:               {:.2} seconds\n", ctx.timing.read.as_secs_f64())?;

    section(out, "DE BRUIJN GRAPH CONSTRUCTION")?;
    writeln!(out, "Graph nodes:             {}", with_separators(ctx.graph.num_nodes as u64))?;
    writeln!(out, "Graph edges:             {}", with_separators(ctx.graph.num_edges as u64))?;
    writeln!(out, "Average out-degree:      {:.2}", ctx.graph.avg_out_degree)?;
    writeln!(out, "Construction time:       {:.2} seconds\n", ctx.timing.graph.as_secs_f64())?;

    section(out, "ASSEMBLY RESULTS")?;
    writeln!(out, "Number of contigs:       {}", with_separators(stats.num_contigs as u64))?;
    writeln!(out, "Total assembly length:   {} bp", with_separators(stats.total_length as u64))?;
    writeln!(out, "Assembly vs. genome:     {:.2}%", ctx.assembly_fraction)?;
    writeln!(out, "Longest contig:          {} bp", with_separators(stats.longest_contig as u64))?;
    writeln!(out, "Shortest contig:         {} bp", with_separators(stats.shortest_contig as u64))?;
    writeln!(out, "Mean contig length:      {} bp", float_with_separators(stats.mean_length, 1))?;
    writeln!(out, "N50:                     {} bp", with_separators(stats.n50 as u64))?;
    writeln!(out, "Assembly time:           {:.2} seconds\n", ctx.timing.assembly.as_secs_f64())?;

    section(out, &format!("TOP {} LONGEST CONTIGS", TOP_CONTIGS))?;
    for (i, &length) in ctx.contig_lengths.iter().take(TOP_CONTIGS).enumerate() {
        writeln!(out, "{:3}. {:>10} bp", i + 1, with_separators(length as u64))?;
    }
    out.push('\n');

    section(out, "CONTIG LENGTH DISTRIBUTION")?;
    for (bin, count) in length_distribution(ctx.contig_lengths) {
        writeln!(out, "Contigs {:8}:     {}", bin, with_separators(count as u64))?;
    }
    out.push('\n');

    section(out, "TIMING SUMMARY")?;
    for (label, stage) in [
        ("Read time:               ", ctx.timing.read),
        ("Graph construction:      ", ctx.timing.graph),
        ("Assembly:                ", ctx.timing.assembly),
    ] {
        writeln!(
            out,
            "{}{:8.2} seconds ({:5.1}%)",
            label,
            stage.as_secs_f64(),
            percent(stage, total)
        )?;
    }
    writeln!(
        out,
        "Total time:              {:8.2} seconds ({:.2} minutes)\n",
        total.as_secs_f64(),
        total.as_secs_f64() / 60.0
    )?;

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "END OF REPORT")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_report<P: AsRef<Path>>(path: P, ctx: &ReportContext<'_>) -> Result<()> {
    fs::write(path, render_report(ctx))?;
    Ok(())
}
