mod cli_main;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use cli_main::{AssembleOverrides, Cli, Commands};
use eulertig::config::AssemblyConfig;
use eulertig::io::fasta::read_fasta_sequences;
use eulertig::pipeline::assemble::run_assembly;
use eulertig::statistics;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Setting tracing default failed")?;

    match cli.command {
        Commands::Assemble {
            input,
            output,
            stats_file,
            k,
            seed,
            max_reads,
            organism,
            genome_size,
            config,
        } => {
            let base = match config {
                Some(path) => AssemblyConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => AssemblyConfig::default(),
            };
            let config = AssembleOverrides {
                input,
                output,
                stats_file,
                k,
                seed,
                max_reads,
                organism,
                genome_size,
            }
            .apply(base);

            info!("Running assembly pipeline on {}", config.input.display());
            let start = std::time::Instant::now();
            let run = run_assembly(&config)
                .with_context(|| format!("assembling {}", config.input.display()))?;
            info!(
                "Assembly completed in {:.2}s: {} contigs, N50 {} (seed {})",
                start.elapsed().as_secs_f32(),
                run.assembly.stats.num_contigs,
                run.assembly.stats.n50,
                run.assembly.seed
            );
        }

        Commands::Stats { input, format } => {
            info!("Calculating assembly statistics for: {}", input.display());
            let contigs = read_fasta_sequences(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let stats = statistics(&contigs)?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
                "tsv" => {
                    println!("contigs\ttotal_len\tlongest\tshortest\tmean_len\tn50");
                    println!(
                        "{}\t{}\t{}\t{}\t{:.2}\t{}",
                        stats.num_contigs,
                        stats.total_length,
                        stats.longest_contig,
                        stats.shortest_contig,
                        stats.mean_length,
                        stats.n50
                    );
                }
                other => bail!("Unsupported format: {}", other),
            }
        }
    }

    Ok(())
}
