use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eulertig::graph::debruijn::DeBruijnGraph;
use eulertig::assemble;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate reads sampled from a random genome
fn generate_reads(num_reads: usize, read_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0);
    let bases = ['A', 'C', 'G', 'T'];
    let genome_len = num_reads * read_len / 10;
    let genome: String = (0..genome_len).map(|_| bases[rng.gen_range(0..4)]).collect();

    (0..num_reads)
        .map(|_| {
            let start = rng.gen_range(0..=genome_len - read_len);
            genome[start..start + read_len].to_string()
        })
        .collect()
}

fn bench_build_and_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    for num_reads in [100, 1000, 10000] {
        let reads = generate_reads(num_reads, 150);
        let total_bases: usize = reads.iter().map(|s| s.len()).sum();
        group.throughput(Throughput::Bytes(total_bases as u64));

        group.bench_with_input(BenchmarkId::new("build", num_reads), &reads, |b, reads| {
            b.iter(|| DeBruijnGraph::build(black_box(reads), 31).unwrap())
        });

        let graph = DeBruijnGraph::build(&reads, 31).unwrap();
        group.bench_with_input(BenchmarkId::new("assemble", num_reads), &graph, |b, graph| {
            b.iter(|| {
                let mut graph = graph.clone();
                assemble(&mut graph, black_box(42)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_and_assemble);
criterion_main!(benches);
