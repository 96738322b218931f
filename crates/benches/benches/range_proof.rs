//! Benchmarks for range proof generation and verification

use bulletproofs_core::utils::random_scalar;
use bulletproofs_range::{prove, setup, verify_batch, RangeProof, RangeProofSetupParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::thread_rng;

const BIT_LENGTHS: [u32; 4] = [4, 8, 16, 32];

fn prove_max(params: &RangeProofSetupParams) -> RangeProof {
    let mut rng = thread_rng();
    let value = params.range_end().unwrap() - 1;
    let gamma = random_scalar(&mut rng).unwrap();
    prove(value, gamma, params.commit(value, gamma), params, &mut rng).unwrap()
}

fn bench_range_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_setup");

    for bit_length in BIT_LENGTHS {
        group.bench_with_input(
            BenchmarkId::new("setup", bit_length),
            &bit_length,
            |b, &bit_length| b.iter(|| setup(black_box(1u64 << bit_length)).unwrap()),
        );
    }

    group.finish();
}

fn bench_range_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_generation");

    for bit_length in BIT_LENGTHS {
        group.throughput(Throughput::Elements(bit_length as u64));
        let params = setup(1u64 << bit_length).unwrap();

        group.bench_with_input(
            BenchmarkId::new("prove", bit_length),
            &params,
            |b, params| b.iter(|| black_box(prove_max(params))),
        );
    }

    group.finish();
}

fn bench_range_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_verification");

    for bit_length in BIT_LENGTHS {
        group.throughput(Throughput::Elements(bit_length as u64));
        let proof = prove_max(&setup(1u64 << bit_length).unwrap());

        group.bench_with_input(
            BenchmarkId::new("verify", bit_length),
            &proof,
            |b, proof| b.iter(|| assert!(black_box(proof).verify())),
        );
    }

    group.finish();
}

fn bench_batch_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_batch_verification");
    let params = setup(1 << 32).unwrap();

    for batch_size in [1usize, 4, 16] {
        group.throughput(Throughput::Elements(batch_size as u64));
        let proofs: Vec<RangeProof> = (0..batch_size).map(|_| prove_max(&params)).collect();

        group.bench_with_input(
            BenchmarkId::new("verify_batch", batch_size),
            &proofs,
            |b, proofs| b.iter(|| assert!(verify_batch(black_box(proofs)))),
        );
    }

    group.finish();
}

fn bench_range_proof_size(_c: &mut Criterion) {
    for bit_length in BIT_LENGTHS {
        let proof = prove_max(&setup(1u64 << bit_length).unwrap());
        println!(
            "Range proof for {} bits: {} group elements + 5 scalars",
            bit_length,
            proof.size_group_elements()
        );
    }
}

criterion_group!(
    benches,
    bench_range_setup,
    bench_range_proof_generation,
    bench_range_proof_verification,
    bench_batch_verification,
    bench_range_proof_size
);
criterion_main!(benches);
