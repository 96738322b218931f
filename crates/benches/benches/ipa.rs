//! Benchmarks for inner product argument

use bulletproofs_core::{
    utils::{random_vector, scalar_product},
    Scalar,
};
use bulletproofs_ipa::{
    commit_inner_product, prove_inner_product, setup_inner_product, InnerProductParams,
    InnerProductProof,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::thread_rng;

const VECTOR_LENGTHS: [usize; 5] = [8, 16, 32, 64, 128];

struct Instance {
    a: Vec<Scalar>,
    b: Vec<Scalar>,
    params: InnerProductParams,
}

impl Instance {
    fn random(vector_length: usize) -> Self {
        let mut rng = thread_rng();
        let a = random_vector(&mut rng, vector_length).unwrap();
        let b = random_vector(&mut rng, vector_length).unwrap();
        let c = scalar_product(&a, &b).unwrap();
        let params = setup_inner_product(None, None, None, c, vector_length).unwrap();

        Self { a, b, params }
    }

    fn prove(&self) -> InnerProductProof {
        let p = commit_inner_product(&self.params.g_vec, &self.params.h_vec, &self.a, &self.b).unwrap();
        prove_inner_product(&self.a, &self.b, p, &self.params).unwrap()
    }
}

fn bench_ipa_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_setup");

    for vector_length in VECTOR_LENGTHS {
        group.bench_with_input(
            BenchmarkId::new("setup", vector_length),
            &vector_length,
            |b, &vector_length| {
                b.iter(|| {
                    setup_inner_product(None, None, None, Scalar::ZERO, black_box(vector_length))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_ipa_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_generation");

    for vector_length in VECTOR_LENGTHS {
        group.throughput(Throughput::Elements(vector_length as u64));
        let instance = Instance::random(vector_length);

        group.bench_with_input(
            BenchmarkId::new("prove", vector_length),
            &instance,
            |b, instance| b.iter(|| black_box(instance.prove())),
        );
    }

    group.finish();
}

fn bench_ipa_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipa_verification");

    for vector_length in VECTOR_LENGTHS {
        group.throughput(Throughput::Elements(vector_length as u64));
        let proof = Instance::random(vector_length).prove();

        group.bench_with_input(
            BenchmarkId::new("verify", vector_length),
            &proof,
            |b, proof| b.iter(|| assert!(black_box(proof).verify())),
        );
    }

    group.finish();
}

fn bench_ipa_proof_size(_c: &mut Criterion) {
    for vector_length in VECTOR_LENGTHS {
        let proof = Instance::random(vector_length).prove();
        println!(
            "IPA proof for vector length {}: {} group elements + 2 scalars",
            vector_length,
            proof.size_group_elements()
        );
    }
}

criterion_group!(
    benches,
    bench_ipa_setup,
    bench_ipa_generation,
    bench_ipa_verification,
    bench_ipa_proof_size
);
criterion_main!(benches);
