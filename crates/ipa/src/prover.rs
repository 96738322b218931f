//! Inner Product Argument prover implementation

use crate::{
    folding::{fold_commitment, fold_generators, RoundChallenge},
    InnerProductParams, InnerProductProof,
};
use bulletproofs_core::{
    hash_commitment_to_scalar,
    utils::{scalar_product, vector_add, vector_scalar_mul},
    BulletproofsError, BulletproofsResult, GroupElement,
};
use curve25519_dalek::scalar::Scalar;

const LOG_TARGET: &str = "bulletproofs_ipa::prover";

/// Create an inner product proof
///
/// Proves knowledge of vectors `a` and `b` opening `P = g^a * h^b` with
/// `<a, b> = params.c`. The commitment is first bound to the instance by a
/// challenge `x`, giving `u' = u^x` and `P' = P * u'^c`, and then folded.
#[tracing::instrument(target = "bulletproofs_ipa::prover", skip_all, fields(n = params.n))]
pub fn prove_inner_product(
    a: &[Scalar],
    b: &[Scalar],
    p: GroupElement,
    params: &InnerProductParams,
) -> BulletproofsResult<InnerProductProof> {
    if a.len() != b.len() {
        return Err(BulletproofsError::length_mismatch(a.len(), b.len()));
    }
    if a.len() != params.n {
        return Err(BulletproofsError::length_mismatch(params.n, a.len()));
    }

    let x = hash_commitment_to_scalar(&params.g_vec, &params.h_vec, &p, &params.c, params.n)?;
    let u = params.u * x;
    let bound = p + u * params.c;

    tracing::debug!(target: LOG_TARGET, "bound commitment to instance, folding");

    let folded = fold(
        a.to_vec(),
        b.to_vec(),
        params.g_vec.clone(),
        params.h_vec.clone(),
        u,
        bound,
    )?;

    Ok(InnerProductProof {
        n: params.n,
        l_vec: folded.l_vec,
        r_vec: folded.r_vec,
        u,
        p: folded.p,
        g: folded.g,
        h: folded.h,
        a: folded.a,
        b: folded.b,
        params: InnerProductParams {
            p: bound,
            ..params.clone()
        },
    })
}

/// State left after the last folding round
struct Folded {
    l_vec: Vec<GroupElement>,
    r_vec: Vec<GroupElement>,
    p: GroupElement,
    g: GroupElement,
    h: GroupElement,
    a: Scalar,
    b: Scalar,
}

/// Fold `(a, b, g, h, P)` in half until one element of each is left.
fn fold(
    mut a: Vec<Scalar>,
    mut b: Vec<Scalar>,
    mut g: Vec<GroupElement>,
    mut h: Vec<GroupElement>,
    u: GroupElement,
    mut p: GroupElement,
) -> BulletproofsResult<Folded> {
    let n = a.len();
    let mut l_vec = Vec::new();
    let mut r_vec = Vec::new();

    while a.len() > 1 {
        let m = a.len() / 2;

        let (a_l, a_r) = a.split_at(m);
        let (b_l, b_r) = b.split_at(m);
        let (g_l, g_r) = g.split_at(m);
        let (h_l, h_r) = h.split_at(m);

        // Cross terms
        let c_l = scalar_product(a_l, b_r)?;
        let c_r = scalar_product(a_r, b_l)?;

        // L = g_R^{a_L} * h_L^{b_R} * u^{<a_L, b_R>}
        let l = GroupElement::multiscalar_mul(
            a_l.iter().chain(b_r.iter()).copied().chain(std::iter::once(c_l)),
            g_r.iter().chain(h_l.iter()).map(|e| e.0).chain(std::iter::once(u.0)),
        );

        // R = g_L^{a_R} * h_R^{b_L} * u^{<a_R, b_L>}
        let r = GroupElement::multiscalar_mul(
            a_r.iter().chain(b_l.iter()).copied().chain(std::iter::once(c_r)),
            g_l.iter().chain(h_r.iter()).map(|e| e.0).chain(std::iter::once(u.0)),
        );

        let challenge = RoundChallenge::derive(&l, &r);
        let RoundChallenge { x, x_inv } = challenge;

        // a' = a_L * x + a_R * x^{-1}
        let folded_a = vector_add(&vector_scalar_mul(a_l, &x), &vector_scalar_mul(a_r, &x_inv))?;
        // b' = b_L * x^{-1} + b_R * x
        let folded_b = vector_add(&vector_scalar_mul(b_l, &x_inv), &vector_scalar_mul(b_r, &x))?;
        let (folded_g, folded_h) = fold_generators(&g, &h, &challenge);

        p = fold_commitment(&l, &r, &p, &challenge);
        tracing::trace!(target: LOG_TARGET, round = l_vec.len(), remaining = m, "folded");

        l_vec.push(l);
        r_vec.push(r);
        a = folded_a;
        b = folded_b;
        g = folded_g;
        h = folded_h;
    }

    match (a.as_slice(), b.as_slice(), g.as_slice(), h.as_slice()) {
        ([a], [b], [g], [h]) => Ok(Folded {
            l_vec,
            r_vec,
            p,
            g: *g,
            h: *h,
            a: *a,
            b: *b,
        }),
        _ => Err(BulletproofsError::InvalidParameters(format!(
            "Cannot fold vectors of length {n} down to a single element"
        ))),
    }
}
