//! Range proof prover implementation

use crate::{RangeProof, RangeProofSetupParams};
use bulletproofs_core::{
    hash_to_two_scalars,
    utils::{
        bit_decomposition, power_of, random_scalar, random_vector, scalar_product, vector_add,
        vector_copy, vector_exp, vector_mul, vector_scalar_mul, vector_sub,
    },
    BulletproofsResult, GroupElement, Scalar,
};
use bulletproofs_ipa::{commit_inner_product, prove_inner_product, setup_inner_product};
use rand_core::{CryptoRng, RngCore};

const LOG_TARGET: &str = "bulletproofs_range::prover";

/// Prove that `v = g^secret * h^gamma` commits to a value in `[0, 2^n)`.
///
/// `secret` is not checked against the range. Only its low `n` bits are
/// used, so an out-of-range value produces a proof that fails verification
/// rather than an error here.
#[tracing::instrument(target = "bulletproofs_range::prover", skip_all, fields(n = params.n))]
pub fn prove<R: RngCore + CryptoRng>(
    secret: u64,
    gamma: Scalar,
    v: GroupElement,
    params: &RangeProofSetupParams,
    rng: &mut R,
) -> BulletproofsResult<RangeProof> {
    let n = params.n;

    // Bit commitment A = h^alpha * g^aL * h^aR
    let a_l = bit_decomposition(secret, n);
    let a_r = vector_sub(&a_l, &vector_copy(Scalar::ONE, n))?;
    let alpha = random_scalar(rng)?;
    let a = commit_vectors(params, alpha, &a_l, &a_r)?;

    // Blinding commitment S = h^rho * g^sL * h^sR
    let s_l = random_vector(rng, n)?;
    let s_r = random_vector(rng, n)?;
    let rho = random_scalar(rng)?;
    let s = commit_vectors(params, rho, &s_l, &s_r)?;

    let (y, z) = hash_to_two_scalars(&a, &s);
    tracing::debug!(target: LOG_TARGET, "committed to bits, derived y and z");

    let y_n = power_of(&y, n);
    let z_vec = vector_copy(z, n);
    let z_sq = z * z;
    let z_sq_two_n = vector_scalar_mul(&power_of(&Scalar::from(2u64), n), &z_sq);

    // t1 = <aL - z, y^n . sR> + <sL, y^n . (aR + z) + z^2 . 2^n>
    let a_l_minus_z = vector_sub(&a_l, &z_vec)?;
    let a_r_plus_z = vector_add(&a_r, &z_vec)?;
    let y_n_s_r = vector_mul(&y_n, &s_r)?;
    let t1 = scalar_product(&a_l_minus_z, &y_n_s_r)?
        + scalar_product(&s_l, &vector_add(&vector_mul(&y_n, &a_r_plus_z)?, &z_sq_two_n)?)?;
    // t2 = <sL, y^n . sR>
    let t2 = scalar_product(&s_l, &y_n_s_r)?;

    let tau1 = random_scalar(rng)?;
    let tau2 = random_scalar(rng)?;
    let t1_commit = params.commit_scalar(t1, tau1);
    let t2_commit = params.commit_scalar(t2, tau2);

    let (x, _) = hash_to_two_scalars(&t1_commit, &t2_commit);
    tracing::debug!(target: LOG_TARGET, "committed to t(X), derived x");

    // l(x) = aL - z + sL . x
    let bl = vector_add(&a_l_minus_z, &vector_scalar_mul(&s_l, &x))?;
    // r(x) = y^n . (aR + z + sR . x) + z^2 . 2^n
    let br = vector_add(
        &vector_mul(&y_n, &vector_add(&a_r_plus_z, &vector_scalar_mul(&s_r, &x))?)?,
        &z_sq_two_n,
    )?;
    let tprime = scalar_product(&bl, &br)?;

    let taux = tau2 * x * x + tau1 * x + z_sq * gamma;
    let mu = alpha + rho * x;

    // Prove <l(x), r(x)> = t(x) over (g, h')
    let h_prime = params.scaled_h_vec(&y);
    let commit = commit_inner_product(&params.g_vec, &h_prime, &bl, &br)?;
    let inner_product_params = setup_inner_product(
        Some(params.h),
        Some(params.g_vec.clone()),
        Some(h_prime),
        tprime,
        n,
    )?;
    let inner_product_proof = prove_inner_product(&bl, &br, commit, &inner_product_params)?;

    Ok(RangeProof {
        v,
        a,
        s,
        t1: t1_commit,
        t2: t2_commit,
        taux,
        mu,
        tprime,
        commit,
        inner_product_proof,
        params: RangeProofSetupParams {
            inner_product_params,
            ..params.clone()
        },
    })
}

/// `h^blinding * g_vec^left * h_vec^right`
fn commit_vectors(
    params: &RangeProofSetupParams,
    blinding: Scalar,
    left: &[Scalar],
    right: &[Scalar],
) -> BulletproofsResult<GroupElement> {
    Ok(params.h * blinding + vector_exp(&params.g_vec, left)? + vector_exp(&params.h_vec, right)?)
}
