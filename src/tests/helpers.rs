use relic_core::{AffineCurve, ProjectiveCurve, UniformRand};
use rand::Rng;

/// Generates `2^max_logn` affine points by sampling random projective points and
/// normalizing them in a single batch, which is how large test fixtures are built
/// without paying for a scalar multiplication per point.
pub fn create_pseudo_uniform_random_elems<G: AffineCurve, R: Rng>(
    rng: &mut R,
    max_logn: usize,
) -> Vec<G> {
    let n = 1usize << max_logn;
    let mut projective = (0..n)
        .map(|_| G::Projective::rand(rng))
        .collect::<Vec<_>>();
    G::Projective::batch_normalization(&mut projective);
    projective.into_iter().map(|p| p.into()).collect()
}
