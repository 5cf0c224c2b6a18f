#![cfg(any(feature = "bls12_381", feature = "bn254"))]
#[cfg(feature = "bls12_381")]
use crate::bls12_381::{Fr, G1Affine, G1Projective};
#[cfg(all(feature = "bn254", not(feature = "bls12_381")))]
use crate::bn254::{Fr, G1Affine, G1Projective};

use relic_core::{msm::PippengerMsm, AffineCurve, PrimeField, ProjectiveCurve, UniformRand, Zero};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::tests::helpers::create_pseudo_uniform_random_elems;

fn naive_var_base_msm<G: AffineCurve>(
    bases: &[G],
    scalars: &[<G::ScalarField as PrimeField>::BigInt],
) -> G::Projective {
    let mut acc = G::Projective::zero();

    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        acc += &base.mul(*scalar);
    }
    acc
}

#[test]
fn test() {
    test_msm::<G1Affine>();
}

pub(crate) fn test_msm<G: AffineCurve>() {
    const MAX_LOGN: usize = 10;
    const SAMPLES: usize = 1 << MAX_LOGN;

    let mut rng = XorShiftRng::seed_from_u64(234872845u64);

    let v = (0..SAMPLES)
        .map(|_| Fr::rand(&mut rng).into_repr())
        .collect::<Vec<_>>();
    let g = create_pseudo_uniform_random_elems::<G1Affine, _>(&mut rng, MAX_LOGN);

    let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
    let fast = PippengerMsm::msm(g.as_slice(), v.as_slice());

    assert_eq!(naive.into_affine(), fast.into_affine());
}

#[test]
fn test_with_unequal_numbers() {
    const SAMPLES: usize = 1 << 10;

    let mut rng = XorShiftRng::seed_from_u64(234872845u64);

    let v = (0..SAMPLES - 1)
        .map(|_| Fr::rand(&mut rng).into_repr())
        .collect::<Vec<_>>();
    let g = (0..SAMPLES)
        .map(|_| G1Projective::rand(&mut rng).into_affine())
        .collect::<Vec<_>>();

    let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
    let fast = PippengerMsm::msm(g.as_slice(), v.as_slice());

    assert_eq!(naive.into_affine(), fast.into_affine());
}
