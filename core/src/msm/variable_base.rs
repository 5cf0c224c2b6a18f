use crate::{
    prelude::{AffineCurve, BigInteger, FpParameters, One, PrimeField, ProjectiveCurve, Zero},
    Vec,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Multi-scalar multiplication over an unstructured point set, using Pippenger-style
/// bucketing: the scalars are split into `c`-bit windows, each window's nonzero digits
/// are accumulated into `2^c - 1` buckets, the buckets are folded into a per-window sum,
/// and the window sums are combined by repeated doubling from the most to the least
/// significant window.
pub struct PippengerMsm;

impl PippengerMsm {
    /// Picks the bucket-window width `c`. Below 32 scalars the bucket setup cost
    /// dominates, so a small fixed window is cheaper than the asymptotically optimal one.
    fn window_size(num_scalars: usize) -> usize {
        if num_scalars < 32 {
            3
        } else {
            super::ln_without_floats(num_scalars) + 2
        }
    }

    fn msm_inner<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
    ) -> G::Projective
    where
        G::Projective: ProjectiveCurve<Affine = G>,
    {
        let c = Self::window_size(scalars.len());

        let num_bits = <G::ScalarField as PrimeField>::Params::MODULUS_BITS as usize;
        let scalar_one = G::ScalarField::one().into_repr();

        let zero = G::Projective::zero();
        let window_starts: Vec<_> = (0..num_bits).step_by(c).collect();

        #[cfg(feature = "parallel")]
        let window_starts_iter = window_starts.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let window_starts_iter = window_starts.into_iter();

        // Each window covers `c` consecutive bits of every scalar; windows are
        // independent and may be processed in any order (in parallel, when enabled).
        let window_sums: Vec<_> = window_starts_iter
            .map(|w_start| {
                let mut window_sum = zero;
                // Bucket 0 would hold the digit-0 contributions, which are always
                // the identity, so only `2^c - 1` buckets are allocated.
                let mut buckets = vec![zero; (1 << c) - 1];
                scalars
                    .iter()
                    .zip(bases)
                    .filter(|(s, _)| !s.is_zero())
                    .for_each(|(&scalar, base)| {
                        if scalar == scalar_one {
                            // A scalar equal to one contributes `base` itself; only
                            // count it once, in the lowest window.
                            if w_start == 0 {
                                window_sum.add_assign_mixed(base);
                            }
                        } else {
                            let mut digit = scalar;

                            // Drop the bits below this window.
                            digit.divn(w_start as u32);

                            // Keep only the `c` bits that make up this window's digit.
                            let digit = digit.as_ref()[0] % (1 << c);

                            if digit != 0 {
                                buckets[(digit - 1) as usize].add_assign_mixed(base);
                            }
                        }
                    });
                let buckets = G::Projective::batch_normalization_into_affine(&buckets);

                // Fold the buckets from the highest digit down: accumulating a running
                // sum of buckets and adding it once per digit is equivalent to, but
                // cheaper than, scaling each bucket by its digit value individually.
                let mut running_sum = G::Projective::zero();
                for bucket in buckets.into_iter().rev() {
                    running_sum.add_assign_mixed(&bucket);
                    window_sum += running_sum;
                }

                window_sum
            })
            .collect();

        let lowest = *window_sums.first().unwrap();

        // Combine the window sums from most to least significant, doubling by `c`
        // bits between each one.
        lowest
            + window_sums[1..]
                .iter()
                .rev()
                .fold(zero, |mut total, window_sum| {
                    total += window_sum;
                    for _ in 0..c {
                        total.double_in_place();
                    }
                    total
                })
    }

    /// Computes `sum_i scalars[i] * bases[i]` via Pippenger bucketing.
    pub fn msm<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
    ) -> G::Projective {
        Self::msm_inner(bases, scalars)
    }
}
