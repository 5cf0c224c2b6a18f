use crate::{BigInteger, FpParameters, PairingEngine, PrimeField, ProjectiveCurve};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A precomputed windowed-multiples table for repeated scalar multiplication of a
/// single fixed base point (typically a subgroup generator), per the fixed-base
/// strategy: split the scalar into `outerc` windows of `window` bits, precompute every
/// multiple of the base reachable within one window, and combine one table lookup per
/// window instead of a double-and-add over every bit.
pub struct FixedBaseWindowTable;

impl FixedBaseWindowTable {
    /// Picks the window width for a batch of `num_scalars` multiplications against the
    /// same base: the table-build cost grows with `2^window`, so larger batches can
    /// amortise a wider window.
    pub fn window_size(num_scalars: usize) -> usize {
        if num_scalars < 32 {
            3
        } else {
            (f64::from(num_scalars as u32)).ln().ceil() as usize
        }
    }

    /// Builds the table of windowed multiples of `base`: `table[outer][inner]` holds
    /// `inner * base * 2^(outer * window)`.
    pub fn build<T: ProjectiveCurve>(scalar_size: usize, window: usize, base: T) -> Vec<Vec<T>> {
        let in_window = 1 << window;
        let outerc = (scalar_size + window - 1) / window;
        let last_in_window = 1 << (scalar_size - (outerc - 1) * window);

        let mut table = vec![vec![T::zero(); in_window]; outerc];

        let mut outer_base = base;
        for outer in 0..outerc {
            let mut inner_base = T::zero();
            let cur_in_window = if outer == outerc - 1 {
                last_in_window
            } else {
                in_window
            };
            for inner in 0..cur_in_window {
                table[outer][inner] = inner_base;
                inner_base = inner_base + &outer_base;
            }
            for _ in 0..window {
                outer_base.double_in_place();
            }
        }
        table
    }

    /// Multiplies the table's base point by `scalar` using one lookup per window.
    pub fn windowed_mul<E: PairingEngine, T: ProjectiveCurve>(
        scalar_size: usize,
        window: usize,
        table: &[Vec<T>],
        scalar: &E::Fr,
    ) -> T {
        let outerc = (scalar_size + window - 1) / window;
        let mut scalar_bits = scalar.into_repr().to_bits();
        scalar_bits.reverse();

        let mut result = table[0][0];
        for outer in 0..outerc {
            let mut inner = 0usize;
            for i in 0..window {
                if outer * window + i < (<E::Fr as PrimeField>::Params::MODULUS_BITS as usize)
                    && scalar_bits[outer * window + i]
                {
                    inner |= 1 << i;
                }
            }
            result = result + &table[outer][inner];
        }
        result
    }

    /// Multiplies the table's base point by every scalar in `scalars`, in parallel
    /// when the `parallel` feature is enabled.
    pub fn batch_mul<E: PairingEngine, T: ProjectiveCurve>(
        scalar_size: usize,
        window: usize,
        table: &[Vec<T>],
        scalars: &[E::Fr],
    ) -> Vec<T> {
        #[cfg(feature = "parallel")]
        let iter = scalars.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = scalars.iter();

        iter.map(|s| Self::windowed_mul::<E, T>(scalar_size, window, table, s))
            .collect::<Vec<_>>()
    }
}
