use crate::bn254::*;
use relic_core::{
    biginteger::BigInteger256,
    curves::models::bn::{BnParameters, OptimalAteBn},
    field_new,
};

pub mod g1;
pub mod g2;

#[cfg(all(feature = "bn254", test))]
mod tests;

pub struct Parameters;

impl BnParameters for Parameters {
    const U: &'static [u64] = &[4965661367192848881];

    #[rustfmt::skip]
    const SIX_U_PLUS_2_NAF: &'static [i8] = &[
        0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0,
        0, 1, 1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, 0, 0, 1, 1, 0,
        -1, 0, 0, 1, 0, 1, 1,
    ];

    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp6Params = Fq6Parameters;
    type Fp12Params = Fq12Parameters;
    type G1Parameters = g1::G1Parameters;
    type G2Parameters = g2::G2Parameters;

    /// NONRESIDUE^((q - 1) / 2), used to correct the sign of `y` when twisting
    /// the Frobenius endomorphism for the `q1` point in G2 precomputation.
    #[rustfmt::skip]
    const CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2: Fq2 = field_new!(
        Fq2,
        field_new!(
            Fq,
            BigInteger256([
                0xe4bbdd0c2936b629,
                0xbb30f162e133bacb,
                0x31a9d1b6f9645366,
                0x253570bea500f8dd,
            ])
        ),
        field_new!(
            Fq,
            BigInteger256([
                0xa1d77ce45ffe77c7,
                0x07affd117826d1db,
                0x6d16bd27bb7edc6b,
                0x2c87200285defecc,
            ])
        ),
    );
}

pub type Bn254 = OptimalAteBn<Parameters>;

pub type G1Affine = g1::G1Affine<Parameters>;
pub type G1Projective = g1::G1Projective<Parameters>;
pub type G2Affine = g2::G2Affine<Parameters>;
pub type G2Projective = g2::G2Projective<Parameters>;
