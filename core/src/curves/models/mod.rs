use crate::fields::{Field, PrimeField, SquareRootField};

pub mod bls12;
pub mod bn;

#[macro_use]
pub mod short_weierstrass_projective;
pub mod twisted_edwards_extended;

pub use short_weierstrass_projective::GroupAffine as SWAffine;
pub use twisted_edwards_extended::GroupAffine as TEAffine;

pub trait ModelParameters: Send + Sync + 'static {
    type BaseField: Field + SquareRootField;
    type ScalarField: PrimeField
        + SquareRootField
        + Into<<Self::ScalarField as PrimeField>::BigInt>
        + From<<Self::ScalarField as PrimeField>::BigInt>;
}

/// Parameters for a short Weierstrass curve `y^2 = x^3 + A x + B` in Jacobian
/// (weighted projective) coordinates, the model used by every pairing curve
/// family in this crate (BN, BLS12).
pub trait SWModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;
    const COFACTOR: &'static [u64];
    const COFACTOR_INV: Self::ScalarField;
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_A;
        copy
    }

    #[inline(always)]
    fn add_b(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy += &Self::COEFF_B;
        copy
    }

    #[inline]
    fn empirical_recommended_wnaf_for_scalar(scalar: <Self::ScalarField as PrimeField>::BigInt) -> usize {
        let num_bits = scalar.num_bits() as usize;
        if num_bits >= 130 {
            4
        } else if num_bits >= 34 {
            3
        } else {
            2
        }
    }

    #[inline]
    fn empirical_recommended_wnaf_for_num_scalars(num_scalars: usize) -> usize {
        const RECOMMENDATIONS: [usize; 12] =
            [1, 3, 7, 20, 43, 120, 273, 563, 1630, 3477, 7933, 17173];
        let mut ret = 4;
        for (i, r) in RECOMMENDATIONS.iter().enumerate() {
            if num_scalars <= *r {
                ret = i;
                break;
            }
        }
        ret
    }
}

/// Parameters for a twisted Edwards curve `a x^2 + y^2 = 1 + d x^2 y^2` in
/// extended projective coordinates.
pub trait TEModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_D: Self::BaseField;
    const COFACTOR: &'static [u64];
    const COFACTOR_INV: Self::ScalarField;
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    type MontgomeryModelParameters: MontgomeryModelParameters<BaseField = Self::BaseField>;

    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_A;
        copy
    }
}

pub trait MontgomeryModelParameters: ModelParameters {
    const COEFF_A: Self::BaseField;
    const COEFF_B: Self::BaseField;

    type TEModelParameters: TEModelParameters<BaseField = Self::BaseField>;
}
