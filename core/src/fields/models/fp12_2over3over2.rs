use crate::fields::{
    models::{
        fp2::{Fp2, Fp2Parameters},
        fp6_3over2::{Fp6, Fp6Parameters},
        QuadExtField, QuadExtParameters,
    },
    Field,
};
use core::ops::MulAssign;
use num_traits::Zero;

/// Parameters for the sextic extension `F_{p^12} = F_{p^6}[w] / (w^2 - NONRESIDUE)`,
/// built as a quadratic extension on top of the `F_{p^6}` tower.
pub trait Fp12Parameters: 'static + Send + Sync {
    type Fp6Params: Fp6Parameters;

    const NONRESIDUE: Fp6<Self::Fp6Params>;

    /// Coefficients for the Frobenius automorphism, one `F_{p^2}` element per power.
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<<Self::Fp6Params as Fp6Parameters>::Fp2Params>];

    #[inline(always)]
    fn mul_fp6_by_nonresidue(fe: &Fp6<Self::Fp6Params>) -> Fp6<Self::Fp6Params> {
        // Fp6 = Fp2[v]/(v^3 - xi); multiplying by w^2 = v in the Fp6 tower is a cyclic
        // shift scaled by the Fp6 non-residue on the wrapped-around coordinate.
        let mut result = *fe;
        let old_c2 = result.c2;
        result.c2 = result.c1;
        result.c1 = result.c0;
        result.c0 = Self::Fp6Params::mul_fp2_by_nonresidue(&old_c2);
        result
    }
}

pub struct Fp12ParamsWrapper<P: Fp12Parameters>(core::marker::PhantomData<P>);

impl<P: Fp12Parameters> QuadExtParameters for Fp12ParamsWrapper<P> {
    type BasePrimeField = <<P::Fp6Params as Fp6Parameters>::Fp2Params as Fp2Parameters>::Fp;
    type BaseField = Fp6<P::Fp6Params>;
    type FrobCoeff = Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 12;

    const NONRESIDUE: Self::BaseField = P::NONRESIDUE;

    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP12_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        P::mul_fp6_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        fe.mul_assign_by_fp2(Self::FROBENIUS_COEFF_C1[power % 12]);
    }
}

pub type Fp12<P> = QuadExtField<Fp12ParamsWrapper<P>>;

impl<P: Fp12Parameters> Fp12<P> {
    /// Multiply `self` by a sparse element with nonzero `F_{p^2}` coordinates at tower
    /// positions 0, 3 and 4 (the shape produced by a D-twist line evaluation).
    pub fn mul_by_034(
        &mut self,
        c0: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
        c3: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
        c4: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
    ) {
        let zero = Fp2::<<P::Fp6Params as Fp6Parameters>::Fp2Params>::zero();
        let sparse = Fp12::<P>::new(
            Fp6::new(*c0, zero, zero),
            Fp6::new(*c3, *c4, zero),
        );
        *self *= &sparse;
    }

    /// Multiply `self` by a sparse element with nonzero `F_{p^2}` coordinates at tower
    /// positions 0, 1 and 4 (the shape produced by an M-twist line evaluation).
    pub fn mul_by_014(
        &mut self,
        c0: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
        c1: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
        c4: &Fp2<<P::Fp6Params as Fp6Parameters>::Fp2Params>,
    ) {
        let zero = Fp2::<<P::Fp6Params as Fp6Parameters>::Fp2Params>::zero();
        let sparse = Fp12::<P>::new(
            Fp6::new(*c0, *c1, zero),
            Fp6::new(zero, *c4, zero),
        );
        *self *= &sparse;
    }

    /// Squaring specialised for elements of the order-`(p^4 - p^2 + 1)` cyclotomic
    /// subgroup reached after the easy part of the final exponentiation.
    ///
    /// This falls back to full field squaring rather than the compressed
    /// Granger-Scott formula; the result is identical, only the constant factor differs.
    pub fn cyclotomic_square(&self) -> Self {
        self.square()
    }
}
