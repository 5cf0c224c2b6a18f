use crate::fields::models::{
    fp2::{Fp2, Fp2Parameters},
    CubicExtField, CubicExtParameters,
};
use core::ops::MulAssign;

/// Parameters for the cubic extension `F_{p^6} = F_{p^2}[v] / (v^3 - NONRESIDUE)`.
pub trait Fp6Parameters: 'static + Send + Sync {
    type Fp2Params: Fp2Parameters;

    const NONRESIDUE: Fp2<Self::Fp2Params>;

    /// Coefficients for the Frobenius automorphism acting on `c1`:
    /// `NONRESIDUE^((p^i - 1) / 3)` for `i = 0, ..., 5`.
    const FROBENIUS_COEFF_FP6_C1: &'static [<Self::Fp2Params as Fp2Parameters>::Fp];
    /// Coefficients for the Frobenius automorphism acting on `c2`:
    /// `NONRESIDUE^((2 p^i - 2) / 3)` for `i = 0, ..., 5`.
    const FROBENIUS_COEFF_FP6_C2: &'static [<Self::Fp2Params as Fp2Parameters>::Fp];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Self::NONRESIDUE * fe
    }
}

pub struct Fp6ParamsWrapper<P: Fp6Parameters>(core::marker::PhantomData<P>);

impl<P: Fp6Parameters> CubicExtParameters for Fp6ParamsWrapper<P> {
    type BasePrimeField = <P::Fp2Params as Fp2Parameters>::Fp;
    type BaseField = Fp2<P::Fp2Params>;
    type FrobCoeff = <P::Fp2Params as Fp2Parameters>::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;

    const NONRESIDUE: Self::BaseField = P::NONRESIDUE;

    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP6_C1;
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP6_C2;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        P::mul_fp2_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    ) {
        c1.mul_assign_by_fp(&P::FROBENIUS_COEFF_FP6_C1[power % 6]);
        c2.mul_assign_by_fp(&P::FROBENIUS_COEFF_FP6_C2[power % 6]);
    }
}

pub type Fp6<P> = CubicExtField<Fp6ParamsWrapper<P>>;

impl<P: Fp6Parameters> Fp6<P> {
    pub fn mul_assign_by_fp2(&mut self, other: Fp2<P::Fp2Params>) {
        self.c0.mul_assign(&other);
        self.c1.mul_assign(&other);
        self.c2.mul_assign(&other);
    }
}
