use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        PairingEngine,
    },
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        BitIterator, Field, Fp2, PrimeField, SquareRootField,
    },
};
use derivative::Derivative;
use num_traits::One;

use core::marker::PhantomData;

/// Which G2 twist (multiplicative or divisive) a BLS12 curve family uses, which fixes
/// which of the line function's two F_{p^2} coefficients gets specialised to the
/// G1 point during [`OptimalAteBls12::accumulate_line`].
pub enum TwistType {
    M,
    D,
}

/// Curve-family parameters for the optimal-ate pairing on a BLS12 curve: the
/// embedding-degree-12 tower built over `Fp`, the subgroup parameterisations, and the
/// single curve-family scalar `X` (with its sign) that both the Miller loop and the
/// final exponentiation's hard part are driven by.
pub trait Bls12Parameters: 'static {
    const X: &'static [u64];
    const X_IS_NEGATIVE: bool;
    const TWIST_TYPE: TwistType;
    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

/// The optimal-ate pairing engine for the BLS12 curve family: a single-scalar Miller
/// loop over the bits of `X`, and a final exponentiation whose hard part follows the
/// Hayashida-Hayasaka-Teruya addition chain (eprint.iacr.org/2016/130, Table 1).
#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct OptimalAteBls12<P: Bls12Parameters>(PhantomData<fn() -> P>);

impl<P: Bls12Parameters> OptimalAteBls12<P> {
    /// Folds one precomputed line-function evaluation into the running Miller-loop
    /// accumulator `f`, specialising the line's coefficients to the G1 point `p`'s
    /// affine coordinates before the sparse multiplication — the coefficient layout
    /// (014 vs 034) depends on whether the curve uses an M- or D-twist.
    fn accumulate_line(
        f: &mut Fp12<P::Fp12Params>,
        coeffs: &(Fp2<P::Fp2Params>, Fp2<P::Fp2Params>, Fp2<P::Fp2Params>),
        p: &G1Affine<P>,
    ) {
        let mut c0 = coeffs.0;
        let mut c1 = coeffs.1;
        let mut c2 = coeffs.2;

        match P::TWIST_TYPE {
            TwistType::M => {
                c2.mul_assign_by_fp(&p.y);
                c1.mul_assign_by_fp(&p.x);
                f.mul_by_014(&c0, &c1, &c2);
            },
            TwistType::D => {
                c0.mul_assign_by_fp(&p.y);
                c1.mul_assign_by_fp(&p.x);
                f.mul_by_034(&c0, &c1, &c2);
            },
        }
    }

    /// Raises `f` to the curve-family parameter `X` via cyclotomic squarings,
    /// correcting for a negative `X` by conjugating afterwards (equivalent to
    /// inverting in the cyclotomic subgroup).
    fn pow_by_curve_param(mut f: Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        f = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f.conjugate();
        }
        f
    }

    /// The easy part of BLS12 final exponentiation: `f^{(p^6 - 1)(p^2 + 1)}`, the same
    /// shared formula used across curve families (§4.5.2).
    fn easy_part(f: &Fp12<P::Fp12Params>) -> Option<Fp12<P::Fp12Params>> {
        let mut f1 = *f;
        f1.frobenius_map(6);

        f.inverse().map(|f2| {
            let mut r = f1 * &f2;
            r.frobenius_map(2);
            r *= &f2;
            r
        })
    }

    /// The hard part of BLS12 final exponentiation, following the addition chain from
    /// Table 1 of eprint.iacr.org/2016/130: dominated by four applications of
    /// [`pow_by_curve_param`](Self::pow_by_curve_param), combined via cyclotomic
    /// squarings, conjugations and Frobenius maps.
    fn hard_part(r: Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        let mut y0 = r.cyclotomic_square();
        y0.conjugate();

        let mut y5 = Self::pow_by_curve_param(r);

        let mut y1 = y5.cyclotomic_square();
        let mut y3 = y0 * &y5;
        y0 = Self::pow_by_curve_param(y3);
        let y2 = Self::pow_by_curve_param(y0);
        let mut y4 = Self::pow_by_curve_param(y2);
        y4 *= &y1;
        y1 = Self::pow_by_curve_param(y4);
        y3.conjugate();
        y1 *= &y3;
        y1 *= &r;
        y3 = r;
        y3.conjugate();
        y0 *= &r;
        y0.frobenius_map(3);
        y4 *= &y3;
        y4.frobenius_map(1);
        y5 *= &y2;
        y5.frobenius_map(2);
        y5 *= &y0;
        y5 *= &y4;
        y5 *= &y1;
        y5
    }
}

impl<P: Bls12Parameters> PairingEngine for OptimalAteBls12<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;

    /// Evaluates the optimal-ate Miller loop by walking the bits of the curve-family
    /// scalar `X` (§4.5.1): one squaring and one line evaluation per bit, plus a second
    /// line evaluation on set bits, then a final conjugation if `X` is negative.
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let mut pairs = vec![];
        for (p, q) in i {
            if !p.is_zero() && !q.is_zero() {
                pairs.push((p, q.ell_coeffs.iter()));
            }
        }

        let mut f = Self::Fqk::one();

        for bit in BitIterator::new(P::X).skip(1) {
            f.square_in_place();

            for (p, ref mut coeffs) in &mut pairs {
                Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
            }

            if bit {
                for &mut (p, ref mut coeffs) in &mut pairs {
                    Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
                }
            }
        }

        if P::X_IS_NEGATIVE {
            f.conjugate();
        }

        f
    }

    /// Raises the Miller-loop output to `(p^12 - 1) / r` by composing the shared easy
    /// part with the BLS12-specific hard part (§4.5.2).
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk> {
        Self::easy_part(f).map(Self::hard_part)
    }
}
