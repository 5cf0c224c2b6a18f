use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        PairingEngine,
    },
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        Field, Fp2, PrimeField, SquareRootField,
    },
};
use derivative::Derivative;
use num_traits::One;

use std::{marker::PhantomData, ops::MulAssign};

pub mod g1;
pub mod g2;

/// Curve-family parameters for the optimal-ate pairing on a BN curve: the embedding-degree-12
/// tower built over `Fp`, the two subgroup parameterisations `G1Parameters`/`G2Parameters`, and
/// the two curve-family constants that drive the Miller loop and final exponentiation — the
/// 6u+2 NAF recoding of the loop count and the raw parameter `u` itself.
pub trait BnParameters: 'static {
    /// Non-adjacent-form recoding of `6u + 2`, read from the most to the least significant
    /// digit by [`OptimalAteBn::miller_loop`].
    const SIX_U_PLUS_2_NAF: &'static [i8];
    /// The curve-family parameter `u` that `x.pow(u)` computations in the final
    /// exponentiation's hard part are raised to.
    const U: &'static [u64];

    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;

    const CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2: Fp2<Self::Fp2Params>;
}

/// The optimal-ate pairing engine for the BN curve family: Miller loop driven by the
/// 6u+2 NAF recoding of the loop count, final exponentiation split into the shared
/// easy part and the BN-specific hard part (Fuentes-Castañeda addition chain).
#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct OptimalAteBn<P: BnParameters>(PhantomData<fn() -> P>);

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

impl<P: BnParameters> OptimalAteBn<P> {
    /// Folds one precomputed line-function evaluation into the running Miller-loop
    /// accumulator `f` via the sparse 034-shaped multiplication in F_{p^12}: the line's
    /// two non-trivial F_{p^2} coefficients are first specialised to the G1 point `p`'s
    /// affine coordinates, then multiplied in.
    fn accumulate_line(
        f: &mut Fp12<P::Fp12Params>,
        coeffs: &(Fp2<P::Fp2Params>, Fp2<P::Fp2Params>, Fp2<P::Fp2Params>),
        p: &G1Affine<P>,
    ) {
        let mut c0 = coeffs.0;
        let mut c1 = coeffs.1;

        c0.c0.mul_assign(&p.y);
        c0.c1.mul_assign(&p.y);

        c1.c0.mul_assign(&p.x);
        c1.c1.mul_assign(&p.x);

        f.mul_by_034(&c0, &c1, &coeffs.2);
    }

    /// Raises `f` to the curve-family parameter `u`, the scalar power that recurs four
    /// times (`f^u`, `f^{u^2}`, `f^{u^3}`) through the hard part of [`hard_part`](Self::hard_part).
    fn pow_by_curve_param(f: &mut Fp12<P::Fp12Params>) {
        *f = f.pow(&P::U);
    }

    /// The easy part of BN final exponentiation: `f^{(p^6 - 1)(p^2 + 1)}`, computed with one
    /// conjugation, one inversion, and two Frobenius maps rather than a generic exponentiation.
    /// Shared across curve families (§4.5.2); only the hard part below is BN-specific.
    fn easy_part(r: &Fp12<P::Fp12Params>) -> Option<Fp12<P::Fp12Params>> {
        let mut f1 = *r;
        f1.conjugate();

        r.inverse().map(|mut f2| {
            let mut r = f1;
            r.mul_assign(&f2);
            f2 = r;
            r.frobenius_map(2);
            r.mul_assign(&f2);
            r
        })
    }

    /// The hard part of BN final exponentiation: the Fuentes-Castañeda addition chain,
    /// expressed as Frobenius maps and four applications of [`pow_by_curve_param`](Self::pow_by_curve_param)
    /// combined via conjugation, multiplication and cyclotomic squaring.
    fn hard_part(r: Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        let mut fp = r;
        fp.frobenius_map(1);

        let mut fp2 = r;
        fp2.frobenius_map(2);
        let mut fp3 = fp2;
        fp3.frobenius_map(1);

        let mut fu = r;
        Self::pow_by_curve_param(&mut fu);

        let mut fu2 = fu;
        Self::pow_by_curve_param(&mut fu2);

        let mut fu3 = fu2;
        Self::pow_by_curve_param(&mut fu3);

        let mut y3 = fu;
        y3.frobenius_map(1);

        let mut fu2p = fu2;
        fu2p.frobenius_map(1);

        let mut fu3p = fu3;
        fu3p.frobenius_map(1);

        let mut y2 = fu2;
        y2.frobenius_map(2);

        let mut y0 = fp;
        y0.mul_assign(&fp2);
        y0.mul_assign(&fp3);

        let mut y1 = r;
        y1.conjugate();

        let mut y5 = fu2;
        y5.conjugate();

        y3.conjugate();

        let mut y4 = fu;
        y4.mul_assign(&fu2p);
        y4.conjugate();

        let mut y6 = fu3;
        y6.mul_assign(&fu3p);
        y6.conjugate();

        y6.square_in_place();
        y6.mul_assign(&y4);
        y6.mul_assign(&y5);

        let mut t1 = y3;
        t1.mul_assign(&y5);
        t1.mul_assign(&y6);

        y6.mul_assign(&y2);

        t1.square_in_place();
        t1.mul_assign(&y6);
        t1.square_in_place();

        let mut t0 = t1;
        t0.mul_assign(&y1);

        t1.mul_assign(&y0);

        t0.square_in_place();
        t0.mul_assign(&t1);

        t0
    }
}

impl<P: BnParameters> PairingEngine for OptimalAteBn<P> {
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

    /// Evaluates the optimal-ate Miller loop over every `(G1Prepared, G2Prepared)` pair,
    /// sharing a single F_{p^12} accumulator across all of them (§4.5.1's multi-pairing
    /// optimisation): each of the `SIX_U_PLUS_2_NAF` digits squares the shared accumulator
    /// once and folds in one precomputed line per pair, with two extra line evaluations per
    /// pair afterwards for the Frobenius-twisted points `q1` and `-q2`.
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

        for i in (1..P::SIX_U_PLUS_2_NAF.len()).rev() {
            if i != P::SIX_U_PLUS_2_NAF.len() - 1 {
                f.square_in_place();
            }
            for (p, ref mut coeffs) in &mut pairs {
                Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
            }
            let digit = P::SIX_U_PLUS_2_NAF[i - 1];
            match digit {
                1 | -1 => {
                    for (p, ref mut coeffs) in &mut pairs {
                        Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
                    }
                },
                _ => continue,
            }
        }

        // Two additional line evaluations per pair, for the Frobenius-twisted points
        // q1 = π(Q) and -q2 = -π^2(Q) that the optimal-ate pairing also accumulates.
        for (p, ref mut coeffs) in &mut pairs {
            Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
        }

        for (p, ref mut coeffs) in &mut pairs {
            Self::accumulate_line(&mut f, coeffs.next().unwrap(), &p.0);
        }

        for (_p, ref mut coeffs) in &mut pairs {
            assert_eq!(coeffs.next(), None);
        }

        f
    }

    /// Raises the Miller-loop output to `(p^12 - 1) / r` by composing the shared easy part
    /// with the BN-specific hard part (§4.5.2), returning `None` only when the Miller output
    /// was zero (i.e. not invertible).
    fn final_exponentiation(r: &Self::Fqk) -> Option<Self::Fqk> {
        Self::easy_part(r).map(Self::hard_part)
    }
}
