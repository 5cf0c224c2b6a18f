use crate::{
    bytes::{FromBytes, ToBytes},
    fields::{BitIterator, PrimeField},
    serialize::{CanonicalDeserialize, CanonicalSerialize},
    UniformRand,
};
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use num_traits::Zero;

/// An abstract additively-written group, satisfied by curve point groups and
/// also by multiplicatively-written pairing target groups re-exposed through
/// an additive interface (e.g. the cyclotomic subgroup of an extension field
/// used as a pairing codomain).
pub trait Group:
    ToBytes
    + FromBytes
    + CanonicalSerialize
    + CanonicalDeserialize
    + Eq
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Hash
    + Zero
    + Neg<Output = Self>
    + UniformRand
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    type ScalarField: PrimeField + Into<<Self::ScalarField as PrimeField>::BigInt>;

    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self;

    /// Sets `self := self + self`.
    fn double_in_place(&mut self) -> &mut Self;

    /// Variable-time scalar multiplication by double-and-add. Curve and
    /// field implementations that need a constant-time path provide their
    /// own `mul` via `ProjectiveCurve`/cyclotomic exponentiation instead of
    /// relying on this default.
    #[must_use]
    fn mul<'a>(&self, other: &'a Self::ScalarField) -> Self {
        let mut copy = *self;
        copy.mul_assign(other);
        copy
    }

    fn mul_assign<'a>(&mut self, other: &'a Self::ScalarField) {
        let mut res = Self::zero();
        for bit in BitIterator::new(other.into_repr()) {
            res.double_in_place();
            if bit {
                res += &*self;
            }
        }
        *self = res
    }
}
