use crate::{Field, Vec};
use std::boxed::Box;
use std::error::Error;

/// Types that can be flattened into a vector of base-field elements.
/// Extension-field towers implement this coordinate-by-coordinate down to
/// the prime field; it has no concrete consumer inside this crate but keeps
/// the tower's public API symmetric with the rest of the arkworks-descended
/// field stack.
pub trait ToConstraintField<F: Field> {
    fn to_field_elements(&self) -> Result<Vec<F>, Box<dyn Error>>;
}

impl<F: Field> ToConstraintField<F> for [F] {
    #[inline]
    fn to_field_elements(&self) -> Result<Vec<F>, Box<dyn Error>> {
        Ok(self.to_vec())
    }
}

impl<F: Field> ToConstraintField<F> for () {
    #[inline]
    fn to_field_elements(&self) -> Result<Vec<F>, Box<dyn Error>> {
        Ok(Vec::new())
    }
}

impl<F: Field> ToConstraintField<F> for bool {
    #[inline]
    fn to_field_elements(&self) -> Result<Vec<F>, Box<dyn Error>> {
        Ok(vec![if *self { F::one() } else { F::zero() }])
    }
}
