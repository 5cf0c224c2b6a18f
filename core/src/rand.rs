use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Types that can be sampled uniformly at random.
///
/// Field elements implement this by rejection-sampling a random element of
/// the underlying biginteger representation against the field modulus;
/// curve points implement it by sampling a random scalar and multiplying the
/// generator.
pub trait UniformRand: Sized {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<T> UniformRand for T
where
    Standard: Distribution<T>,
{
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(Standard)
    }
}
