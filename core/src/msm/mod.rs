mod fixed_base;
mod variable_base;
pub use fixed_base::*;
pub use variable_base::*;

/// Approximates `ln(a)` without pulling in floating-point math, for picking a
/// Pippenger bucket-window width from the number of scalars in a multi-scalar
/// multiplication.
fn ln_without_floats(a: usize) -> usize {
    fn log2(x: usize) -> u32 {
        if x <= 1 {
            return 0;
        }

        let n = x.leading_zeros();
        ::core::mem::size_of::<usize>() as u32 * 8 - n
    }

    // log2(a) * ln(2)
    (log2(a) * 69 / 100) as usize
}
