#[cfg(feature = "bls12_381")]
mod curves;
mod fields;

#[cfg(feature = "bls12_381")]
pub use curves::*;
pub use fields::*;
