pub(crate) mod curves;
pub(crate) mod fields;
pub(crate) mod groups;
pub(crate) mod helpers;
pub(crate) mod msm;
#[macro_use]
pub(crate) mod macros;
