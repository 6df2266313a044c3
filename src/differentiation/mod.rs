//! Finite-difference derivative approximations.

pub mod errors;
pub mod finite_difference;
pub mod hessian;

pub use errors::DifferenceError;
pub use finite_difference::{compare_schemes, PointEstimate, Scheme, SchemeComparison};
pub use hessian::hessian;
