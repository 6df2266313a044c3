//! Classical numerical-analysis techniques.
//!
//! ┌ [`root_finding`]    : secant root finder, critical-point location
//! ├ [`optimization`]    : RMSProp gradient descent, quadratic fit search
//! ├ [`differentiation`] : forward / backward / central differences, Hessian
//! ├ [`sampling`]        : evenly spaced grids
//! └ [`plotting`]        : series export for external plotting

pub mod root_finding;
pub mod optimization;
pub mod differentiation;
pub mod sampling;
pub mod plotting;
