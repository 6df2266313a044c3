//! Gradient-based optimizers and line searches.

pub mod errors;
pub mod quadratic_fit;
pub mod rmsprop;

pub use errors::{QuadraticFitError, RmsPropError};
pub use quadratic_fit::{
    quadratic_fit, FitTermination, Parabola, QuadraticFitCfg, QuadraticFitReport, QuadraticFitStep,
};
pub use rmsprop::{rmsprop, RmsProp, RmsPropCfg, RmsPropReport, RmsPropStep};
