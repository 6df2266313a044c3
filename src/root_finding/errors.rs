//! Root-finding error types.  
//! 
//! [`SecantError`] : configuration errors  
//! └ invalid convergence tolerance (`tol`)  
//!
//! Runtime failures of the iteration itself (degenerate secant line, 
//! exhausted iteration budget) are **not** errors. They are variants of 
//! [`SecantOutcome`](super::report::SecantOutcome) so callers branch on them 
//! like any other result.


use thiserror::Error; 


/// Secant configuration errors.  
/// 
/// Raised by the `set_*` builders on [`SecantCfg`](super::config::SecantCfg), 
/// never by the iteration.
#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error("invalid `tol`: must be finite and >= 0. got {got}")]
    InvalidTolerance { got: f64 },
}
