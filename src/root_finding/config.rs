//! Configuration for the secant root finder.  
//! 
//! [`SecantCfg`] — fields  
//! ├ `tol`      : convergence tolerance on |f(x)|  
//! ├ `max_iter` : hard iteration ceiling  
//! └ `guard`    : zero-denominator test ([`DegeneracyGuard`])  
//!
//! [`SecantCfg::new`] initializes configuration with default values. 


use super::errors::SecantError; 

pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 100;


/// How the secant denominator `f(x1) - f(x0)` is judged degenerate.  
///
/// - [`DegeneracyGuard::Exact`]  : `f(x1) - f(x0) == 0.0` (bit-exact)  
/// - [`DegeneracyGuard::Scaled`] : `|f(x1) - f(x0)| <= ε·max(|f(x0)|, |f(x1)|, 1) + MIN_POSITIVE`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DegeneracyGuard { 
    #[default]
    Exact, 
    Scaled, 
}

impl DegeneracyGuard { 
    /// `true` if the secant through `(x0, fx0)`, `(x1, fx1)` has no usable x-intercept.
    #[inline]
    pub fn is_degenerate(self, fx0: f64, fx1: f64) -> bool { 
        let denom = fx1 - fx0; 
        match self { 
            DegeneracyGuard::Exact  => denom == 0.0, 
            DegeneracyGuard::Scaled => { 
                let scale  = fx0.abs().max(fx1.abs()).max(1.0);
                let thresh = f64::EPSILON * scale + f64::MIN_POSITIVE;
                denom.abs() <= thresh
            }
        }
    }
}


/// Secant configuration 
///
/// # Construction 
/// - Use [`SecantCfg::new`] then optional setters. 
///
/// # Defaults 
/// - `tol`      : [`DEFAULT_TOL`]
/// - `max_iter` : [`DEFAULT_MAX_ITER`]
/// - `guard`    : [`DegeneracyGuard::Exact`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    tol      : f64,
    max_iter : usize,
    guard    : DegeneracyGuard,
}

impl SecantCfg {
    pub fn new() -> Self {
        Self { 
            tol      : DEFAULT_TOL, 
            max_iter : DEFAULT_MAX_ITER, 
            guard    : DegeneracyGuard::Exact, 
        }
    }

    // getters  
    pub fn tol(&self)      -> f64 { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }
    pub fn guard(&self)    -> DegeneracyGuard { self.guard }

    /// Convergence tolerance. `0.0` is allowed and never converges.
    pub fn set_tol(mut self, v: f64) -> Result<Self, SecantError> {
        if !v.is_finite() || v < 0.0 {
            return Err(SecantError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    /// Iteration ceiling. `0` runs no iteration at all.
    pub fn set_max_iter(mut self, v: usize) -> Self {
        self.max_iter = v;
        self
    }

    pub fn set_guard(mut self, v: DegeneracyGuard) -> Self {
        self.guard = v;
        self
    }
}

impl Default for SecantCfg { 
    fn default() -> Self { 
        Self::new()
    }
}
