//! Locating extrema by root-finding on the derivative.  
//!
//! A critical point of `g` is a root of `g'`. [`locate_critical_point`] runs 
//! [`secant`] on `g'` and evaluates `g` at whatever estimate comes back, so 
//! the caller gets both the location and the value of the extremum.

use log::info; 

use super::config::SecantCfg; 
use super::function::ScalarFunction; 
use super::report::SecantOutcome; 
use super::secant::secant; 


/// Critical-point search result.
///
/// - `outcome` : secant run on the derivative  
/// - `value`   : g evaluated at `outcome.estimate()`  
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPoint { 
    pub outcome : SecantOutcome, 
    pub value   : f64, 
}

impl CriticalPoint { 
    pub fn location(&self) -> f64 { 
        self.outcome.estimate()
    }

    pub fn converged(&self) -> bool { 
        self.outcome.converged()
    }
}


/// Finds a critical point of `g` from its derivative `dg`.
///
/// # Arguments
/// - `g`      : original function, only evaluated once at the result  
/// - `dg`     : derivative of `g`, handed to [`secant`]  
/// - `x0, x1` : seeds for the secant run  
/// - `cfg`    : [`SecantCfg`]
///
/// `value` is filled in for every outcome variant, converged or not.
pub fn locate_critical_point<G, D> ( 
    g: G, 
    dg: D, 
    x0: f64, 
    x1: f64, 
    cfg: &SecantCfg, 
) -> CriticalPoint 
where G: ScalarFunction, D: ScalarFunction { 
    let outcome = secant(dg, x0, x1, cfg); 
    let value   = g.eval(outcome.estimate()); 

    info!(
        "critical point x = {} after {} iterations ({}), g(x) = {value}",
        outcome.estimate(), outcome.iterations(), outcome.termination()
    );

    CriticalPoint { outcome, value }
}
