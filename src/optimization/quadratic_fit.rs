//! Quadratic fit search.
//!
//! Line search that keeps a bracket `a < b < c` around a minimum, fits the 
//! parabola through `(a, f(a))`, `(b, f(b))`, `(c, f(c))`, jumps to its vertex
//!
//! ```text
//! x* = ½ · [ya(b² − c²) + yb(c² − a²) + yc(a² − b²)] / [ya(b − c) + yb(c − a) + yc(a − b)]
//! ```
//!
//! and replaces one bracket point so that `b` stays the best point seen.

use log::{info, warn};

use super::errors::QuadraticFitError;
use crate::root_finding::ScalarFunction;

pub const DEFAULT_FIT_MAX_ITER: usize = 5;


/// Quadratic fit configuration 
///
/// # Defaults 
/// - `max_iter` : [`DEFAULT_FIT_MAX_ITER`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuadraticFitCfg {
    max_iter: usize,
}

impl QuadraticFitCfg {
    pub fn new() -> Self {
        Self { max_iter: DEFAULT_FIT_MAX_ITER }
    }

    pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_max_iter(mut self, v: usize) -> Self {
        self.max_iter = v;
        self
    }
}

impl Default for QuadraticFitCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// `y = c2·x² + c1·x + c0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    pub c2: f64,
    pub c1: f64,
    pub c0: f64,
}

impl Parabola {
    /// Interpolating parabola through three points with distinct abscissae.
    pub fn through([a, b, c]: [f64; 3], [ya, yb, yc]: [f64; 3]) -> Self {
        let c2 = ((yc - ya) * (b - a) - (yb - ya) * (c - a)) / ((c - b) * (b - a) * (c - a));
        let c1 = (yb - ya) / (b - a) - c2 * (a + b);
        let c0 = ya - c2 * a * a - c1 * a;
        Self { c2, c1, c0 }
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.c2 * x + self.c1) * x + self.c0
    }
}


/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitTermination {
    IterationLimit,
    /// The three bracket values are collinear, so the parabola has no vertex.
    DegenerateFit,
}


/// One iteration of the search.
///
/// - `bracket`  : `[a, b, c]` the parabola was fitted through  
/// - `values`   : `[f(a), f(b), f(c)]`  
/// - `parabola` : fitted parabola  
/// - `x`, `fx`  : vertex and f at the vertex  
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFitStep {
    pub bracket  : [f64; 3],
    pub values   : [f64; 3],
    pub parabola : Parabola,
    pub x        : f64,
    pub fx       : f64,
}


/// Summary of a quadratic fit search.
///
/// [`QuadraticFitReport`]
/// - `point`       : final `b`, the best point seen  
/// - `value`       : f(`point`)  
/// - `bracket`     : final `[a, b, c]`  
/// - `iterations`  : vertices evaluated  
/// - `termination` : [`FitTermination`]  
/// - `steps`       : per-iteration [`QuadraticFitStep`] records  
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticFitReport {
    pub point       : f64,
    pub value       : f64,
    pub bracket     : [f64; 3],
    pub iterations  : usize,
    pub termination : FitTermination,
    pub steps       : Vec<QuadraticFitStep>,
}


/// Shrinks the bracket `[a, b, c]` towards a minimum of `func`.
///
/// # Arguments
/// - `func`    : function to minimize  
/// - `bracket` : `[a, b, c]` with `a < b < c`; ideally `f(b)` below both ends  
/// - `cfg`     : [`QuadraticFitCfg`]  
///
/// # Errors 
/// - [`QuadraticFitError::InvalidBracket`] : bracket not finite and strictly increasing  
///
/// # Behavior
/// - vertex right of `b`: if it is worse than `b` it becomes `c`, otherwise 
///   `(a, b) ← (b, x)`  
/// - vertex left of `b`: mirror image  
/// - vertex equal to `b`: bracket unchanged  
/// - collinear values end the run with [`FitTermination::DegenerateFit`]  
///
/// # Warning 
/// - No bracket check is made on the values; if `f(b)` is not below both 
///   ends the vertex may land outside `[a, c]`.
pub fn quadratic_fit<F>(
    func: F,
    bracket: [f64; 3],
    cfg: &QuadraticFitCfg,
) -> Result<QuadraticFitReport, QuadraticFitError>
where F: ScalarFunction {
    let [mut a, mut b, mut c] = bracket;
    if !(a.is_finite() && b.is_finite() && c.is_finite()) || !(a < b && b < c) {
        return Err(QuadraticFitError::InvalidBracket { a, b, c });
    }

    let (mut ya, mut yb, mut yc) = (func.eval(a), func.eval(b), func.eval(c));
    let mut steps       = Vec::with_capacity(cfg.max_iter);
    let mut termination = FitTermination::IterationLimit;

    for i in 0..cfg.max_iter {
        let denom = ya * (b - c) + yb * (c - a) + yc * (a - b);
        if denom == 0.0 {
            warn!("quadratic fit: collinear bracket values at iteration {i}");
            termination = FitTermination::DegenerateFit;
            break;
        }

        let x  = 0.5 * (ya * (b * b - c * c) + yb * (c * c - a * a) + yc * (a * a - b * b)) / denom;
        let fx = func.eval(x);
        steps.push(QuadraticFitStep {
            bracket  : [a, b, c],
            values   : [ya, yb, yc],
            parabola : Parabola::through([a, b, c], [ya, yb, yc]),
            x,
            fx,
        });

        if x > b {
            if fx > yb {
                c = x; yc = fx;
            } else {
                a = b; ya = yb;
                b = x; yb = fx;
            }
        } else if x < b {
            if fx > yb {
                a = x; ya = fx;
            } else {
                c = b; yc = yb;
                b = x; yb = fx;
            }
        }

        info!("iteration {}: a = {a}, b = {b}, c = {c}, x = {x}, f(x) = {fx}", i + 1);
    }

    Ok(QuadraticFitReport {
        point      : b,
        value      : yb,
        bracket    : [a, b, c],
        iterations : steps.len(),
        termination,
        steps,
    })
}
