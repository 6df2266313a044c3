//! Forward, backward and central difference schemes.
//!
//! ┌ [`Scheme::Forward`]  : (f(t + h) − f(t)) / h          O(h)  
//! ├ [`Scheme::Backward`] : (f(t) − f(t − h)) / h          O(h)  
//! └ [`Scheme::Central`]  : (f(t + h) − f(t − h)) / (2h)   O(h²)  
//!
//! [`Scheme::error_at`] checks one scheme at a single point against the exact 
//! derivative; [`compare_schemes`] evaluates all three over a grid and reports 
//! the worst absolute error of each.

use log::info;

use super::errors::DifferenceError;
use crate::root_finding::ScalarFunction;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Forward,
    Backward,
    Central,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Forward, Scheme::Backward, Scheme::Central];

    pub const fn name(self) -> &'static str {
        match self {
            Scheme::Forward  => "forward",
            Scheme::Backward => "backward",
            Scheme::Central  => "central",
        }
    }

    /// Approximates f'(t) with step `h`. No validation of `h`.
    #[inline]
    pub fn apply<F>(self, f: &F, t: f64, h: f64) -> f64
    where F: ScalarFunction + ?Sized {
        match self {
            Scheme::Forward  => (f.eval(t + h) - f.eval(t)) / h,
            Scheme::Backward => (f.eval(t) - f.eval(t - h)) / h,
            Scheme::Central  => (f.eval(t + h) - f.eval(t - h)) / (2.0 * h),
        }
    }

    /// Estimates f'(x) and its signed error against `exact` at `x`.
    ///
    /// # Errors 
    /// - [`DifferenceError::InvalidStep`] : `h` is non-finite or <= 0  
    pub fn error_at<F, D>(self, f: F, exact: D, x: f64, h: f64) -> Result<PointEstimate, DifferenceError>
    where F: ScalarFunction, D: ScalarFunction {
        if !h.is_finite() || h <= 0.0 {
            return Err(DifferenceError::InvalidStep { got: h });
        }

        let estimate = self.apply(&f, x, h);
        let exact    = exact.eval(x);

        Ok(PointEstimate { scheme: self, x, h, estimate, exact, error: exact - estimate })
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Single-point derivative estimate.
///
/// `error` is `exact - estimate`, so a positive value means the scheme 
/// undershoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEstimate {
    pub scheme   : Scheme,
    pub x        : f64,
    pub h        : f64,
    pub estimate : f64,
    pub exact    : f64,
    pub error    : f64,
}


/// Side-by-side derivative estimates over a grid.
///
/// [`SchemeComparison`]
/// - `grid`     : evaluation points  
/// - `h`        : step used by every scheme  
/// - `exact`    : exact derivative on `grid`  
/// - `forward`, `backward`, `central` : estimates on `grid`  
#[derive(Debug, Clone)]
pub struct SchemeComparison {
    pub grid     : Vec<f64>,
    pub h        : f64,
    pub exact    : Vec<f64>,
    pub forward  : Vec<f64>,
    pub backward : Vec<f64>,
    pub central  : Vec<f64>,
}

impl SchemeComparison {
    pub fn estimates(&self, scheme: Scheme) -> &[f64] {
        match scheme {
            Scheme::Forward  => &self.forward,
            Scheme::Backward => &self.backward,
            Scheme::Central  => &self.central,
        }
    }

    /// Largest |estimate − exact| over the grid.
    pub fn max_error(&self, scheme: Scheme) -> f64 {
        self.estimates(scheme)
            .iter()
            .zip(&self.exact)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}


/// Evaluates every [`Scheme`] for `f` on `grid` alongside `exact`.
///
/// # Errors 
/// - [`DifferenceError::InvalidStep`] : `h` is non-finite or <= 0  
/// - [`DifferenceError::EmptyGrid`]   : `grid` has no points  
pub fn compare_schemes<F, D>(
    f: F,
    exact: D,
    grid: &[f64],
    h: f64,
) -> Result<SchemeComparison, DifferenceError>
where F: ScalarFunction, D: ScalarFunction {
    if !h.is_finite() || h <= 0.0 {
        return Err(DifferenceError::InvalidStep { got: h });
    }
    if grid.is_empty() {
        return Err(DifferenceError::EmptyGrid);
    }

    let sweep = |scheme: Scheme| -> Vec<f64> {
        grid.iter().map(|&t| scheme.apply(&f, t, h)).collect()
    };

    let cmp = SchemeComparison {
        grid     : grid.to_vec(),
        h,
        exact    : grid.iter().map(|&t| exact.eval(t)).collect(),
        forward  : sweep(Scheme::Forward),
        backward : sweep(Scheme::Backward),
        central  : sweep(Scheme::Central),
    };

    for scheme in Scheme::ALL {
        info!("{scheme} difference: max |error| = {:e}", cmp.max_error(scheme));
    }

    Ok(cmp)
}
