//! Numerical Hessian from mixed central differences.
//!
//! ```text
//! ∂²f/∂xᵢ∂xⱼ ≈ [f(xᵢ+h, xⱼ+h) − f(xᵢ+h, xⱼ−h) − f(xᵢ−h, xⱼ+h) + f(xᵢ−h, xⱼ−h)] / 4h²
//! ```
//!
//! On the diagonal both shifts land on the same coordinate, which gives the 
//! plain central second difference with step `2h`.

use log::debug;

use super::errors::DifferenceError;


/// Approximates the `N × N` Hessian of `f` at `point`.
///
/// # Arguments
/// - `f`     : scalar field over `N` variables  
/// - `point` : evaluation point  
/// - `h`     : step, applied to every coordinate  
///
/// # Errors 
/// - [`DifferenceError::InvalidStep`] : `h` is non-finite or <= 0  
///
/// # Notes
/// - Costs `4·N²` evaluations; entry `(i, j)` and `(j, i)` are computed 
///   separately, so the result is symmetric only up to rounding.
pub fn hessian<const N: usize, F>(
    f: F,
    point: [f64; N],
    h: f64,
) -> Result<[[f64; N]; N], DifferenceError>
where F: Fn(&[f64; N]) -> f64 {
    if !h.is_finite() || h <= 0.0 {
        return Err(DifferenceError::InvalidStep { got: h });
    }

    let mut hess = [[0.0; N]; N];
    let shifted = |di: f64, dj: f64, i: usize, j: usize| -> f64 {
        let mut p = point;
        p[i] += di;
        p[j] += dj;
        f(&p)
    };

    for i in 0..N {
        for j in 0..N {
            let pp = shifted( h,  h, i, j);
            let pm = shifted( h, -h, i, j);
            let mp = shifted(-h,  h, i, j);
            let mm = shifted(-h, -h, i, j);
            hess[i][j] = (pp - pm - mp + mm) / (4.0 * h * h);
        }
    }

    debug!("hessian at {point:?} with h = {h}: {hess:?}");
    Ok(hess)
}
