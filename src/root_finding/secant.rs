use log::{info, warn}; 

use super::config::SecantCfg; 
use super::function::ScalarFunction; 
use super::report::SecantOutcome; 


/// x-intercept of the line through `(x0, fx0)` and `(x1, fx1)`. 
///
/// Caller must rule out `fx1 == fx0` first.
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64), 
    (x1, fx1): (f64, f64), 
) -> f64 {
    x1 - fx1 * (x1 - x0) / (fx1 - fx0)
}


/// Finds a root of a function using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is to be found ([`ScalarFunction`])
/// - `x0`   : first seed
/// - `x1`   : second seed
/// - `cfg`  : [`SecantCfg`] (`tol`, `max_iter`, degeneracy guard)
///
/// # Returns
/// [`SecantOutcome`], one of 
/// - `Converged`       : |f(x_{k+1})| < tol  
/// - `DegenerateStep`  : f(x_k) - f(x_{k-1}) judged zero, loop aborted  
/// - `ExhaustedBudget` : `max_iter` iterations without convergence  
///
/// None of these is an error; the caller branches on the variant.
///
/// # Behavior
/// - Update:
///     x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
/// - History starts as `[x0, x1]` and gains one entry per iteration.
/// - Seeds are evaluated lazily, so `max_iter == 0` spends no evaluations. 
/// - Each iteration logs one `info` line; early termination logs a `warn` summary.
///
/// # Notes
/// - Convergence is superlinear (~1.618) near simple roots.
/// - Non-finite values are not rejected: a NaN iterate never satisfies `tol`,
///   so the run ends in `ExhaustedBudget`.
///
/// # Warning 
/// - Poor seeds may lead to divergence or oscillation; there is no bracketing fallback.
#[must_use]
pub fn secant<F> ( 
    func: F, 
    x0: f64, 
    x1: f64,
    cfg: &SecantCfg
) -> SecantOutcome 
where F: ScalarFunction { 

    let tol      = cfg.tol(); 
    let max_iter = cfg.max_iter(); 
    let guard    = cfg.guard(); 

    let mut history = vec![x0, x1]; 

    if max_iter == 0 { 
        warn!("secant: no convergence after 0 iterations");
        return SecantOutcome::ExhaustedBudget { 
            last_estimate : x1, 
            iterations    : 0, 
            evaluations   : 0, 
            history 
        };
    }

    let mut x_prev = x0; 
    let mut x_curr = x1; 
    let mut f_prev = func.eval(x_prev); 
    let mut f_curr = func.eval(x_curr); 
    let mut evals  = 2; 

    for n in 0..max_iter { 
        if guard.is_degenerate(f_prev, f_curr) { 
            warn!("secant: division by zero at iteration {n}");
            return SecantOutcome::DegenerateStep { 
                last_estimate : x_curr, 
                iterations    : n, 
                evaluations   : evals, 
                history 
            };
        }

        let x_next = secant_x_intercept((x_prev, f_prev), (x_curr, f_curr)); 
        let f_next = func.eval(x_next); 
        evals += 1; 
        history.push(x_next); 

        info!("x{} = {x_next} f(x{}) = {f_next}", n + 1, n + 1);

        if f_next.abs() < tol { 
            return SecantOutcome::Converged { 
                estimate    : x_next, 
                iterations  : n + 1, 
                evaluations : evals, 
                history 
            };
        }

        x_prev = x_curr; 
        f_prev = f_curr; 
        x_curr = x_next; 
        f_curr = f_next; 
    }

    warn!("secant: no convergence after {max_iter} iterations");
    SecantOutcome::ExhaustedBudget { 
        last_estimate : x_curr, 
        iterations    : max_iter, 
        evaluations   : evals, 
        history 
    }
}
