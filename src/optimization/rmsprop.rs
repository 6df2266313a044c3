//! RMSProp optimizer.
//!
//! Gradient descent where every coordinate's step is divided by the root 
//! of a running average of its squared gradients:
//!
//! ```text
//! s ← ρ·s + (1 − ρ)·g²
//! x ← x − α / (√s + ε) · g
//! ```

use log::info;

use super::errors::RmsPropError;

pub const DEFAULT_LEARNING_RATE : f64   = 0.1;
pub const DEFAULT_DECAY         : f64   = 0.9;
pub const DEFAULT_EPSILON       : f64   = 1e-8;
pub const DEFAULT_MAX_ITER      : usize = 100;


/// RMSProp configuration 
///
/// # Defaults 
/// - `learning_rate` (α) : [`DEFAULT_LEARNING_RATE`]
/// - `decay`         (ρ) : [`DEFAULT_DECAY`]
/// - `epsilon`       (ε) : [`DEFAULT_EPSILON`]
/// - `max_iter`          : [`DEFAULT_MAX_ITER`], run in full, no early exit
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RmsPropCfg {
    learning_rate : f64,
    decay         : f64,
    epsilon       : f64,
    max_iter      : usize,
}

impl RmsPropCfg {
    pub fn new() -> Self {
        Self {
            learning_rate : DEFAULT_LEARNING_RATE,
            decay         : DEFAULT_DECAY,
            epsilon       : DEFAULT_EPSILON,
            max_iter      : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn learning_rate(&self) -> f64 { self.learning_rate }
    pub fn decay(&self)         -> f64 { self.decay }
    pub fn epsilon(&self)       -> f64 { self.epsilon }
    pub fn max_iter(&self)      -> usize { self.max_iter }

    pub fn set_learning_rate(mut self, v: f64) -> Result<Self, RmsPropError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RmsPropError::InvalidLearningRate { got: v });
        }
        self.learning_rate = v;
        Ok(self)
    }

    pub fn set_decay(mut self, v: f64) -> Result<Self, RmsPropError> {
        if !v.is_finite() || !(0.0..1.0).contains(&v) {
            return Err(RmsPropError::InvalidDecay { got: v });
        }
        self.decay = v;
        Ok(self)
    }

    pub fn set_epsilon(mut self, v: f64) -> Result<Self, RmsPropError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RmsPropError::InvalidEpsilon { got: v });
        }
        self.epsilon = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Self {
        self.max_iter = v;
        self
    }
}

impl Default for RmsPropCfg {
    fn default() -> Self {
        Self::new()
    }
}


/// Optimizer state: the running average of squared gradients.
#[derive(Debug, Clone)]
pub struct RmsProp<const N: usize> {
    cfg: RmsPropCfg,
    /// Running mean of g² per coordinate.
    s: [f64; N],
}

impl<const N: usize> RmsProp<N> {
    pub fn new(cfg: RmsPropCfg) -> Self {
        Self { cfg, s: [0.0; N] }
    }

    pub fn mean_square(&self) -> &[f64; N] {
        &self.s
    }

    /// Updates `x` in place given its gradient `g`.
    pub fn step(&mut self, x: &mut [f64; N], g: &[f64; N]) {
        let rho = self.cfg.decay;
        for i in 0..N {
            self.s[i] = rho * self.s[i] + (1.0 - rho) * g[i] * g[i];
            x[i] -= self.cfg.learning_rate / (self.s[i].sqrt() + self.cfg.epsilon) * g[i];
        }
    }
}


/// Diagnostics recorded after one RMSProp step.
///
/// - `point`     : iterate after the update  
/// - `value`     : objective at `point`  
/// - `grad_norm` : Euclidean norm of the gradient that drove the update  
/// - `s`         : running mean of g² after the update  
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmsPropStep<const N: usize> {
    pub point     : [f64; N],
    pub value     : f64,
    pub grad_norm : f64,
    pub s         : [f64; N],
}


/// Summary of an RMSProp run.
///
/// [`RmsPropReport`]
/// - `point`      : final iterate  
/// - `value`      : objective at `point`  
/// - `iterations` : steps taken, always `max_iter`  
/// - `path`       : start point followed by every iterate, `len == iterations + 1`  
/// - `steps`      : per-step [`RmsPropStep`] records  
#[derive(Debug, Clone)]
pub struct RmsPropReport<const N: usize> {
    pub point      : [f64; N],
    pub value      : f64,
    pub iterations : usize,
    pub path       : Vec<[f64; N]>,
    pub steps      : Vec<RmsPropStep<N>>,
}


/// Minimizes `objective` with RMSProp from `start`.
///
/// # Arguments
/// - `objective` : f(x), only evaluated for reporting  
/// - `gradient`  : ∇f(x)  
/// - `start`     : initial point  
/// - `cfg`       : [`RmsPropCfg`]  
///
/// Runs exactly `cfg.max_iter()` steps and logs one `info` line per step.
pub fn rmsprop<const N: usize, F, G>(
    objective: F,
    gradient: G,
    start: [f64; N],
    cfg: &RmsPropCfg,
) -> RmsPropReport<N>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
{
    let mut opt   = RmsProp::<N>::new(*cfg);
    let mut x     = start;
    let mut path  = Vec::with_capacity(cfg.max_iter + 1);
    let mut steps = Vec::with_capacity(cfg.max_iter);
    path.push(x);

    for i in 0..cfg.max_iter {
        let g = gradient(&x);
        opt.step(&mut x, &g);

        let value     = objective(&x);
        let grad_norm = g.iter().map(|gi| gi * gi).sum::<f64>().sqrt();
        info!(
            "iteration {}: x = {:?}, f(x) = {value}, ||g|| = {grad_norm}, s = {:?}",
            i + 1, x, opt.mean_square()
        );

        steps.push(RmsPropStep { point: x, value, grad_norm, s: *opt.mean_square() });
        path.push(x);
    }

    RmsPropReport {
        point      : x,
        value      : objective(&x),
        iterations : cfg.max_iter,
        path,
        steps,
    }
}
