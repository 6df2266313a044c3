//! Defines the [`SecantOutcome`] tagged result returned by 
//! [`secant`](super::secant::secant). 

/// Why the secant iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum Termination { 
    ToleranceReached, 
    DegenerateStep,
    IterationLimit,
}

impl std::fmt::Display for Termination { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        let s = match self { 
            Termination::ToleranceReached => "tolerance reached", 
            Termination::DegenerateStep   => "degenerate secant step", 
            Termination::IterationLimit   => "iteration limit", 
        };
        f.write_str(s)
    }
}


/// Outcome of a secant run. 
///
/// Variants:
/// ├ [`SecantOutcome::Converged`]   
/// │   |f(estimate)| < tol  
/// │   ├ `estimate`    : newest iterate  
/// │   └ `iterations`  : iterations completed, including the converging one  
/// │
/// ├ [`SecantOutcome::DegenerateStep`]  
/// │   f(x1) - f(x0) judged zero, the next iterate is undefined  
/// │   ├ `last_estimate` : x1 at the time of the abort  
/// │   └ `iterations`    : iterations completed before the abort  
/// │
/// └ [`SecantOutcome::ExhaustedBudget`]  
///     `max_iter` iterations without meeting `tol`  
///     ├ `last_estimate` : x1 after the final shift  
///     └ `iterations`    : always `max_iter`  
///
/// Every variant carries
/// ├ `history`     : seeds followed by every generated iterate, `len == iterations + 2`  
/// └ `evaluations` : function evaluations spent  
#[derive(Debug, Clone, PartialEq)]
pub enum SecantOutcome { 
    Converged { 
        estimate    : f64, 
        iterations  : usize, 
        evaluations : usize, 
        history     : Vec<f64>, 
    },
    DegenerateStep { 
        last_estimate : f64, 
        iterations    : usize, 
        evaluations   : usize, 
        history       : Vec<f64>, 
    },
    ExhaustedBudget { 
        last_estimate : f64, 
        iterations    : usize, 
        evaluations   : usize, 
        history       : Vec<f64>, 
    },
}

impl SecantOutcome { 
    /// Best available estimate regardless of variant.
    pub fn estimate(&self) -> f64 { 
        match self { 
            SecantOutcome::Converged { estimate, .. }            => *estimate, 
            SecantOutcome::DegenerateStep { last_estimate, .. }  
            | SecantOutcome::ExhaustedBudget { last_estimate, .. } => *last_estimate, 
        }
    }

    pub fn iterations(&self) -> usize { 
        match self { 
            SecantOutcome::Converged { iterations, .. } 
            | SecantOutcome::DegenerateStep { iterations, .. } 
            | SecantOutcome::ExhaustedBudget { iterations, .. } => *iterations, 
        }
    }

    pub fn evaluations(&self) -> usize { 
        match self { 
            SecantOutcome::Converged { evaluations, .. } 
            | SecantOutcome::DegenerateStep { evaluations, .. } 
            | SecantOutcome::ExhaustedBudget { evaluations, .. } => *evaluations, 
        }
    }

    pub fn history(&self) -> &[f64] { 
        match self { 
            SecantOutcome::Converged { history, .. } 
            | SecantOutcome::DegenerateStep { history, .. } 
            | SecantOutcome::ExhaustedBudget { history, .. } => history, 
        }
    }

    pub fn termination(&self) -> Termination { 
        match self { 
            SecantOutcome::Converged { .. }       => Termination::ToleranceReached, 
            SecantOutcome::DegenerateStep { .. }  => Termination::DegenerateStep, 
            SecantOutcome::ExhaustedBudget { .. } => Termination::IterationLimit, 
        }
    }

    pub fn converged(&self) -> bool { 
        matches!(self, SecantOutcome::Converged { .. })
    }

    /// `(estimate, iterations, history)`, dropping the variant tag.
    pub fn into_parts(self) -> (f64, usize, Vec<f64>) { 
        match self { 
            SecantOutcome::Converged { estimate, iterations, history, .. } 
            | SecantOutcome::DegenerateStep { last_estimate: estimate, iterations, history, .. } 
            | SecantOutcome::ExhaustedBudget { last_estimate: estimate, iterations, history, .. } 
            => (estimate, iterations, history), 
        }
    }
}
