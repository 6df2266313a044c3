//! Evenly spaced sample grids.
//!
//! - [`linspace`] : `num` points over `[start, stop]`, endpoints included  
//! - [`arange`]   : `start, start + step, ...` strictly before `stop`  

use thiserror::Error; 

/// Largest grid [`arange`] will allocate.
pub const MAX_GRID_POINTS: usize = 1 << 28;


#[derive(Debug, Error, PartialEq)]
pub enum SamplingError { 
    #[error("invalid step: must be finite and non-zero. got {got}")]
    InvalidStep { got: f64 },

    #[error("non-finite bounds: start={start}, stop={stop}")]
    NonFiniteBounds { start: f64, stop: f64 },

    #[error("grid would hold {count} points, limit is {}", MAX_GRID_POINTS)]
    TooManyPoints { count: f64 },
}


/// `num` evenly spaced points from `start` to `stop` inclusive.
///
/// `num == 0` gives an empty grid and `num == 1` gives `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> { 
    match num { 
        0 => Vec::new(), 
        1 => vec![start], 
        _ => { 
            let step = (stop - start) / (num - 1) as f64; 
            let mut grid: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect(); 
            // pin the endpoint against accumulated rounding
            grid[num - 1] = stop; 
            grid
        }
    }
}


/// Half-open grid `start + i * step` for every `i` that stays short of `stop`.
///
/// # Errors 
/// - [`SamplingError::InvalidStep`]     : `step` is zero, NaN or infinite  
/// - [`SamplingError::NonFiniteBounds`] : `start` or `stop` is NaN or infinite  
/// - [`SamplingError::TooManyPoints`]   : more than [`MAX_GRID_POINTS`] points  
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, SamplingError> { 
    if !step.is_finite() || step == 0.0 { 
        return Err(SamplingError::InvalidStep { got: step });
    }
    if !(start.is_finite() && stop.is_finite()) { 
        return Err(SamplingError::NonFiniteBounds { start, stop });
    }

    let span = ((stop - start) / step).ceil(); 
    if span > MAX_GRID_POINTS as f64 { 
        return Err(SamplingError::TooManyPoints { count: span });
    }
    let num = if span > 0.0 { span as usize } else { 0 }; 

    Ok((0..num).map(|i| start + step * i as f64).collect())
}
