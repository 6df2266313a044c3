use thiserror::Error;

/// RMSProp configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum RmsPropError {
    #[error("invalid `learning_rate`: must be finite and > 0. got {got}")]
    InvalidLearningRate { got: f64 },

    #[error("invalid `decay`: must be finite and in [0, 1). got {got}")]
    InvalidDecay { got: f64 },

    #[error("invalid `epsilon`: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },
}


/// Quadratic fit search input errors.
#[derive(Debug, Error, PartialEq)]
pub enum QuadraticFitError {
    #[error("invalid bracket: need finite a < b < c. got a={a}, b={b}, c={c}")]
    InvalidBracket { a: f64, b: f64, c: f64 },
}
