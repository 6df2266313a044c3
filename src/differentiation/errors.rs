use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DifferenceError {
    #[error("invalid step `h`: must be finite and > 0. got {got}")]
    InvalidStep { got: f64 },

    #[error("empty evaluation grid")]
    EmptyGrid,
}
