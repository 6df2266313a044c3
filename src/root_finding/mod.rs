// common helpers 
pub mod errors; 
pub mod config;
pub mod function; 
pub mod report; 

// algorithms 
pub mod secant;
pub mod critical_point;

pub use config::{DegeneracyGuard, SecantCfg}; 
pub use critical_point::{locate_critical_point, CriticalPoint}; 
pub use errors::SecantError; 
pub use function::ScalarFunction; 
pub use report::{SecantOutcome, Termination}; 
pub use secant::secant; 
