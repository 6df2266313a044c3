/// A real-valued function of one real variable.  
///
/// Closures and `fn` items get this for free through the blanket impl; 
/// named types can implement it directly.
pub trait ScalarFunction {
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
