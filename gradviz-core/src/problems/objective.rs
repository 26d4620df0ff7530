/// Objective function to be minimized.
///
/// The parameter is a single real value. Implementations must be pure
/// functions of `w` so recorded trajectories are reproducible.
pub trait Objective {
    /// Loss value L(w) at w.
    fn value(&self, w: f64) -> f64;

    /// Derivative dL/dw at w.
    ///
    /// Must be consistent with `value`; the solver does not verify the pair.
    fn gradient(&self, w: f64) -> f64;
}
