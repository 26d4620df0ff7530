use crate::solvers::SolverTraceRecord;

/// Configuration for scalar gradient descent.
///
/// Hyperparameters are taken as given: a non-positive `step_size` or a zero
/// `tol_grad` is accepted and plays out with its natural consequences
/// (ascent, never converging). Exploring bad configurations is the point.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    /// Learning rate / step size (η).
    pub step_size: f64,
    /// Maximum number of iterations.
    pub max_steps: usize,
    /// Considered converged when the gradient magnitude falls below this threshold.
    pub tol_grad: f64,
    /// If true, prints per-iteration diagnostics (w, loss, gradient, step size).
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the trajectory.
    pub collect_trace: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            step_size: 0.1,
            max_steps: 100,
            tol_grad: 1e-6,
            verbose: false,
            collect_trace: false,
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

/// Step-by-step record of one descent run.
///
/// `params[i]` is the parameter observed at step `i` before the update and
/// `losses[i]` the loss at that same point, so the two vectors always have
/// equal length. A run that converges at step `k` holds `k + 1` entries and
/// ends on the point where the small gradient was seen; a run that exhausts
/// its budget holds exactly `max_steps`.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Parameter value per completed step, in chronological order.
    pub params: Vec<f64>,
    /// Loss per recorded parameter, index-aligned with `params`.
    pub losses: Vec<f64>,
    /// Update steps applied before stopping.
    pub iters: usize,
    /// True when the gradient magnitude fell below the tolerance.
    pub converged: bool,
    pub trace: Option<Vec<SolverTraceRecord>>,
}

impl Trajectory {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Last recorded parameter value, if any step ran.
    pub fn final_param(&self) -> Option<f64> {
        self.params.last().copied()
    }

    /// Last recorded loss value, if any step ran.
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}
