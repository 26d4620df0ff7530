use crate::problems::objective::Objective;
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{GradientDescent, Trajectory};

impl GradientDescent {
    fn make_tracer(&self) -> SolverTracer {
        if self.collect_trace {
            SolverTracer::gd_with_history(self.verbose)
        } else {
            SolverTracer::gd(self.verbose)
        }
    }

    fn attach_trace(&self, mut result: Trajectory, trace: SolverTracer) -> Trajectory {
        result.trace = if self.collect_trace {
            Some(trace.into_history())
        } else {
            None
        };
        result
    }

    fn run_with_fn<F, G>(
        &self,
        start: f64,
        mut loss_fn: F,
        mut grad_fn: G,
        trace: &SolverTracer,
    ) -> Trajectory
    where
        F: FnMut(f64) -> f64,
        G: FnMut(f64) -> f64,
    {
        let mut w = start;
        let mut params = Vec::new();
        let mut losses = Vec::new();

        for step in 0..self.max_steps {
            let grad = grad_fn(w);
            let f = loss_fn(w);

            // Record the pre-update point, so a converged run ends on the
            // parameter where the small gradient was observed.
            params.push(w);
            losses.push(f);

            trace.emit(
                TraceRow::iter(step)
                    .w(w)
                    .f(f)
                    .grad(grad)
                    .step_size(self.step_size),
            );
            if grad.abs() < self.tol_grad {
                trace.emit(
                    TraceRow::iter(step)
                        .w(w)
                        .f(f)
                        .grad(grad)
                        .tol(self.tol_grad)
                        .note("converged"),
                );
                return Trajectory {
                    params,
                    losses,
                    iters: step,
                    converged: true,
                    trace: None,
                };
            }

            // w <- w - step_size * grad
            w -= self.step_size * grad;
        }

        Trajectory {
            params,
            losses,
            iters: self.max_steps,
            converged: false,
            trace: None,
        }
    }

    /// Run descent on an objective from the given start value.
    pub fn descend<O>(&self, obj: &O, start: f64) -> Trajectory
    where
        O: Objective,
    {
        let trace = self.make_tracer();
        let result = self.run_with_fn(start, |w| obj.value(w), |w| obj.gradient(w), &trace);
        self.attach_trace(result, trace)
    }

    /// Run descent using user-provided loss and gradient functions.
    pub fn descend_with_fn<F, G>(&self, start: f64, loss_fn: F, grad_fn: G) -> Trajectory
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let trace = self.make_tracer();
        let result = self.run_with_fn(start, |w| loss_fn(w), |w| grad_fn(w), &trace);
        self.attach_trace(result, trace)
    }
}
