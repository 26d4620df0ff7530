use gradviz_core::solvers::gd::GradientDescent;

fn main() {
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 100,
        tol_grad: 1e-9,
        verbose: false,
        collect_trace: false,
    };

    let traj = solver.descend_with_fn(0.0, |w| (w - 3.0).powi(2), |w| 2.0 * (w - 3.0));

    println!(
        "converged={} steps={} w*={:.6} f(w*)={:.3e}",
        traj.converged,
        traj.len(),
        traj.final_param().unwrap_or(f64::NAN),
        traj.final_loss().unwrap_or(f64::NAN),
    );
}
