use gradviz_core::{problems::test_functions::DoubleWell, solvers::gd::GradientDescent};

fn main() {
    let obj = DoubleWell;
    let solver = GradientDescent {
        step_size: 0.05,
        max_steps: 500,
        ..GradientDescent::new()
    };

    // The landing well depends only on the sign of the start value.
    for start in [-0.5, 0.5] {
        let traj = solver.descend(&obj, start);
        println!(
            "start={start:+.1} -> converged={} w*={:+.6} after {} steps",
            traj.converged,
            traj.final_param().unwrap_or(f64::NAN),
            traj.iters,
        );
    }
}
