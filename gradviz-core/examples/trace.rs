use gradviz_core::{problems::test_functions::Quadratic, solvers::gd::GradientDescent};

fn main() {
    let solver = GradientDescent {
        step_size: 0.25,
        max_steps: 50,
        tol_grad: 1e-8,
        verbose: true,
        collect_trace: true,
    };

    let traj = solver.descend(&Quadratic::default(), 0.0);

    let rows = traj.trace.as_deref().unwrap_or(&[]);
    println!("collected {} trace rows", rows.len());
}
