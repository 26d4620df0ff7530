use std::error::Error;
use std::fs;

use gradviz_core::{problems::test_functions::Quadratic, solvers::gd::GradientDescent};
use gradviz_plot::{render_descent, render_lr_comparison, sweep_learning_rates};

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all("figures")?;

    let obj = Quadratic::default();

    // Single run on the stock quadratic.
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        ..GradientDescent::new()
    };
    let traj = solver.descend(&obj, 0.0);
    match (traj.converged, traj.final_param()) {
        (true, Some(w)) => println!(
            "Converged in {} steps (|grad| < {:e}), w = {w:.6}",
            traj.iters, solver.tol_grad
        ),
        (false, Some(w)) => println!(
            "Stopped after {} steps without converging, w = {w:.6}",
            traj.iters
        ),
        _ => println!("Empty run (max_steps = 0)"),
    }
    render_descent(
        "figures/descent.png",
        &obj,
        &traj,
        -1.0,
        7.0,
        &format!("Gradient Descent (start=0.0, lr={})", solver.step_size),
    )?;
    println!("Descent plot saved as 'figures/descent.png'");

    // Learning rate comparison on the same objective.
    let runs = sweep_learning_rates(&obj, 0.0, &[0.01, 0.1, 0.5, 1.1], 25);
    render_lr_comparison(
        "figures/lr_comparison.png",
        &runs,
        "Effect of Learning Rate on Convergence",
    )?;
    println!("Comparison plot saved as 'figures/lr_comparison.png'");

    Ok(())
}
