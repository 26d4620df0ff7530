use approx::assert_abs_diff_eq;
use gradviz_core::{
    problems::{
        objective::Objective,
        test_functions::{DoubleWell, Quadratic},
    },
    solvers::gd::GradientDescent,
};

#[test]
fn quadratic_convergence() {
    let obj = Quadratic::default(); // minimum at w = 3
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 100,
        tol_grad: 1e-6,
        verbose: false,
        collect_trace: false,
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(traj.converged);
    assert!(traj.iters < 100);
    assert_eq!(traj.len(), traj.iters + 1);
    assert_abs_diff_eq!(traj.final_param().unwrap(), 3.0, epsilon = 1e-3);

    // The stopping test fires on the gradient, before any further update.
    assert!(obj.gradient(traj.final_param().unwrap()).abs() < solver.tol_grad);

    // In the stable step-size range the iterates approach the minimum
    // monotonically in absolute distance.
    for pair in traj.params.windows(2) {
        assert!((pair[1] - 3.0).abs() <= (pair[0] - 3.0).abs());
    }
}

#[test]
fn histories_are_aligned_and_recomputable() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 0.0);

    assert_eq!(traj.params.len(), traj.losses.len());
    assert!(traj.len() <= 20);
    for (&w, &f) in traj.params.iter().zip(traj.losses.iter()) {
        assert_eq!(f, obj.value(w));
    }
}

#[test]
fn twenty_step_budget_runs_out_before_tolerance() {
    // With lr = 0.1 the distance to the minimum contracts by 0.8 per step,
    // so 20 steps leave |grad| ~ 0.07: the budget runs out silently.
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        tol_grad: 1e-6,
        verbose: false,
        collect_trace: false,
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(!traj.converged);
    assert_eq!(traj.len(), 20);
    assert_eq!(traj.iters, 20);
    let first = traj.params.first().unwrap();
    let last = traj.final_param().unwrap();
    assert!((last - 3.0).abs() < (first - 3.0).abs());
}

#[test]
fn unstable_learning_rate_oscillates_and_diverges() {
    // lr = 1.1 is past the stability bound 2/curvature = 1.0 for this loss.
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 1.1,
        max_steps: 25,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(!traj.converged);
    assert_eq!(traj.len(), 25);
    for pair in traj.losses.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    // Each update overshoots to the other side of the minimum.
    for pair in traj.params.windows(2) {
        assert!((pair[0] - 3.0) * (pair[1] - 3.0) < 0.0);
    }
}

#[test]
fn start_at_minimum_stops_immediately() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 3.0);

    assert!(traj.converged);
    assert_eq!(traj.iters, 0);
    assert_eq!(traj.params, vec![3.0]);
    assert_eq!(traj.losses, vec![0.0]);
}

#[test]
fn zero_step_budget_yields_empty_histories() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 0,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(!traj.converged);
    assert!(traj.is_empty());
    assert!(traj.losses.is_empty());
    assert_eq!(traj.final_param(), None);
}

#[test]
fn identical_inputs_give_identical_histories() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.3,
        max_steps: 50,
        ..GradientDescent::new()
    };

    let a = solver.descend(&obj, -2.0);
    let b = solver.descend(&obj, -2.0);

    assert_eq!(a.params, b.params);
    assert_eq!(a.losses, b.losses);
    assert_eq!(a.converged, b.converged);
}

#[test]
fn closure_and_trait_doorways_agree() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.2,
        max_steps: 40,
        ..GradientDescent::new()
    };

    let via_trait = solver.descend(&obj, 0.0);
    let via_fn = solver.descend_with_fn(0.0, |w| (w - 3.0) * (w - 3.0), |w| 2.0 * (w - 3.0));

    assert_eq!(via_trait.params, via_fn.params);
    assert_eq!(via_trait.losses, via_fn.losses);
}

#[test]
fn negative_learning_rate_ascends_silently() {
    // Not validated: a negative step size walks uphill and the run just
    // burns its budget.
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: -0.1,
        max_steps: 10,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(!traj.converged);
    assert_eq!(traj.len(), 10);
    for pair in traj.params.windows(2) {
        assert!((pair[1] - 3.0).abs() > (pair[0] - 3.0).abs());
    }
}

#[test]
fn converged_run_records_a_trace_note() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        tol_grad: 1e-6,
        verbose: false,
        collect_trace: true,
    };

    let traj = solver.descend(&obj, 3.0);
    let rows = traj.trace.as_deref().expect("trace was requested");

    // One row for the observed step plus the convergence row.
    assert_eq!(rows.len(), traj.len() + 1);
    let last = rows.last().unwrap();
    assert_eq!(last.note, Some("converged"));
    assert_eq!(last.iter, traj.iters);
    assert_eq!(last.tol, Some(solver.tol_grad));
}

#[test]
fn exhausted_run_records_no_convergence_note() {
    let obj = Quadratic::default();
    let solver = GradientDescent {
        step_size: 0.1,
        max_steps: 20,
        tol_grad: 1e-6,
        verbose: false,
        collect_trace: true,
    };

    let traj = solver.descend(&obj, 0.0);
    let rows = traj.trace.as_deref().expect("trace was requested");

    assert_eq!(rows.len(), traj.len());
    assert!(rows.iter().all(|row| row.note.is_none()));
}

#[test]
fn double_well_lands_in_the_nearer_well() {
    let obj = DoubleWell;
    let solver = GradientDescent {
        step_size: 0.05,
        max_steps: 500,
        ..GradientDescent::new()
    };

    let right = solver.descend(&obj, 0.5);
    let left = solver.descend(&obj, -0.5);

    assert!(right.converged);
    assert!(left.converged);
    assert_abs_diff_eq!(right.final_param().unwrap(), 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(left.final_param().unwrap(), -1.0, epsilon = 1e-3);
}

#[test]
fn double_well_ridge_counts_as_stationary() {
    // w = 0 is a local maximum, but the gradient test only sees |grad|.
    let obj = DoubleWell;
    let solver = GradientDescent {
        step_size: 0.05,
        max_steps: 500,
        ..GradientDescent::new()
    };

    let traj = solver.descend(&obj, 0.0);

    assert!(traj.converged);
    assert_eq!(traj.iters, 0);
    assert_eq!(traj.params, vec![0.0]);
}
