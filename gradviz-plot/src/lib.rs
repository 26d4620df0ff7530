//! Plotting front end for gradviz trajectories.
//!
//! Consumes `Trajectory` values produced by `gradviz-core` and renders them
//! with `plotters`. Nothing here feeds back into the solver; the loss-surface
//! sampling below exists only to draw the background curve.

use std::error::Error;

use gradviz_core::problems::objective::Objective;
use gradviz_core::solvers::gd::{GradientDescent, Trajectory};
use plotters::prelude::*;

/// Colors assigned to sweep series, reused cyclically.
const SERIES_COLORS: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];

/// Sample the loss surface over [lo, hi] for the background curve.
pub fn sample_curve<O: Objective>(obj: &O, lo: f64, hi: f64, samples: usize) -> Vec<(f64, f64)> {
    let n = samples.max(2);
    (0..n)
        .map(|i| {
            let w = lo + (hi - lo) * i as f64 / (n - 1) as f64;
            (w, obj.value(w))
        })
        .collect()
}

/// Run one descent per learning rate, sharing start value and step budget.
pub fn sweep_learning_rates<O: Objective>(
    obj: &O,
    start: f64,
    rates: &[f64],
    max_steps: usize,
) -> Vec<(f64, Trajectory)> {
    rates
        .iter()
        .map(|&lr| {
            let solver = GradientDescent {
                step_size: lr,
                max_steps,
                ..GradientDescent::new()
            };
            (lr, solver.descend(obj, start))
        })
        .collect()
}

/// Draw the loss curve over [lo, hi] with the trajectory overlaid as
/// connected points.
///
/// Non-finite trajectory entries are skipped at render time; a diverging run
/// simply shows up as points marching off the sampled window.
pub fn render_descent<O: Objective>(
    path: &str,
    obj: &O,
    traj: &Trajectory,
    lo: f64,
    hi: f64,
    caption: &str,
) -> Result<(), Box<dyn Error>> {
    let curve = sample_curve(obj, lo, hi, 400);

    let steps: Vec<(f64, f64)> = traj
        .params
        .iter()
        .zip(traj.losses.iter())
        .map(|(&w, &f)| (w, f))
        .filter(|(w, f)| w.is_finite() && f.is_finite())
        .collect();

    let (y_lo, y_hi) = value_bounds(curve.iter().chain(steps.iter()).map(|&(_, f)| f));

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(lo..hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Parameter (w)")
        .y_desc("Loss")
        .axis_desc_style(("sans-serif", 26))
        .label_style(("sans-serif", 26))
        .x_labels(5)
        .y_labels(5)
        .disable_mesh()
        .draw()?;

    chart
        .draw_series(LineSeries::new(curve, &BLUE.mix(0.9)))?
        .label("Loss Curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE.mix(0.9)));

    chart
        .draw_series(LineSeries::new(steps.clone(), &RED.mix(0.9)))?
        .label("Trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED.mix(0.9)));

    chart.draw_series(steps.iter().map(|&(w, f)| Circle::new((w, f), 4, RED.filled())))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 26))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Overlay loss-vs-iteration curves, one per learning rate.
pub fn render_lr_comparison(
    path: &str,
    runs: &[(f64, Trajectory)],
    caption: &str,
) -> Result<(), Box<dyn Error>> {
    let longest = runs.iter().map(|(_, traj)| traj.len()).max().unwrap_or(0);
    let (y_lo, y_hi) = value_bounds(runs.iter().flat_map(|(_, traj)| traj.losses.iter().copied()));

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 26).into_font())
        .margin(30)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(0..longest.max(1) as i32, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Loss")
        .axis_desc_style(("sans-serif", 26))
        .label_style(("sans-serif", 26))
        .x_labels(5)
        .y_labels(5)
        .disable_mesh()
        .draw()?;

    for (i, (lr, traj)) in runs.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let points: Vec<(i32, f64)> = traj
            .losses
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_finite())
            .map(|(step, &f)| (step as i32, f))
            .collect();

        chart
            .draw_series(LineSeries::new(points, &color.mix(0.9)))?
            .label(format!("lr={lr}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.mix(0.9)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 26))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Padded finite min/max of a value stream, with a unit fallback so an empty
/// or all-NaN series still yields a drawable range.
fn value_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return (0.0, 1.0);
    }
    let pad = 0.05 * (hi - lo).max(1e-12);
    (lo - pad, hi + pad)
}
