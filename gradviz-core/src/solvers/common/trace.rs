use std::cell::RefCell;
use std::fmt::Write;

#[derive(Clone, Debug)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub w: Option<f64>,
    pub f: Option<f64>,
    pub grad: Option<f64>,
    pub step_size: Option<f64>,
    pub tol: Option<f64>,
    pub note: Option<&'static str>,
}

impl SolverTraceRecord {
    fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.solver, self.iter);
        if let Some(v) = self.w {
            let _ = write!(line, " | w {:>13.6e}", v);
        }
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.grad {
            let _ = write!(line, " | grad {:>13.6e}", v);
        }
        if let Some(v) = self.step_size {
            let _ = write!(line, " | step {:>+9.3e}", v);
        }
        if let Some(v) = self.tol {
            let _ = write!(line, " | tol {:>9.3e}", v);
        }
        if let Some(note) = self.note {
            let _ = write!(line, " | note {note}");
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    w: Option<f64>,
    f: Option<f64>,
    grad: Option<f64>,
    step_size: Option<f64>,
    tol: Option<f64>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize) -> Self {
        Self {
            iter,
            w: None,
            f: None,
            grad: None,
            step_size: None,
            tol: None,
            note: None,
        }
    }

    pub(crate) fn w(mut self, w: f64) -> Self {
        self.w = Some(w);
        self
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn grad(mut self, grad: f64) -> Self {
        self.grad = Some(grad);
        self
    }

    pub(crate) fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    pub(crate) fn tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn gd(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: None,
        }
    }

    pub(crate) fn gd_with_history(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: Some(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            w: row.w,
            f: row.f,
            grad: row.grad,
            step_size: row.step_size,
            tol: row.tol,
            note: row.note,
        };

        if let Some(history) = &self.history {
            history.borrow_mut().push(record.clone());
        }

        if self.verbose {
            println!("{}", record.format_line());
        }
    }

    pub(crate) fn into_history(self) -> Vec<SolverTraceRecord> {
        self.history
            .map(|history| history.into_inner())
            .unwrap_or_default()
    }
}
