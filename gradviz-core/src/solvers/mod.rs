pub mod common;
pub mod gd;

pub use common::trace::SolverTraceRecord;
