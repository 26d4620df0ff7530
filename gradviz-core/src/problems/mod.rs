pub mod objective;
pub mod test_functions;
