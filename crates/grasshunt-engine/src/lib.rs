// Engine module - turns raw uploaded log trees into completion reports
// This layer sits between the domain types and whatever surface serves the report

mod accumulator;
mod aggregate;
mod parser;

pub use accumulator::{GrassEntry, GrassStateAccumulator};
pub use aggregate::process_logs;
pub use parser::parse_log_line;
