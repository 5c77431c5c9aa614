/// Presentation layer: command-line parsing and dispatch
pub mod cli;
