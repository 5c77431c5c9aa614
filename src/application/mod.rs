/// Application layer: one use case per subcommand plus the connectivity check
pub mod use_cases;
