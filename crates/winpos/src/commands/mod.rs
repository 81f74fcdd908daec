pub mod init;
pub mod move_window;
pub mod target;

#[cfg(windows)]
pub mod list;
#[cfg(windows)]
pub mod query;
#[cfg(windows)]
pub mod restyle;

/// Result of a subcommand. Errors are printed by `main` with exit code 1.
pub type CliResult = Result<(), Box<dyn std::error::Error>>;
