//! Command handlers, one module per subcommand.
//!
//! Each `execute` takes parsed arguments plus the loaded config and output
//! manager, and returns a [`CliResult`](crate::error::CliResult).

pub mod completions;
pub mod component;
pub mod config;
pub mod detect;
pub mod domain;
pub mod generate;
pub mod init;
pub mod route;
pub mod style;
