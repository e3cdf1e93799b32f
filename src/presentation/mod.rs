//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Log setup and output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use factory::create_generate_use_case;
pub use output::{render_error, render_result, report_error, OutputFormat};
