//! Library root for the `robocopy-summary` crate.
//!
//! This crate decodes robocopy exit codes and parses the fixed-format
//! header/footer of robocopy log files into a structured summary. A small CLI
//! wraps both. It also provides logging initialization helpers so consumers
//! can initialize tracing the same way the binary does.

pub mod cli;
pub mod logging;
pub mod robocopy;

/// Re-export the logging initializer so callers can do `robocopy_summary::init_tracing`.
pub use crate::logging::init_tracing;

/// Re-export the default JSON log path helper.
pub use crate::logging::default_json_log_path;

/// Re-export the core surface: exit code decoding and summary parsing.
pub use crate::robocopy::robocopy_exit_code::RobocopyExitCode;
pub use crate::robocopy::robocopy_exit_code::RobocopyExitFlag;
pub use crate::robocopy::robocopy_summary::RobocopySummary;
pub use crate::robocopy::robocopy_summary_error::RobocopySummaryError;
pub use crate::robocopy::robocopy_summary_parser::parse_summary_file;
pub use crate::robocopy::robocopy_summary_parser::parse_summary_text;
