mod parse_log_args;

pub use parse_log_args::OutputFormat;
pub use parse_log_args::ParseLogArgs;
