pub mod robocopy_counts;
pub mod robocopy_exit_code;
pub mod robocopy_summary;
pub mod robocopy_summary_error;
pub mod robocopy_summary_parser;
pub mod robocopy_times;
