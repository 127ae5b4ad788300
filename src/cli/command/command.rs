use crate::cli::command::decode_exit_code::DecodeExitCodeArgs;
use crate::cli::command::parse_log::ParseLogArgs;
use crate::cli::global_args::GlobalArgs;
use crate::cli::to_args::ToArgs;
use arbitrary::Arbitrary;
use clap::Subcommand;
use std::ffi::OsString;

/// Robocopy summary commands
#[derive(Subcommand, Arbitrary, PartialEq, Debug)]
pub enum Command {
    /// Decode a robocopy exit code into its human-readable label
    DecodeExitCode(DecodeExitCodeArgs),
    /// Extract the summary from a robocopy log file
    ParseLog(ParseLogArgs),
}

impl Command {
    /// Invoke the command with global arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if tracing initialization fails or the command execution fails.
    pub fn invoke(self, global_args: &GlobalArgs) -> eyre::Result<()> {
        let json_behaviour = global_args.json_log_behaviour();
        // Call the logging helper from the logging module to initialize tracing.
        crate::logging::init_tracing(global_args.log_level(), &json_behaviour)?;
        match self {
            Command::DecodeExitCode(args) => args.invoke(),
            Command::ParseLog(args) => args.invoke(),
        }
    }
}

impl ToArgs for Command {
    fn to_args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        match self {
            Command::DecodeExitCode(decode_args) => {
                args.push("decode-exit-code".into());
                args.extend(decode_args.to_args());
            }
            Command::ParseLog(parse_args) => {
                args.push("parse-log".into());
                args.extend(parse_args.to_args());
            }
        }
        args
    }
}
