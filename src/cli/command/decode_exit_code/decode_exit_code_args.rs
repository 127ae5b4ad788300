use crate::cli::to_args::ToArgs;
use crate::robocopy::robocopy_exit_code::RobocopyExitCode;
use arbitrary::Arbitrary;
use clap::Args;
use tracing::debug;

#[derive(Args, Arbitrary, PartialEq, Debug, Default)]
pub struct DecodeExitCodeArgs {
    /// Exit code reported by the robocopy process
    #[arg(allow_negative_numbers = true)]
    pub exit_code: i32,
}

impl DecodeExitCodeArgs {
    /// Print the human-readable label for the exit code.
    ///
    /// # Errors
    ///
    /// Infallible in practice; returns a `Result` for uniformity with the
    /// other commands.
    pub fn invoke(self) -> eyre::Result<()> {
        let code = RobocopyExitCode::from(self.exit_code);
        debug!(code = code.value(), flags = ?code.flags(), "Decoding exit code");
        println!("{code}");
        Ok(())
    }
}

impl ToArgs for DecodeExitCodeArgs {
    fn to_args(&self) -> Vec<std::ffi::OsString> {
        vec![self.exit_code.to_string().into()]
    }
}
