use crate::cli::to_args::ToArgs;
use crate::robocopy::robocopy_summary_parser::parse_summary_file;
use arbitrary::Arbitrary;
use clap::Args;
use clap::ValueEnum;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Arbitrary, PartialEq, Debug, Default, Clone, Copy)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Args, Arbitrary, PartialEq, Debug, Default)]
pub struct ParseLogArgs {
    /// Path to the robocopy log text file
    pub log_file_path: PathBuf,

    /// Output format for the extracted summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ParseLogArgs {
    /// Parse the log's header/footer windows and print the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file does not exist or cannot be read.
    pub fn invoke(self) -> eyre::Result<()> {
        info!(
            "Parsing robocopy log summary: {}",
            self.log_file_path.display()
        );
        let summary = parse_summary_file(&self.log_file_path)?;
        match self.format {
            OutputFormat::Text => println!("{summary}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
        Ok(())
    }
}

impl ToArgs for ParseLogArgs {
    fn to_args(&self) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> = vec![self.log_file_path.clone().into()];
        if self.format != OutputFormat::default() {
            args.push("--format".into());
            args.push(self.format.to_string().into());
        }
        args
    }
}
