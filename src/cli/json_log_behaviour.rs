use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

/// How structured JSON logs should be handled, derived from the `--json` flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JsonLogBehaviour {
    /// No JSON log output.
    #[default]
    None,
    /// JSON logs enabled with an automatically generated timestamped path.
    SomeAutomaticPath,
    /// JSON logs enabled at the given path.
    Some(PathBuf),
}

impl JsonLogBehaviour {
    /// The JSON log path to write to, if JSON logging is enabled.
    #[must_use]
    pub fn get_path(&self) -> Option<Cow<'_, Path>> {
        match self {
            JsonLogBehaviour::None => None,
            JsonLogBehaviour::SomeAutomaticPath => {
                Some(Cow::Owned(crate::logging::default_json_log_path()))
            }
            JsonLogBehaviour::Some(path) => Some(Cow::Borrowed(path.as_path())),
        }
    }
}
