use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// The `Times :` row from the robocopy footer.
///
/// Values stay as robocopy's formatted duration strings (e.g. `0:00:36`)
/// rather than being decomposed; they are not single numbers and contain the
/// same colon character the line label uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobocopyTimes {
    pub total: String,
    pub copied: String,
    pub failed: String,
    pub extras: String,
}

impl Display for RobocopyTimes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total {total}, copied {copied}, failed {failed}, extras {extras}",
            total = self.total,
            copied = self.copied,
            failed = self.failed,
            extras = self.extras
        )
    }
}
