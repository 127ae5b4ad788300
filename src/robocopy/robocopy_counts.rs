use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// One counter row from the robocopy footer (the `Dirs :` or `Files :` line).
///
/// Robocopy prints the six columns Total, Copied, Skipped, Mismatch, FAILED,
/// Extras; they are always plain digit runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobocopyCounts {
    pub total: u64,
    pub copied: u64,
    pub skipped: u64,
    pub mismatch: u64,
    pub failed: u64,
    pub extras: u64,
}

impl Display for RobocopyCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total {total}, copied {copied}, skipped {skipped}, mismatch {mismatch}, failed {failed}, extras {extras}",
            total = self.total,
            copied = self.copied,
            skipped = self.skipped,
            mismatch = self.mismatch,
            failed = self.failed,
            extras = self.extras
        )
    }
}
