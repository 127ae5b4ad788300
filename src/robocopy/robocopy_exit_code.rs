use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use strum::EnumIter;
use strum::IntoEnumIterator;

/// One bit of the robocopy exit code bitmask.
///
/// Robocopy composes its exit code from these flags; values above
/// [`RobocopyExitCode::FATAL`] are not produced by robocopy itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RobocopyExitFlag {
    /// Copy failures occurred (retry limit exceeded).
    Fail,
    /// Mismatched files or directories were detected.
    Mismatch,
    /// Extra files or directories exist at the destination.
    Extra,
    /// Files were copied.
    Copy,
}

impl RobocopyExitFlag {
    #[must_use]
    pub const fn bit(self) -> i32 {
        match self {
            RobocopyExitFlag::Copy => 1,
            RobocopyExitFlag::Extra => 2,
            RobocopyExitFlag::Mismatch => 4,
            RobocopyExitFlag::Fail => 8,
        }
    }
}

/// The exit code reported by a robocopy process.
///
/// Any integer is accepted; codes outside the documented range decode to
/// `UNKNOWN` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobocopyExitCode(i32);

impl RobocopyExitCode {
    /// Usage or permission error, no files copied. Never combined with the
    /// lower bits in practice.
    pub const FATAL: Self = Self(16);

    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The flags set in this code, in the fixed label order FAIL, MISMATCH,
    /// EXTRA, COPY.
    #[must_use]
    pub fn flags(self) -> Vec<RobocopyExitFlag> {
        RobocopyExitFlag::iter()
            .filter(|flag| self.0 & flag.bit() != 0)
            .collect()
    }

    /// Decode the exit code to its human-readable label.
    ///
    /// 0 is `NO CHANGE`, 16 is `FATAL ERROR`, 1..=15 joins the set flags with
    /// `" + "`, and anything else is `UNKNOWN`.
    #[must_use]
    pub fn describe(self) -> String {
        match self.0 {
            0 => "NO CHANGE".to_string(),
            16 => "FATAL ERROR".to_string(),
            1..=15 => self.flags().iter().map(ToString::to_string).join(" + "),
            _ => "UNKNOWN".to_string(),
        }
    }
}

impl From<i32> for RobocopyExitCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl Display for RobocopyExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
