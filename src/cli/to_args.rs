use std::ffi::OsString;
use std::path::PathBuf;

/// Convert a parsed CLI structure back into the argument list that would
/// reproduce it. Used for displaying invocations and for round-trip testing.
pub trait ToArgs {
    fn to_args(&self) -> Vec<OsString>;
}

/// Something that can be re-invoked as a child process.
pub trait Invocable: ToArgs {
    fn path_to_exe(&self) -> PathBuf;
    fn args(&self) -> Vec<OsString>;
}
