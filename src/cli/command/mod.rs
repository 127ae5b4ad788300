pub mod decode_exit_code;
pub mod parse_log;

#[allow(
    clippy::module_inception,
    reason = "module structure requires submodule with same name"
)]
mod command;

pub use command::Command;
