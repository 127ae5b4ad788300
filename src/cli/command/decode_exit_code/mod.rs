mod decode_exit_code_args;

pub use decode_exit_code_args::DecodeExitCodeArgs;
