pub mod add_gl_quotes;
mod command_result;
pub mod convert_gl_quotes;
pub mod helper;
pub mod init;
mod input;
pub mod resolve;

pub use command_result::*;
