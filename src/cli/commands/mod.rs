mod command_result;
pub mod dict;
pub mod helper;
pub mod init;
pub mod locales;
pub mod translate;

pub use command_result::*;
