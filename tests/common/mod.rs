#![allow(dead_code)]

pub mod archive;
pub mod command;
pub mod file;

pub use archive::decode_archive;
pub use command::run_initpack_command;
pub use file::{FileSpec, write_file};
