//! Core.IO の土台実装。
//! コンソールおよびファイル操作の薄いラッパを公開する。

mod console;
mod effects;
mod error;
mod file;

pub use console::{error_print, error_print_line, print, print_line, read_line};
pub use effects::{take_io_effects_snapshot, IoEffectsSnapshot};
pub use error::{IoError, IoErrorKind, IoResult};
pub use file::{
    read_file, read_lines, try_read_file, try_write_file, try_write_file_with, write_file,
    write_file_with, WriteOptions,
};
