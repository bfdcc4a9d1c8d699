use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::collections::Seq;
use crate::text;

use super::effects::{record_file_read, record_file_write};
use super::error::{IoError, IoResult};

/// ファイル全体を読み込み、UTF-8 文字列として返す。
pub fn try_read_file<P: AsRef<Path>>(path: P) -> IoResult<String> {
    let path_ref = path.as_ref();
    let contents = std::fs::read_to_string(path_ref)
        .map_err(|err| IoError::from_std(err).with_path(path_ref))?;
    record_file_read(contents.len());
    Ok(contents)
}

/// ファイル全体を読み込む。読めない場合は空文字列を返す。
pub fn read_file<P: AsRef<Path>>(path: P) -> String {
    try_read_file(path).unwrap_or_default()
}

/// ファイルを行単位で読み込む。各要素は改行を含まない 1 行。
/// 読めないファイルは空文字列扱いとなり、空行 1 つの列が返る。
pub fn read_lines<P: AsRef<Path>>(path: P) -> Seq<String> {
    let contents = read_file(path);
    text::split(&contents, "\n")
}

/// 書き込みオプション。既定では既存ファイルを切り詰める。
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteOptions {
    append: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追記モードを設定する。切り詰めの代わりに末尾へ書き足す。
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    fn apply_to(&self, options: &mut OpenOptions) {
        options.write(true).create(true);
        if self.append {
            options.append(true);
        } else {
            options.truncate(true);
        }
    }
}

/// 指定したオプションで `contents` をファイルへ書き込む。
pub fn try_write_file_with<P: AsRef<Path>>(
    path: P,
    contents: &str,
    options: WriteOptions,
) -> IoResult<()> {
    let path_ref = path.as_ref();
    let mut open_opts = OpenOptions::new();
    options.apply_to(&mut open_opts);
    let mut file = open_opts
        .open(path_ref)
        .map_err(|err| IoError::from_std(err).with_path(path_ref))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| IoError::from_std(err).with_path(path_ref))?;
    record_file_write(contents.len());
    Ok(())
}

/// `contents` をファイルへ書き込む。既存ファイルは切り詰める。
pub fn try_write_file<P: AsRef<Path>>(path: P, contents: &str) -> IoResult<()> {
    try_write_file_with(path, contents, WriteOptions::new())
}

/// `contents` をファイルへ書き込む。書き込みエラーは破棄する。
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) {
    let _ = try_write_file(path, contents);
}

/// 指定したオプションで書き込む。書き込みエラーは破棄する。
pub fn write_file_with<P: AsRef<Path>>(path: P, contents: &str, options: WriteOptions) {
    let _ = try_write_file_with(path, contents, options);
}
