//! Core.Text の実装。
//! Opal 文字列プリミティブ (大文字小文字変換・検索・分割・整数変換) を提供する。

mod case;
mod parse;

use crate::collections::Seq;

pub use case::{to_lower, to_upper};
pub use parse::to_int;

/// `s` が `sub` を部分文字列として含むかを判定する。
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}

/// Unicode スカラ値の個数を返す。
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// `sep` で区切られた部分文字列の列を返す。`sep` 自体は含まない。
/// 空の `sep` では 1 文字ずつに分割する。
pub fn split(s: &str, sep: &str) -> Seq<String> {
    if sep.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(sep).map(str::to_owned).collect()
}
