use std::io::{self, BufRead, Write};

use super::effects::record_console_write;

/// 文字列を標準出力へ出力する。書き込みエラーは破棄する。
pub fn print(text: &str) {
    write_to(&mut io::stdout(), text);
}

/// 文字列と改行を標準出力へ出力する。
pub fn print_line(text: &str) {
    write_line_to(&mut io::stdout(), text);
}

/// 文字列を標準エラー出力へ出力する。
pub fn error_print(text: &str) {
    write_to(&mut io::stderr(), text);
}

/// 文字列と改行を標準エラー出力へ出力する。
pub fn error_print_line(text: &str) {
    write_line_to(&mut io::stderr(), text);
}

/// 標準入力から 1 行読み込み、終端の改行 (`\n` / `\r\n`) を除いて返す。
/// EOF および読み込み失敗時は空文字列を返す。
pub fn read_line() -> String {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => String::new(),
        Ok(_) => {
            strip_line_ending(&mut line);
            line
        }
    }
}

fn write_to<W: Write>(sink: &mut W, text: &str) {
    record_console_write();
    let _ = sink.write_all(text.as_bytes());
    let _ = sink.flush();
}

fn write_line_to<W: Write>(sink: &mut W, text: &str) {
    record_console_write();
    let _ = sink.write_all(text.as_bytes());
    let _ = sink.write_all(b"\n");
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_to_appends_text_without_newline() {
        let mut sink = Vec::new();
        write_to(&mut sink, "opal");
        assert_eq!(sink, b"opal");
    }

    #[test]
    fn write_line_to_appends_newline() {
        let mut sink = Vec::new();
        write_line_to(&mut sink, "opal");
        assert_eq!(sink, b"opal\n");
    }

    #[test]
    fn strip_line_ending_handles_lf_and_crlf() {
        let mut unix = String::from("line\n");
        strip_line_ending(&mut unix);
        assert_eq!(unix, "line");

        let mut windows = String::from("line\r\n");
        strip_line_ending(&mut windows);
        assert_eq!(windows, "line");

        let mut bare = String::from("line");
        strip_line_ending(&mut bare);
        assert_eq!(bare, "line");
    }
}
