/// 10 進文字列を整数へ変換する。受理範囲は 32 ビット符号付き整数。
/// 変換できない入力および範囲外の入力では 0 を返す。
pub fn to_int(s: &str) -> i64 {
    s.parse::<i32>().map(i64::from).unwrap_or(0)
}
