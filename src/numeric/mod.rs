//! Core.Numeric の実装。
//! 整数シーケンスに対する集約 (最小・最大・合計) を左畳み込みで定義する。

use crate::collections::Seq;

/// 最小値を返す。種は `i64::MAX`。要素 1 つのシーケンスではその要素、
/// 空のシーケンスでは番兵の `i64::MAX` が返るため、
/// 必要に応じて `is_empty` を先に確認する。
pub fn min(values: &Seq<i64>) -> i64 {
    values.reduce(
        i64::MAX,
        |acc, value| if value < acc { value } else { acc },
    )
}

/// 最大値を返す。種は `i64::MIN`。空のシーケンスでは番兵が返る。
pub fn max(values: &Seq<i64>) -> i64 {
    values.reduce(
        i64::MIN,
        |acc, value| if value > acc { value } else { acc },
    )
}

/// 合計を返す。種は 0 で、空のシーケンスでは 0。
/// オーバーフローは保護しない。
pub fn sum(values: &Seq<i64>) -> i64 {
    values.reduce(0, |acc, value| acc + value)
}
