use std::iter::FromIterator;
use std::slice;

/// ランタイムが公開する標準シーケンス型。
/// 要素順を保持し、呼び出し側が所有権を持つ。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seq<T> {
    inner: Vec<T>,
}

impl<T> Seq<T> {
    /// 空のシーケンスを生成する。
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// 事前確保付きで生成する。
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// `Vec` から構築する。
    pub fn from_vec(values: Vec<T>) -> Self {
        Self { inner: values }
    }

    /// 要素数を返す。
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// 空かどうか。要素数が 0 のときに限り空とみなす。
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 要素を末尾に追加する。
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// 末尾から要素を取り出す。空のシーケンスでは `None` を返す。
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// スライスを取得する。
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// ミュータブルスライスを取得する。
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// イテレータを返す。
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// 内部ベクタを取り出す。
    pub fn into_inner(self) -> Vec<T> {
        self.inner
    }

    /// 述語を満たす要素が存在するかを判定する。
    pub fn contains_by<F>(&self, mut matches: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.iter().any(|value| matches(value))
    }
}

impl<T: PartialEq> Seq<T> {
    /// `item` と構造的に等しい要素を含むかを判定する。
    /// 空のシーケンスでは常に false。
    pub fn contains(&self, item: &T) -> bool {
        self.contains_by(|value| value == item)
    }
}

impl<T: Clone> Seq<T> {
    /// `transform` を各要素へ適用した新しいシーケンスを返す。
    /// 出力長は入力長と一致し、位置対応が保たれる。
    pub fn map<U, F>(&self, mut transform: F) -> Seq<U>
    where
        F: FnMut(T) -> U,
    {
        let mapped: Vec<U> = self.iter().cloned().map(|value| transform(value)).collect();
        Seq::from_vec(mapped)
    }

    /// `predicate` を満たす要素だけを、相対順を保ったまま残す。
    pub fn filter<F>(&self, mut predicate: F) -> Seq<T>
    where
        F: FnMut(&T) -> bool,
    {
        let kept: Vec<T> = self
            .iter()
            .filter(|value| predicate(value))
            .cloned()
            .collect();
        Seq::from_vec(kept)
    }

    /// 左畳み込みを行う。最初の適用は `combine(initial, self[0])`、
    /// 以降は直前の累積値を第 1 引数に取る。
    /// 空のシーケンスでは `initial` をそのまま返す。
    pub fn reduce<F>(&self, initial: T, mut combine: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        let mut acc = initial;
        for value in self.iter() {
            acc = combine(acc, value.clone());
        }
        acc
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(value: Vec<T>) -> Self {
        Self { inner: value }
    }
}

impl<T> From<Seq<T>> for Vec<T> {
    fn from(value: Seq<T>) -> Self {
        value.inner
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
