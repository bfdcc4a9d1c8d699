use std::hash::Hash;
use std::iter::FromIterator;

use indexmap::IndexMap;

/// 挿入順を保持する可変テーブル。
#[derive(Clone, Debug)]
pub struct Table<K, V> {
    inner: IndexMap<K, V>,
}

impl<K, V> Table<K, V>
where
    K: Hash + Eq,
{
    /// 空のテーブルを生成する。
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// 要素数を返す。
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// 空かどうか。
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// キーと値を登録する。既存キーの場合は値を置き換え、
    /// 挿入位置を保ったまま旧値を返す。
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// キーを削除し、残り要素の挿入順を保ったまま値を返す。
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.shift_remove(key)
    }

    /// キーが登録済みかを判定する。
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    /// キーに対応する値を参照する。
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// 挿入順のイテレータを返す。
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.inner.iter()
    }
}

impl<K, V> Default for Table<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for Table<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: IndexMap::from_iter(iter),
        }
    }
}
