//! Shuffle stage: group map records by key

use super::map::MapRecord;
use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;
use tracing::debug;

/// Values grouped under their key, in first-seen order within each group
///
/// Only [`shuffle`] builds one. Once built it is read-only: the reduce stage and
/// every aggregate only ever see a shared borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedData<K, V>
where
    K: Eq + Hash,
{
    groups: HashMap<K, Vec<V>>,
}

impl<K, V> GroupedData<K, V>
where
    K: Eq + Hash,
{
    /// Values for `key`, or an empty slice when the key has no contributions
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, Vec<V>> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of values across all groups
    pub fn total_values(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group `records` by key
///
/// Every value lands in exactly one group, under its own key, in the order it
/// was seen.
pub fn shuffle<K, V, I>(records: I) -> GroupedData<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = MapRecord<K, V>>,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for (key, value) in records {
        groups.entry(key).or_default().push(value);
    }

    debug!("Shuffle produced {} groups", groups.len());
    GroupedData { groups }
}

impl<K, V> FromIterator<MapRecord<K, V>> for GroupedData<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = MapRecord<K, V>>>(iter: I) -> Self {
        shuffle(iter)
    }
}
