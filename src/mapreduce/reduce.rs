//! Reduce stage: one aggregate call per distinct key

use super::map::MapRecord;
use super::shuffle::GroupedData;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::iter::Sum;
use tracing::debug;

/// The aggregate computed for one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceRecord<K, A> {
    pub key: K,
    pub value: A,
}

impl<K, A> ReduceRecord<K, A> {
    pub fn new(key: K, value: A) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> MapRecord<K, A> {
        (self.key, self.value)
    }
}

/// Invoke `aggregate` once per distinct key of `grouped`
///
/// The aggregate sees the whole grouped data, not only its own key's values,
/// so it may look up other keys. Output order follows the grouped data's
/// iteration order, which is unspecified.
pub fn reduce<K, V, A, F>(grouped: &GroupedData<K, V>, mut aggregate: F) -> Vec<ReduceRecord<K, A>>
where
    K: Eq + Hash,
    F: FnMut(&GroupedData<K, V>, &K) -> ReduceRecord<K, A>,
{
    let results: Vec<_> = grouped.keys().map(|key| aggregate(grouped, key)).collect();
    debug!("Reduce produced {} records", results.len());
    results
}

/// Sum the values grouped under `key`
pub fn sum_values<K, V>(grouped: &GroupedData<K, V>, key: &K) -> ReduceRecord<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Sum<V>,
{
    let total = grouped.get(key).iter().copied().sum();
    ReduceRecord::new(key.clone(), total)
}

/// Count the values grouped under `key`
pub fn count_values<K, V>(grouped: &GroupedData<K, V>, key: &K) -> ReduceRecord<K, usize>
where
    K: Eq + Hash + Clone,
{
    ReduceRecord::new(key.clone(), grouped.get(key).len())
}
