//! Pipeline driver: wiring row source, columns, map, shuffle and reduce
//!
//! The two halves are separate calls. [`run_pipeline`] covers header handling,
//! column resolution and the map stage; [`shuffle_reduce`] groups and reduces.
//! [`remap`] turns reduce output back into map records so passes can be chained.

use super::columns::{resolve, ColumnIndexSet};
use super::map::{map_stage, MapOutput, MapRecord};
use super::reduce::{reduce, ReduceRecord};
use super::shuffle::{shuffle, GroupedData};
use crate::error::{FlightError, Result};
use crate::source::Row;
use std::hash::Hash;
use tracing::debug;

/// Advance `source` past its header, resolve `column_names`, then map every
/// remaining row with `transform`
///
/// Column errors are raised before any data row is read.
pub fn run_pipeline<S, F, K, V>(
    source: S,
    column_names: &[&str],
    transform: F,
) -> Result<Vec<MapRecord<K, V>>>
where
    S: IntoIterator<Item = Result<Row>>,
    F: FnMut(&Row, &ColumnIndexSet) -> Result<MapOutput<K, V>>,
{
    let mut rows = source.into_iter();
    let header = rows.next().ok_or_else(FlightError::empty_source)??;
    let indices = resolve(header.fields(), column_names)?;
    debug!(
        "Resolved columns {:?} to positions {:?}",
        column_names,
        indices.as_slice()
    );

    map_stage(rows, transform, &indices)
}

/// Group `records` and reduce every group with `aggregate`
pub fn shuffle_reduce<K, V, A, F>(records: Vec<MapRecord<K, V>>, aggregate: F) -> Vec<ReduceRecord<K, A>>
where
    K: Eq + Hash,
    F: FnMut(&GroupedData<K, V>, &K) -> ReduceRecord<K, A>,
{
    let grouped = shuffle(records);
    reduce(&grouped, aggregate)
}

/// Re-key reduce output into map records for a follow-up pass
pub fn remap<K, A, K2, V2, F>(records: Vec<ReduceRecord<K, A>>, mut f: F) -> Vec<MapRecord<K2, V2>>
where
    F: FnMut(K, A) -> MapOutput<K2, V2>,
{
    records
        .into_iter()
        .filter_map(|record| f(record.key, record.value).into_record())
        .collect()
}
