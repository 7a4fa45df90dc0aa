//! Map stage: one transform call per row

use super::columns::ColumnIndexSet;
use crate::error::Result;
use crate::source::Row;
use tracing::{debug, trace};

/// A key/value pair emitted for one row
pub type MapRecord<K, V> = (K, V);

/// What a map transform produced for a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutput<K, V> {
    /// The row contributes `value` under `key`
    Emit(K, V),
    /// The row contributes nothing
    Skip,
}

impl<K, V> MapOutput<K, V> {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    pub fn into_record(self) -> Option<MapRecord<K, V>> {
        match self {
            Self::Emit(key, value) => Some((key, value)),
            Self::Skip => None,
        }
    }
}

impl<K, V> From<Option<(K, V)>> for MapOutput<K, V> {
    fn from(pair: Option<(K, V)>) -> Self {
        match pair {
            Some((key, value)) => Self::Emit(key, value),
            None => Self::Skip,
        }
    }
}

/// Apply `transform` to every row in order, dropping `Skip` results
///
/// `rows` must already be past the header. The iterator is consumed. The first
/// error, whether from the source or from the transform, aborts the stage.
pub fn map_stage<I, F, K, V>(
    rows: I,
    mut transform: F,
    indices: &ColumnIndexSet,
) -> Result<Vec<MapRecord<K, V>>>
where
    I: IntoIterator<Item = Result<Row>>,
    F: FnMut(&Row, &ColumnIndexSet) -> Result<MapOutput<K, V>>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        let row = row?;
        match transform(&row, indices)? {
            MapOutput::Emit(key, value) => records.push((key, value)),
            MapOutput::Skip => {
                trace!("Row at line {} contributes nothing", row.line());
                skipped += 1;
            }
        }
    }

    debug!(
        "Map stage emitted {} records, skipped {} rows",
        records.len(),
        skipped
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlightError;
    use crate::mapreduce::resolve;
    use crate::source::rows_from;

    fn passthrough(row: &Row, idx: &ColumnIndexSet) -> Result<MapOutput<String, u32>> {
        let key = row.field(idx[0])?.to_string();
        let value = row.parse::<u32>(idx[1])?;
        if value == 0 {
            return Ok(MapOutput::Skip);
        }
        Ok(MapOutput::Emit(key, value))
    }

    #[test]
    fn test_map_stage_preserves_order_and_drops_skips() {
        let mut rows = rows_from(&[
            &["City", "Flights"],
            &["Bend: OR", "2"],
            &["Ames: IA", "0"],
            &["Yuma: AZ", "5"],
        ])
        .into_iter();
        let header = rows.next().unwrap().unwrap();
        let idx = resolve(header.fields(), &["City", "Flights"]).unwrap();

        let records = map_stage(rows, passthrough, &idx).unwrap();
        assert_eq!(
            records,
            vec![("Bend: OR".to_string(), 2), ("Yuma: AZ".to_string(), 5)]
        );
    }

    #[test]
    fn test_map_stage_aborts_on_malformed_row() {
        let rows = rows_from(&[&["Bend: OR", "2"], &["Ames: IA", "lots"], &["Yuma: AZ", "5"]]);
        let header = vec!["City".to_string(), "Flights".to_string()];
        let idx = resolve(&header, &["City", "Flights"]).unwrap();

        let err = map_stage(rows, passthrough, &idx).unwrap_err();
        assert!(matches!(err, FlightError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_map_stage_calls_transform_once_per_row() {
        let rows = rows_from(&[&["1"], &["2"], &["3"]]);
        let header = vec!["n".to_string()];
        let idx = resolve(&header, &["n"]).unwrap();
        let mut calls = 0;

        let records = map_stage(
            rows,
            |row, idx| {
                calls += 1;
                Ok(MapOutput::Emit(row.parse::<u8>(idx[0])?, ()))
            },
            &idx,
        )
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_map_output_from_option() {
        let emit: MapOutput<&str, i32> = Some(("k", 1)).into();
        let skip: MapOutput<&str, i32> = None.into();
        assert_eq!(emit.into_record(), Some(("k", 1)));
        assert!(skip.is_skip());
    }
}
