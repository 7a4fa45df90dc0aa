//! Which values of a column receive the most flights?
//!
//! Used for both the busiest destination airports and the busiest destination
//! cities; only the grouping column differs.

use super::FLIGHTS;
use crate::error::Result;
use crate::mapreduce::{run_pipeline, shuffle_reduce, sum_values, ColumnIndexSet, MapOutput, ReduceRecord};
use crate::source::Row;
use serde::Serialize;
use std::fmt;

/// Emit `(group value, flights)`; expects indices for the grouping column then `Flights`
pub fn map_flights(row: &Row, indices: &ColumnIndexSet) -> Result<MapOutput<String, i64>> {
    let group = row.field(indices[0])?.to_string();
    let flights: i64 = row.parse(indices[1])?;
    Ok(MapOutput::Emit(group, flights))
}

/// Keep the `n` records with the largest values, largest first, ties by key
pub fn top_n<K, V>(mut records: Vec<ReduceRecord<K, V>>, n: usize) -> Vec<ReduceRecord<K, V>>
where
    K: Ord,
    V: Ord,
{
    records.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.key.cmp(&b.key)));
    records.truncate(n);
    records
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopFlights {
    pub column: String,
    pub ranking: Vec<ReduceRecord<String, i64>>,
}

pub fn run<S>(source: S, column: &str, n: usize) -> Result<TopFlights>
where
    S: IntoIterator<Item = Result<Row>>,
{
    let records = run_pipeline(source, &[column, FLIGHTS], map_flights)?;
    let totals = shuffle_reduce(records, sum_values);

    Ok(TopFlights {
        column: column.to_string(),
        ranking: top_n(totals, n),
    })
}

impl fmt::Display for TopFlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} by {}:", self.ranking.len(), self.column)?;
        for (rank, record) in self.ranking.iter().enumerate() {
            writeln!(f, "  {}. {} ({} flights)", rank + 1, record.key, record.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{DESTINATION_AIRPORT, DESTINATION_CITY};
    use crate::source::rows_from;

    fn sample() -> Vec<Result<Row>> {
        rows_from(&[
            &["Destination_airport", "Destination_city", "Flights"],
            &["SEA", "Seattle: WA", "4"],
            &["PDX", "Portland: OR", "6"],
            &["BFI", "Seattle: WA", "3"],
            &["SEA", "Seattle: WA", "1"],
            &["EUG", "Eugene: OR", "2"],
        ])
    }

    #[test]
    fn test_top_airports() {
        let answer = run(sample(), DESTINATION_AIRPORT, 2).unwrap();
        assert_eq!(
            answer.ranking,
            vec![
                ReduceRecord::new("PDX".to_string(), 6),
                ReduceRecord::new("SEA".to_string(), 5),
            ]
        );
    }

    #[test]
    fn test_top_cities_merge_airports() {
        let answer = run(sample(), DESTINATION_CITY, 5).unwrap();
        assert_eq!(answer.ranking.len(), 3);
        assert_eq!(answer.ranking[0], ReduceRecord::new("Seattle: WA".to_string(), 8));
    }

    #[test]
    fn test_top_n_breaks_ties_by_key() {
        let records = vec![
            ReduceRecord::new("b", 2),
            ReduceRecord::new("a", 2),
            ReduceRecord::new("c", 9),
        ];
        assert_eq!(
            top_n(records, 3),
            vec![
                ReduceRecord::new("c", 9),
                ReduceRecord::new("a", 2),
                ReduceRecord::new("b", 2),
            ]
        );
    }

    #[test]
    fn test_display() {
        let answer = TopFlights {
            column: "Destination_airport".to_string(),
            ranking: vec![ReduceRecord::new("SEA".to_string(), 5)],
        };
        assert_eq!(
            answer.to_string(),
            "Top 1 by Destination_airport:\n  1. SEA (5 flights)\n"
        );
    }
}
