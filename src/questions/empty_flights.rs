//! How many flights flew almost empty?

use super::{FLIGHTS, PASSENGERS, SEATS};
use crate::error::Result;
use crate::mapreduce::{run_pipeline, shuffle_reduce, sum_values, ColumnIndexSet, MapOutput, ReduceRecord};
use crate::source::Row;
use serde::{Serialize, Serializer};
use std::fmt;

pub const COLUMNS: [&str; 3] = [PASSENGERS, SEATS, FLIGHTS];

/// Default upper bound on the occupancy rate of an "almost empty" flight
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Occupancy rate rounded to two decimals, stored as hundredths so it can key a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupancyRate(i64);

impl OccupancyRate {
    /// Round `ratio` to two decimals the way its decimal rendering does
    ///
    /// The exact binary value decides the rounding, so `3 / 200` (stored just
    /// below 0.015) becomes 0.01.
    pub fn from_ratio(ratio: f64) -> Self {
        let rounded: f64 = format!("{:.2}", ratio).parse().unwrap_or(ratio);
        Self((rounded * 100.0).round() as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for OccupancyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl Serialize for OccupancyRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Emit `(rate, flights)` for rows whose occupancy is at most `threshold`
///
/// Expects indices for `Passengers, Seats, Flights`. A row with zero seats has
/// no defined rate and contributes nothing.
pub fn map_empty(
    row: &Row,
    indices: &ColumnIndexSet,
    threshold: f64,
) -> Result<MapOutput<OccupancyRate, i64>> {
    let passengers: i64 = row.parse(indices[0])?;
    let seats: i64 = row.parse(indices[1])?;
    if seats == 0 {
        return Ok(MapOutput::Skip);
    }

    let rate = passengers as f64 / seats as f64;
    if rate > threshold {
        return Ok(MapOutput::Skip);
    }

    let flights: i64 = row.parse(indices[2])?;
    Ok(MapOutput::Emit(OccupancyRate::from_ratio(rate), flights))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyFlights {
    pub threshold: f64,
    pub total: i64,
    pub by_rate: Vec<ReduceRecord<OccupancyRate, i64>>,
}

pub fn run<S>(source: S, threshold: f64) -> Result<EmptyFlights>
where
    S: IntoIterator<Item = Result<Row>>,
{
    let records = run_pipeline(source, &COLUMNS, |row, idx| map_empty(row, idx, threshold))?;
    let mut by_rate = shuffle_reduce(records, sum_values);
    by_rate.sort_by_key(|r| r.key);

    let total = by_rate.iter().map(|r| r.value).sum();
    Ok(EmptyFlights {
        threshold,
        total,
        by_rate,
    })
}

impl fmt::Display for EmptyFlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Almost empty flights (occupancy <= {:.2}): {}",
            self.threshold, self.total
        )?;
        for record in &self.by_rate {
            writeln!(f, "  rate {}: {}", record.key, record.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlightError;
    use crate::mapreduce::resolve;
    use crate::source::rows_from;

    fn indices() -> ColumnIndexSet {
        let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
        resolve(&header, &COLUMNS).unwrap()
    }

    fn row(fields: &[&str]) -> Row {
        Row::new(2, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_map_empty_emits_rounded_rate() {
        let out = map_empty(&row(&["5", "100", "3"]), &indices(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(out, MapOutput::Emit(OccupancyRate::from_ratio(0.05), 3));
    }

    #[test]
    fn test_map_empty_zero_seats_is_skip() {
        let out = map_empty(&row(&["5", "0", "3"]), &indices(), DEFAULT_THRESHOLD).unwrap();
        assert!(out.is_skip());

        let out = map_empty(&row(&["0", "0", "1"]), &indices(), DEFAULT_THRESHOLD).unwrap();
        assert!(out.is_skip());
    }

    #[test]
    fn test_map_empty_above_threshold_is_skip() {
        let out = map_empty(&row(&["50", "50", "1"]), &indices(), DEFAULT_THRESHOLD).unwrap();
        assert!(out.is_skip());
    }

    #[test]
    fn test_map_empty_threshold_is_inclusive() {
        let out = map_empty(&row(&["10", "100", "4"]), &indices(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(out, MapOutput::Emit(OccupancyRate::from_ratio(0.1), 4));
    }

    #[test]
    fn test_map_empty_rounds_exact_binary_value() {
        let cases = [("3", "200", 1), ("9", "200", 4), ("15", "200", 7), ("5", "200", 3)];
        for (passengers, seats, hundredths) in cases {
            let out = map_empty(&row(&[passengers, seats, "1"]), &indices(), DEFAULT_THRESHOLD)
                .unwrap();
            let (rate, _) = out.into_record().unwrap();
            assert_eq!(rate.hundredths(), hundredths, "{}/{}", passengers, seats);
        }
    }

    #[test]
    fn test_run_groups_half_way_rates_by_rounded_value() {
        let source = rows_from(&[
            &["Passengers", "Seats", "Flights"],
            &["3", "200", "2"],
            &["2", "200", "1"],
            &["9", "200", "4"],
        ]);

        let answer = run(source, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(
            answer.by_rate,
            vec![
                ReduceRecord::new(OccupancyRate::from_ratio(0.01), 3),
                ReduceRecord::new(OccupancyRate::from_ratio(0.04), 4),
            ]
        );
    }

    #[test]
    fn test_map_empty_non_numeric_is_fatal() {
        let err = map_empty(&row(&["five", "100", "3"]), &indices(), DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, FlightError::MalformedRow { column: 0, .. }));
    }

    #[test]
    fn test_occupancy_rate_display_and_order() {
        let low = OccupancyRate::from_ratio(0.049);
        let high = OccupancyRate::from_ratio(0.091);
        assert_eq!(low.to_string(), "0.05");
        assert_eq!(high.to_string(), "0.09");
        assert_eq!(low.hundredths(), 5);
        assert!(low < high);
    }

    #[test]
    fn test_run_sums_flights_per_rate() {
        let source = rows_from(&[
            &["Origin_airport", "Passengers", "Seats", "Flights"],
            &["SEA", "5", "100", "2"],
            &["PDX", "1", "20", "3"],
            &["BOS", "9", "100", "1"],
            &["LAX", "90", "100", "7"],
            &["SFO", "0", "0", "4"],
        ]);

        let answer = run(source, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(answer.total, 6);
        assert_eq!(
            answer.by_rate,
            vec![
                ReduceRecord::new(OccupancyRate::from_ratio(0.05), 5),
                ReduceRecord::new(OccupancyRate::from_ratio(0.09), 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        let answer = EmptyFlights {
            threshold: 0.1,
            total: 5,
            by_rate: vec![ReduceRecord::new(OccupancyRate::from_ratio(0.05), 5)],
        };
        assert_eq!(
            answer.to_string(),
            "Almost empty flights (occupancy <= 0.10): 5\n  rate 0.05: 5\n"
        );
    }
}
