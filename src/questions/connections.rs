//! Busiest city-to-city connections per month
//!
//! Two chained passes. The first sums flights per `(month, city pair)`, with the
//! pair normalized so both directions count together. The second re-keys those
//! totals by month and keeps each month's busiest pairs.

use super::{DESTINATION_CITY, FLIGHTS, FLY_DATE, ORIGIN_CITY};
use crate::error::{FlightError, Result};
use crate::mapreduce::{
    remap, run_pipeline, shuffle_reduce, sum_values, ColumnIndexSet, GroupedData, MapOutput,
    ReduceRecord,
};
use crate::source::Row;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

pub const COLUMNS: [&str; 4] = [ORIGIN_CITY, DESTINATION_CITY, FLIGHTS, FLY_DATE];

/// Two cities in alphabetical order
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CityPair {
    pub first: String,
    pub second: String,
}

impl CityPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

impl fmt::Display for CityPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// First-pass key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthlyConnection {
    pub month: String,
    pub pair: CityPair,
}

/// Flights between one pair of cities in some month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairFlights {
    #[serde(flatten)]
    pub pair: CityPair,
    pub flights: i64,
}

/// `YYYY-MM` part of a `YYYY-MM-DD` date: the date without its last three characters
pub fn month_of(row: &Row, index: usize) -> Result<String> {
    let date = row.field(index)?;
    date.len()
        .checked_sub(3)
        .and_then(|end| date.get(..end))
        .filter(|month| !month.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FlightError::malformed_row(row.line(), index, date, "a YYYY-MM-DD date"))
}

/// First pass: expects indices for `Origin_city, Destination_city, Flights, Fly_date`
pub fn map_connections(row: &Row, indices: &ColumnIndexSet) -> Result<MapOutput<MonthlyConnection, i64>> {
    let origin = row.field(indices[0])?;
    let destination = row.field(indices[1])?;
    let flights: i64 = row.parse(indices[2])?;
    let month = month_of(row, indices[3])?;

    let key = MonthlyConnection {
        month,
        pair: CityPair::new(origin, destination),
    };
    Ok(MapOutput::Emit(key, flights))
}

/// Second pass: move the pair into the value so records group by month
pub fn rekey_by_month(key: MonthlyConnection, flights: i64) -> MapOutput<String, PairFlights> {
    MapOutput::Emit(
        key.month,
        PairFlights {
            pair: key.pair,
            flights,
        },
    )
}

fn busiest_first(a: &PairFlights, b: &PairFlights) -> Ordering {
    b.flights.cmp(&a.flights).then_with(|| a.pair.cmp(&b.pair))
}

/// The `n` busiest pairs of `month`
///
/// Sorts a copy of the group; the grouped data itself is left untouched.
pub fn busiest_pairs(
    grouped: &GroupedData<String, PairFlights>,
    month: &String,
    n: usize,
) -> ReduceRecord<String, Vec<PairFlights>> {
    let mut pairs = grouped.get(month).to_vec();
    pairs.sort_by(busiest_first);
    pairs.truncate(n);
    ReduceRecord::new(month.clone(), pairs)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connections {
    pub top_n: usize,
    pub months: Vec<ReduceRecord<String, Vec<PairFlights>>>,
}

pub fn run<S>(source: S, n: usize) -> Result<Connections>
where
    S: IntoIterator<Item = Result<Row>>,
{
    let records = run_pipeline(source, &COLUMNS, map_connections)?;
    let monthly_totals = shuffle_reduce(records, sum_values);

    let by_month = remap(monthly_totals, rekey_by_month);
    let mut months = shuffle_reduce(by_month, |grouped, month| busiest_pairs(grouped, month, n));
    months.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(Connections { top_n: n, months })
}

impl fmt::Display for Connections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} connections per month:", self.top_n)?;
        for record in &self.months {
            writeln!(f, "  {}", record.key)?;
            for pair in &record.value {
                writeln!(f, "    {} ({} flights)", pair.pair, pair.flights)?;
            }
        }
        Ok(())
    }
}
