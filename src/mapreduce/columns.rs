//! Column resolution against a header row

use crate::error::{FlightError, Result};
use std::ops::Index;

/// Positions of the requested columns, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndexSet {
    names: Vec<String>,
    indices: Vec<usize>,
}

impl ColumnIndexSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Name requested at position `i`
    pub fn name(&self, i: usize) -> Option<&str> {
        self.names.get(i).map(String::as_str)
    }
}

impl Index<usize> for ColumnIndexSet {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.indices[i]
    }
}

/// Resolve each requested column name to its position in `header`
///
/// Every name must occur in the header exactly once. The first missing or
/// ambiguous name fails the whole resolution; no partial result is returned.
///
/// # Examples
///
/// ```
/// use flightmr::mapreduce::resolve;
///
/// let header = vec!["Seats".to_string(), "Passengers".to_string()];
/// let indices = resolve(&header, &["Passengers", "Seats"]).unwrap();
/// assert_eq!(indices.as_slice(), &[1, 0]);
/// ```
pub fn resolve<S: AsRef<str>>(header: &[String], names: &[S]) -> Result<ColumnIndexSet> {
    let mut indices = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let mut positions = header
            .iter()
            .enumerate()
            .filter(|(_, column)| column.as_str() == name)
            .map(|(i, _)| i);

        let index = positions
            .next()
            .ok_or_else(|| FlightError::column_not_found(name, header))?;

        let extra = positions.count();
        if extra > 0 {
            return Err(FlightError::duplicate_column(name, extra + 1));
        }

        indices.push(index);
    }

    Ok(ColumnIndexSet {
        names: names.iter().map(|n| n.as_ref().to_string()).collect(),
        indices,
    })
}
