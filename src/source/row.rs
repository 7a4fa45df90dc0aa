//! A single dataset record

use crate::error::{FlightError, Result};
use std::str::FromStr;

/// One record as an ordered list of string fields
///
/// `line` is the 1-based line the record started on in its source, so that
/// coercion failures can point at the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line: usize,
    fields: Vec<String>,
}

impl Row {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the raw text of the field at `index`
    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| FlightError::missing_field(self.line, index))
    }

    /// Parse the field at `index` into `T`
    ///
    /// Failure is a [`FlightError::MalformedRow`]; callers decide nothing here,
    /// the error is meant to abort the run.
    pub fn parse<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr,
    {
        let text = self.field(index)?;
        text.trim()
            .parse::<T>()
            .map_err(|_| FlightError::malformed_row(self.line, index, text, expected_name::<T>()))
    }
}

fn expected_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    match name {
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" => "an integer",
        "u8" | "u16" | "u32" | "u64" | "u128" | "usize" => "a non-negative integer",
        "f32" | "f64" => "a number",
        "bool" => "a boolean",
        _ => "well-formed",
    }
}
