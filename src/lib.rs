//! # flightmr
//!
//! A miniature in-memory map/shuffle/reduce engine for answering aggregate
//! questions about flight records.
//!
//! ## Usage
//!
//! ```bash
//! flightmr empty --file flights.csv [--threshold 0.1]
//! flightmr airports --file flights.csv [-n 5]
//! flightmr all --file flights.csv --format json
//! ```
//!
//! ## Modules
//!
//! - `source` - Reads delimited text into rows; the first row is the header
//! - `mapreduce` - Column resolution plus the map, shuffle and reduce stages
//! - `questions` - Analytical questions expressed as map/reduce functions
//! - `report` - Text and JSON rendering of answers
//! - `config` - Layered configuration (file, environment, flags)
//! - `cli` - Command-line parsing, validation and routing
//! - `app` - Logging setup and fatal error handling
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod mapreduce;
pub mod questions;
pub mod report;
pub mod source;

pub use error::{FlightError, Result};
