//! In-memory map/shuffle/reduce engine
//!
//! Every analytical question is a map transform and an aggregate plugged into
//! the same three stages:
//!
//! - [`map_stage`] runs a transform per row and keeps the `Emit` results
//! - [`shuffle`] groups those records by key
//! - [`reduce`] runs an aggregate per key over a read-only [`GroupedData`]
//!
//! [`run_pipeline`] and [`shuffle_reduce`] compose the stages, and [`remap`]
//! feeds one run's output into the next.

pub mod columns;
pub mod map;
pub mod pipeline;
pub mod reduce;
pub mod shuffle;

pub use columns::{resolve, ColumnIndexSet};
pub use map::{map_stage, MapOutput, MapRecord};
pub use pipeline::{remap, run_pipeline, shuffle_reduce};
pub use reduce::{count_values, reduce, sum_values, ReduceRecord};
pub use shuffle::{shuffle, GroupedData};
