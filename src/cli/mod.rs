//! CLI command handlers
//!
//! - Argument parsing structures
//! - Command routing
//! - Input validation

pub mod args;
pub mod router;
pub mod validation;

pub use args::{Cli, Commands, DatasetArgs};
pub use router::{execute_command, execute_plan, plan_command, RunPlan};
pub use validation::validate_run;
