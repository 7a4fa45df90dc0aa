//! Error handling utilities

use crate::error::{describe_error_code, FlightError};
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `FlightError`: shows the user message, and the code description plus
///   developer message in verbose mode
/// - For other errors: shows the error message, and the chain in verbose mode
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let exit_code = if let Some(flight_err) = error.downcast_ref::<FlightError>() {
        eprint!("{}", flight_error_report(flight_err, verbose));
        flight_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}

/// Text printed to stderr for a fatal `FlightError`
pub fn flight_error_report(err: &FlightError, verbose: u8) -> String {
    let mut report = format!("Error: {}\n", err.user_message());

    if verbose >= 1 {
        report.push_str(&format!(
            "\nE{:04}: {}\n",
            err.code(),
            describe_error_code(err.code())
        ));
        report.push_str(&format!("\nContext Chain:\n{}\n", err.developer_message()));
    }

    report
}
