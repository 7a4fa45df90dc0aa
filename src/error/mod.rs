use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, FlightError>;

/// The unified error type for flightmr
#[derive(Error, Debug)]
pub enum FlightError {
    #[error("[E{code:04}] Column '{column}' not found in header")]
    ColumnNotFound {
        code: u16,
        column: String,
        available: Vec<String>,
    },

    #[error("[E{code:04}] Column '{column}' appears {count} times in header")]
    DuplicateColumn {
        code: u16,
        column: String,
        count: usize,
    },

    #[error("[E{code:04}] Malformed row at line {line}: column {column} value '{value}' is not {expected}")]
    MalformedRow {
        code: u16,
        line: usize,
        column: usize,
        value: String,
        expected: &'static str,
    },

    #[error("[E{code:04}] Row source is empty: no header row")]
    EmptySource { code: u16 },

    #[error("[E{code:04}] Row source error: {message}")]
    Source {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
    },
}

impl FlightError {
    /// Create a column-not-found error, remembering the header for diagnostics
    pub fn column_not_found(column: impl Into<String>, header: &[String]) -> Self {
        Self::ColumnNotFound {
            code: ErrorCode::COLUMN_NOT_FOUND,
            column: column.into(),
            available: header.to_vec(),
        }
    }

    pub fn duplicate_column(column: impl Into<String>, count: usize) -> Self {
        Self::DuplicateColumn {
            code: ErrorCode::COLUMN_DUPLICATE,
            column: column.into(),
            count,
        }
    }

    /// Create a malformed-row error for a field that failed coercion
    pub fn malformed_row(
        line: usize,
        column: usize,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedRow {
            code: ErrorCode::ROW_MALFORMED,
            line,
            column,
            value: value.into(),
            expected,
        }
    }

    /// Create a malformed-row error for a row shorter than the requested column
    pub fn missing_field(line: usize, column: usize) -> Self {
        Self::MalformedRow {
            code: ErrorCode::ROW_MISSING_FIELD,
            line,
            column,
            value: String::new(),
            expected: "present",
        }
    }

    pub fn empty_source() -> Self {
        Self::EmptySource {
            code: ErrorCode::SOURCE_EMPTY,
        }
    }

    /// Create a row source error with specific code and path
    pub fn source_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Source {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
        }
    }

    /// Attach an underlying error as the source of this error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        match &mut self {
            Self::Source { source: s, .. } | Self::Config { source: s, .. } => {
                *s = Some(Box::new(source));
            }
            _ => {}
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Validation { .. } => 2,
            Self::Source { .. } | Self::EmptySource { .. } => 3,
            Self::ColumnNotFound { .. } | Self::DuplicateColumn { .. } => 4,
            Self::MalformedRow { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::ColumnNotFound { code, .. }
            | Self::DuplicateColumn { code, .. }
            | Self::MalformedRow { code, .. }
            | Self::EmptySource { code }
            | Self::Source { code, .. }
            | Self::Config { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ColumnNotFound {
                column, available, ..
            } => format!(
                "Column '{}' is not in the dataset header (available: {})",
                column,
                available.join(", ")
            ),
            Self::DuplicateColumn { column, count, .. } => {
                format!("Column '{}' is ambiguous: the header names it {} times", column, count)
            }
            Self::MalformedRow {
                line,
                column,
                value,
                expected,
                ..
            } => format!(
                "Line {}: field {} ('{}') is not {}",
                line, column, value, expected
            ),
            Self::EmptySource { .. } => "The dataset is empty; expected a header row".to_string(),
            Self::Source { message, path, .. } => {
                if let Some(p) = path {
                    format!("Could not read {}: {}", p.display(), message)
                } else {
                    format!("Could not read dataset: {}", message)
                }
            }
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("Invalid {}: {}", f, message)
                } else {
                    format!("Invalid input: {}", message)
                }
            }
        }
    }

    /// Get a developer-oriented message with the full error chain
    pub fn developer_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(&format!("\n  caused by: {}", err));
            cause = err.source();
        }
        message
    }
}

impl From<csv::Error> for FlightError {
    fn from(err: csv::Error) -> Self {
        let code = if err.is_io_error() {
            ErrorCode::SOURCE_IO_ERROR
        } else {
            ErrorCode::SOURCE_PARSE_ERROR
        };
        Self::source_with_code(code, err.to_string(), None).with_source(err)
    }
}

impl From<toml::de::Error> for FlightError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, err.message().to_string())
            .with_source(err)
    }
}
