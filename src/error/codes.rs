/// Error code registry for flightmr
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Row source errors
/// - 3000-3999: Column resolution errors
/// - 4000-4999: Row coercion errors
/// - 7000-7999: Validation errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Row source errors (2000-2999)
    pub const SOURCE_IO_ERROR: u16 = 2001;
    pub const SOURCE_PARSE_ERROR: u16 = 2002;
    pub const SOURCE_EMPTY: u16 = 2003;

    // Column resolution errors (3000-3999)
    pub const COLUMN_NOT_FOUND: u16 = 3001;
    pub const COLUMN_DUPLICATE: u16 = 3002;

    // Row coercion errors (4000-4999)
    pub const ROW_MALFORMED: u16 = 4001;
    pub const ROW_MISSING_FIELD: u16 = 4002;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_OUT_OF_RANGE: u16 = 7001;
    pub const VALIDATION_FILE_NOT_FOUND: u16 = 7002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_PARSE_ERROR => "Configuration file could not be parsed",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",

        ErrorCode::SOURCE_IO_ERROR => "Dataset could not be read",
        ErrorCode::SOURCE_PARSE_ERROR => "Dataset record could not be parsed",
        ErrorCode::SOURCE_EMPTY => "Dataset has no header row",

        ErrorCode::COLUMN_NOT_FOUND => "Requested column is missing from the header",
        ErrorCode::COLUMN_DUPLICATE => "Requested column appears more than once in the header",

        ErrorCode::ROW_MALFORMED => "Field could not be coerced to the expected type",
        ErrorCode::ROW_MISSING_FIELD => "Row is shorter than the header",

        ErrorCode::VALIDATION_GENERIC => "General validation error",
        ErrorCode::VALIDATION_OUT_OF_RANGE => "Value out of range",
        ErrorCode::VALIDATION_FILE_NOT_FOUND => "Input file not found",

        _ => "Unknown error code",
    }
}
