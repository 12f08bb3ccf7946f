//! Structured error types for sheetport-core.
//!
//! Only the container-level read can fail. Bad cell contents never surface
//! here; they are coerced to zero values by the parser.

use thiserror::Error;

/// Errors raised while reading an uploaded spreadsheet
#[derive(Error, Debug)]
pub enum SheetError {
    /// The bytes are not a spreadsheet container calamine can open
    #[error("Failed to open spreadsheet: {reason}")]
    Open { reason: String },

    /// The container opened but its worksheet could not be read
    #[error("Failed to parse spreadsheet: {reason}")]
    Parse { reason: String },
}

/// Result type alias for sheetport-core operations
pub type Result<T> = std::result::Result<T, SheetError>;

impl SheetError {
    /// Create an open error
    pub fn open(reason: impl Into<String>) -> Self {
        Self::Open {
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SheetError::open("invalid zip header");
        assert_eq!(
            err.to_string(),
            "Failed to open spreadsheet: invalid zip header"
        );

        let err = SheetError::parse("workbook has no worksheets");
        assert!(err.to_string().contains("Failed to parse"));
    }
}
