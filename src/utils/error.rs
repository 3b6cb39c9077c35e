use thiserror::Error;

/// Broad category of a rejected calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operand is not a number at all
    Type,
    /// An operand is a number but NaN or infinite
    InvalidValue,
    /// The divisor is exactly zero
    DivisionByZero,
}

/// Errors raised by the validation gate and the arithmetic operations.
///
/// The `Display` text of each variant is fixed; callers may match on it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Both arguments must be numbers")]
    NotNumbers,

    #[error("Arguments cannot be NaN")]
    NotANumber,

    #[error("Arguments must be finite numbers")]
    NotFinite,

    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::NotNumbers => ErrorKind::Type,
            CalcError::NotANumber | CalcError::NotFinite => ErrorKind::InvalidValue,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

/// Result type for the arithmetic core
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

/// The line shown to users when a calculation is rejected
pub fn format_error(err: &CalcError) -> String {
    format!("Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(CalcError::NotNumbers.to_string(), "Both arguments must be numbers");
        assert_eq!(CalcError::NotANumber.to_string(), "Arguments cannot be NaN");
        assert_eq!(CalcError::NotFinite.to_string(), "Arguments must be finite numbers");
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero is not allowed");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(CalcError::NotNumbers.kind(), ErrorKind::Type);
        assert_eq!(CalcError::NotANumber.kind(), ErrorKind::InvalidValue);
        assert_eq!(CalcError::NotFinite.kind(), ErrorKind::InvalidValue);
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error(&CalcError::DivisionByZero),
            "Error: Division by zero is not allowed"
        );
    }
}
