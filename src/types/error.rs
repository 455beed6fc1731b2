use thiserror::Error;

/// Every failure the calendar and chart calculations can report.
///
/// All errors are input-derived or point at a data/arithmetic bug; none is
/// transient, so callers should never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Invalid {field}: {value}")]
    InvalidArgument { field: &'static str, value: i64 },

    #[error("Malformed {field}: {value:?}")]
    MalformedInput { field: &'static str, value: String },

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl CalendarError {
    pub(crate) fn out_of_range(field: &'static str, value: impl Into<i64>) -> Self {
        CalendarError::OutOfRange {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<i64>) -> Self {
        CalendarError::InvalidArgument {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        CalendarError::MalformedInput {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
