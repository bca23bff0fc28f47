use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidUrl { input: String },
    InvalidPhoneNumber { input: String },
    InvalidScheduleTime { input: String },
    LimitOutOfRange { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidUrl { input } => write!(f, "invalid callback url: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidScheduleTime { input } => {
                write!(
                    f,
                    "schedule time must be 14 digits (YYYYMMDDHHMMSS): {input}"
                )
            }
            Self::LimitOutOfRange { max, actual } => {
                write!(
                    f,
                    "per-request limit out of range: {actual} (expected 1..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "dstaddr" };
        assert_eq!(err.to_string(), "dstaddr must not be empty");

        let err = ValidationError::InvalidUrl {
            input: "not a url".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid callback url: not a url");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidScheduleTime {
            input: "2024".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "schedule time must be 14 digits (YYYYMMDDHHMMSS): 2024"
        );

        let err = ValidationError::LimitOutOfRange {
            max: 500,
            actual: 501,
        };
        assert_eq!(
            err.to_string(),
            "per-request limit out of range: 501 (expected 1..=500)"
        );
    }
}
