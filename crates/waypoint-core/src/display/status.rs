//! Confirmation messages for operations that have no resource to show.

use std::fmt;

/// Outcome line such as `Success: Saved course 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success(String),
    Failure(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => writeln!(f, "Success: {message}"),
            Self::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Itinerary saved");
        assert!(success.is_success());
        assert_eq!(success.to_string(), "Success: Itinerary saved\n");

        let failure = OperationStatus::failure(format!("Course {} is not open", 3));
        assert_eq!(failure.to_string(), "Error: Course 3 is not open\n");
    }
}
