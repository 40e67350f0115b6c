use thiserror::Error;

/// Low-level reason a request did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Failure of one Category operation.
///
/// `Display` yields only the fixed user-facing sentence; the cause is kept
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("Failed to fetch categories.")]
    Fetch(#[source] ApiFailure),
    #[error("Failed to create category.")]
    Create(#[source] ApiFailure),
    #[error("Failed to update category.")]
    Update(#[source] ApiFailure),
    #[error("Failed to delete category.")]
    Delete(#[source] ApiFailure),
}

impl CategoryError {
    pub fn cause(&self) -> &ApiFailure {
        match self {
            CategoryError::Fetch(c)
            | CategoryError::Create(c)
            | CategoryError::Update(c)
            | CategoryError::Delete(c) => c,
        }
    }

    /// Write the cause to the console
    pub fn log(&self) {
        log::warn!("{} ({})", self, self.cause());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_are_fixed_per_operation() {
        let status = ApiFailure::Status(500);
        assert_eq!(
            CategoryError::Fetch(status.clone()).to_string(),
            "Failed to fetch categories."
        );
        assert_eq!(
            CategoryError::Create(status.clone()).to_string(),
            "Failed to create category."
        );
        assert_eq!(
            CategoryError::Update(status.clone()).to_string(),
            "Failed to update category."
        );
        assert_eq!(
            CategoryError::Delete(status).to_string(),
            "Failed to delete category."
        );
    }

    #[test]
    fn test_cause_is_not_in_message() {
        let err = CategoryError::Create(ApiFailure::Transport("offline".to_string()));
        assert!(!err.to_string().contains("offline"));
        assert_eq!(err.cause().to_string(), "failed to send request: offline");
        assert!(err.source().is_some());
    }
}
