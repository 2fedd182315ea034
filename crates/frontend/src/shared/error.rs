use thiserror::Error;

/// Failure of a call to the orders backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body could not be read as the expected JSON
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// The server answered `success: false`
    #[error("request rejected: {}", .0.as_deref().unwrap_or("unknown"))]
    Rejected(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_falls_back() {
        assert_eq!(ApiError::Rejected(None).to_string(), "request rejected: unknown");
        assert_eq!(
            ApiError::Rejected(Some("Invalid status".into())).to_string(),
            "request rejected: Invalid status"
        );
    }
}
