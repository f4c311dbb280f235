//! HTTP status code utilities for error categorization and messaging.

/// HTTP status code for error categorization.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx success responses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Fallback message when the response carries no usable error body.
    pub fn generic_message(&self) -> String {
        let category = if self.is_client_error() {
            "request rejected"
        } else if self.is_server_error() {
            "service failed"
        } else {
            "unexpected status"
        };
        format!("HTTP {} ({category})", self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::HttpStatusCode;

    #[test]
    fn given_status_ranges_when_categorized_then_match_class() {
        assert!(HttpStatusCode(200).is_success());
        assert!(HttpStatusCode(404).is_client_error());
        assert!(HttpStatusCode(503).is_server_error());
        assert!(!HttpStatusCode(301).is_client_error());
        assert!(!HttpStatusCode(301).is_server_error());
    }

    #[test]
    fn given_status_when_generic_message_then_contains_code() {
        assert_eq!(
            HttpStatusCode(503).generic_message(),
            "HTTP 503 (service failed)"
        );
        assert_eq!(
            HttpStatusCode(422).generic_message(),
            "HTTP 422 (request rejected)"
        );
    }
}
