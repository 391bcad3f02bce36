use std::fmt;

/// Why a provider call produced no data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, connect, timeout or body read failure.
    #[error("failed to reach weather provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider responded with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("unexpected weather provider response: {0}")]
    Parse(String),

    #[error("location not recognised: {0}")]
    InvalidLocation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Http,
    Parse,
    InvalidLocation,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Http { .. } => FailureKind::Http,
            FetchError::Parse(_) => FailureKind::Parse,
            FetchError::InvalidLocation(_) => FailureKind::InvalidLocation,
        }
    }

    /// Build an `Http` error, keeping only the head of the body for logs.
    pub(crate) fn http(status: u16, body: &str) -> Self {
        FetchError::Http { status, body: truncate_body(body) }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Transport => "transport",
            FailureKind::Http => "http",
            FailureKind::Parse => "parse",
            FailureKind::InvalidLocation => "invalid-location",
        };
        f.write_str(s)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_status_and_short_body() {
        let err = FetchError::http(503, "service unavailable");
        assert_eq!(err.kind(), FailureKind::Http);
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("service unavailable"));
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(300);
        let FetchError::Http { body, .. } = FetchError::http(500, &body) else {
            panic!("expected http error");
        };
        assert_eq!(body.chars().count(), 203);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn kinds_render_for_logs() {
        assert_eq!(FetchError::Parse("x".into()).kind().to_string(), "parse");
        assert_eq!(
            FetchError::InvalidLocation("x".into()).kind().to_string(),
            "invalid-location"
        );
    }
}
