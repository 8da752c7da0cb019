use thiserror::Error;

/// Errors surfaced by the file logger.
///
/// The logger deliberately propagates every failure to its caller: a logger
/// that hides its own I/O problems gives false assurance during incident
/// diagnosis. Construction failures are split into distinguishable variants
/// so the owning application can react differently to a missing directory
/// versus a permission problem. The sound deck, by contrast, never errors;
/// see [`crate::SoundDeck`].
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Log destination not found: {path}")]
    NotFound { path: String },

    #[error("Log destination not writable: {path}")]
    PermissionDenied { path: String },

    #[error("Failed to open log destination: {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write log line")]
    Write(#[source] std::io::Error),

    #[error("Logger already shut down")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = LoggerError::NotFound {
            path: "/var/log/app.log".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Log destination not found: /var/log/app.log"
        );

        let err = LoggerError::Closed;
        assert_eq!(err.to_string(), "Logger already shut down");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::Other, "disk full");
        let err = LoggerError::Open {
            path: "/tmp/app.log".to_string(),
            source: io_err,
        };

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to open log destination: /tmp/app.log"
        );

        let err = LoggerError::NotFound {
            path: "x".to_string(),
        };
        assert!(err.source().is_none());
    }
}
