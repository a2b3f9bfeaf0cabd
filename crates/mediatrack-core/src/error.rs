//! Error types module
//!
//! Tracking failures fall into two groups: wiring defects (an entity type reaches the hooks
//! without registered media properties) and delivery failures reported by the downstream
//! media tracker. Both surface to the caller of the save operation.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected conditions
    Debug,
    /// Warning level - for recoverable issues like a failed delivery
    Warn,
    /// Error level - for wiring defects
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("No tracked media properties registered for entity type '{entity_type}'")]
    Configuration { entity_type: String },

    #[error("Media tracker failed to apply {count} track actions")]
    Forwarding {
        count: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl TrackingError {
    pub fn configuration(entity_type: impl Into<String>) -> Self {
        TrackingError::Configuration {
            entity_type: entity_type.into(),
        }
    }

    pub fn forwarding(count: usize, source: anyhow::Error) -> Self {
        TrackingError::Forwarding { count, source }
    }

    /// Machine-readable error code (e.g., "TRACKING_CONFIGURATION_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackingError::Configuration { .. } => "TRACKING_CONFIGURATION_ERROR",
            TrackingError::Forwarding { .. } => "TRACKING_FORWARDING_ERROR",
        }
    }

    /// Whether the save operation may be retried.
    ///
    /// A missing property registration will fail the same way on every attempt.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TrackingError::Configuration { .. } => false,
            TrackingError::Forwarding { .. } => true,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            TrackingError::Configuration { .. } => LogLevel::Error,
            TrackingError::Forwarding { .. } => LogLevel::Warn,
        }
    }
}

/// Result type for tracking operations
pub type TrackingResult<T> = Result<T, TrackingError>;
