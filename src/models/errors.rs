//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so log lines and API responses
//! can be matched up.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - HTTP_xxx: outgoing request failures
//! - UPSTREAM_xxx: Supabase answered, but not with data
//! - CLIENT_xxx: local setup failures

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // HTTP Errors
    // ============================================
    /// DNS failure, refused connection
    HttpConnectionFailed,
    /// Request timed out
    HttpTimeout,
    /// Request could not be built or sent (e.g. empty base URL)
    HttpRequestFailed,
    /// 200 response whose body is not JSON
    InvalidResponse,

    // ============================================
    // Upstream Errors
    // ============================================
    /// Supabase answered with a non-200 status
    UpstreamRejected,

    // ============================================
    // Client Errors
    // ============================================
    /// reqwest client could not be constructed
    ClientBuildFailed,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HttpConnectionFailed => "HTTP_CONNECTION_FAILED",
            Self::HttpTimeout => "HTTP_TIMEOUT",
            Self::HttpRequestFailed => "HTTP_REQUEST_FAILED",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::UpstreamRejected => "UPSTREAM_REJECTED",
            Self::ClientBuildFailed => "CLIENT_BUILD_FAILED",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::HttpConnectionFailed
            | Self::HttpRequestFailed
            | Self::InvalidResponse
            | Self::UpstreamRejected => 502,
            Self::HttpTimeout => 504,
            Self::ClientBuildFailed => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Supabase answered with a non-200 status
    pub fn upstream_rejected(table: &str, status: u16) -> Self {
        Self::new(
            ErrorCode::UpstreamRejected,
            format!("Supabase returned HTTP {} for table '{}'", status, table),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::with_source(ErrorCode::HttpTimeout, "Request timeout", err)
        } else if err.is_connect() {
            Self::with_source(ErrorCode::HttpConnectionFailed, "Connection failed", err)
        } else if err.is_decode() {
            Self::with_source(ErrorCode::InvalidResponse, "Response body is not valid JSON", err)
        } else {
            let message = err.to_string();
            Self::with_source(ErrorCode::HttpRequestFailed, message, err)
        }
    }
}
