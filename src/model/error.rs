//! Error types for curaq-tui.
//!
//! Errors are split by concern with `thiserror` and compose through `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned by CLI commands and the TUI entry point
//!   - [`ApiError`] - CuraQ REST failures (non-2xx status, transport, decoding)
//!   - [`ValidationError`] - user input rejected before any network call
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse/write failures
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery Strategy
//!
//! Inside the TUI almost nothing is fatal. API failures on the initial load
//! show a full-screen error with a retry key; add-article failures are shown
//! inline; mark-read and delete failures are logged and otherwise ignored.
//! Only a broken terminal ends the session.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level application error.
///
/// Every domain error converts into this via `From`, so CLI commands can use
/// `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Talking to the CuraQ API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing the config file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal or prompt I/O failed.
    ///
    /// **Recovery**: restore the terminal and exit; the message goes to stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// An interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// No API token is available from the environment or the config file.
    #[error("No API token configured. Run `curaq-tui setup` first.")]
    MissingToken,
}

/// Failure of a CuraQ API call.
///
/// The `Display` form of [`ApiError::Status`] is what the add-article modal
/// shows inline, so it is kept short.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// ```
    /// use curaq_tui::model::ApiError;
    ///
    /// let err = ApiError::Status { status: 401, reason: "Unauthorized".into() };
    /// assert_eq!(err.to_string(), "API Error: 401 Unauthorized");
    /// ```
    #[error("API Error: {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase (may be empty).
        reason: String,
    },

    /// The request never produced a response (DNS, TLS, connection, timeout).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape.
    #[error("Unexpected response from {endpoint}: {reason}")]
    Decode {
        /// Request path that produced the body.
        endpoint: String,
        /// Parser message.
        reason: String,
    },

    /// The configured base URL could not be joined with an endpoint path.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The token cannot be sent as an `Authorization` header.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

/// Input rejected before it reaches the network.
///
/// The messages are shown verbatim in the add-article modal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("URL is required")]
    EmptyUrl,

    /// Not an absolute `http` or `https` URL.
    #[error("Invalid URL format")]
    InvalidUrl,
}
