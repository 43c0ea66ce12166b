//! Error types for the routing library.
//!
//! [`RoutingError`] covers the three ways a route table can fail: a request
//! path that matches nothing, a reverse lookup for an unknown name, and a
//! table declaration that violates an invariant.

use thiserror::Error;

/// The error type for route table construction and lookup.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// No route in the table matches the request path.
    #[error("No route matches '{0}'")]
    NotFound(String),

    /// No route carries the symbolic name given to a reverse lookup.
    #[error("Reverse for '{0}' not found")]
    NoReverseMatch(String),

    /// The route table declaration itself is invalid.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),
}

impl RoutingError {
    /// Returns the HTTP status code the embedding dispatcher should map
    /// this error to.
    ///
    /// - `NotFound` -> 404
    /// - `NoReverseMatch`, `ImproperlyConfigured` -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::NoReverseMatch(_) | Self::ImproperlyConfigured(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, RoutingError>`.
pub type RoutingResult<T> = Result<T, RoutingError>;
