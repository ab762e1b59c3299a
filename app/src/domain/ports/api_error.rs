//! Error taxonomy shared by every backend port.

use super::define_port_error;
use crate::domain::DomainError;

define_port_error! {
    /// Errors surfaced while calling the marketplace backend.
    pub enum ApiError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "backend transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "backend request timed out: {message}",
        /// The backend answered with a non-success status. `detail` holds the
        /// backend-provided message, empty when the body carried none.
        Rejected { status: u16, detail: String } =>
            "backend rejected request with status {status}: {detail}",
        /// The response body did not match the expected shape.
        Decode { message: String } =>
            "backend response decode failed: {message}",
    }
}

impl ApiError {
    /// Message suitable for an alert: the backend's own wording when it sent
    /// one, otherwise `fallback`.
    ///
    /// # Examples
    /// ```
    /// use vendor_app::domain::ports::ApiError;
    ///
    /// let err = ApiError::rejected(409_u16, "Phone already registered");
    /// assert_eq!(err.user_message("Registration failed"), "Phone already registered");
    /// assert_eq!(
    ///     ApiError::transport("reset").user_message("Registration failed"),
    ///     "Registration failed"
    /// );
    /// ```
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Map into a domain error whose message follows [`Self::user_message`].
    pub fn into_domain(self, fallback: &str) -> DomainError {
        let message = self.user_message(fallback);
        match self {
            Self::Transport { .. } | Self::Timeout { .. } => {
                DomainError::service_unavailable(message)
            }
            Self::Rejected { status: 401 | 403, .. } => DomainError::unauthorized(message),
            Self::Rejected { status: 404, .. } => DomainError::not_found(message),
            Self::Rejected { status, .. } if (400..500).contains(&status) => {
                DomainError::invalid_request(message)
            }
            Self::Rejected { .. } => DomainError::service_unavailable(message),
            Self::Decode { .. } => DomainError::internal(message),
        }
    }
}
