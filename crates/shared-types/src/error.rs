use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side error taxonomy for REST calls.
///
/// Cancellation has no variant on purpose: a superseded request is a
/// dropped future and never produces a value, so it can never surface
/// as an error state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// The request could not complete (DNS, refused connection, offline).
    Network(String),
    /// The server answered with a failure flag or non-2xx status; the
    /// message is surfaced verbatim when the body carried one.
    Server(String),
    /// The body could not be decoded as the expected JSON shape.
    InvalidBody,
    /// HTTP 401 — the session is no longer valid.
    Unauthorized,
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        ApiError::Network(detail.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        ApiError::Server(message.into())
    }

    /// Build the error for a non-2xx response, preferring the server's
    /// own message over a generic `HTTP <status>` fallback.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        match message {
            Some(m) if !m.is_empty() => ApiError::Server(m),
            _ => ApiError::Server(format!("HTTP {status}")),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(_) => write!(f, "Error de red"),
            ApiError::Server(msg) => write!(f, "{msg}"),
            ApiError::InvalidBody => write!(f, "Respuesta inválida del servidor"),
            ApiError::Unauthorized => write!(f, "Sesión expirada. Inicia sesión nuevamente."),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_status_401_is_unauthorized() {
        let err = ApiError::from_status(401, Some("whatever".into()));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn from_status_prefers_server_message() {
        let err = ApiError::from_status(422, Some("Número de expediente duplicado".into()));
        assert_eq!(err.to_string(), "Número de expediente duplicado");
    }

    #[test]
    fn from_status_falls_back_to_http_code() {
        assert_eq!(ApiError::from_status(500, None).to_string(), "HTTP 500");
        assert_eq!(
            ApiError::from_status(404, Some(String::new())).to_string(),
            "HTTP 404"
        );
    }

    #[test]
    fn network_error_shows_generic_message() {
        let err = ApiError::network("dns failure: no such host");
        assert_eq!(err.to_string(), "Error de red");
    }
}
