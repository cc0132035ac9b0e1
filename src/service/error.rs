use thiserror::Error;

/// Any failure to obtain a usable reply from the Tutoring Service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, timeout, or other IO failure
    #[error("Request to tutoring service failed: {0}")]
    Request(String),
    #[error("Tutoring service returned status {0}")]
    Status(u16),
    /// Body was not JSON or had no string `reply` field
    #[error("Malformed response from tutoring service: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}
