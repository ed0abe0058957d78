// errors.rs
use crate::backend::BackendError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or the remote backend.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large: body exceeds {0} bytes")]
    PayloadTooLarge(usize),
    #[error("Backend Error: {0}")]
    Backend(#[from] BackendError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
