//! Error types shared across the runtime.

use std::error::Error;

use thiserror::Error;

/// Failures surfaced by the runtime itself.
///
/// Handler failures never show up here: they are logged by the dispatcher and
/// the event is still acknowledged.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid server address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to connect to host: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("event stream failed: {0}")]
    Stream(#[from] tonic::Status),

    #[error("outbound stream is closed")]
    Closed,

    #[error("event `{event_id}` already has a result")]
    AlreadyResolved { event_id: String },
}

impl RuntimeError {
    pub(crate) fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Boxed error returned by fallible handlers.
pub type HandlerError = Box<dyn Error + Send + Sync + 'static>;

pub type HandlerResult = Result<(), HandlerError>;

/// Conversion applied to whatever a bound listener method returns.
///
/// Lets `#[listener]` methods return either `()` or any `Result<(), E>`.
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(())
    }
}

impl<E> IntoHandlerResult for Result<(), E>
where
    E: Into<HandlerError>,
{
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(Into::into)
    }
}
