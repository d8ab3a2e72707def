//! Error types for the Kount backend.

use crate::ris::ExecuteError;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// All errors that can occur when using the Kount backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The vendor rejected the request or the call to the vendor failed.
    ///
    /// Both vendor-side validation failures and transport failures collapse
    /// into this variant; the message keeps the vendor's original error text
    /// after the fixed `Invalid Request: ` prefix.
    #[error("Invalid Request: {message}")]
    Request {
        /// The vendor's original error text.
        message: String,
    },
}

impl From<ExecuteError> for Error {
    #[inline]
    fn from(err: ExecuteError) -> Self {
        Self::Request {
            message: err.into_message(),
        }
    }
}
