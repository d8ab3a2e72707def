//! Kount RIS collaborator: typed request builders, response parsing, and
//! the execution seam.
//!
//! RIS speaks a flat key-value wire format; [`Fields`] is the rendered
//! field bag, [`inquiry::Inquiry`] and [`update::Update`] are the typed
//! builders that produce it, and [`Executor`] is the substitutable seam
//! through which a rendered request reaches the scoring endpoint.

mod fields;

pub mod client;
pub mod inquiry;
pub mod response;
pub mod update;

pub use client::RisClient;
pub use fields::Fields;
pub use inquiry::Inquiry;
pub use response::RisResponse;
pub use update::Update;

/// RIS interface version sent with every request.
pub(crate) const RIS_VERSION: &str = "0695";

/// How a call through the execution seam failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErrorKind {
    /// The request was incomplete or malformed before it was sent.
    Validation,
    /// The network round-trip to the scoring endpoint failed.
    Transport,
}

/// Tagged failure surfaced by an [`Executor`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExecuteError {
    /// Failure discriminator.
    kind: ExecuteErrorKind,
    /// Human-readable description.
    message: String,
}

impl ExecuteError {
    /// Creates a validation-kind error.
    #[inline]
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self {
            kind: ExecuteErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates a transport-kind error.
    #[inline]
    #[must_use]
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self {
            kind: ExecuteErrorKind::Transport,
            message: message.into(),
        }
    }

    /// The failure discriminator.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ExecuteErrorKind {
        self.kind
    }

    /// Consumes the error, returning its message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// The execution seam: submits a rendered field bag to the scoring
/// endpoint and returns the parsed response.
///
/// [`RisClient`] is the real implementation; tests inject stand-ins to
/// exercise the adapter's field mapping without network access.
pub trait Executor: core::fmt::Debug + Send + Sync {
    /// Performs one blocking round-trip.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecuteError`] when the request cannot be sent or the
    /// endpoint cannot be reached.
    fn execute(&self, fields: &Fields) -> Result<RisResponse, ExecuteError>;
}
