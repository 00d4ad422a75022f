//! Error taxonomy for the attachment and reservation models.

use thiserror::Error;

/// Errors raised while constructing or ordering model values.
///
/// Construction failures surface immediately from the builders. Ordering
/// failures are deferred until a caller asks for a natural-key comparison on
/// an entity that lacks the key.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ModelError {
    /// Raised when a region token is empty or whitespace.
    #[error("region identifier must not be blank")]
    BlankRegion,
    /// Raised when a builder is finished without a region.
    #[error("{resource} is missing a region")]
    MissingRegion {
        /// Kind of resource being built (`attachment` or `reservation`).
        resource: &'static str,
    },
    /// Raised when a reservation is built without a security group set.
    #[error("reservation is missing its group ids")]
    MissingGroupIds,
    /// Raised when a reservation is built without an instance set.
    #[error("reservation is missing its instances")]
    MissingInstances,
    /// Raised when a status token matches no known attachment status.
    #[error("unknown attachment status '{token}'")]
    InvalidStatus {
        /// Token as supplied by the caller.
        token: String,
    },
    /// Raised when ordering attachments and one side has no attach time.
    #[error("cannot order attachments without an attach time")]
    NullTimestamp,
    /// Raised when ordering reservations and one side has no reservation id.
    #[error("cannot order reservations without a reservation id")]
    MissingReservationId,
}
