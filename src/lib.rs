//! Read-only models for EC2 volume attachments and reservations.
//!
//! The crate turns already-decoded API output into immutable snapshots:
//! [`Attachment`] for a volume attached to an instance and [`Reservation`]
//! for the instances launched by one request. Both are scoped to a
//! [`Region`], compare structurally, and order by a natural key that the
//! provider may omit, so ordering goes through the fallible
//! [`NaturalOrder`] trait.

pub mod attachment;
pub mod config;
pub mod decode;
pub mod document;
pub mod error;
pub mod fields;
pub mod instance;
pub mod ordering;
pub mod region;
pub mod report;
pub mod reservation;
pub mod test_support;

pub use attachment::{Attachment, AttachmentBuilder, AttachmentStatus};
pub use config::{ConfigError, ModelConfig};
pub use decode::{AttachmentRecord, DecodeError, ReservationRecord, ResponseDecoder};
pub use document::{DocumentError, read_document};
pub use error::ModelError;
pub use instance::RunningInstance;
pub use ordering::{NaturalOrder, retain_complete, sort_attachments, sort_reservations, try_sort_by};
pub use region::Region;
pub use report::{IncompletePolicy, Listing, OutputFormat, ReportError};
pub use reservation::{Reservation, ReservationBuilder};
