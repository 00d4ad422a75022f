//! Volume-to-instance attachments.
//!
//! An [`Attachment`] is a point-in-time snapshot of a block-storage volume
//! attached to an instance. It is never updated in place: polling again
//! yields a fresh value that replaces the stale one.

pub mod status;

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::ModelError;
use crate::fields::Maybe;
use crate::ordering::NaturalOrder;
use crate::region::Region;

pub use status::AttachmentStatus;

/// Snapshot of a volume attached to an instance.
///
/// Equality and hashing cover every field. Ordering, through
/// [`NaturalOrder`], looks only at the attach time.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    region: Region,
    volume_id: Option<String>,
    instance_id: Option<String>,
    device: Option<String>,
    status: Option<AttachmentStatus>,
    attach_time: Option<DateTime<Utc>>,
}

impl Attachment {
    /// Starts a builder for an [`Attachment`].
    #[must_use]
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Attachments are tied to the region of their volume.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// The ID of the volume.
    #[must_use]
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    /// The ID of the instance.
    #[must_use]
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    /// The device as it is exposed to the instance.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Attachment status.
    #[must_use]
    pub const fn status(&self) -> Option<AttachmentStatus> {
        self.status
    }

    /// Time stamp when the attachment was initiated.
    #[must_use]
    pub const fn attach_time(&self) -> Option<DateTime<Utc>> {
        self.attach_time
    }
}

impl NaturalOrder for Attachment {
    fn try_cmp(&self, other: &Self) -> Result<Ordering, ModelError> {
        match (self.attach_time, other.attach_time) {
            (Some(left), Some(right)) => Ok(left.cmp(&right)),
            _ => Err(ModelError::NullTimestamp),
        }
    }

    fn has_natural_key(&self) -> bool {
        self.attach_time.is_some()
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attach_time = self
            .attach_time
            .map(|time| time.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        write!(
            f,
            "Attachment[region={}, volume_id={}, instance_id={}, device={}, status={}, attach_time={}]",
            self.region,
            Maybe(self.volume_id.as_deref()),
            Maybe(self.instance_id.as_deref()),
            Maybe(self.device.as_deref()),
            Maybe(self.status.as_ref()),
            Maybe(attach_time.as_deref()),
        )
    }
}

/// Builder for [`Attachment`]; only the region is required.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttachmentBuilder {
    pub(crate) region: Option<Region>,
    pub(crate) volume_id: Option<String>,
    pub(crate) instance_id: Option<String>,
    pub(crate) device: Option<String>,
    pub(crate) status: Option<AttachmentStatus>,
    pub(crate) attach_time: Option<DateTime<Utc>>,
}

impl AttachmentBuilder {
    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the volume identifier.
    #[must_use]
    pub fn volume_id(mut self, value: impl Into<String>) -> Self {
        self.volume_id = Some(value.into());
        self
    }

    /// Sets the instance identifier.
    #[must_use]
    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    /// Sets the guest-visible device path.
    #[must_use]
    pub fn device(mut self, value: impl Into<String>) -> Self {
        self.device = Some(value.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn status(mut self, status: AttachmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the attach time.
    #[must_use]
    pub fn attach_time(mut self, attach_time: DateTime<Utc>) -> Self {
        self.attach_time = Some(attach_time);
        self
    }

    /// Builds the [`Attachment`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRegion`] when no region was supplied.
    pub fn build(self) -> Result<Attachment, ModelError> {
        let region = self.region.ok_or(ModelError::MissingRegion {
            resource: "attachment",
        })?;
        Ok(Attachment {
            region,
            volume_id: self.volume_id,
            instance_id: self.instance_id,
            device: self.device,
            status: self.status,
            attach_time: self.attach_time,
        })
    }
}
