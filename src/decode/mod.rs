//! Decoding of already-fetched response documents into model values.
//!
//! The decoder sits at the boundary between the provider's JSON output and the
//! immutable models. It resolves each item's region, parses status tokens,
//! and hands everything else to the builders, which own validation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::attachment::{Attachment, AttachmentBuilder, AttachmentStatus};
use crate::error::ModelError;
use crate::instance::RunningInstance;
use crate::region::Region;
use crate::reservation::{Reservation, ReservationBuilder};

/// Errors raised while decoding a response document.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DecodeError {
    /// Raised when the document is not valid JSON of the expected shape.
    #[error("failed to parse {kind} document: {message}")]
    Json {
        /// Document kind (`attachments` or `reservations`).
        kind: &'static str,
        /// Parser error message.
        message: String,
    },
    /// Raised when the document-level region is blank.
    #[error("{kind} document region is invalid: {source}")]
    DocumentRegion {
        /// Document kind (`attachments` or `reservations`).
        kind: &'static str,
        /// Underlying validation failure.
        source: ModelError,
    },
    /// Raised when an item decodes but cannot become a model value.
    #[error("{kind} item {index} is invalid: {source}")]
    Item {
        /// Document kind (`attachments` or `reservations`).
        kind: &'static str,
        /// Zero-based position of the item in the document.
        index: usize,
        /// Underlying validation failure.
        source: ModelError,
    },
}

/// Attachment fields as they appear in a response item.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    /// Region of the item, when the response carries one per item.
    #[serde(default)]
    pub region: Option<String>,
    /// Volume identifier.
    #[serde(default)]
    pub volume_id: Option<String>,
    /// Instance identifier.
    #[serde(default)]
    pub instance_id: Option<String>,
    /// Device path exposed to the guest.
    #[serde(default)]
    pub device: Option<String>,
    /// Raw status token.
    #[serde(default)]
    pub status: Option<String>,
    /// Attach time in RFC 3339 form.
    #[serde(default)]
    pub attach_time: Option<DateTime<Utc>>,
}

/// Reservation fields as they appear in a response item.
///
/// A missing or `null` set is kept distinct from an empty one.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    /// Region of the item, when the response carries one per item.
    #[serde(default)]
    pub region: Option<String>,
    /// Security group names.
    #[serde(default, alias = "groupSet")]
    pub group_ids: Option<Vec<String>>,
    /// Instances launched by the reservation.
    #[serde(default, alias = "instancesSet")]
    pub instances: Option<Vec<RunningInstance>>,
    /// Owner ID.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Requester ID.
    #[serde(default)]
    pub requester_id: Option<String>,
    /// Reservation ID.
    #[serde(default)]
    pub reservation_id: Option<String>,
}

struct Document<T> {
    region: Option<String>,
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct AttachmentDocument {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    attachments: Vec<AttachmentRecord>,
}

#[derive(Debug, Deserialize)]
struct ReservationDocument {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    reservations: Vec<ReservationRecord>,
}

impl From<AttachmentDocument> for Document<AttachmentRecord> {
    fn from(value: AttachmentDocument) -> Self {
        Self {
            region: value.region,
            items: value.attachments,
        }
    }
}

impl From<ReservationDocument> for Document<ReservationRecord> {
    fn from(value: ReservationDocument) -> Self {
        Self {
            region: value.region,
            items: value.reservations,
        }
    }
}

impl AttachmentRecord {
    /// Converts the record into an [`Attachment`], falling back to `region`
    /// when the record carries none.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the region is blank or missing, or the
    /// status token is unknown.
    pub fn into_attachment(self, region: Option<&Region>) -> Result<Attachment, ModelError> {
        let status = self
            .status
            .as_deref()
            .map(AttachmentStatus::from_token)
            .transpose()?;
        AttachmentBuilder {
            region: resolve_region(self.region, region)?,
            volume_id: self.volume_id,
            instance_id: self.instance_id,
            device: self.device,
            status,
            attach_time: self.attach_time,
        }
        .build()
    }
}

impl ReservationRecord {
    /// Converts the record into a [`Reservation`], falling back to `region`
    /// when the record carries none.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the region is blank or missing, or either
    /// set was never supplied.
    pub fn into_reservation(self, region: Option<&Region>) -> Result<Reservation, ModelError> {
        ReservationBuilder {
            region: resolve_region(self.region, region)?,
            group_ids: self.group_ids.map(|ids| ids.into_iter().collect::<BTreeSet<_>>()),
            instances: self
                .instances
                .map(|instances| instances.into_iter().collect::<BTreeSet<_>>()),
            owner_id: self.owner_id,
            requester_id: self.requester_id,
            reservation_id: self.reservation_id,
        }
        .build()
    }
}

fn resolve_region(
    own: Option<String>,
    fallback: Option<&Region>,
) -> Result<Option<Region>, ModelError> {
    match own {
        Some(token) => Region::new(token).map(Some),
        None => Ok(fallback.cloned()),
    }
}

/// Decodes attachment and reservation documents.
///
/// Regions resolve per item, then per document, then from the decoder's
/// default.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResponseDecoder {
    default_region: Option<Region>,
}

impl ResponseDecoder {
    /// Creates a decoder without a default region.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_region: None,
        }
    }

    /// Sets the region used when neither item nor document names one.
    #[must_use]
    pub fn with_default_region(mut self, region: Option<Region>) -> Self {
        self.default_region = region;
        self
    }

    /// Decodes an `{"region"?, "attachments": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] for malformed input and
    /// [`DecodeError::Item`] for the first item that fails validation.
    pub fn decode_attachments(&self, json: &str) -> Result<Vec<Attachment>, DecodeError> {
        let document: AttachmentDocument = parse_document("attachments", json)?;
        self.decode_items("attachments", document.into(), AttachmentRecord::into_attachment)
    }

    /// Decodes a `{"region"?, "reservations": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] for malformed input and
    /// [`DecodeError::Item`] for the first item that fails validation.
    pub fn decode_reservations(&self, json: &str) -> Result<Vec<Reservation>, DecodeError> {
        let document: ReservationDocument = parse_document("reservations", json)?;
        self.decode_items(
            "reservations",
            document.into(),
            ReservationRecord::into_reservation,
        )
    }

    fn decode_items<R, T, F>(
        &self,
        kind: &'static str,
        document: Document<R>,
        convert: F,
    ) -> Result<Vec<T>, DecodeError>
    where
        F: Fn(R, Option<&Region>) -> Result<T, ModelError>,
    {
        let document_region = document
            .region
            .map(Region::new)
            .transpose()
            .map_err(|source| DecodeError::DocumentRegion { kind, source })?;
        let fallback = document_region.as_ref().or(self.default_region.as_ref());

        let decoded = document
            .items
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                convert(record, fallback).map_err(|source| {
                    debug!(kind, index, error = %source, "rejected response item");
                    DecodeError::Item {
                        kind,
                        index,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(kind, count = decoded.len(), "decoded response document");
        Ok(decoded)
    }
}

fn parse_document<T>(kind: &'static str, json: &str) -> Result<T, DecodeError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(json).map_err(|err| DecodeError::Json {
        kind,
        message: err.to_string(),
    })
}
