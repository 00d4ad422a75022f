//! Listing pipeline: incomplete-entity policy, natural ordering, rendering.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::attachment::Attachment;
use crate::error::ModelError;
use crate::ordering::{NaturalOrder, retain_complete, sort_attachments, sort_reservations};
use crate::reservation::Reservation;

/// Errors raised while producing a listing.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ReportError {
    /// Raised when sorting hits an entity without a natural key.
    #[error("cannot sort {kind}: {source}")]
    Order {
        /// Listing kind (`attachments` or `reservations`).
        kind: &'static str,
        /// Underlying ordering failure.
        source: ModelError,
    },
    /// Raised when JSON rendering fails.
    #[error("failed to render {kind} as JSON: {message}")]
    Json {
        /// Listing kind (`attachments` or `reservations`).
        kind: &'static str,
        /// Serializer error message.
        message: String,
    },
    /// Raised when an output format name is not recognised.
    #[error("unknown output format '{value}' (expected text or json)")]
    UnknownFormat {
        /// Format name supplied by the caller.
        value: String,
    },
}

/// Rendering used for listings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One field-labelled line per entity.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// What to do with entities whose natural key is absent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IncompletePolicy {
    /// Keep them and let the sort fail.
    #[default]
    Fail,
    /// Drop them before sorting.
    Skip,
}

/// Sorts and renders decoded entities.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Listing {
    policy: IncompletePolicy,
    format: OutputFormat,
}

impl Listing {
    /// Creates a listing with the given policy and format.
    #[must_use]
    pub const fn new(policy: IncompletePolicy, format: OutputFormat) -> Self {
        Self { policy, format }
    }

    /// Renders attachments ordered by attach time.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Order`] when an attachment lacks an attach time
    /// under [`IncompletePolicy::Fail`], or [`ReportError::Json`] when
    /// serialisation fails.
    pub fn render_attachments(&self, attachments: Vec<Attachment>) -> Result<String, ReportError> {
        self.render("attachments", attachments, sort_attachments)
    }

    /// Renders reservations ordered by reservation id.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Order`] when a reservation lacks an id under
    /// [`IncompletePolicy::Fail`], or [`ReportError::Json`] when
    /// serialisation fails.
    pub fn render_reservations(
        &self,
        reservations: Vec<Reservation>,
    ) -> Result<String, ReportError> {
        self.render("reservations", reservations, sort_reservations::<Reservation>)
    }

    fn render<T, F>(&self, kind: &'static str, mut items: Vec<T>, sort: F) -> Result<String, ReportError>
    where
        T: NaturalOrder + Display + Serialize,
        F: FnOnce(&mut [T]) -> Result<(), ModelError>,
    {
        if self.policy == IncompletePolicy::Skip {
            let skipped = retain_complete(&mut items);
            if skipped > 0 {
                warn!(kind, skipped, "skipped entities without a natural key");
            }
        }
        sort(&mut items).map_err(|source| ReportError::Order { kind, source })?;
        debug!(kind, count = items.len(), format = %self.format, "rendering listing");

        match self.format {
            OutputFormat::Text => Ok(items.iter().map(|item| format!("{item}\n")).collect()),
            OutputFormat::Json => serde_json::to_string_pretty(&items)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|err| ReportError::Json {
                    kind,
                    message: err.to_string(),
                }),
        }
    }
}
