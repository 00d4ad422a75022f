//! Lifecycle status reported for a volume attachment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Physical state of a volume-to-instance attachment as reported by the
/// provider.
///
/// This is a snapshot vocabulary, not a state machine: transitions are the
/// provider's concern. Variants order by declaration.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AttachmentStatus {
    /// The volume is being attached.
    Attaching,
    /// The volume is attached and usable by the guest.
    Attached,
    /// The volume is being detached.
    Detaching,
    /// The volume is no longer attached.
    Detached,
    /// The attachment is contended by another in-flight operation.
    Busy,
}

impl AttachmentStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Attaching,
        Self::Attached,
        Self::Detaching,
        Self::Detached,
        Self::Busy,
    ];

    /// Returns the canonical lowercase token.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Attaching => "attaching",
            Self::Attached => "attached",
            Self::Detaching => "detaching",
            Self::Detached => "detached",
            Self::Busy => "busy",
        }
    }

    /// Parses a status token, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidStatus`] when the token names no status.
    pub fn from_token(token: &str) -> Result<Self, ModelError> {
        match token.to_ascii_uppercase().as_str() {
            "ATTACHING" => Ok(Self::Attaching),
            "ATTACHED" => Ok(Self::Attached),
            "DETACHING" => Ok(Self::Detaching),
            "DETACHED" => Ok(Self::Detached),
            "BUSY" => Ok(Self::Busy),
            _ => Err(ModelError::InvalidStatus {
                token: token.to_owned(),
            }),
        }
    }
}

impl FromStr for AttachmentStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_token(value)
    }
}

impl TryFrom<String> for AttachmentStatus {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_token(&value)
    }
}

impl From<AttachmentStatus> for &'static str {
    fn from(value: AttachmentStatus) -> Self {
        value.as_token()
    }
}

impl fmt::Display for AttachmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
