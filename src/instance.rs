//! Running instance descriptions grouped by reservations.
//!
//! Instances are produced by the response decoder and treated as opaque
//! values by [`crate::reservation::Reservation`]; only their equality, hash,
//! and set ordering matter there.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description of one compute instance launched as part of a reservation.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningInstance {
    instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    launch_time: Option<DateTime<Utc>>,
}

impl RunningInstance {
    /// Creates an instance description with only its identifier populated.
    #[must_use]
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            image_id: None,
            instance_type: None,
            instance_state: None,
            availability_zone: None,
            launch_time: None,
        }
    }

    /// Sets the machine image identifier.
    #[must_use]
    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Sets the instance type (for example `m1.small`).
    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Sets the provider-reported state name.
    #[must_use]
    pub fn with_instance_state(mut self, state: impl Into<String>) -> Self {
        self.instance_state = Some(state.into());
        self
    }

    /// Sets the availability zone inside the reservation's region.
    #[must_use]
    pub fn with_availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.availability_zone = Some(zone.into());
        self
    }

    /// Sets the launch time.
    #[must_use]
    pub fn with_launch_time(mut self, launch_time: DateTime<Utc>) -> Self {
        self.launch_time = Some(launch_time);
        self
    }

    /// The ID of the instance.
    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The machine image the instance was launched from.
    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// The instance type.
    #[must_use]
    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    /// The provider-reported state name.
    #[must_use]
    pub fn instance_state(&self) -> Option<&str> {
        self.instance_state.as_deref()
    }

    /// The availability zone.
    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// When the instance was launched.
    #[must_use]
    pub const fn launch_time(&self) -> Option<DateTime<Utc>> {
        self.launch_time
    }
}

impl fmt::Display for RunningInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.instance_id)
    }
}
