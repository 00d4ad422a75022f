//! Reservations: the instances launched together by one run-instances call.
//!
//! A [`Reservation`] is an immutable aggregate. It trusts its inputs: every
//! instance is assumed to live in the reservation's region, and checking that
//! belongs to whoever decoded the response.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ptr;

use serde::Serialize;

use crate::error::ModelError;
use crate::fields::{Maybe, SetOf};
use crate::instance::RunningInstance;
use crate::ordering::NaturalOrder;
use crate::region::Region;

/// Snapshot of one launch batch scoped to a region.
///
/// Equality and hashing cover all six fields; group and instance sets compare
/// without regard to insertion order. Ordering, through [`NaturalOrder`],
/// uses the reservation id.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    region: Region,
    group_ids: BTreeSet<String>,
    instances: BTreeSet<RunningInstance>,
    owner_id: Option<String>,
    requester_id: Option<String>,
    reservation_id: Option<String>,
}

impl Reservation {
    /// Starts a builder for a [`Reservation`].
    #[must_use]
    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    /// Instances are tied to availability zones, but the instance ID is tied
    /// to the region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Names of the security groups.
    #[must_use]
    pub const fn group_ids(&self) -> &BTreeSet<String> {
        &self.group_ids
    }

    /// Instances launched by this reservation.
    #[must_use]
    pub const fn running_instances(&self) -> &BTreeSet<RunningInstance> {
        &self.instances
    }

    /// Access key of the account that owns the reservation.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// ID of the requester, when launched on behalf of another service.
    #[must_use]
    pub fn requester_id(&self) -> Option<&str> {
        self.requester_id.as_deref()
    }

    /// Unique ID of the reservation.
    #[must_use]
    pub fn reservation_id(&self) -> Option<&str> {
        self.reservation_id.as_deref()
    }
}

impl NaturalOrder for Reservation {
    /// Compares by reservation id. A reservation compared with itself is
    /// `Equal` even when it has no id.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, ModelError> {
        if ptr::eq(self, other) {
            return Ok(Ordering::Equal);
        }
        match (self.reservation_id.as_deref(), other.reservation_id.as_deref()) {
            (Some(left), Some(right)) => Ok(left.cmp(right)),
            _ => Err(ModelError::MissingReservationId),
        }
    }

    fn has_natural_key(&self) -> bool {
        self.reservation_id.is_some()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation[region={}, group_ids={}, instances={}, owner_id={}, requester_id={}, reservation_id={}]",
            self.region,
            SetOf(&self.group_ids),
            SetOf(&self.instances),
            Maybe(self.owner_id.as_deref()),
            Maybe(self.requester_id.as_deref()),
            Maybe(self.reservation_id.as_deref()),
        )
    }
}

/// Builder for [`Reservation`].
///
/// The region and both sets must be supplied; an empty set counts as
/// supplied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReservationBuilder {
    pub(crate) region: Option<Region>,
    pub(crate) group_ids: Option<BTreeSet<String>>,
    pub(crate) instances: Option<BTreeSet<RunningInstance>>,
    pub(crate) owner_id: Option<String>,
    pub(crate) requester_id: Option<String>,
    pub(crate) reservation_id: Option<String>,
}

impl ReservationBuilder {
    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Sets the security group names; duplicates collapse.
    #[must_use]
    pub fn group_ids<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_ids = Some(group_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the launched instances; equal instances collapse.
    #[must_use]
    pub fn instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator<Item = RunningInstance>,
    {
        self.instances = Some(instances.into_iter().collect());
        self
    }

    /// Sets the owner ID.
    #[must_use]
    pub fn owner_id(mut self, value: impl Into<String>) -> Self {
        self.owner_id = Some(value.into());
        self
    }

    /// Sets the requester ID.
    #[must_use]
    pub fn requester_id(mut self, value: impl Into<String>) -> Self {
        self.requester_id = Some(value.into());
        self
    }

    /// Sets the reservation ID.
    #[must_use]
    pub fn reservation_id(mut self, value: impl Into<String>) -> Self {
        self.reservation_id = Some(value.into());
        self
    }

    /// Builds the [`Reservation`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRegion`], [`ModelError::MissingGroupIds`],
    /// or [`ModelError::MissingInstances`] for the first required field that
    /// was never supplied, checked in that order.
    pub fn build(self) -> Result<Reservation, ModelError> {
        let region = self.region.ok_or(ModelError::MissingRegion {
            resource: "reservation",
        })?;
        let group_ids = self.group_ids.ok_or(ModelError::MissingGroupIds)?;
        let instances = self.instances.ok_or(ModelError::MissingInstances)?;
        Ok(Reservation {
            region,
            group_ids,
            instances,
            owner_id: self.owner_id,
            requester_id: self.requester_id,
            reservation_id: self.reservation_id,
        })
    }
}
