//! Fixture builders shared by unit and behavioural tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::attachment::{Attachment, AttachmentStatus};
use crate::error::ModelError;
use crate::instance::RunningInstance;
use crate::region::Region;
use crate::reservation::Reservation;

/// Region used by fixtures unless a test needs another one.
pub const FIXTURE_REGION: &str = "us-east-1";

/// Builds a region, panicking on blank input.
///
/// # Panics
///
/// Panics when `token` is blank; fixtures only pass literal tokens.
#[must_use]
pub fn region(token: &str) -> Region {
    Region::new(token).unwrap_or_else(|err| panic!("fixture region '{token}': {err}"))
}

/// Returns a UTC timestamp `offset_secs` seconds after a fixed epoch.
///
/// # Panics
///
/// Panics when the resulting timestamp is out of range.
#[must_use]
pub fn timestamp(offset_secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 11, 8, 14, 0, 0)
        .single()
        .map(|base| base + chrono::Duration::seconds(offset_secs))
        .unwrap_or_else(|| panic!("fixture timestamp out of range"))
}

/// Builds a fully populated attachment in [`FIXTURE_REGION`].
///
/// # Errors
///
/// Propagates builder failures, which a populated fixture never produces.
pub fn attached_volume(volume_id: &str, offset_secs: i64) -> Result<Attachment, ModelError> {
    Attachment::builder()
        .region(region(FIXTURE_REGION))
        .volume_id(volume_id)
        .instance_id("i-1")
        .device("/dev/sdh")
        .status(AttachmentStatus::Attached)
        .attach_time(timestamp(offset_secs))
        .build()
}

/// Builds a running instance with a type and state.
#[must_use]
pub fn running_instance(instance_id: &str) -> RunningInstance {
    RunningInstance::new(instance_id)
        .with_image_id("ami-1")
        .with_instance_type("m1.small")
        .with_instance_state("running")
}

/// Builds a reservation in [`FIXTURE_REGION`] with the `default` group.
///
/// # Errors
///
/// Propagates builder failures, which a populated fixture never produces.
pub fn reservation<'a>(
    reservation_id: Option<&str>,
    instance_ids: impl IntoIterator<Item = &'a str>,
) -> Result<Reservation, ModelError> {
    let mut builder = Reservation::builder()
        .region(region(FIXTURE_REGION))
        .group_ids(["default"])
        .instances(instance_ids.into_iter().map(running_instance))
        .owner_id("owner-1");
    if let Some(id) = reservation_id {
        builder = builder.reservation_id(id);
    }
    builder.build()
}
