//! Shared fixtures for attachment BDD scenarios.

use std::cell::RefCell;
use std::cmp::Ordering;

use chrono::{DateTime, TimeZone, Utc};
use ec2_model::{Attachment, AttachmentStatus, ModelError, Region};
use rstest::fixture;

pub const SCENARIO_REGION: &str = "us-east-1";

#[derive(Debug, Default)]
pub struct AttachmentState {
    pub attachments: Vec<Attachment>,
    pub parsed: Option<Result<AttachmentStatus, ModelError>>,
    pub comparison: Option<Result<Ordering, ModelError>>,
}

#[derive(Debug, Default)]
pub struct AttachmentContext {
    pub state: RefCell<AttachmentState>,
}

#[fixture]
pub fn attachment_context() -> AttachmentContext {
    AttachmentContext::default()
}

pub fn scenario_region() -> Region {
    Region::new(SCENARIO_REGION).unwrap_or_else(|err| panic!("scenario region: {err}"))
}

pub fn attach_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 11, 8, 14, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("scenario timestamp out of range"))
}
