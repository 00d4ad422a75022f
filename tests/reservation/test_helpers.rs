//! Shared fixtures and helpers for reservation BDD scenarios.

use std::cell::RefCell;
use std::cmp::Ordering;

use ec2_model::{ModelError, Region, Reservation, ReservationBuilder, RunningInstance};
use rstest::fixture;

#[derive(Debug, Default)]
pub struct ReservationState {
    pub first: Option<Reservation>,
    pub second: Option<Reservation>,
    pub builder: Option<ReservationBuilder>,
    pub built: Option<Result<Reservation, ModelError>>,
    pub comparison: Option<Result<Ordering, ModelError>>,
}

#[derive(Debug, Default)]
pub struct ReservationContext {
    pub state: RefCell<ReservationState>,
}

#[fixture]
pub fn reservation_context() -> ReservationContext {
    ReservationContext::default()
}

pub fn region(token: &str) -> Region {
    Region::new(token).unwrap_or_else(|err| panic!("scenario region '{token}': {err}"))
}

pub fn instances(ids: &str) -> Vec<RunningInstance> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(RunningInstance::new)
        .collect()
}

pub fn build_reservation(id: &str, region_token: &str, instance_ids: &str) -> Reservation {
    Reservation::builder()
        .region(region(region_token))
        .group_ids(["default"])
        .instances(instances(instance_ids))
        .reservation_id(id)
        .build()
        .unwrap_or_else(|err| panic!("scenario reservation should build: {err}"))
}
