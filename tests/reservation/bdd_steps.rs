//! BDD step definitions for reservation behaviour.

use std::cmp::Ordering;

use ec2_model::{NaturalOrder, Reservation, RunningInstance};
use rstest_bdd_macros::{given, then, when};

use super::test_helpers::{ReservationContext, build_reservation, region};

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

#[given("a reservation \"{id}\" in region \"{region_token}\" with instances \"{ids}\"")]
fn first_reservation(
    reservation_context: &ReservationContext,
    id: String,
    region_token: String,
    ids: String,
) {
    reservation_context.state.borrow_mut().first = Some(build_reservation(&id, &region_token, &ids));
}

#[given("another reservation \"{id}\" in region \"{region_token}\" with instances \"{ids}\"")]
fn second_reservation(
    reservation_context: &ReservationContext,
    id: String,
    region_token: String,
    ids: String,
) {
    reservation_context.state.borrow_mut().second =
        Some(build_reservation(&id, &region_token, &ids));
}

#[given("a reservation builder in region \"{region_token}\" without instances")]
fn builder_without_instances(reservation_context: &ReservationContext, region_token: String) {
    reservation_context.state.borrow_mut().builder = Some(
        Reservation::builder()
            .region(region(&region_token))
            .group_ids(["default"]),
    );
}

#[given("a reservation builder in region \"{region_token}\" with an empty instance set")]
fn builder_with_empty_instances(reservation_context: &ReservationContext, region_token: String) {
    reservation_context.state.borrow_mut().builder = Some(
        Reservation::builder()
            .region(region(&region_token))
            .group_ids(["default"])
            .instances(Vec::<RunningInstance>::new()),
    );
}

#[given("a placeholder reservation without an id")]
fn placeholder_reservation(reservation_context: &ReservationContext) {
    let placeholder = Reservation::builder()
        .region(region("us-east-1"))
        .group_ids(Vec::<String>::new())
        .instances(Vec::<RunningInstance>::new())
        .build()
        .unwrap_or_else(|err| panic!("placeholder should build: {err}"));
    reservation_context.state.borrow_mut().first = Some(placeholder);
}

#[when("I build the reservation")]
fn build(reservation_context: &ReservationContext) -> Result<(), StepError> {
    let mut state = reservation_context.state.borrow_mut();
    let builder = state
        .builder
        .take()
        .ok_or_else(|| StepError::Assertion(String::from("missing builder")))?;
    state.built = Some(builder.build());
    Ok(())
}

#[when("I compare the placeholder with itself")]
fn compare_with_itself(reservation_context: &ReservationContext) -> Result<(), StepError> {
    let mut state = reservation_context.state.borrow_mut();
    let comparison = state
        .first
        .as_ref()
        .map(|placeholder| placeholder.try_cmp(placeholder))
        .ok_or_else(|| StepError::Assertion(String::from("missing placeholder")))?;
    state.comparison = Some(comparison);
    Ok(())
}

#[when("I compare the placeholder with a copy of itself")]
fn compare_with_copy(reservation_context: &ReservationContext) -> Result<(), StepError> {
    let mut state = reservation_context.state.borrow_mut();
    let comparison = state
        .first
        .as_ref()
        .map(|placeholder| placeholder.try_cmp(&placeholder.clone()))
        .ok_or_else(|| StepError::Assertion(String::from("missing placeholder")))?;
    state.comparison = Some(comparison);
    Ok(())
}

#[then("the reservations are equal")]
fn reservations_equal(reservation_context: &ReservationContext) -> Result<(), StepError> {
    let state = reservation_context.state.borrow();
    match (&state.first, &state.second) {
        (Some(first), Some(second)) if first == second => Ok(()),
        (first, second) => Err(StepError::Assertion(format!(
            "expected equal reservations, got {first:?} and {second:?}"
        ))),
    }
}

#[then("construction fails with \"{message}\"")]
fn construction_fails(
    reservation_context: &ReservationContext,
    message: String,
) -> Result<(), StepError> {
    match &reservation_context.state.borrow().built {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected failure '{message}', got {other:?}"
        ))),
    }
}

#[then("construction succeeds")]
fn construction_succeeds(reservation_context: &ReservationContext) -> Result<(), StepError> {
    match &reservation_context.state.borrow().built {
        Some(Ok(_)) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected a reservation, got {other:?}"
        ))),
    }
}

#[then("the comparison is equal")]
fn comparison_equal(reservation_context: &ReservationContext) -> Result<(), StepError> {
    match &reservation_context.state.borrow().comparison {
        Some(Ok(Ordering::Equal)) => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected Equal, got {other:?}"
        ))),
    }
}

#[then("the comparison fails with \"{message}\"")]
fn comparison_fails(
    reservation_context: &ReservationContext,
    message: String,
) -> Result<(), StepError> {
    match &reservation_context.state.borrow().comparison {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected failure '{message}', got {other:?}"
        ))),
    }
}
