//! BDD scenarios for reservation snapshots.

use rstest_bdd_macros::scenario;

use super::test_helpers::{ReservationContext, reservation_context};

#[scenario(
    path = "tests/features/reservation.feature",
    name = "Reservations with reordered instances are equal"
)]
fn scenario_reordered_instances_equal(reservation_context: ReservationContext) {
    drop(reservation_context);
}

#[scenario(
    path = "tests/features/reservation.feature",
    name = "A reservation without instances cannot be built"
)]
fn scenario_missing_instances(reservation_context: ReservationContext) {
    drop(reservation_context);
}

#[scenario(
    path = "tests/features/reservation.feature",
    name = "An empty instance set is accepted"
)]
fn scenario_empty_instances(reservation_context: ReservationContext) {
    drop(reservation_context);
}

#[scenario(
    path = "tests/features/reservation.feature",
    name = "A placeholder compares equal to itself without an id"
)]
fn scenario_placeholder_identity(reservation_context: ReservationContext) {
    drop(reservation_context);
}

#[scenario(
    path = "tests/features/reservation.feature",
    name = "Distinct reservations without ids cannot be ordered"
)]
fn scenario_distinct_placeholders(reservation_context: ReservationContext) {
    drop(reservation_context);
}
