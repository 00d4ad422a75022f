//! Natural-key ordering shared by attachments and reservations.
//!
//! Both entities order by a single field that the provider may omit, so the
//! comparison is fallible and neither type implements [`Ord`]. The helpers
//! here sort slices with such a comparator and surface the first failure.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::attachment::Attachment;
use crate::error::ModelError;
use crate::reservation::Reservation;

/// Entities ordered by a possibly absent natural key.
pub trait NaturalOrder {
    /// Compares two entities by their natural key.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] when the key is absent on a side that has to
    /// be inspected.
    fn try_cmp(&self, other: &Self) -> Result<Ordering, ModelError>;

    /// Returns `true` when the natural key is populated.
    fn has_natural_key(&self) -> bool;
}

/// Sorts a slice with a fallible comparator.
///
/// Comparisons after the first failure report `Equal`; the slice is then left
/// in an unspecified permutation and the failure is returned.
///
/// # Errors
///
/// Returns the first error produced by `compare`.
pub fn try_sort_by<T, F>(items: &mut [T], mut compare: F) -> Result<(), ModelError>
where
    F: FnMut(&T, &T) -> Result<Ordering, ModelError>,
{
    let mut failure = None;
    items.sort_by(|left, right| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        compare(left, right).unwrap_or_else(|err| {
            failure = Some(err);
            Ordering::Equal
        })
    });
    failure.map_or(Ok(()), Err)
}

/// Sorts attachments by attach time.
///
/// # Errors
///
/// Returns [`ModelError::NullTimestamp`] when a compared attachment has no
/// attach time.
pub fn sort_attachments(attachments: &mut [Attachment]) -> Result<(), ModelError> {
    try_sort_by(attachments, Attachment::try_cmp)
}

/// Sorts reservations, or shared handles to them, by reservation id.
///
/// Handles that point at the same reservation compare equal without
/// consulting the id, so a placeholder shared through `Arc` may appear more
/// than once.
///
/// # Errors
///
/// Returns [`ModelError::MissingReservationId`] when two distinct
/// reservations are compared and either lacks an id.
pub fn sort_reservations<R>(reservations: &mut [R]) -> Result<(), ModelError>
where
    R: Borrow<Reservation>,
{
    try_sort_by(reservations, |left, right| {
        left.borrow().try_cmp(right.borrow())
    })
}

/// Drops entities without a natural key, returning how many were removed.
pub fn retain_complete<T: NaturalOrder>(items: &mut Vec<T>) -> usize {
    let before = items.len();
    items.retain(NaturalOrder::has_natural_key);
    before - items.len()
}
