//! Shared helpers for the mutex-guarded stores

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rentx_domain::model::{NewRental, Rental};
use rentx_types::{DomainError, Error, Result};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| Error::Store("store lock poisoned".to_string()))
}

/// Reject a new rental whose user or car already holds an open rental.
///
/// Must run under the same lock as the insert that follows it.
pub(crate) fn check_open_conflicts(
    rentals: &HashMap<String, Rental>,
    rental: &NewRental,
) -> Result<()> {
    let open = || rentals.values().filter(|r| r.is_open());

    if open().any(|r| r.user_id == rental.user_id) {
        return Err(DomainError::UserHasOpenRental.into());
    }
    if open().any(|r| r.car_id == rental.car_id) {
        return Err(DomainError::CarUnavailable.into());
    }
    Ok(())
}

pub(crate) fn find_open<'a>(
    rentals: &'a HashMap<String, Rental>,
    matches: impl Fn(&Rental) -> bool,
) -> Option<&'a Rental> {
    rentals.values().find(|r| r.is_open() && matches(r))
}

pub(crate) fn rentals_of_user(rentals: &HashMap<String, Rental>, user_id: &str) -> Vec<Rental> {
    let mut found: Vec<_> = rentals
        .values()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect();
    found.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    found
}

pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
