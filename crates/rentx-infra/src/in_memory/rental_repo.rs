use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use rentx_domain::model::{NewRental, Rental};
use rentx_domain::repository::RentalRepository;
use rentx_types::{Error, Result};

use crate::sync::{check_open_conflicts, find_open, generate_id, lock, rentals_of_user};

/// In-memory implementation of RentalRepository
#[derive(Debug, Default)]
pub struct InMemoryRentalRepository {
    rentals: Mutex<HashMap<String, Rental>>,
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total rental count
    pub fn count(&self) -> Result<usize> {
        Ok(lock(&self.rentals)?.len())
    }
}

impl RentalRepository for InMemoryRentalRepository {
    fn create(&self, rental: NewRental) -> std::result::Result<Rental, Error> {
        let mut rentals = lock(&self.rentals)?;
        check_open_conflicts(&rentals, &rental)?;

        let created = rental.into_rental(generate_id(), Utc::now());
        rentals.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    fn find_open_by_user(&self, user_id: &str) -> std::result::Result<Option<Rental>, Error> {
        let rentals = lock(&self.rentals)?;
        Ok(find_open(&rentals, |r| r.user_id == user_id).cloned())
    }

    fn find_open_by_car(&self, car_id: &str) -> std::result::Result<Option<Rental>, Error> {
        let rentals = lock(&self.rentals)?;
        Ok(find_open(&rentals, |r| r.car_id == car_id).cloned())
    }

    fn find_by_user(&self, user_id: &str) -> std::result::Result<Vec<Rental>, Error> {
        let rentals = lock(&self.rentals)?;
        Ok(rentals_of_user(&rentals, user_id))
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Rental>, Error> {
        Ok(lock(&self.rentals)?.get(id).cloned())
    }
}
