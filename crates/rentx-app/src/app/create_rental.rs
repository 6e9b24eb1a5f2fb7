//! Create Rental - opens a new rental for a user and a car
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. The user holds no open rental
//! 2. The car is not in an open rental
//! 3. The return date is at least `MINIMUM_RENTAL_HOURS` away
//!
//! The rental is written only after all three pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentx_domain::model::{NewRental, Rental, MINIMUM_RENTAL_HOURS};
use rentx_domain::provider::DateProvider;
use rentx_domain::repository::RentalRepository;
use rentx_types::{DomainError, Result};

/// Input of the create-rental use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRentalRequest {
    pub user_id: String,
    pub car_id: String,
    pub expected_return_date: DateTime<Utc>,
}

/// Opens rentals. Holds no state besides its collaborators.
pub struct CreateRentalUseCase<R, D> {
    rentals: R,
    date_provider: D,
}

impl<R, D> CreateRentalUseCase<R, D>
where
    R: RentalRepository,
    D: DateProvider,
{
    pub fn new(rentals: R, date_provider: D) -> Self {
        Self {
            rentals,
            date_provider,
        }
    }

    pub fn execute(&self, request: CreateRentalRequest) -> Result<Rental> {
        let CreateRentalRequest {
            user_id,
            car_id,
            expected_return_date,
        } = request;

        tracing::debug!(user_id = %user_id, "Checking open rentals for user");
        if self.rentals.find_open_by_user(&user_id)?.is_some() {
            return Err(reject(DomainError::UserHasOpenRental, &user_id, &car_id));
        }

        tracing::debug!(car_id = %car_id, "Checking open rentals for car");
        if self.rentals.find_open_by_car(&car_id)?.is_some() {
            return Err(reject(DomainError::CarUnavailable, &user_id, &car_id));
        }

        let now = self.date_provider.now();
        let hours = self
            .date_provider
            .hours_between(expected_return_date, now);
        tracing::debug!(hours, minimum = MINIMUM_RENTAL_HOURS, "Checking rental duration");
        if hours < MINIMUM_RENTAL_HOURS {
            return Err(reject(DomainError::InvalidReturnTime, &user_id, &car_id));
        }

        let rental = self.rentals.create(NewRental {
            car_id,
            user_id,
            start_date: now,
            expected_return_date,
        })?;

        tracing::info!(
            rental_id = %rental.id,
            user_id = %rental.user_id,
            car_id = %rental.car_id,
            "Rental created"
        );
        Ok(rental)
    }
}

fn reject(error: DomainError, user_id: &str, car_id: &str) -> rentx_types::Error {
    tracing::warn!(user_id, car_id, reason = %error, "Rental rejected");
    error.into()
}
