//! Rental type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortest rental period a customer may book
pub const MINIMUM_RENTAL_HOURS: i64 = 24;

/// A rental of one car by one user.
///
/// At most one open rental exists per user and per car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: String,
    pub car_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
    /// Set when the car is returned
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rental {
    /// Whether the car is still checked out
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Fields supplied when opening a rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRental {
    pub car_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub expected_return_date: DateTime<Utc>,
}

impl NewRental {
    /// Build the stored record
    pub fn into_rental(self, id: String, created_at: DateTime<Utc>) -> Rental {
        Rental {
            id,
            car_id: self.car_id,
            user_id: self.user_id,
            start_date: self.start_date,
            expected_return_date: self.expected_return_date,
            end_date: None,
            total: None,
            created_at,
            updated_at: created_at,
        }
    }
}
