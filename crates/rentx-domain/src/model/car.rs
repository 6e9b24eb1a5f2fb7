//! Car type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A car in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category_id: String,
    /// Charged per day of delay
    pub fine_amount: f64,
    pub daily_rate: f64,
    pub license_plate: String,
    #[serde(default = "default_available")]
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

fn default_available() -> bool {
    true
}

/// Fields supplied when registering a car; the store assigns the rest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category_id: String,
    pub fine_amount: f64,
    pub daily_rate: f64,
    pub license_plate: String,
}

impl NewCar {
    /// Build the stored record
    pub fn into_car(self, id: String, created_at: DateTime<Utc>) -> Car {
        Car {
            id,
            name: self.name,
            description: self.description,
            brand: self.brand,
            category_id: self.category_id,
            fine_amount: self.fine_amount,
            daily_rate: self.daily_rate,
            license_plate: self.license_plate,
            available: true,
            created_at,
        }
    }
}
