//! Domain model types

pub mod car;
pub mod rental;

pub use car::{Car, NewCar};
pub use rental::{NewRental, Rental, MINIMUM_RENTAL_HOURS};
