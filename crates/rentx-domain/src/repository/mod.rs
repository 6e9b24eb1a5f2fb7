//! Repository trait definitions for data persistence

use crate::model::{Car, NewCar, NewRental, Rental};
use rentx_types::Error;

/// Repository for rentals
pub trait RentalRepository: Send + Sync {
    /// Persist a new open rental and return the stored record.
    ///
    /// Check and insert are atomic: fails with
    /// `DomainError::UserHasOpenRental` or `DomainError::CarUnavailable`
    /// when an open rental already holds the user or the car.
    fn create(&self, rental: NewRental) -> Result<Rental, Error>;

    /// Find the open rental of a user
    fn find_open_by_user(&self, user_id: &str) -> Result<Option<Rental>, Error>;

    /// Find the open rental of a car
    fn find_open_by_car(&self, car_id: &str) -> Result<Option<Rental>, Error>;

    /// Find all rentals of a user, newest first
    fn find_by_user(&self, user_id: &str) -> Result<Vec<Rental>, Error>;

    /// Find a rental by its ID
    fn find_by_id(&self, id: &str) -> Result<Option<Rental>, Error>;
}

/// Repository for cars
pub trait CarRepository: Send + Sync {
    /// Persist a new car and return the stored record.
    ///
    /// Check and insert are atomic: fails with
    /// `DomainError::CarAlreadyExists` when the license plate is taken.
    fn create(&self, car: NewCar) -> Result<Car, Error>;

    /// Find a car by its ID
    fn find_by_id(&self, car_id: &str) -> Result<Option<Car>, Error>;

    /// Find a car by license plate
    fn find_by_license_plate(&self, plate: &str) -> Result<Option<Car>, Error>;

    /// Find all cars, sorted by name
    fn find_all(&self) -> Result<Vec<Car>, Error>;
}

impl<T: RentalRepository + ?Sized> RentalRepository for std::sync::Arc<T> {
    fn create(&self, rental: NewRental) -> Result<Rental, Error> {
        (**self).create(rental)
    }

    fn find_open_by_user(&self, user_id: &str) -> Result<Option<Rental>, Error> {
        (**self).find_open_by_user(user_id)
    }

    fn find_open_by_car(&self, car_id: &str) -> Result<Option<Rental>, Error> {
        (**self).find_open_by_car(car_id)
    }

    fn find_by_user(&self, user_id: &str) -> Result<Vec<Rental>, Error> {
        (**self).find_by_user(user_id)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Rental>, Error> {
        (**self).find_by_id(id)
    }
}

impl<T: CarRepository + ?Sized> CarRepository for std::sync::Arc<T> {
    fn create(&self, car: NewCar) -> Result<Car, Error> {
        (**self).create(car)
    }

    fn find_by_id(&self, car_id: &str) -> Result<Option<Car>, Error> {
        (**self).find_by_id(car_id)
    }

    fn find_by_license_plate(&self, plate: &str) -> Result<Option<Car>, Error> {
        (**self).find_by_license_plate(plate)
    }

    fn find_all(&self) -> Result<Vec<Car>, Error> {
        (**self).find_all()
    }
}
