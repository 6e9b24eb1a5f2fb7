//! Register Car - adds cars to the fleet

use rentx_domain::model::{Car, NewCar};
use rentx_domain::repository::CarRepository;
use rentx_types::{DomainError, Error, Result};

/// Outcome of a bulk fleet import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    /// License plates already registered
    pub skipped: Vec<String>,
}

pub struct RegisterCarUseCase<C> {
    cars: C,
}

impl<C: CarRepository> RegisterCarUseCase<C> {
    pub fn new(cars: C) -> Self {
        Self { cars }
    }

    /// Register one car; the license plate must be unused
    pub fn execute(&self, car: NewCar) -> Result<Car> {
        if self.cars.find_by_license_plate(&car.license_plate)?.is_some() {
            tracing::warn!(license_plate = %car.license_plate, "Car already registered");
            return Err(DomainError::CarAlreadyExists.into());
        }

        let car = self.cars.create(car)?;
        tracing::info!(car_id = %car.id, license_plate = %car.license_plate, "Car registered");
        Ok(car)
    }

    /// Register every car, skipping plates that already exist
    pub fn import(&self, cars: Vec<NewCar>) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        for car in cars {
            let plate = car.license_plate.clone();
            match self.execute(car) {
                Ok(_) => summary.created += 1,
                Err(Error::Domain(DomainError::CarAlreadyExists)) => summary.skipped.push(plate),
                Err(e) => return Err(e),
            }
        }
        Ok(summary)
    }
}
