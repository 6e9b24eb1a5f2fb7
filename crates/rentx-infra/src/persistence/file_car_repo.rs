//! File-based car repository implementation

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use rentx_domain::model::{Car, NewCar};
use rentx_domain::repository::CarRepository;
use rentx_types::{DomainError, Error, Result};

use super::{load_map, save_map, with_exclusive_lock};
use crate::sync::generate_id;

/// File-based implementation of CarRepository
///
/// Stores cars in a JSON file on disk.
pub struct FileCarRepository {
    store_path: PathBuf,
    lock_path: PathBuf,
}

impl FileCarRepository {
    /// Create or load a car repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let repo = Self {
            store_path: store_dir.join("cars.json"),
            lock_path: store_dir.join("cars.lock"),
        };
        repo.load()?;
        Ok(repo)
    }

    fn load(&self) -> Result<HashMap<String, Car>> {
        load_map(&self.store_path)
    }

    /// Get total car count
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}

impl CarRepository for FileCarRepository {
    fn create(&self, car: NewCar) -> std::result::Result<Car, Error> {
        with_exclusive_lock(&self.lock_path, || {
            let mut cars = self.load()?;
            if cars.values().any(|c| c.license_plate == car.license_plate) {
                return Err(DomainError::CarAlreadyExists.into());
            }

            let created = car.into_car(generate_id(), Utc::now());
            cars.insert(created.id.clone(), created.clone());
            save_map(&self.store_path, &cars)?;
            Ok(created)
        })
    }

    fn find_by_id(&self, car_id: &str) -> std::result::Result<Option<Car>, Error> {
        Ok(self.load()?.remove(car_id))
    }

    fn find_by_license_plate(&self, plate: &str) -> std::result::Result<Option<Car>, Error> {
        Ok(self
            .load()?
            .into_values()
            .find(|c| c.license_plate == plate))
    }

    fn find_all(&self) -> std::result::Result<Vec<Car>, Error> {
        let mut cars: Vec<_> = self.load()?.into_values().collect();
        cars.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cars)
    }
}
