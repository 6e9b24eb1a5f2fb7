use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use rentx_domain::model::{Car, NewCar};
use rentx_domain::repository::CarRepository;
use rentx_types::{DomainError, Error};

use crate::sync::{generate_id, lock};

/// In-memory implementation of CarRepository
#[derive(Debug, Default)]
pub struct InMemoryCarRepository {
    cars: Mutex<HashMap<String, Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarRepository for InMemoryCarRepository {
    fn create(&self, car: NewCar) -> Result<Car, Error> {
        let mut cars = lock(&self.cars)?;
        if cars.values().any(|c| c.license_plate == car.license_plate) {
            return Err(DomainError::CarAlreadyExists.into());
        }

        let created = car.into_car(generate_id(), Utc::now());
        cars.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    fn find_by_id(&self, car_id: &str) -> Result<Option<Car>, Error> {
        Ok(lock(&self.cars)?.get(car_id).cloned())
    }

    fn find_by_license_plate(&self, plate: &str) -> Result<Option<Car>, Error> {
        Ok(lock(&self.cars)?
            .values()
            .find(|c| c.license_plate == plate)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Car>, Error> {
        let mut cars: Vec<_> = lock(&self.cars)?.values().cloned().collect();
        cars.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_car(name: &str, plate: &str) -> NewCar {
        NewCar {
            name: name.to_string(),
            description: "test".to_string(),
            brand: "test".to_string(),
            category_id: "123".to_string(),
            fine_amount: 40.0,
            daily_rate: 100.0,
            license_plate: plate.to_string(),
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let repo = InMemoryCarRepository::new();
        let car = repo.create(new_car("Audi", "ABC-1234")).unwrap();

        assert!(!car.id.is_empty());
        assert!(car.available);
        assert_eq!(repo.find_by_id(&car.id).unwrap(), Some(car.clone()));
        assert_eq!(repo.find_by_license_plate("ABC-1234").unwrap(), Some(car));
        assert!(repo.find_by_license_plate("XYZ-0000").unwrap().is_none());
    }

    #[test]
    fn test_create_rejects_duplicate_plate() {
        let repo = InMemoryCarRepository::new();
        repo.create(new_car("Audi", "ABC-1234")).unwrap();

        let err = repo.create(new_car("Volvo", "ABC-1234")).unwrap_err();
        assert_eq!(err.as_domain(), Some(DomainError::CarAlreadyExists));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_find_all_sorted_by_name() {
        let repo = InMemoryCarRepository::new();
        repo.create(new_car("Volvo", "V-1")).unwrap();
        repo.create(new_car("Audi", "A-1")).unwrap();

        let names: Vec<_> = repo.find_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Audi", "Volvo"]);
    }
}
