//! File-based rental repository implementation

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use rentx_domain::model::{NewRental, Rental};
use rentx_domain::repository::RentalRepository;
use rentx_types::{Error, Result};

use super::{load_map, save_map, with_exclusive_lock};
use crate::sync::{check_open_conflicts, find_open, generate_id, rentals_of_user};

/// File-based implementation of RentalRepository
///
/// Stores rentals in a JSON file on disk. Every call reads the file, so
/// rentals written through another handle are always visible.
pub struct FileRentalRepository {
    store_path: PathBuf,
    lock_path: PathBuf,
}

impl FileRentalRepository {
    /// Create or load a rental repository
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let repo = Self {
            store_path: store_dir.join("rentals.json"),
            lock_path: store_dir.join("rentals.lock"),
        };

        let count = repo.load()?.len();
        tracing::debug!(path = %repo.store_path.display(), count, "Opened rental store");
        Ok(repo)
    }

    fn load(&self) -> Result<HashMap<String, Rental>> {
        load_map(&self.store_path)
    }

    /// Get total rental count
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}

impl RentalRepository for FileRentalRepository {
    fn create(&self, rental: NewRental) -> std::result::Result<Rental, Error> {
        with_exclusive_lock(&self.lock_path, || {
            let mut rentals = self.load()?;
            check_open_conflicts(&rentals, &rental)?;

            let created = rental.into_rental(generate_id(), Utc::now());
            rentals.insert(created.id.clone(), created.clone());
            save_map(&self.store_path, &rentals)?;
            Ok(created)
        })
    }

    fn find_open_by_user(&self, user_id: &str) -> std::result::Result<Option<Rental>, Error> {
        let rentals = self.load()?;
        Ok(find_open(&rentals, |r| r.user_id == user_id).cloned())
    }

    fn find_open_by_car(&self, car_id: &str) -> std::result::Result<Option<Rental>, Error> {
        let rentals = self.load()?;
        Ok(find_open(&rentals, |r| r.car_id == car_id).cloned())
    }

    fn find_by_user(&self, user_id: &str) -> std::result::Result<Vec<Rental>, Error> {
        let rentals = self.load()?;
        Ok(rentals_of_user(&rentals, user_id))
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Rental>, Error> {
        Ok(self.load()?.remove(id))
    }
}
