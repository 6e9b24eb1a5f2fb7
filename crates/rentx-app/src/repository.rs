//! Repository adapters for persistence layer

use std::path::PathBuf;

use rentx_infra::persistence::{FileCarRepository, FileRentalRepository};
use rentx_types::Result;

use crate::config::Config;

/// Open file-based rental repository
pub fn open_rental_repo(config: &Config) -> Result<FileRentalRepository> {
    open_rental_repo_at(config.store_dir()?)
}

/// Open file-based car repository
pub fn open_car_repo(config: &Config) -> Result<FileCarRepository> {
    open_car_repo_at(config.store_dir()?)
}

/// Open file-based rental repository at a custom directory
pub fn open_rental_repo_at(store_dir: PathBuf) -> Result<FileRentalRepository> {
    FileRentalRepository::open(store_dir)
}

/// Open file-based car repository at a custom directory
pub fn open_car_repo_at(store_dir: PathBuf) -> Result<FileCarRepository> {
    FileCarRepository::open(store_dir)
}
