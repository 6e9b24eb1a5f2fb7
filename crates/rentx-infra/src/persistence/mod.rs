//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.
//! Writers hold an exclusive OS lock on a sibling `.lock` file for the whole
//! read, check, insert and write sequence, so separate handles and separate
//! processes on one store directory see each other's records.

mod file_car_repo;
mod file_rental_repo;

pub use file_car_repo::FileCarRepository;
pub use file_rental_repo::FileRentalRepository;

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use fd_lock::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use rentx_types::Result;

/// Load a JSON map from disk, or an empty map when the file does not exist
fn load_map<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Write a JSON map to disk through a temporary file.
///
/// The temporary file is flushed and synced before it replaces the store.
fn save_map<T: Serialize>(path: &Path, map: &HashMap<String, T>) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, map)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Run `f` while holding the exclusive lock on `lock_path`
fn with_exclusive_lock<T>(lock_path: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(lock_path)?;
    let mut lock = RwLock::new(file);
    let _guard = lock.write()?;
    f()
}
