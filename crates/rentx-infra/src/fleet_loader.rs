//! Fleet data loader from TOML files
//!
//! ```toml
//! [[cars]]
//! name = "Fusca"
//! description = "Classic hatch"
//! brand = "VW"
//! category_id = "hatch"
//! fine_amount = 40.0
//! daily_rate = 100.0
//! license_plate = "ABC-1234"
//! ```

use std::fs;
use std::path::Path;

use rentx_domain::model::NewCar;
use rentx_types::{ConfigError, Error, Result};
use serde::Deserialize;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(default)]
    cars: Vec<NewCar>,
}

/// Load car definitions from a TOML file
pub fn load_fleet_from_file(path: &Path) -> Result<Vec<NewCar>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read fleet file {}: {}",
            path.display(),
            e
        )))
    })?;

    load_fleet_from_str(&content)
}

/// Load car definitions from a TOML string
pub fn load_fleet_from_str(toml_content: &str) -> Result<Vec<NewCar>> {
    let fleet: FleetFile = toml::from_str(toml_content)?;

    if let Some(car) = fleet.cars.iter().find(|c| c.license_plate.trim().is_empty()) {
        return Err(Error::InvalidInput(format!(
            "car '{}' has no license plate",
            car.name
        )));
    }

    Ok(fleet.cars)
}
