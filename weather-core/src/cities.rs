use std::{fs, path::Path};

use crate::{error::CityDataError, model::City};

/// Load the city dataset from a JSON file. The list must not be empty.
pub fn load_cities(path: &Path) -> Result<Vec<City>, CityDataError> {
    let contents = fs::read_to_string(path).map_err(|source| CityDataError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let cities = parse_cities(&contents)?;
    log::info!("loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

pub fn parse_cities(json: &str) -> Result<Vec<City>, CityDataError> {
    let cities: Vec<City> = serde_json::from_str(json)?;
    if cities.is_empty() {
        return Err(CityDataError::Empty);
    }
    Ok(cities)
}
