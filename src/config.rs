//! Fixed city catalog: dataset file names and per-city column capabilities.
//!
//! Built once at startup from the data directory and passed by reference to
//! the loader. Nothing in here changes after construction.

use std::path::{Path, PathBuf};

use crate::filters::City;

/// Optional columns a city's dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitySchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl CitySchema {
    /// Schema for datasets that only carry the required columns.
    pub const BASIC: Self = Self {
        has_gender: false,
        has_birth_year: false,
    };

    /// Schema for datasets that also carry `Gender` and `Birth Year`.
    pub const DEMOGRAPHIC: Self = Self {
        has_gender: true,
        has_birth_year: true,
    };
}

/// City → (file name, schema). Three entries, never mutated.
static CITY_DATA: &[(City, &str, CitySchema)] = &[
    (City::Chicago, "chicago.csv", CitySchema::DEMOGRAPHIC),
    (City::NewYorkCity, "new_york_city.csv", CitySchema::DEMOGRAPHIC),
    (City::Washington, "washington.csv", CitySchema::BASIC),
];

/// Resolved location and schema for one city's dataset.
#[derive(Debug, Clone)]
pub struct CityDataset {
    pub city: City,
    pub path: PathBuf,
    pub schema: CitySchema,
}

/// The city → dataset mapping rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    data_dir: PathBuf,
}

impl Catalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the dataset backing `city`.
    ///
    /// Every [`City`] has an entry, so this only fails if the static table
    /// and the enum drift apart.
    pub fn dataset(&self, city: City) -> anyhow::Result<CityDataset> {
        let (_, file_name, schema) = CITY_DATA
            .iter()
            .find(|(c, _, _)| *c == city)
            .ok_or_else(|| anyhow::anyhow!("no dataset configured for city '{}'", city))?;

        Ok(CityDataset {
            city,
            path: self.data_dir.join(file_name),
            schema: *schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_city_has_a_dataset() {
        let catalog = Catalog::new("data");
        for city in City::ALL {
            let dataset = catalog.dataset(*city).unwrap();
            assert_eq!(dataset.city, *city);
            assert!(dataset.path.starts_with("data"));
        }
    }

    #[test]
    fn test_file_names() {
        let catalog = Catalog::new("/srv/bikeshare");
        assert_eq!(
            catalog.dataset(City::NewYorkCity).unwrap().path,
            PathBuf::from("/srv/bikeshare/new_york_city.csv")
        );
        assert_eq!(
            catalog.dataset(City::Washington).unwrap().path,
            PathBuf::from("/srv/bikeshare/washington.csv")
        );
    }

    #[test]
    fn test_washington_lacks_demographics() {
        let catalog = Catalog::new(".");
        assert_eq!(
            catalog.dataset(City::Washington).unwrap().schema,
            CitySchema::BASIC
        );
        assert!(catalog.dataset(City::Chicago).unwrap().schema.has_gender);
        assert!(catalog.dataset(City::NewYorkCity).unwrap().schema.has_birth_year);
    }
}
