use crate::models::{Coordinate, Provider};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the provider dataset
///
/// Unlike geocoding errors these are fatal: the service cannot run without
/// its dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset missing required column '{0}'")]
    MissingColumn(&'static str),
}

const NAME_COLUMN: &str = "Providers";
const SPECIALTY_COLUMN: &str = "Specialty";
const ADDRESS_COLUMN: &str = "Address";
const LATITUDE_COLUMN: &str = "Latitude";
const LONGITUDE_COLUMN: &str = "Longitude";

/// Immutable in-memory provider dataset
///
/// Loaded once at startup from the source CSV. Rows keep their source order,
/// which is the identity and tie-break order used by the ranker. Rows with
/// missing or unparseable coordinates still load; they only drop out of
/// distance-ranked queries.
pub struct ProviderStore {
    providers: Vec<Provider>,
}

impl ProviderStore {
    /// Load providers from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;

        let headers = reader.headers()?.clone();

        let name_idx = header_index(&headers, NAME_COLUMN)?;
        let specialty_idx = header_index(&headers, SPECIALTY_COLUMN)?;
        let address_idx = header_index(&headers, ADDRESS_COLUMN)?;
        // Coordinate columns may be absent entirely; the dataset is then only
        // usable in alphabetical mode
        let lat_idx = headers.iter().position(|h| h.trim() == LATITUDE_COLUMN);
        let lon_idx = headers.iter().position(|h| h.trim() == LONGITUDE_COLUMN);

        let known: Vec<usize> = [Some(name_idx), Some(specialty_idx), Some(address_idx), lat_idx, lon_idx]
            .into_iter()
            .flatten()
            .collect();

        let mut providers = Vec::new();
        let mut without_coordinates = 0;

        for record in reader.records() {
            let record = record?;

            let mut extra = BTreeMap::new();
            for (idx, value) in record.iter().enumerate() {
                if known.contains(&idx) {
                    continue;
                }
                if let Some(header) = headers.get(idx) {
                    extra.insert(header.trim().to_string(), value.trim().to_string());
                }
            }

            let provider = Provider {
                name: field(&record, name_idx),
                specialty: field(&record, specialty_idx),
                address: field(&record, address_idx),
                coordinate: parse_coordinate(&record, lat_idx, lon_idx),
                extra,
            };

            if !provider.has_coordinate() {
                without_coordinates += 1;
            }

            providers.push(provider);
        }

        tracing::info!(
            "Loaded {} providers from {} ({} without usable coordinates)",
            providers.len(),
            path.as_ref().display(),
            without_coordinates
        );

        Ok(Self { providers })
    }

    /// Build a store from already-parsed records (tests, fixtures)
    pub fn from_providers(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Snapshot of all records in dataset order
    pub fn providers(&self) -> Vec<Provider> {
        self.providers.clone()
    }

    /// Borrow the records without cloning
    pub fn all(&self) -> &[Provider] {
        &self.providers
    }

    /// Distinct specialty values present in the dataset, sorted
    pub fn distinct_specialties(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .providers
            .iter()
            .map(|p| p.specialty.as_str())
            .filter(|s| !s.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn header_index(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(DatasetError::MissingColumn(name))
}

fn field(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or_default().trim().to_string()
}

/// Parse a coordinate from the latitude/longitude columns
///
/// The source dataset writes 0.0/0.0 for rows whose upstream geocoding
/// failed, so the origin is treated as absent along with blank or
/// unparseable values.
fn parse_coordinate(
    record: &csv::StringRecord,
    lat_idx: Option<usize>,
    lon_idx: Option<usize>,
) -> Option<Coordinate> {
    let lat: f64 = record.get(lat_idx?)?.trim().parse().ok()?;
    let lon: f64 = record.get(lon_idx?)?.trim().parse().ok()?;

    if lat == 0.0 && lon == 0.0 {
        return None;
    }

    Some(Coordinate::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "providers_test_{}_{}.csv",
            std::process::id(),
            contents.len()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_basic_csv() {
        let path = write_temp_csv(
            "Providers,Specialty,Address,Latitude,Longitude\n\
             Ann Lee,Cardiology,1 First Ave,40.0,-73.0\n\
             Bob Chen,Dermatology,2 Second Ave,40.1,-73.1\n",
        );

        let store = ProviderStore::from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "Ann Lee");
        assert_eq!(store.all()[0].coordinate.unwrap().latitude, 40.0);
    }

    #[test]
    fn test_unparseable_coordinates_load_without_coordinate() {
        let path = write_temp_csv(
            "Providers,Specialty,Address,Latitude,Longitude\n\
             Ann Lee,Cardiology,1 First Ave,not-a-number,-73.0\n\
             Bob Chen,Dermatology,2 Second Ave,,\n",
        );

        let store = ProviderStore::from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.len(), 2);
        assert!(store.all().iter().all(|p| p.coordinate.is_none()));
    }

    #[test]
    fn test_zero_zero_treated_as_absent() {
        let path = write_temp_csv(
            "Providers,Specialty,Address,Latitude,Longitude\n\
             Ann Lee,Cardiology,1 First Ave,0.0,0.0\n",
        );

        let store = ProviderStore::from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(store.all()[0].coordinate.is_none());
    }

    #[test]
    fn test_passthrough_columns_preserved() {
        let path = write_temp_csv(
            "Providers,Specialty,Address,Latitude,Longitude,Phone\n\
             Ann Lee,Cardiology,1 First Ave,40.0,-73.0,555-1234\n",
        );

        let store = ProviderStore::from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(store.all()[0].extra.get("Phone").unwrap(), "555-1234");
    }

    #[test]
    fn test_missing_required_column() {
        let path = write_temp_csv("Name,Specialty,Address\nAnn,Cardiology,1 First Ave\n");

        let result = ProviderStore::from_csv(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn("Providers"))
        ));
    }

    #[test]
    fn test_distinct_specialties_sorted() {
        let store = ProviderStore::from_providers(vec![
            Provider {
                name: "B".into(),
                specialty: "Dermatology".into(),
                address: String::new(),
                coordinate: None,
                extra: Default::default(),
            },
            Provider {
                name: "A".into(),
                specialty: "Cardiology".into(),
                address: String::new(),
                coordinate: None,
                extra: Default::default(),
            },
            Provider {
                name: "C".into(),
                specialty: "Cardiology".into(),
                address: String::new(),
                coordinate: None,
                extra: Default::default(),
            },
        ]);

        assert_eq!(
            store.distinct_specialties(),
            vec!["Cardiology".to_string(), "Dermatology".to_string()]
        );
    }
}
