//! On-disk dataset record.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Location;

/// A generated set of sites with their pairwise distances.
///
/// Serialized as JSON:
///
/// ```json
/// { "num_locations": 2,
///   "locations": [ { "id": 0, "name": "Hospital 1", "x": 1.0, "y": 2.0 }, ... ],
///   "distances": [[0, 3.5], [3.5, 0]] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Declared number of sites.
    pub num_locations: usize,
    /// Site metadata; solvers ignore it.
    pub locations: Vec<Location>,
    /// Row-major N×N distances.
    pub distances: Vec<Vec<f64>>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::dataset::Dataset;
    ///
    /// let json = r#"{
    ///     "num_locations": 2,
    ///     "locations": [
    ///         {"id": 0, "name": "Hospital 1", "x": 0.0, "y": 0.0},
    ///         {"id": 1, "name": "Fire Station 2", "x": 3.0, "y": 4.0}
    ///     ],
    ///     "distances": [[0, 5.0], [5.0, 0]]
    /// }"#;
    /// let dataset = Dataset::from_json_str(json).unwrap();
    /// let dm = dataset.matrix().unwrap();
    /// assert_eq!(dm.get(0, 1), 5.0);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a dataset from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Writes the dataset as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Builds the validated distance matrix, checking it against `num_locations`.
    pub fn matrix(&self) -> Result<DistanceMatrix> {
        if self.distances.len() != self.num_locations {
            return Err(Error::SizeMismatch {
                declared: self.num_locations,
                actual: self.distances.len(),
            });
        }
        DistanceMatrix::from_rows(self.distances.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "num_locations": 3,
        "locations": [
            {"id": 0, "name": "Hospital 1", "x": 0.0, "y": 0.0},
            {"id": 1, "name": "Fire Station 2", "x": 3.0, "y": 4.0},
            {"id": 2, "name": "Police Station 3", "x": 0.0, "y": 8.0}
        ],
        "distances": [[0, 5.0, 8.0], [5.0, 0, 5.0], [8.0, 5.0, 0]]
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset = Dataset::from_json_str(SAMPLE).expect("valid json");
        assert_eq!(dataset.num_locations, 3);
        assert_eq!(dataset.locations[1].name(), "Fire Station 2");
        let dm = dataset.matrix().expect("valid matrix");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(2, 0), 8.0);
    }

    #[test]
    fn test_size_mismatch() {
        let mut dataset = Dataset::from_json_str(SAMPLE).expect("valid json");
        dataset.num_locations = 4;
        assert!(matches!(
            dataset.matrix(),
            Err(Error::SizeMismatch {
                declared: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Dataset::from_json_str("{\"num_locations\": 3"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("sites_3.json");
        let dataset = Dataset::from_json_str(SAMPLE).expect("valid json");
        dataset.save(&path).expect("written");
        let loaded = Dataset::load(&path).expect("readable");
        assert_eq!(loaded, dataset);
    }
}
