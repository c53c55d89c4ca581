//! Where the harness gets its distance matrices.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// Supplies a distance matrix for a requested number of locations.
///
/// The experiment harness only ever asks for matrices by size, so tests can
/// inject matrices in memory while the binary reads generated files.
///
/// # Examples
///
/// ```
/// use u_tsp::dataset::{InMemorySource, MatrixSource};
/// use u_tsp::distance::DistanceMatrix;
///
/// let mut source = InMemorySource::new();
/// source.insert(DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap());
///
/// assert_eq!(source.matrix(2).unwrap().size(), 2);
/// assert!(source.matrix(5).unwrap_err().is_missing_data());
/// ```
pub trait MatrixSource {
    /// Returns the matrix for `size` locations, or
    /// [`Error::DatasetNotFound`] when none is stored.
    fn matrix(&self, size: usize) -> Result<DistanceMatrix>;
}

/// Reads `sites_{size}.json` files from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Creates a source over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the datasets are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the dataset file for `size` locations.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(dataset_file_name(size))
    }
}

impl MatrixSource for DirectorySource {
    fn matrix(&self, size: usize) -> Result<DistanceMatrix> {
        let path = self.path_for(size);
        trace!(path = %path.display(), "loading dataset");
        if !path.is_file() {
            return Err(Error::DatasetNotFound {
                size,
                origin: path.display().to_string(),
            });
        }

        let matrix = super::Dataset::load(&path)?.matrix()?;
        if matrix.size() != size {
            return Err(Error::SizeMismatch {
                declared: size,
                actual: matrix.size(),
            });
        }
        if !matrix.is_symmetric(1e-9) {
            warn!(path = %path.display(), "distance matrix is not symmetric");
        }
        Ok(matrix)
    }
}

/// Matrices held in memory, keyed by their size.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    matrices: BTreeMap<usize, DistanceMatrix>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a matrix, replacing any previous one of the same size.
    pub fn insert(&mut self, matrix: DistanceMatrix) {
        self.matrices.insert(matrix.size(), matrix);
    }

    /// Sizes with a stored matrix, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.matrices.keys().copied()
    }
}

impl FromIterator<DistanceMatrix> for InMemorySource {
    fn from_iter<I: IntoIterator<Item = DistanceMatrix>>(iter: I) -> Self {
        let mut source = Self::new();
        for matrix in iter {
            source.insert(matrix);
        }
        source
    }
}

impl MatrixSource for InMemorySource {
    fn matrix(&self, size: usize) -> Result<DistanceMatrix> {
        self.matrices
            .get(&size)
            .cloned()
            .ok_or_else(|| Error::DatasetNotFound {
                size,
                origin: "in-memory source".to_string(),
            })
    }
}

/// File name used for the dataset of `size` locations.
pub fn dataset_file_name(size: usize) -> String {
    format!("sites_{size}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_in_memory_lookup() {
        let source: InMemorySource = vec![square()].into_iter().collect();
        assert_eq!(source.matrix(3).expect("stored"), square());
        assert_eq!(source.sizes().collect::<Vec<_>>(), vec![3]);
        assert!(matches!(
            source.matrix(4),
            Err(Error::DatasetNotFound { size: 4, .. })
        ));
    }

    #[test]
    fn test_directory_missing_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let source = DirectorySource::new(dir.path());
        let err = source.matrix(5).expect_err("no files");
        assert!(err.is_missing_data());
        assert!(err.to_string().contains("sites_5.json"));
    }

    #[test]
    fn test_directory_reads_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let dataset = Dataset {
            num_locations: 3,
            locations: Vec::new(),
            distances: vec![
                vec![0.0, 1.0, 2.0],
                vec![1.0, 0.0, 1.0],
                vec![2.0, 1.0, 0.0],
            ],
        };
        dataset.save(&dir.path().join("sites_3.json")).expect("written");

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.matrix(3).expect("readable"), square());
    }

    #[test]
    fn test_directory_wrong_size() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let dataset = Dataset {
            num_locations: 1,
            locations: Vec::new(),
            distances: vec![vec![0.0]],
        };
        dataset.save(&dir.path().join("sites_4.json")).expect("written");

        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.matrix(4),
            Err(Error::SizeMismatch {
                declared: 4,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_path_for() {
        let source = DirectorySource::new("data");
        assert_eq!(source.path_for(12), Path::new("data").join("sites_12.json"));
        assert_eq!(source.dir(), Path::new("data"));
    }
}
