//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Construction validates the shape and every entry: the matrix must be
/// non-empty and square, distances must be finite and non-negative, and the
/// diagonal must be zero. Symmetry is assumed for Euclidean inputs but not
/// enforced; see [`DistanceMatrix::is_symmetric`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new(0, "Hospital 1", 0.0, 0.0),
///     Location::new(1, "Fire Station 2", 3.0, 4.0),
///     Location::new(2, "Police Station 3", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from location coordinates.
    pub fn from_locations(locations: &[Location]) -> Result<Self> {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyMatrix);
        }
        if data.len() != size * size {
            return Err(Error::WrongLength {
                size,
                len: data.len(),
                expected: size * size,
            });
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Creates a distance matrix from nested rows, as stored in datasets.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
    /// assert_eq!(dm.get(1, 0), 2.0);
    ///
    /// assert!(DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        Self::from_data(size, data)
    }

    fn validate(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistance { from, to, value });
                }
            }
            let value = self.get(from, from);
            if value != 0.0 {
                return Err(Error::NonZeroDiagonal { index: from, value });
            }
        }
        Ok(())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Fails with [`Error::StartOutOfRange`] unless `start` names a location.
    pub fn check_start(&self, start: usize) -> Result<()> {
        if start >= self.size {
            return Err(Error::StartOutOfRange {
                start,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Length of the closed tour visiting `order` and returning to its first entry.
    ///
    /// An empty order has length zero; a single location is a self-loop of
    /// length zero.
    pub fn closed_distance(&self, order: &[usize]) -> f64 {
        let Some(&first) = order.first() else {
            return 0.0;
        };
        let path: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        let last = order[order.len() - 1];
        path + self.get(last, first)
    }
}
