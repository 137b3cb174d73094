use nalgebra::DMatrix;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EnergyMatrixError {
    #[error("Energy matrix must be two-dimensional, got shape {shape:?}")]
    NotTwoDimensional { shape: Vec<usize> },

    #[error("Energy data holds {actual} values but shape requires {expected}")]
    DataLength { expected: usize, actual: usize },

    #[error("Energy matrix shape {rows}x{cols} is too large")]
    ShapeTooLarge { rows: usize, cols: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Pairwise exchange energies for one exchange round.
///
/// Entry `(i, j)` is the energy cost of swapping replica `i`, sitting on a
/// lower rung, with replica `j` on the rung directly above it. Indices are
/// original replica indices, not rung positions. The matrix is built by the
/// energy collaborator each round and only read by the ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMatrix {
    values: DMatrix<f64>,
}

impl EnergyMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            values: DMatrix::zeros(rows, cols),
        }
    }

    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Self {
        Self {
            values: DMatrix::from_fn(rows, cols, f),
        }
    }

    /// Builds a matrix from row-major `data` laid out with an explicit `shape`.
    ///
    /// # Errors
    ///
    /// Fails with [`EnergyMatrixError::NotTwoDimensional`] unless `shape` has
    /// exactly two axes, and with [`EnergyMatrixError::DataLength`] if `data`
    /// does not fill the shape exactly. A shape whose element count overflows
    /// `usize` fails with [`EnergyMatrixError::ShapeTooLarge`].
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> Result<Self, EnergyMatrixError> {
        let &[rows, cols] = shape else {
            return Err(EnergyMatrixError::NotTwoDimensional {
                shape: shape.to_vec(),
            });
        };
        let expected = rows
            .checked_mul(cols)
            .ok_or(EnergyMatrixError::ShapeTooLarge { rows, cols })?;
        if data.len() != expected {
            return Err(EnergyMatrixError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            values: DMatrix::from_row_slice(rows, cols, &data),
        })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, EnergyMatrixError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(EnergyMatrixError::RaggedRows {
                row,
                expected: n_cols,
                actual: r.len(),
            });
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::from_shape_vec(&[rows.len(), n_cols], data)
    }

    /// `(rows, cols)` of the matrix.
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }

    pub fn is_square(&self) -> bool {
        self.values.is_square()
    }

    /// Number of replicas the matrix describes (its row count).
    pub fn n_replicas(&self) -> usize {
        self.values.nrows()
    }

    /// Energy for swapping replica `lower` with replica `upper`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, lower: usize, upper: usize) -> f64 {
        self.values[(lower, upper)]
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

impl From<DMatrix<f64>> for EnergyMatrix {
    fn from(values: DMatrix<f64>) -> Self {
        Self { values }
    }
}
