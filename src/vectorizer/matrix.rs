use std::fmt;

use num::Num;
use serde::{Deserialize, Serialize};

/// Dense document-by-term weight matrix, row-major.
/// Rows follow the corpus order, columns the vocabulary order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TFIDFMatrix<N>
where
    N: Num,
{
    rows: usize,
    cols: usize,
    data: Vec<N>,
}

impl<N> TFIDFMatrix<N>
where
    N: Num,
{
    /// Assemble a matrix from fully built rows.
    /// Every row must hold exactly `cols` cells.
    pub fn from_rows(rows: Vec<Vec<N>>, cols: usize) -> Self {
        let row_num = rows.len();
        let mut data = Vec::with_capacity(row_num * cols);
        for row in rows {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        TFIDFMatrix {
            rows: row_num,
            cols,
            data,
        }
    }

    /// Get the number of rows (documents)
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns (vocabulary terms)
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the cell at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&N> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get one row as a slice
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[N]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterate rows in corpus order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[N]> {
        // not chunks(): cols can be 0 while rows stay meaningful
        (0..self.rows).map(move |row| &self.data[row * self.cols..(row + 1) * self.cols])
    }
}

/// One line per row, cells tab-separated, default float formatting.
impl<N> fmt::Display for TFIDFMatrix<N>
where
    N: Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_lays_out_cells_row_major() {
        let m = TFIDFMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 2);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(0, 0), Some(&1.0));
        assert_eq!(m.get(0, 1), Some(&2.0));
        assert_eq!(m.get(1, 0), Some(&3.0));
        assert_eq!(m.get(1, 1), Some(&4.0));
    }

    #[test]
    fn out_of_range_access_returns_none() {
        let m = TFIDFMatrix::from_rows(vec![vec![1.0]], 1);
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.row(1), None);
    }

    #[test]
    fn zero_column_matrix_keeps_its_rows() {
        let m: TFIDFMatrix<f64> = TFIDFMatrix::from_rows(vec![vec![], vec![]], 0);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 0);
        assert!(m.is_empty());
        assert_eq!(m.iter_rows().count(), 2);
        assert_eq!(m.row(0), Some(&[][..]));
    }

    #[test]
    fn display_prints_tab_separated_rows() {
        let m = TFIDFMatrix::from_rows(vec![vec![1.0, 0.25], vec![0.0, 2.0]], 2);
        assert_eq!(m.to_string(), "1\t0.25\n0\t2\n");
    }

    #[test]
    fn serde_roundtrip_json_preserves_cells_and_dims() {
        let m = TFIDFMatrix::from_rows(vec![vec![0.5, 0.0], vec![0.25, 2.0]], 2);
        let s = serde_json::to_string(&m).unwrap();
        let de: TFIDFMatrix<f64> = serde_json::from_str(&s).unwrap();
        assert_eq!(de, m);
    }
}
