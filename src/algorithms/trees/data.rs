use std::collections::HashMap;

use crate::error::{Error, Result};

/// Whether a column's values admit a natural ordering (split by `>=` threshold) or are
/// drawn from a finite unordered vocabulary (split by `==` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Ordinal,
    Categorical,
}

/// Static description of one column: its display name, its kind, and (for categorical
/// columns) the dense string<->code vocabulary assigned by the external reader.
#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub name: String,
    pub kind: AttributeKind,
    pub s2i: HashMap<String, i64>,
    pub i2s: HashMap<i64, String>,
}

impl ColumnMeta {
    /// An ordinal column has no string<->code vocabulary; its values are the literal
    /// integers stored in the training matrix.
    pub fn ordinal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Ordinal,
            s2i: HashMap::new(),
            i2s: HashMap::new(),
        }
    }

    /// A categorical column carries the vocabulary mapping assigned by the external
    /// reader; `s2i` and `i2s` must be inverses of each other over dense codes starting
    /// at 0.
    pub fn categorical(
        name: impl Into<String>,
        s2i: HashMap<String, i64>,
        i2s: HashMap<i64, String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Categorical,
            s2i,
            i2s,
        }
    }
}

/// The ordered set of column descriptions for a dataset. The last column is always the
/// categorical class column; its index is computed once here rather than recomputed (or
/// cached in process-wide static state) on every lookup.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub columns: Vec<ColumnMeta>,
    class_index: usize,
}

impl Metadata {
    pub fn new(columns: Vec<ColumnMeta>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let class_index = columns.len() - 1;
        if columns[class_index].kind != AttributeKind::Categorical {
            return Err(Error::InvalidParameter(
                "the class column (last column) must be categorical".to_string(),
            ));
        }
        Ok(Self {
            columns,
            class_index,
        })
    }

    /// Index of the class column: always `columns.len() - 1`.
    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_column(&self) -> &ColumnMeta {
        &self.columns[self.class_index]
    }

    /// Number of feature (non-class) columns.
    pub fn feature_count(&self) -> usize {
        self.class_index
    }
}

/// The integer-encoded training matrix: ordinal columns store their literal value,
/// categorical columns store the code assigned by [`ColumnMeta::s2i`]. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct IntMatrix {
    rows: Vec<Vec<i64>>,
}

impl IntMatrix {
    /// Every row must have exactly `n_columns` fields; a reader that hands this
    /// constructor a malformed row (wrong length) gets a hard error here rather than
    /// a silently corrupted column alignment later.
    pub fn new(rows: Vec<Vec<i64>>, n_columns: usize) -> Result<Self> {
        if rows.is_empty() || n_columns == 0 {
            return Err(Error::EmptyDataset);
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n_columns) {
            return Err(Error::InvalidParameter(format!(
                "row has {} fields, expected {n_columns}",
                bad.len()
            )));
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> RowView<'_> {
        &self.rows[index]
    }

    /// A non-owning view over every row, in storage order. The core builds its working
    /// row-subsets from slices of (or references into) this vector.
    pub fn rows_view(&self) -> Vec<RowView<'_>> {
        self.rows.iter().map(Vec::as_slice).collect()
    }
}

/// A non-owning reference to one row of a backing [`IntMatrix`]. Plain borrowed slices
/// already express "many borrowers, one owner", so no bespoke wrapper type is needed;
/// multiple `RowView`s (e.g. across bootstrap resamples) may alias the same row safely,
/// since rows are never mutated after construction.
pub type RowView<'a> = &'a [i64];

/// Class-code -> count, used on every hot-path histogram to avoid hashing strings.
pub type ClassCount = HashMap<i64, usize>;

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_class_column() -> ColumnMeta {
        let mut s2i = HashMap::new();
        s2i.insert("N".to_string(), 0);
        s2i.insert("P".to_string(), 1);
        let mut i2s = HashMap::new();
        i2s.insert(0, "N".to_string());
        i2s.insert(1, "P".to_string());
        ColumnMeta::categorical("class", s2i, i2s)
    }

    #[test]
    fn test_metadata_rejects_empty_columns() {
        assert!(Metadata::new(vec![]).is_err());
    }

    #[test]
    fn test_metadata_rejects_non_categorical_class_column() {
        let columns = vec![ColumnMeta::ordinal("a"), ColumnMeta::ordinal("b")];
        assert!(Metadata::new(columns).is_err());
    }

    #[test]
    fn test_metadata_caches_class_index() {
        let columns = vec![ColumnMeta::ordinal("a"), binary_class_column()];
        let meta = Metadata::new(columns).unwrap();
        assert_eq!(meta.class_index(), 1);
        assert_eq!(meta.feature_count(), 1);
    }

    #[test]
    fn test_int_matrix_rejects_malformed_rows() {
        let rows = vec![vec![1, 0], vec![2]];
        assert!(IntMatrix::new(rows, 2).is_err());
    }

    #[test]
    fn test_int_matrix_rows_view_aliases_backing_storage() {
        let matrix = IntMatrix::new(vec![vec![1, 0], vec![2, 1]], 2).unwrap();
        let views = matrix.rows_view();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0], &[1, 0]);
        assert_eq!(views[1], &[2, 1]);
    }

    #[test]
    fn test_categorical_round_trip() {
        let col = binary_class_column();
        for (label, &code) in &col.s2i {
            assert_eq!(col.i2s.get(&code).unwrap(), label);
        }
    }
}
