use crate::error::{Error, Result};

use super::builder::{build_tree, DEFAULT_PARALLEL_THRESHOLD};
use super::classify::{classify, predict_label, TestRow};
use super::data::{IntMatrix, Metadata};
use super::node::{LeafPrediction, Node};

/// A single CART-style classification tree, built by recursive Gini-gain splitting over
/// mixed ordinal/categorical columns (see [`super::split`]/[`super::builder`]).
///
/// Follows the crate's builder-configuration idiom: construct with [`Self::new`],
/// optionally override tuning knobs with chained setters, then call [`Self::fit`].
#[derive(Debug, Default)]
pub struct DecisionTreeClassifier {
    parallel_threshold: usize,
    root: Option<Node>,
}

impl DecisionTreeClassifier {
    pub fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            root: None,
        }
    }

    /// Override the row-count above which the two children of a split are built
    /// concurrently rather than sequentially (default [`DEFAULT_PARALLEL_THRESHOLD`]).
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Induce a tree from `train` under `meta`. Fails with [`Error::EmptyDataset`] if
    /// `train` has no rows; the recursive builder itself assumes a non-empty row set, so
    /// this is checked once here rather than at every recursive call.
    pub fn fit(&mut self, meta: &Metadata, train: &IntMatrix) -> Result<()> {
        if train.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let rows = train.rows_view();
        self.root = Some(build_tree(meta, rows, self.parallel_threshold));
        Ok(())
    }

    /// Classify `row` and return the predicted class label.
    pub fn predict(&self, row: &TestRow, meta: &Metadata) -> Result<Option<String>> {
        let root = self.root.as_ref().ok_or_else(|| {
            Error::InvalidState("Model must be fitted before prediction".to_string())
        })?;
        Ok(predict_label(row, root, meta))
    }

    /// Classify `row` and return the full leaf histogram reached.
    pub fn predict_histogram(&self, row: &TestRow, meta: &Metadata) -> Result<&LeafPrediction> {
        let root = self.root.as_ref().ok_or_else(|| {
            Error::InvalidState("Model must be fitted before prediction".to_string())
        })?;
        Ok(classify(row, root, meta))
    }

    /// The built tree's root node, or `None` if the tree has not been fit yet.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }
}
