/*!
This crate provides CART-style classification decision trees and bagged ensembles of
them, implemented in Rust with a focus on:
- Type safety and compile-time guarantees
- Performance optimizations
- Memory efficiency
- Comprehensive testing
- Clear documentation
- Modern Rust idioms

# Available Algorithms

## Tree-based Methods
- [`DecisionTreeClassifier`](algorithms::trees::decision_tree): Gini-gain CART
  classification tree induction over mixed ordinal/categorical columns.
- [`BaggingEnsemble`](algorithms::trees::bagging): bootstrap-aggregated ensemble of
  unpruned decision trees, predicting by plurality vote.

# Usage Example

```rust,no_run
use blocks_ml_trees::algorithms::trees::data::{AttributeKind, ColumnMeta, Metadata, IntMatrix};
use blocks_ml_trees::algorithms::trees::decision_tree::DecisionTreeClassifier;
use std::collections::HashMap;

// Two ordinal features and a binary categorical class column.
let mut class_s2i = HashMap::new();
class_s2i.insert("N".to_string(), 0);
class_s2i.insert("P".to_string(), 1);
let mut class_i2s = HashMap::new();
class_i2s.insert(0, "N".to_string());
class_i2s.insert(1, "P".to_string());

let columns = vec![
    ColumnMeta::ordinal("a"),
    ColumnMeta::categorical("class", class_s2i, class_i2s),
];
let meta = Metadata::new(columns).expect("valid metadata");

let train = IntMatrix::new(
    vec![vec![1, 0], vec![2, 0], vec![3, 1], vec![4, 1]],
    meta.columns.len(),
)
.expect("well-formed rows");

let mut tree = DecisionTreeClassifier::new();
tree.fit(&meta, &train).expect("non-empty training data");

let prediction = tree
    .predict(&[ "4".to_string(), "".to_string() ], &meta)
    .expect("tree was fit above");
assert_eq!(prediction.as_deref(), Some("P"));
```

# Features
- `parallel`: enable parallel tree-induction recursion and ensemble building using rayon
  (default-on).
*/

pub mod algorithms;
pub mod error;
mod utils;

pub use error::{Error, Result};
