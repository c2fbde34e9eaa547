use std::collections::HashMap;

use super::data::{Metadata, RowView};
use super::node::{LeafPrediction, Node};
use super::partition::partition;
use super::split::find_best_split;

/// Minimum row-subset size above which the two recursive children are built
/// concurrently rather than sequentially. Fan-out is bounded by tree depth, so spawning
/// at every internal node would oversubscribe small subproblems; this gate confines
/// parallelism to the top of the recursion, where subproblems are large enough to
/// amortise task-creation cost.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 25_000;

/// Recursively induce a CART-style tree from `rows` under `meta`, splitting on the
/// column/threshold with the largest Gini gain at each step and terminating a branch in
/// a leaf once no column yields a positive gain.
///
/// `rows.len()` is assumed >= 1: the public entry points (`DecisionTreeClassifier::fit`,
/// `BaggingEnsemble::fit`) reject an empty training matrix before the first call, and a
/// positive-gain split always produces two non-empty partitions (see `split.rs`), so
/// this invariant holds throughout the recursion without re-checking it at every level.
pub fn build_tree<'a>(meta: &Metadata, rows: Vec<RowView<'a>>, parallel_threshold: usize) -> Node {
    let (gain, question) = find_best_split(&rows, meta);

    if gain == 0.0 {
        return Node::Leaf(leaf_prediction(&rows, meta));
    }

    let (true_rows, false_rows) = partition(&rows, &question, meta);

    let (true_child, false_child) = if rows.len() > parallel_threshold {
        build_children(meta, true_rows, false_rows, parallel_threshold)
    } else {
        (
            build_tree(meta, true_rows, parallel_threshold),
            build_tree(meta, false_rows, parallel_threshold),
        )
    };

    Node::Internal {
        question,
        true_child: Box::new(true_child),
        false_child: Box::new(false_child),
    }
}

#[cfg(feature = "parallel")]
fn build_children<'a>(
    meta: &Metadata,
    true_rows: Vec<RowView<'a>>,
    false_rows: Vec<RowView<'a>>,
    parallel_threshold: usize,
) -> (Node, Node) {
    rayon::join(
        || build_tree(meta, true_rows, parallel_threshold),
        || build_tree(meta, false_rows, parallel_threshold),
    )
}

#[cfg(not(feature = "parallel"))]
fn build_children<'a>(
    meta: &Metadata,
    true_rows: Vec<RowView<'a>>,
    false_rows: Vec<RowView<'a>>,
    parallel_threshold: usize,
) -> (Node, Node) {
    (
        build_tree(meta, true_rows, parallel_threshold),
        build_tree(meta, false_rows, parallel_threshold),
    )
}

fn leaf_prediction(rows: &[RowView], meta: &Metadata) -> LeafPrediction {
    let class_index = meta.class_index();
    let i2s = &meta.columns[class_index].i2s;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let code = row[class_index];
        let label = i2s.get(&code).cloned().unwrap_or_else(|| code.to_string());
        *counts.entry(label).or_insert(0) += 1;
    }
    LeafPrediction::from_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::trees::data::ColumnMeta;
    use std::collections::HashMap;

    fn binary_meta() -> Metadata {
        let mut s2i = HashMap::new();
        s2i.insert("N".to_string(), 0);
        s2i.insert("P".to_string(), 1);
        let mut i2s = HashMap::new();
        i2s.insert(0, "N".to_string());
        i2s.insert(1, "P".to_string());
        Metadata::new(vec![
            ColumnMeta::ordinal("a"),
            ColumnMeta::categorical("class", s2i, i2s),
        ])
        .unwrap()
    }

    #[test]
    fn test_trivial_pure_dataset_is_single_leaf() {
        let meta = binary_meta();
        let matrix: Vec<Vec<i64>> = vec![vec![1, 1], vec![2, 1], vec![3, 1]];
        let rows: Vec<RowView> = matrix.iter().map(Vec::as_slice).collect();
        let tree = build_tree(&meta, rows, DEFAULT_PARALLEL_THRESHOLD);
        match tree {
            Node::Leaf(pred) => {
                assert_eq!(pred.total(), 3);
                assert_eq!(pred.counts().get("P"), Some(&3));
            }
            Node::Internal { .. } => panic!("expected a leaf"),
        }
    }

    #[test]
    fn test_one_split_ordinal_dataset() {
        let meta = binary_meta();
        // (1,N),(2,N),(3,P),(4,P)
        let matrix: Vec<Vec<i64>> = vec![vec![1, 0], vec![2, 0], vec![3, 1], vec![4, 1]];
        let rows: Vec<RowView> = matrix.iter().map(Vec::as_slice).collect();
        let tree = build_tree(&meta, rows, DEFAULT_PARALLEL_THRESHOLD);
        match tree {
            Node::Internal {
                question,
                true_child,
                false_child,
            } => {
                assert_eq!(question.column, 0);
                assert_eq!(question.value, "3");
                match *true_child {
                    Node::Leaf(pred) => {
                        assert_eq!(pred.counts().get("P"), Some(&2));
                        assert_eq!(pred.total(), 2);
                    }
                    _ => panic!("expected true branch to be a leaf"),
                }
                match *false_child {
                    Node::Leaf(pred) => {
                        assert_eq!(pred.counts().get("N"), Some(&2));
                        assert_eq!(pred.total(), 2);
                    }
                    _ => panic!("expected false branch to be a leaf"),
                }
            }
            Node::Leaf(_) => panic!("expected an internal node"),
        }
    }

    #[test]
    fn test_all_equal_feature_column_is_a_single_leaf() {
        let meta = binary_meta();
        let matrix: Vec<Vec<i64>> = vec![vec![7, 0], vec![7, 1], vec![7, 0], vec![7, 1]];
        let rows: Vec<RowView> = matrix.iter().map(Vec::as_slice).collect();
        let tree = build_tree(&meta, rows, DEFAULT_PARALLEL_THRESHOLD);
        match tree {
            Node::Leaf(pred) => {
                assert_eq!(pred.total(), 4);
                assert_eq!(pred.counts().get("N"), Some(&2));
                assert_eq!(pred.counts().get("P"), Some(&2));
            }
            Node::Internal { .. } => panic!("expected a leaf when no column discriminates"),
        }
    }

    #[test]
    fn test_sequential_and_parallel_thresholds_agree() {
        let meta = binary_meta();
        // Deterministic generator: alternate class by threshold at i == 2000.
        let matrix: Vec<Vec<i64>> = (0..4000)
            .map(|i| vec![i, if i < 2000 { 0 } else { 1 }])
            .collect();

        let rows_small_threshold: Vec<RowView> = matrix.iter().map(Vec::as_slice).collect();
        let tree_sequential = build_tree(&meta, rows_small_threshold, usize::MAX);

        let rows_forced_parallel: Vec<RowView> = matrix.iter().map(Vec::as_slice).collect();
        let tree_parallel = build_tree(&meta, rows_forced_parallel, 10);

        assert_eq!(tree_sequential, tree_parallel);
    }
}
