use super::data::{AttributeKind, Metadata};
use super::node::{LeafPrediction, Node, Question};

/// A test row: one raw string per column, class column last (unused by `classify`
/// itself, but kept so the same row shape can carry ground truth for accuracy
/// reporting in a caller).
pub type TestRow = [String];

/// Walk `node` for `row`, returning the leaf histogram reached.
///
/// Unlike the partitioner (which works from already-encoded integer columns), `row` is
/// the original string form from a test set, so matching degrades locally instead of
/// failing the whole prediction:
/// - an ordinal column whose test value doesn't parse as an integer evaluates the
///   predicate as false (`NumericParseAtInference`);
/// - a categorical column whose test value isn't a label seen during training simply
///   fails the string comparison and falls to the false branch
///   (`UnknownCategoryAtInference`) -- no vocabulary lookup is needed for this, since the
///   question's value is already the decoded label, not a code.
pub fn classify<'a>(row: &TestRow, node: &'a Node, meta: &Metadata) -> &'a LeafPrediction {
    match node {
        Node::Leaf(prediction) => prediction,
        Node::Internal {
            question,
            true_child,
            false_child,
        } => {
            if matches_question(row, question, meta) {
                classify(row, true_child, meta)
            } else {
                classify(row, false_child, meta)
            }
        }
    }
}

fn matches_question(row: &TestRow, q: &Question, meta: &Metadata) -> bool {
    match meta.columns[q.column].kind {
        AttributeKind::Ordinal => match (row[q.column].parse::<i64>(), q.value.parse::<i64>()) {
            (Ok(value), Ok(threshold)) => value >= threshold,
            _ => false,
        },
        AttributeKind::Categorical => row[q.column] == q.value,
    }
}

/// Classify `row` and reduce its leaf histogram to a single predicted label, breaking
/// ties lexicographically.
pub fn predict_label(row: &TestRow, node: &Node, meta: &Metadata) -> Option<String> {
    classify(row, node, meta)
        .predicted_label()
        .map(str::to_string)
}
