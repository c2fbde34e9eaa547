use super::data::{AttributeKind, ClassCount, Metadata, RowView};
use super::node::Question;

/// Gini impurity of a class histogram: `1 - sum(p_c^2)` over class probabilities.
/// Defined as 0 when `n == 0` (an empty partition has no impurity to speak of).
pub fn gini(counts: &ClassCount, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - counts.values().map(|&c| (c as f64 / n).powi(2)).sum::<f64>()
}

/// Tally the class column of `rows` into a code -> count histogram.
pub fn class_counts(rows: &[RowView], class_index: usize) -> ClassCount {
    let mut counts = ClassCount::new();
    for row in rows {
        *counts.entry(row[class_index]).or_insert(0) += 1;
    }
    counts
}

/// Find the best threshold/value for one column and its Gini gain, by a single sorted
/// scan over `(column_value, class_code)` pairs.
///
/// Ordinal columns are inequality-based and monotone in the threshold, so the running
/// `left_counts` accumulate across the whole scan ("<= threshold" grows as threshold
/// grows). Categorical columns are equality-based and non-monotone, so `left_counts` is
/// reset after every distinct value -- each category is scored in isolation as "this
/// value" versus "everything else", sharing the same sort and scan as the ordinal case.
///
/// Returns `(value, 0.0)` when no split improves on the parent's impurity; the returned
/// value is meaningless in that case and callers must not act on it.
pub fn determine_best_threshold(
    rows: &[RowView],
    col: usize,
    kind: AttributeKind,
    class_index: usize,
    parent_counts: &ClassCount,
    parent_gini: f64,
) -> (i64, f64) {
    let r = rows.len();
    let mut pairs: Vec<(i64, i64)> = rows.iter().map(|row| (row[col], row[class_index])).collect();
    pairs.sort_by_key(|&(value, _)| value);

    let mut left_counts = ClassCount::new();
    let mut left_total = 0usize;
    let mut best_gain = 0.0;
    let mut best_value = pairs[0].0;

    for i in 0..r {
        let (_, class_code) = pairs[i];
        *left_counts.entry(class_code).or_insert(0) += 1;
        left_total += 1;

        let is_last = i == r - 1;
        let value_changes = !is_last && pairs[i].0 != pairs[i + 1].0;
        if !(value_changes || is_last) {
            continue;
        }

        let next_value = if is_last { pairs[i].0 } else { pairs[i + 1].0 };
        let right_total = r - left_total;
        let mut right_counts = ClassCount::new();
        for (&class, &total) in parent_counts {
            right_counts.insert(class, total - left_counts.get(&class).copied().unwrap_or(0));
        }

        let gain = parent_gini
            - (left_total as f64 / r as f64) * gini(&left_counts, left_total)
            - (right_total as f64 / r as f64) * gini(&right_counts, right_total);

        if gain > best_gain {
            best_gain = gain;
            best_value = next_value;
        }

        if kind == AttributeKind::Categorical {
            left_counts.clear();
            left_total = 0;
        }
    }

    (best_value, best_gain)
}

/// Compute `parent_class_counts`/`parent_gini` once, then search every feature column
/// for the split with the largest strict improvement in Gini gain.
///
/// Column iteration is fixed at `0..meta.feature_count()`; since only a strict `>`
/// improvement replaces the current best, the first column to reach a given gain wins
/// ties between columns.
pub fn find_best_split(rows: &[RowView], meta: &Metadata) -> (f64, Question) {
    let class_index = meta.class_index();
    let parent_counts = class_counts(rows, class_index);
    let parent_gini = gini(&parent_counts, rows.len());

    let mut best_gain = 0.0;
    let mut best_question = Question::default();

    for col in 0..meta.feature_count() {
        let kind = meta.columns[col].kind;
        let (value, gain) =
            determine_best_threshold(rows, col, kind, class_index, &parent_counts, parent_gini);

        if gain > best_gain {
            best_gain = gain;
            let value = match kind {
                AttributeKind::Ordinal => value.to_string(),
                AttributeKind::Categorical => meta.columns[col]
                    .i2s
                    .get(&value)
                    .cloned()
                    .unwrap_or_default(),
            };
            best_question = Question { column: col, value };
        }
    }

    (best_gain, best_question)
}
