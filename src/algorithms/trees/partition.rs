use super::data::{AttributeKind, Metadata, RowView};
use super::node::Question;

/// Split `rows` into (true_rows, false_rows) according to `q`, preserving the relative
/// order of rows within each output (a stable partition), so that row order is a
/// deterministic function of the input order alone.
///
/// - Ordinal column: a row goes true iff `row[q.column] >= int(q.value)`.
/// - Categorical column: a row goes true iff `row[q.column] == s2i[q.value]`. A `q.value`
///   absent from the column's vocabulary (should not happen for a question produced by
///   `find_best_split`) matches nothing, so every row falls to `false_rows`.
pub fn partition<'a>(
    rows: &[RowView<'a>],
    q: &Question,
    meta: &Metadata,
) -> (Vec<RowView<'a>>, Vec<RowView<'a>>) {
    let column = &meta.columns[q.column];
    let mut true_rows = Vec::new();
    let mut false_rows = Vec::new();

    match column.kind {
        AttributeKind::Ordinal => {
            let threshold: i64 = q
                .value
                .parse()
                .expect("ordinal question value must be a decimal integer");
            for &row in rows {
                if row[q.column] >= threshold {
                    true_rows.push(row);
                } else {
                    false_rows.push(row);
                }
            }
        }
        AttributeKind::Categorical => {
            let code = column.s2i.get(&q.value).copied();
            for &row in rows {
                if code == Some(row[q.column]) {
                    true_rows.push(row);
                } else {
                    false_rows.push(row);
                }
            }
        }
    }

    (true_rows, false_rows)
}
