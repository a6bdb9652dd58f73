use crate::query::ScalarResult;

// ---------------------------------------------------------------------------
// Scalar box
// ---------------------------------------------------------------------------

/// Render an aggregation result as a small box:
///
/// ```text
/// +------+
/// | AVG  |
/// +------+
/// | 4.70 |
/// +------+
/// ```
///
/// The inner width is the longer of label and value plus one space of margin
/// on each side.
pub fn render(result: &ScalarResult) -> String {
    let title = result.label.as_str().to_uppercase();
    let value = format!("{:.2}", result.value);
    let width = title.len().max(value.len()) + 2;
    let rule = format!("+{}+", "-".repeat(width));

    [
        rule.clone(),
        format!("|{title:^width$}|"),
        rule.clone(),
        format!("|{value:^width$}|"),
        rule,
    ]
    .join("\n")
}
