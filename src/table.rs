use chrono::SecondsFormat;
use std::io::{self, Write};
use tabled::{settings::Style, Table, Tabled};

use crate::models::Issue;

pub const NO_ISSUES: &str = "No issues found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { rows: usize },
    /// Nothing to show. Not an error.
    Empty,
}

#[derive(Tabled)]
struct IssueRow {
    index: usize,
    number: u64,
    created_at: String,
    title: String,
}

/// Writes `issues` to `out` as a table, keeping at most `max_count` rows
/// (all rows when `max_count` is negative).
pub fn render<W: Write>(
    out: &mut W,
    issues: &[Issue],
    max_count: i64,
) -> io::Result<RenderOutcome> {
    if issues.is_empty() {
        writeln!(out, "{NO_ISSUES}")?;
        return Ok(RenderOutcome::Empty);
    }

    let limit = match usize::try_from(max_count) {
        Ok(limit) => limit,
        // Negative: no cap.
        Err(_) => issues.len(),
    };
    let rows: Vec<IssueRow> = issues
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, issue)| IssueRow {
            index,
            number: issue.number,
            created_at: issue.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            title: issue.title.clone(),
        })
        .collect();
    let count = rows.len();

    let mut table = Table::new(rows);
    table.with(Style::ascii());
    writeln!(out, "{table}")?;

    Ok(RenderOutcome::Rendered { rows: count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::tests::issue;

    fn render_to_string(issues: &[Issue], max_count: i64) -> (String, RenderOutcome) {
        let mut out = Vec::new();
        let outcome = render(&mut out, issues, max_count).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    fn five() -> Vec<Issue> {
        (1..=5).map(|n| issue(100 + n, &format!("T{n}"))).collect()
    }

    fn data_rows(text: &str) -> Vec<Vec<String>> {
        text.lines()
            .filter(|l| l.starts_with('|'))
            .skip(1)
            .map(|l| {
                l.trim_matches('|')
                    .split('|')
                    .map(|c| c.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_prints_message_only() {
        let (text, outcome) = render_to_string(&[], 3);
        assert_eq!(outcome, RenderOutcome::Empty);
        assert_eq!(text, "No issues found\n");
    }

    #[test]
    fn truncates_to_max_count() {
        let (text, outcome) = render_to_string(&five(), 3);
        assert_eq!(outcome, RenderOutcome::Rendered { rows: 3 });

        let rows = data_rows(&text);
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[0], i.to_string());
            assert_eq!(row[1], (101 + i).to_string());
            assert_eq!(row[3], format!("T{}", i + 1));
        }
    }

    #[test]
    fn negative_max_count_keeps_everything() {
        for max_count in [-1, -100, i64::MIN] {
            let (text, outcome) = render_to_string(&five(), max_count);
            assert_eq!(outcome, RenderOutcome::Rendered { rows: 5 });
            assert_eq!(data_rows(&text).len(), 5);
        }

        let (_, outcome) = render_to_string(&five(), i64::MAX);
        assert_eq!(outcome, RenderOutcome::Rendered { rows: 5 });
    }

    #[test]
    fn zero_max_count_shows_header_only() {
        let (text, outcome) = render_to_string(&five(), 0);
        assert_eq!(outcome, RenderOutcome::Rendered { rows: 0 });
        assert!(text.contains("created_at"));
        assert!(data_rows(&text).is_empty());
    }

    #[test]
    fn header_and_row_rules() {
        let (text, _) = render_to_string(&five()[..2], -1);
        let header: Vec<&str> = text
            .lines()
            .find(|l| l.starts_with('|'))
            .unwrap()
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();
        assert_eq!(header, ["index", "number", "created_at", "title"]);

        // Top, under the header, between rows, bottom.
        let rules = text.lines().filter(|l| l.starts_with('+')).count();
        assert_eq!(rules, 4);
    }

    #[test]
    fn created_at_is_rfc3339() {
        let (text, _) = render_to_string(&five()[..1], -1);
        assert_eq!(data_rows(&text)[0][2], "2024-01-02T03:04:05Z");
    }
}
