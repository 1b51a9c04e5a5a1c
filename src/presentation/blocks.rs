//! Fenced `chart`/`table`/`timeline` payloads and table reconciliation.
//!
//! These blocks carry a nested key/value configuration parsed as a whole,
//! not line by line.

use crate::document::{ChartSpec, Series, TableSpec, TimelineEvent, Warning};
use serde::Deserialize;

/// Parse a fenced `chart` payload.
pub(crate) fn parse_chart(payload: &str) -> Result<ChartSpec, serde_yaml::Error> {
    let raw: RawChart = serde_yaml::from_str(payload)?;
    let kind = raw.kind.as_deref().and_then(|kind| kind.parse().ok()).unwrap_or_default();
    let series = raw
        .data
        .series
        .into_iter()
        .map(|series| Series { name: series.name, values: series.values })
        .collect();
    Ok(ChartSpec { kind, categories: raw.data.categories, series, title: raw.options.title })
}

/// Parse a fenced `table` payload; rows are reconciled to the header width.
pub(crate) fn parse_table(
    payload: &str,
    slide_index: usize,
    warnings: &mut Vec<Warning>,
) -> Result<TableSpec, serde_yaml::Error> {
    let raw: RawTable = serde_yaml::from_str(payload)?;
    let rows = raw
        .rows
        .into_iter()
        .map(|row| row.iter().map(|cell| scalar_to_string(cell).unwrap_or_default()).collect())
        .collect();
    let rows = reconcile_rows(raw.headers.len(), rows, slide_index, warnings);
    Ok(TableSpec { headers: raw.headers, rows })
}

/// Parse a fenced `timeline` payload into its ordered events.
pub(crate) fn parse_timeline(payload: &str) -> Result<Vec<TimelineEvent>, serde_yaml::Error> {
    let raw: RawTimeline = serde_yaml::from_str(payload)?;
    let events = raw
        .events
        .into_iter()
        .map(|event| TimelineEvent {
            date: scalar_to_string(&event.date).unwrap_or_default(),
            title: event.title,
            description: event.description,
        })
        .collect();
    Ok(events)
}

/// Reconcile every row to the header cell count.
///
/// Rows shorter than the header get padded with empty cells, longer ones get
/// truncated; either correction records a non-fatal warning.
pub(crate) fn reconcile_rows(
    columns: usize,
    rows: Vec<Vec<String>>,
    slide_index: usize,
    warnings: &mut Vec<Warning>,
) -> Vec<Vec<String>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, mut row)| {
            if row.len() < columns {
                warnings.push(Warning::new(
                    slide_index,
                    format!(
                        "table row {} has {} cells, expected {}: padded with empty cells",
                        index + 1,
                        row.len(),
                        columns
                    ),
                ));
                row.resize(columns, String::new());
            } else if row.len() > columns {
                warnings.push(Warning::new(
                    slide_index,
                    format!(
                        "table row {} has {} cells, expected {}: extra cells dropped",
                        index + 1,
                        row.len(),
                        columns
                    ),
                ));
                row.truncate(columns);
            }
            row
        })
        .collect()
}

/// Render a YAML scalar as a string; non-scalars yield `None`.
pub(crate) fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(value) => Some(value.clone()),
        serde_yaml::Value::Number(value) => Some(value.to_string()),
        serde_yaml::Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

#[derive(Deserialize)]
struct RawChart {
    #[serde(rename = "type", default)]
    kind: Option<String>,

    #[serde(default)]
    data: RawChartData,

    #[serde(default)]
    options: RawChartOptions,
}

#[derive(Deserialize, Default)]
struct RawChartData {
    #[serde(default)]
    categories: Vec<String>,

    #[serde(default)]
    series: Vec<RawSeries>,
}

#[derive(Deserialize)]
struct RawSeries {
    name: String,

    #[serde(default)]
    values: Vec<f64>,
}

#[derive(Deserialize, Default)]
struct RawChartOptions {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default)]
    headers: Vec<String>,

    #[serde(default)]
    rows: Vec<Vec<serde_yaml::Value>>,
}

#[derive(Deserialize)]
struct RawTimeline {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    date: serde_yaml::Value,

    #[serde(default)]
    title: String,

    #[serde(default)]
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ChartKind;
    use rstest::rstest;

    #[test]
    fn chart_payload() {
        let payload = "
type: line
data:
  categories: [Q1, Q2, Q3]
  series:
    - name: Revenue
      values: [10, 20.5, 30]
    - name: Costs
      values: [5, 6, 7]
options:
  title: Growth
";
        let chart = parse_chart(payload).expect("parse failed");
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.categories, &["Q1", "Q2", "Q3"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].values, &[10.0, 20.5, 30.0]);
        assert_eq!(chart.title.as_deref(), Some("Growth"));
    }

    #[test]
    fn chart_defaults() {
        let chart = parse_chart("data:\n  categories: [a]\n").expect("parse failed");
        assert_eq!(chart.kind, ChartKind::Column);
        assert!(chart.series.is_empty());
    }

    #[test]
    fn unknown_chart_kind_defaults_to_column() {
        let chart = parse_chart("type: sunburst\n").expect("parse failed");
        assert_eq!(chart.kind, ChartKind::Column);
    }

    #[test]
    fn table_payload_stringifies_scalars() {
        let payload = "
headers: [Name, Count]
rows:
  - [widgets, 3]
  - [gizmos, true]
";
        let mut warnings = Vec::new();
        let table = parse_table(payload, 0, &mut warnings).expect("parse failed");
        assert_eq!(table.headers, &["Name", "Count"]);
        assert_eq!(table.rows, vec![vec!["widgets", "3"], vec!["gizmos", "true"]]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn timeline_payload() {
        let payload = "
events:
  - date: 2020
    title: Founded
  - date: March 2022
    title: Launch
    description: First public release
";
        let events = parse_timeline(payload).expect("parse failed");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, "2020");
        assert_eq!(events[1].title, "Launch");
        assert_eq!(events[1].description.as_deref(), Some("First public release"));
    }

    #[rstest]
    #[case::short(vec!["a", "b"], vec!["a", "b", ""], "padded with empty cells")]
    #[case::long(vec!["a", "b", "c", "d"], vec!["a", "b", "c"], "extra cells dropped")]
    fn reconciliation(#[case] row: Vec<&str>, #[case] expected: Vec<&str>, #[case] reason: &str) {
        let rows = vec![row.into_iter().map(String::from).collect()];
        let mut warnings = Vec::new();
        let reconciled = reconcile_rows(3, rows, 4, &mut warnings);
        assert_eq!(reconciled, vec![expected.into_iter().map(String::from).collect::<Vec<_>>()]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].slide_index, 4);
        assert!(warnings[0].message.contains(reason), "message: {}", warnings[0].message);
    }

    #[test]
    fn exact_rows_record_no_warning() {
        let rows = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
        let mut warnings = Vec::new();
        let reconciled = reconcile_rows(3, rows.clone(), 0, &mut warnings);
        assert_eq!(reconciled, rows);
        assert!(warnings.is_empty());
    }
}
