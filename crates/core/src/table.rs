use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tabular query response as returned by the reporting API.
///
/// Rows are positional: cell 0 holds the dimension value and the remaining
/// cells hold metric values in the order they were requested. The `rows`
/// field is absent entirely when the query matched nothing, which callers
/// must treat as zero results rather than an error; [`ResultTable::rows`]
/// does that normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultTable {
    /// Names and types of the returned columns, dimension first.
    pub column_headers: Vec<ColumnHeader>,
    /// Total number of rows matched by the query, before any paging.
    pub total_results: u64,
    /// Result rows, each an ordered list of string cells. Absent when the
    /// query matched no data.
    pub rows: Option<Vec<Vec<String>>>,
    /// Per-metric totals over all matched rows, keyed by metric name.
    pub totals_for_all_results: BTreeMap<String, String>,
}

impl ResultTable {
    /// The result rows, normalizing an absent `rows` field to an empty slice.
    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.as_deref().unwrap_or_default()
    }

    /// Whether the query matched no rows.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Metadata for one column of a [`ResultTable`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    /// Dimension or metric name, e.g. `ga:browser` or `ga:sessions`.
    pub name: String,
    /// Column role: `DIMENSION` or `METRIC`.
    pub column_type: String,
    /// Cell data type, e.g. `STRING` or `INTEGER`.
    pub data_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_populated_response() {
        let table: ResultTable = serde_json::from_str(
            r#"{
                "columnHeaders": [
                    {"name": "ga:browser", "columnType": "DIMENSION", "dataType": "STRING"},
                    {"name": "ga:sessions", "columnType": "METRIC", "dataType": "INTEGER"}
                ],
                "totalResults": 2,
                "rows": [["Chrome", "100"], ["Firefox", "50"]],
                "totalsForAllResults": {"ga:sessions": "150"}
            }"#,
        )
        .unwrap();

        assert_eq!(table.total_results, 2);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["Chrome", "100"]);
        assert_eq!(table.column_headers[1].name, "ga:sessions");
        assert_eq!(
            table.totals_for_all_results.get("ga:sessions").unwrap(),
            "150"
        );
        assert!(!table.is_empty());
    }

    #[test]
    fn absent_rows_field_means_zero_results() {
        let table: ResultTable = serde_json::from_str(r#"{"totalResults": 0}"#).unwrap();

        assert!(table.rows.is_none());
        assert!(table.rows().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn explicit_empty_rows_also_mean_zero_results() {
        let table: ResultTable = serde_json::from_str(r#"{"rows": []}"#).unwrap();

        assert!(table.is_empty());
    }
}
