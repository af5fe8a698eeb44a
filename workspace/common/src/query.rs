use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chart::{ChartSpec, ForecastSeries};

/// One flat result record as returned by the query service, used for
/// tabular display. Columns are taken from the first record.
pub type Record = serde_json::Map<String, Value>;

/// Request body for the `/query` endpoint (mirrors the service).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryRequest {
    pub prompt: String,
}

/// Response payload of the query service. Every field is optional; the
/// frontend consumes whatever subset is present and ignores the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryResponse {
    /// Detected query intent, e.g. `"forecast"` or `"historical"`.
    pub intent: Option<String>,
    /// Human-readable status or answer text.
    pub message: Option<String>,
    /// The SQL statement the service executed, displayed verbatim.
    pub query: Option<String>,
    /// Free-text summary of the result.
    pub summary: Option<String>,
    /// Flat result records for tabular display.
    pub data: Option<Vec<Record>>,
    /// Chart payload (labels + named datasets).
    pub chart: Option<ChartSpec>,
    /// Forecast overlay series.
    pub forecast: Option<ForecastSeries>,
}

impl QueryResponse {
    /// Synthetic response for a failed submission. Rendered exactly like
    /// a successful bot reply, so failures surface only in the transcript.
    pub fn failure(description: impl std::fmt::Display) -> Self {
        Self {
            message: Some(format!("❌ Error: {description}")),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    #[test]
    fn deserializes_full_response() {
        let json = serde_json::json!({
            "intent": "forecast",
            "message": "done",
            "query": "SELECT ShipRegion, SUM(Sales) FROM orders GROUP BY 1",
            "summary": "Sales grew in Q1.",
            "data": [{"ShipRegion": "EMEA", "Sales": 10.0}],
            "chart": {
                "type": "line",
                "labels": ["Jan", "Feb"],
                "datasets": [{"name": "Sales", "data": [10.0, 20.0]}]
            },
            "forecast": {"points": [{"period": "Mar", "value": 30.0}]}
        });

        let resp: QueryResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.intent.as_deref(), Some("forecast"));
        let chart = resp.chart.unwrap();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels, vec!["Jan", "Feb"]);
        assert_eq!(chart.datasets[0].name, "Sales");
        assert_eq!(resp.forecast.unwrap().points[0].period, "Mar");
    }

    #[test]
    fn deserializes_partial_response() {
        let resp: QueryResponse = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("hi"));
        assert!(resp.chart.is_none());
        assert!(resp.data.is_none());
    }

    #[test]
    fn unknown_chart_type_degrades_to_other() {
        let json = serde_json::json!({
            "chart": {"type": "radar", "labels": [], "datasets": []}
        });
        let resp: QueryResponse = serde_json::from_value(json).unwrap();
        assert_eq!(resp.chart.unwrap().kind, ChartKind::Other);
    }

    #[test]
    fn forecast_note_without_points() {
        let json = serde_json::json!({
            "forecast": {"note": "ARIMA failed: not enough history"}
        });
        let resp: QueryResponse = serde_json::from_value(json).unwrap();
        let forecast = resp.forecast.unwrap();
        assert!(forecast.points.is_empty());
        assert_eq!(
            forecast.note.as_deref(),
            Some("ARIMA failed: not enough history")
        );
    }

    #[test]
    fn failure_builds_error_bubble_payload() {
        let resp = QueryResponse::failure("timeout");
        assert_eq!(resp.message.as_deref(), Some("❌ Error: timeout"));
        assert!(resp.intent.is_none());
        assert!(resp.chart.is_none());
    }
}
