use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Field name under which the forecast overlay appears in merged rows.
pub const FORECAST_FIELD: &str = "Forecast";

/// Chart type tag emitted by the query service. Anything unrecognized
/// maps to `Other` and renders nothing rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Table,
    Bar,
    Line,
    Pie,
    #[serde(other)]
    #[default]
    Other,
}

/// Chart payload: ordered labels plus named datasets, positionally
/// aligned (`datasets[d].data[i]` belongs to `labels[i]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    #[serde(rename = "type", default)]
    pub kind: ChartKind,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// One named numeric series aligned to the label sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub data: Vec<f64>,
}

/// Forecast series as returned by the service. When its model cannot fit
/// it returns only a `note` and no points.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastSeries {
    pub points: Vec<ForecastPoint>,
    pub note: Option<String>,
}

/// A predicted value for one period, possibly outside the baseline labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub period: String,
    pub value: f64,
}

/// The merged, chart-ready record for one label. Built fresh per rendered
/// response and discarded once the chart is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// The label this row belongs to ("name" on the chart axis).
    pub name: String,
    /// One entry per dataset name; `None` when the label has no baseline
    /// value (forecast-only period or dataset shorter than the labels).
    pub values: HashMap<String, Option<f64>>,
    /// Forecast overlay value, when the forecast series covers this label.
    pub forecast: Option<f64>,
}

impl DisplayRow {
    /// Baseline value for one series, flattened for plotting (`None` for
    /// both a missing field and a missing value).
    pub fn value(&self, series: &str) -> Option<f64> {
        self.values.get(series).copied().flatten()
    }
}

/// Merges the baseline labeled series with an optional forecast series
/// into one ordered row set.
///
/// Row order is the baseline label order followed by forecast-only
/// periods in their original order. Duplicate labels collapse to a single
/// row resolved at the first occurrence's position; repeated forecast
/// periods keep the last value. Pure function of its inputs.
pub fn merge_rows(
    labels: &[String],
    datasets: &[Dataset],
    forecast: Option<&ForecastSeries>,
) -> Vec<DisplayRow> {
    let points = forecast.map(|f| f.points.as_slice()).unwrap_or_default();

    let forecast_map: HashMap<&str, f64> = points
        .iter()
        .map(|p| (p.period.as_str(), p.value))
        .collect();

    let mut seen = HashSet::new();
    let merged: Vec<&str> = labels
        .iter()
        .map(String::as_str)
        .chain(points.iter().map(|p| p.period.as_str()))
        .filter(|label| seen.insert(*label))
        .collect();

    merged
        .into_iter()
        .map(|label| {
            let index = labels.iter().position(|l| l == label);
            let values = datasets
                .iter()
                .map(|ds| {
                    let value = index.and_then(|i| ds.data.get(i).copied());
                    (ds.name.clone(), value)
                })
                .collect();
            DisplayRow {
                name: label.to_string(),
                values,
                forecast: forecast_map.get(label).copied(),
            }
        })
        .collect()
}

impl ChartSpec {
    /// Convenience wrapper over [`merge_rows`] using this payload's
    /// labels and datasets.
    pub fn display_rows(&self, forecast: Option<&ForecastSeries>) -> Vec<DisplayRow> {
        merge_rows(&self.labels, &self.datasets, forecast)
    }

    /// Ordered dataset names, the series a chart renderer should draw.
    pub fn series_names(&self) -> Vec<&str> {
        self.datasets.iter().map(|ds| ds.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sales(data: &[f64]) -> Vec<Dataset> {
        vec![Dataset {
            name: "Sales".to_string(),
            data: data.to_vec(),
        }]
    }

    fn forecast(points: &[(&str, f64)]) -> ForecastSeries {
        ForecastSeries {
            points: points
                .iter()
                .map(|(period, value)| ForecastPoint {
                    period: period.to_string(),
                    value: *value,
                })
                .collect(),
            note: None,
        }
    }

    #[test]
    fn no_forecast_produces_one_row_per_label() {
        let rows = merge_rows(&labels(&["Jan", "Feb"]), &sales(&[10.0, 20.0]), None);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Jan");
        assert_eq!(rows[0].value("Sales"), Some(10.0));
        assert_eq!(rows[1].name, "Feb");
        assert_eq!(rows[1].value("Sales"), Some(20.0));
        assert!(rows.iter().all(|r| r.forecast.is_none()));
    }

    #[test]
    fn empty_forecast_behaves_like_no_forecast() {
        let l = labels(&["Jan", "Feb"]);
        let d = sales(&[10.0, 20.0]);
        let empty = ForecastSeries::default();

        assert_eq!(merge_rows(&l, &d, Some(&empty)), merge_rows(&l, &d, None));
    }

    #[test]
    fn forecast_only_period_appends_row() {
        let rows = merge_rows(
            &labels(&["Jan", "Feb"]),
            &sales(&[10.0, 20.0]),
            Some(&forecast(&[("Mar", 30.0)])),
        );

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].name, "Mar");
        assert_eq!(rows[2].value("Sales"), None);
        assert_eq!(rows[2].values.get("Sales"), Some(&None));
        assert_eq!(rows[2].forecast, Some(30.0));
    }

    #[test]
    fn overlapping_forecast_only_adds_field() {
        let rows = merge_rows(
            &labels(&["Jan", "Feb"]),
            &sales(&[10.0, 20.0]),
            Some(&forecast(&[("Jan", 99.0)])),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Jan");
        assert_eq!(rows[0].value("Sales"), Some(10.0));
        assert_eq!(rows[0].forecast, Some(99.0));
        assert_eq!(rows[1].forecast, None);
    }

    #[test]
    fn subset_forecast_keeps_row_count_and_order() {
        let l = labels(&["Jan", "Feb", "Mar"]);
        let d = sales(&[10.0, 20.0, 30.0]);
        let without = merge_rows(&l, &d, None);
        let with = merge_rows(&l, &d, Some(&forecast(&[("Feb", 21.0)])));

        assert_eq!(with.len(), without.len());
        let names: Vec<_> = with.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(with[1].forecast, Some(21.0));
        assert!(with[0].forecast.is_none() && with[2].forecast.is_none());
    }

    #[test]
    fn duplicate_labels_collapse_first_occurrence_wins() {
        let rows = merge_rows(
            &labels(&["Jan", "Jan", "Feb"]),
            &sales(&[10.0, 11.0, 20.0]),
            Some(&forecast(&[("Mar", 30.0)])),
        );

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(rows[0].value("Sales"), Some(10.0));
    }

    #[test]
    fn duplicate_forecast_periods_last_write_wins() {
        let rows = merge_rows(
            &labels(&["Jan"]),
            &sales(&[10.0]),
            Some(&forecast(&[("Feb", 1.0), ("Feb", 2.0)])),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Feb");
        assert_eq!(rows[1].forecast, Some(2.0));
    }

    #[test]
    fn empty_datasets_rows_carry_only_name_and_forecast() {
        let rows = merge_rows(&labels(&["Jan"]), &[], Some(&forecast(&[("Jan", 5.0)])));

        assert_eq!(rows.len(), 1);
        assert!(rows[0].values.is_empty());
        assert_eq!(rows[0].forecast, Some(5.0));
    }

    #[test]
    fn dataset_shorter_than_labels_yields_none() {
        let rows = merge_rows(&labels(&["Jan", "Feb"]), &sales(&[10.0]), None);

        assert_eq!(rows[0].value("Sales"), Some(10.0));
        assert_eq!(rows[1].value("Sales"), None);
    }

    #[test]
    fn merge_is_idempotent() {
        let l = labels(&["Jan", "Feb"]);
        let d = sales(&[10.0, 20.0]);
        let f = forecast(&[("Mar", 30.0)]);

        assert_eq!(merge_rows(&l, &d, Some(&f)), merge_rows(&l, &d, Some(&f)));
    }

    #[test]
    fn multiple_datasets_each_get_a_field() {
        let datasets = vec![
            Dataset {
                name: "Sales".to_string(),
                data: vec![10.0, 20.0],
            },
            Dataset {
                name: "Costs".to_string(),
                data: vec![4.0, 8.0],
            },
        ];
        let rows = merge_rows(&labels(&["Jan", "Feb"]), &datasets, None);

        assert_eq!(rows[1].value("Sales"), Some(20.0));
        assert_eq!(rows[1].value("Costs"), Some(8.0));
    }
}
