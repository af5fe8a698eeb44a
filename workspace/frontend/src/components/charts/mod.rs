mod bar;
mod line;
mod pie;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use common::{ChartKind, ChartSpec, ForecastSeries, Record};

use crate::components::data_table::DataTable;
use bar::BarChart;
use line::LineChart;
use pie::PieChart;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    pub(crate) fn new_plot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Series color cycle shared by all chart kinds.
pub(crate) const COLORS: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#f87171", "#a78bfa", "#ec4899", "#14b8a6",
];

/// Color of the forecast overlay series.
pub(crate) const FORECAST_COLOR: &str = "#2563eb";

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Unique DOM id for the Plotly container, one per transcript entry.
    pub chart_id: String,
    pub spec: ChartSpec,
    #[prop_or_default]
    pub records: Option<Vec<Record>>,
    #[prop_or_default]
    pub forecast: Option<ForecastSeries>,
}

/// Dispatches a chart payload to its renderer. `table` bypasses the
/// series merge and shows the flat records; an unrecognized tag renders
/// nothing rather than erroring.
#[function_component(ResponseChart)]
pub fn response_chart(props: &Props) -> Html {
    if props.spec.kind == ChartKind::Table {
        return match &props.records {
            Some(records) => html! { <DataTable records={records.clone()} /> },
            None => html! {},
        };
    }

    if props.spec.datasets.is_empty() {
        log::trace!("Chart payload without datasets, nothing to render");
        return html! {};
    }

    let chart_id = props.chart_id.clone();
    let spec = props.spec.clone();
    let forecast = props.forecast.clone();

    match props.spec.kind {
        ChartKind::Bar => html! { <BarChart {chart_id} {spec} {forecast} /> },
        ChartKind::Line => html! { <LineChart {chart_id} {spec} {forecast} /> },
        ChartKind::Pie => html! { <PieChart {chart_id} {spec} {forecast} /> },
        ChartKind::Table | ChartKind::Other => {
            log::debug!("Unrecognized chart type, skipping render");
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PlotProps {
    pub chart_id: String,
    pub spec: ChartSpec,
    #[prop_or_default]
    pub forecast: Option<ForecastSeries>,
}
