use serde_json::Value;
use yew::prelude::*;

use common::{QueryResponse, Record};

use crate::components::charts::ResponseChart;
use crate::components::data_table::DataTable;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub response: QueryResponse,
    /// Unique DOM id for this reply's chart container.
    pub chart_id: String,
}

fn forecast_records(resp: &QueryResponse) -> Vec<Record> {
    resp.forecast
        .as_ref()
        .map(|forecast| {
            forecast
                .points
                .iter()
                .map(|p| {
                    let mut record = Record::new();
                    record.insert("period".to_string(), Value::String(p.period.clone()));
                    record.insert("value".to_string(), p.value.into());
                    record
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Renders whatever subset of fields a bot reply carries: intent line,
/// message, executed SQL, summary, data table, chart, and for forecast
/// intents the raw forecast points.
#[function_component(BotReply)]
pub fn bot_reply(props: &Props) -> Html {
    let resp = &props.response;
    let is_forecast = resp.intent.as_deref() == Some("forecast");

    html! {
        <div class="space-y-4">
            {if let Some(intent) = &resp.intent {
                html! { <p><strong>{"Intent: "}</strong>{intent}</p> }
            } else {
                html! {}
            }}
            {if let Some(message) = &resp.message {
                html! { <p><strong>{"Message: "}</strong>{message}</p> }
            } else {
                html! {}
            }}
            {if let Some(query) = &resp.query {
                html! {
                    <div class="p-4 w-full bg-base-100 rounded-xl shadow-sm border border-base-300">
                        <h2 class="font-bold">{"Executed SQL:"}</h2>
                        <pre class="bg-base-200 p-3 rounded text-sm overflow-x-auto">{query}</pre>
                    </div>
                }
            } else {
                html! {}
            }}
            {if let Some(summary) = &resp.summary {
                html! {
                    <div class="p-4 w-full bg-base-100 rounded-xl shadow-sm border border-base-300">
                        <h2 class="font-bold mb-2">{"Summary:"}</h2>
                        <p class="whitespace-pre-line">{summary}</p>
                    </div>
                }
            } else {
                html! {}
            }}
            {if let Some(data) = &resp.data {
                html! { <DataTable records={data.clone()} title="Data Table" /> }
            } else {
                html! {}
            }}
            {if let Some(chart) = &resp.chart {
                html! {
                    <ResponseChart
                        chart_id={props.chart_id.clone()}
                        spec={chart.clone()}
                        records={resp.data.clone()}
                        forecast={resp.forecast.clone()}
                    />
                }
            } else {
                html! {}
            }}
            {if is_forecast {
                let note = resp.forecast.as_ref().and_then(|f| f.note.clone());
                html! {
                    <>
                        <DataTable records={forecast_records(resp)} title="Forecast Data" />
                        {if let Some(note) = note {
                            html! { <p class="text-sm text-gray-500 italic">{note}</p> }
                        } else {
                            html! {}
                        }}
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
