use serde_json::Value;
use yew::prelude::*;

use common::Record;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub records: Vec<Record>,
    #[prop_or_default]
    pub title: Option<String>,
}

fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Generic table over flat result records. Columns come from the first
/// record; records missing a column render an empty cell.
#[function_component(DataTable)]
pub fn data_table(props: &Props) -> Html {
    if props.records.is_empty() {
        return html! {};
    }

    let columns: Vec<String> = props.records[0].keys().cloned().collect();

    html! {
        <div class="p-4 w-full bg-base-100 rounded-xl shadow-sm border border-base-300">
            {if let Some(title) = &props.title {
                html! { <h2 class="text-xl font-bold mb-3">{title}</h2> }
            } else {
                html! {}
            }}
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            { for columns.iter().map(|col| html! {
                                <th class="text-left">{col}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { for props.records.iter().map(|record| html! {
                            <tr class="hover">
                                { for columns.iter().map(|col| html! {
                                    <td>{render_cell(record.get(col))}</td>
                                })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
