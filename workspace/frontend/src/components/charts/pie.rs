use web_sys::HtmlElement;
use yew::prelude::*;

use super::{new_plot, PlotProps, COLORS};

/// Single-series pie chart over the first dataset's field. Forecast
/// values only widen the label set here; rows without a baseline value
/// contribute nothing to the pie.
#[function_component(PieChart)]
pub(crate) fn pie_chart(props: &PlotProps) -> Html {
    let container_ref = use_node_ref();
    let spec = props.spec.clone();
    let forecast = props.forecast.clone();
    let div_id = props.chart_id.clone();

    use_effect_with(
        (container_ref.clone(), spec, forecast, div_id),
        move |(container_ref, spec, forecast, div_id)| {
            if let (Some(element), Some(first)) =
                (container_ref.cast::<HtmlElement>(), spec.datasets.first())
            {
                element.set_id(div_id);

                let rows = spec.display_rows(forecast.as_ref());
                let series = first.name.as_str();

                let labels: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
                let values: Vec<Option<f64>> = rows.iter().map(|r| r.value(series)).collect();

                let trace = serde_json::json!([{
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                    "marker": {"colors": COLORS},
                }]);

                let layout = serde_json::json!({
                    "height": 400,
                    "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                });

                new_plot(
                    div_id,
                    serde_wasm_bindgen::to_value(&trace).unwrap(),
                    serde_wasm_bindgen::to_value(&layout).unwrap(),
                );
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
