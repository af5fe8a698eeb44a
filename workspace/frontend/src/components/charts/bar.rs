use plotly::common::Marker;
use plotly::layout::BarMode;
use plotly::{Bar, Layout};
use web_sys::HtmlElement;
use yew::prelude::*;

use common::FORECAST_FIELD;

use super::{new_plot, PlotProps, COLORS, FORECAST_COLOR};

/// Grouped bar chart, one bar series per dataset plus an optional
/// forecast series.
#[function_component(BarChart)]
pub(crate) fn bar_chart(props: &PlotProps) -> Html {
    let container_ref = use_node_ref();
    let spec = props.spec.clone();
    let forecast = props.forecast.clone();
    let div_id = props.chart_id.clone();

    use_effect_with(
        (container_ref.clone(), spec, forecast, div_id),
        move |(container_ref, spec, forecast, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let rows = spec.display_rows(forecast.as_ref());
                let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();

                let data_js = js_sys::Array::new();
                for (idx, series) in spec.series_names().into_iter().enumerate() {
                    let values: Vec<Option<f64>> =
                        rows.iter().map(|r| r.value(series)).collect();
                    let trace = Bar::new(names.clone(), values)
                        .name(series)
                        .marker(Marker::new().color(COLORS[idx % COLORS.len()]));

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    data_js.push(&js_sys::JSON::parse(&trace_json).unwrap());
                }

                if forecast.is_some() {
                    let values: Vec<Option<f64>> = rows.iter().map(|r| r.forecast).collect();
                    let trace = Bar::new(names, values)
                        .name(FORECAST_FIELD)
                        .marker(Marker::new().color(FORECAST_COLOR));

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    data_js.push(&js_sys::JSON::parse(&trace_json).unwrap());
                }

                let layout = Layout::new().bar_mode(BarMode::Group).height(400);
                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                new_plot(div_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
