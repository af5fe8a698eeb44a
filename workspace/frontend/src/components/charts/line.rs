use plotly::common::{DashType, Line, Mode, Title};
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use common::FORECAST_FIELD;

use super::{new_plot, PlotProps, COLORS, FORECAST_COLOR};

/// Multi-series line chart; the forecast overlay is drawn as a dashed
/// trace so predicted periods read differently from history.
#[function_component(LineChart)]
pub(crate) fn line_chart(props: &PlotProps) -> Html {
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
                    let trace = Scatter::new(names.clone(), values)
                        .mode(Mode::Lines)
                        .name(series)
                        .line(Line::new().color(COLORS[idx % COLORS.len()]).width(2.0));

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    data_js.push(&js_sys::JSON::parse(&trace_json).unwrap());
                }

                if forecast.is_some() {
                    let values: Vec<Option<f64>> = rows.iter().map(|r| r.forecast).collect();
                    let trace = Scatter::new(names, values)
                        .mode(Mode::Lines)
                        .name(FORECAST_FIELD)
                        .line(
                            Line::new()
                                .color(FORECAST_COLOR)
                                .width(3.0)
                                .dash(DashType::Dash),
                        );

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    data_js.push(&js_sys::JSON::parse(&trace_json).unwrap());
                }

                let layout = Layout::new()
                    .x_axis(plotly::layout::Axis::new().title(Title::with_text("Period")))
                    .height(400);
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
