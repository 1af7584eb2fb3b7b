use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::{
    analytics::sort_by_hour,
    price_level::{PriceLevel, PriceThresholds},
    prices::DailyPrices,
};
use crate::utils::{
    debounce::debounced_resize_listener,
    format::{format_price, hour_label},
};

const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub prices: Rc<DailyPrices>,
    pub dark_mode: bool,
    /// Highlighted in the subtitle when set
    #[prop_or_default]
    pub current_hour: Option<u32>,
}

/// Bar chart of the day's 24 hourly prices, coloured by price level
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();
    let chart_id = format!("price-chart-{}", props.prices.date());

    {
        let container_ref = container_ref.clone();
        let chart_id = chart_id.clone();
        let prices = props.prices.clone();
        let dark_mode = props.dark_mode;
        let current_hour = props.current_hour;

        use_effect_with(
            (prices, container_ref, dark_mode, current_hour),
            move |(prices, container_ref, dark_mode, current_hour)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = Rc::new(build_chart(prices, *dark_mode, *current_hour));
                    render_chart(&container, &chart_id, &chart);

                    debounced_resize_listener(
                        move || render_chart(&container, &chart_id, &chart),
                        RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={chart_id} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

/// Hour labels and prices in hour order
pub fn series_data(prices: &DailyPrices) -> (Vec<String>, Vec<f64>) {
    sort_by_hour(prices)
        .into_iter()
        .map(|p| (hour_label(p.hour), p.price))
        .unzip()
}

fn level_pieces(thresholds: PriceThresholds, dark_mode: bool) -> Vec<VisualMapPiece> {
    vec![
        VisualMapPiece::new()
            .lte(thresholds.cheap)
            .color(PriceLevel::Cheap.color(dark_mode)),
        VisualMapPiece::new()
            .gt(thresholds.cheap)
            .lte(thresholds.medium)
            .color(PriceLevel::Medium.color(dark_mode)),
        VisualMapPiece::new()
            .gt(thresholds.medium)
            .color(PriceLevel::Expensive.color(dark_mode)),
    ]
}

fn build_chart(prices: &DailyPrices, dark_mode: bool, current_hour: Option<u32>) -> CharmingChart {
    let (x_data, y_data) = series_data(prices);

    let (title_color, axis_color, grid_color) = if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    let subtitle = current_hour
        .and_then(|hour| prices.price_at(hour))
        .map(|p| format!("Ahora ({}): {}", hour_label(p.hour), format_price(p.price)))
        .unwrap_or_default();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Precio por hora")
                .subtext(subtitle)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .visual_map(
            VisualMap::new()
                .show(false)
                .pieces(level_pieces(prices.thresholds(), dark_mode)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().rotate(45).color(axis_color).interval(1)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("€/kWh")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(y_data).bar_width("70%"))
}
