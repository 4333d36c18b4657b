use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gpui_linechart::{
    ChartConfig, ChartData, ChartStyle, ColorGradient, GpuiLineChartView, HighlightEvent,
    LineChart, LineStyle,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(360.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let data = ChartData::from_samples(
                ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]
                    .into_iter()
                    .zip([8.0, 23.0, 32.0, 7.0, 23.0, 43.0, 18.0]),
            );
            let style = ChartStyle::new(ColorGradient::RED_BLACK, ColorGradient::GREEN_RED);
            let config = ChartConfig {
                show_background: true,
                ..Default::default()
            };

            let mut chart = LineChart::builder()
                .data(data)
                .style(style)
                .line_style(LineStyle::with_width(4.0))
                .config(config)
                .build()
                .expect("valid chart config");
            chart.set_highlight_listener(|event| {
                if let HighlightEvent::Observed(highlight) = event {
                    info!(day = highlight.key, value = highlight.value, "highlight");
                }
            });

            cx.new(|_| GpuiLineChartView::new(chart))
        })
        .unwrap();
    });
}
