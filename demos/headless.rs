use gpui_linechart::{
    ChartData, ChartResult, HighlightEvent, LineChart, Point, RenderCommand, ViewSize,
};
use tracing_subscriber::EnvFilter;

fn main() -> ChartResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut chart = LineChart::new(ChartData::from_samples([
        ("mon", 8.0),
        ("tue", 23.0),
        ("wed", 32.0),
        ("thu", 7.0),
        ("fri", 23.0),
        ("sat", 43.0),
    ]));
    chart.set_highlight_listener(|event| match event {
        HighlightEvent::Observed(highlight) => {
            println!("{}: {} at {:?}", highlight.key, highlight.value, highlight.position);
        }
        HighlightEvent::Released => println!("released"),
    });

    let size = ViewSize::new(320.0, 160.0);
    for x in [0.0, 64.0, 128.0, 192.0, 256.0, 320.0] {
        chart.drag(Point::new(x, 80.0), size)?;
    }

    let frame = chart.frame(size)?;
    for command in frame.commands() {
        match command {
            RenderCommand::FillArea { path, .. } => {
                println!("fill area with {} elements", path.elements().len());
            }
            RenderCommand::StrokeCurve { path, style, .. } => {
                println!(
                    "stroke curve with {} elements, width {}",
                    path.elements().len(),
                    style.width
                );
            }
            RenderCommand::Indicator { center, .. } => {
                println!("indicator at ({:.1}, {:.1})", center.x, center.y);
            }
        }
    }
    chart.release();
    Ok(())
}
