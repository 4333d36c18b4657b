use gpui_linechart::{
    ChartData, HighlightEvent, LineChart, Point, RenderCommand, ViewSize, touch_to_index,
    touch_to_path_point,
};

const WEEK: [f64; 6] = [8.0, 23.0, 32.0, 7.0, 23.0, 43.0];

#[test]
fn weekly_series_normalizes_and_builds() {
    let mut chart = LineChart::new(ChartData::from_values(WEEK));
    let series = chart.normalized().unwrap().clone();
    assert_eq!(series.max_abs(), 43.0);
    assert_eq!(series.points()[5], 1.0);
    assert!((series.points()[0] - 8.0 / 43.0).abs() < 1e-12);
    assert!((series.range() - 36.0 / 43.0).abs() < 1e-12);
    assert_eq!(chart.path().unwrap().len(), 10);
}

#[test]
fn midpoint_touch_maps_to_a_middle_sample() {
    let size = ViewSize::new(200.0, 100.0);
    let mut chart = LineChart::new(ChartData::from_values(WEEK));
    let highlight = chart
        .drag(Point::new(100.0, 40.0), size)
        .unwrap()
        .expect("touch inside view");
    assert_eq!(highlight.index, touch_to_index(100.0, 200.0, WEEK.len()) as usize);
    assert_eq!(highlight.index, 3);
    assert_eq!(highlight.value, 7.0);
    assert_eq!(chart.value().current_key(), Some(&3));
    assert!(chart.value().interaction_in_progress());

    let position = highlight.position.expect("drawable curve");
    assert!((position.x - 0.5).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&position.y));
}

#[test]
fn indicator_lands_on_vertices() {
    let mut chart = LineChart::new(ChartData::from_values(WEEK));
    let series = chart.normalized().unwrap().clone();
    let path = chart.path().unwrap().clone();
    let last = touch_to_path_point(300.0, 300.0, &path, series.len(), series.range())
        .expect("drawable curve");
    assert!((last.x - 1.0).abs() < 1e-9);
    assert!((last.y - 1.0).abs() < 1e-9);
    let lowest = touch_to_path_point(180.0, 300.0, &path, series.len(), series.range())
        .expect("drawable curve");
    assert!((lowest.x - 0.6).abs() < 1e-9);
    assert!(lowest.y.abs() < 1e-9);
}

#[test]
fn drag_session_reports_events_and_draws_indicator() {
    let events = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&events);
    let mut chart = LineChart::new(ChartData::from_samples([
        ("mon", 8.0),
        ("tue", 23.0),
        ("wed", 32.0),
    ]));
    chart.set_highlight_listener(move |event| {
        sink.lock().expect("events lock").push(event.clone());
    });
    let size = ViewSize::new(100.0, 80.0);

    chart.drag(Point::new(0.0, 0.0), size).unwrap();
    chart.drag(Point::new(100.0, 0.0), size).unwrap();
    let frame = chart.frame(size).unwrap();
    let Some(RenderCommand::Indicator { center, .. }) = frame.commands().last() else {
        panic!("expected indicator");
    };
    assert!((center.x - 100.0).abs() < 1e-6);
    assert!(center.y.abs() < 1e-6);

    chart.release();
    assert!(!chart.value().interaction_in_progress());
    assert_eq!(chart.value().current_key(), Some(&"wed"));

    let events = events.lock().expect("events lock");
    let keys: Vec<_> = events
        .iter()
        .map(|event| match event {
            HighlightEvent::Observed(highlight) => Some(highlight.key),
            HighlightEvent::Released => None,
        })
        .collect();
    assert_eq!(keys, vec![Some("mon"), Some("wed"), None]);
}
