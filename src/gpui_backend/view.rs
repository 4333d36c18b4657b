use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point as GpuiPoint, Window,
    canvas, div,
};
use tracing::warn;

use crate::chart::LineChart;
use crate::geom::Point;
use crate::render::RenderList;
use crate::view::ViewSize;

use super::paint::{ChartFrame, paint_frame};
use super::state::{ChartBounds, ChartUiState, DragMove};

/// A GPUI view that renders a [`LineChart`] and tracks left-button drags.
///
/// Pressing on the chart starts a highlight and moving keeps it following the
/// pointer. Releasing the button, inside or outside the chart, clears the
/// indicator.
pub struct GpuiLineChartView<K> {
    chart: Arc<RwLock<LineChart<K>>>,
    state: Arc<RwLock<ChartUiState>>,
}

impl<K> Clone for GpuiLineChartView<K> {
    fn clone(&self) -> Self {
        Self {
            chart: Arc::clone(&self.chart),
            state: Arc::clone(&self.state),
        }
    }
}

impl<K: Clone + Send + Sync + 'static> GpuiLineChartView<K> {
    /// Create a new GPUI view for the given chart.
    pub fn new(chart: LineChart<K>) -> Self {
        Self {
            chart: Arc::new(RwLock::new(chart)),
            state: Arc::new(RwLock::new(ChartUiState::default())),
        }
    }

    /// Get a handle for reading or mutating the chart from elsewhere.
    pub fn chart_handle(&self) -> LineChartHandle<K> {
        LineChartHandle {
            chart: Arc::clone(&self.chart),
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let touch = self
            .state
            .write()
            .expect("chart state lock")
            .begin_drag(window_point(ev.position));
        if let Some((local, size)) = touch {
            self.drag(local, size);
            cx.notify();
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let left_pressed = ev.pressed_button == Some(MouseButton::Left);
        let outcome = self
            .state
            .write()
            .expect("chart state lock")
            .drag_move(window_point(ev.position), left_pressed);
        match outcome {
            DragMove::Continue(local, size) => {
                self.drag(local, size);
                cx.notify();
            }
            DragMove::Ended => self.release(cx),
            DragMove::Idle => {}
        }
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let was_dragging = self.state.write().expect("chart state lock").end_drag();
        if was_dragging {
            self.release(cx);
        }
    }

    fn release(&self, cx: &mut Context<Self>) {
        self.chart.write().expect("chart lock").release();
        cx.notify();
    }

    fn drag(&self, touch: Point, size: ViewSize) {
        let mut chart = self.chart.write().expect("chart lock");
        if let Err(err) = chart.drag(touch, size) {
            warn!(%err, "ignoring drag on unusable chart data");
        }
    }
}

impl<K: Clone + Send + Sync + 'static> Render for GpuiLineChartView<K> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chart = Arc::clone(&self.chart);
        let state = Arc::clone(&self.state);

        div()
            .size_full()
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let bounds = ChartBounds::from_gpui(bounds);
                        state.write().expect("chart state lock").bounds = Some(bounds);
                        let render = chart
                            .write()
                            .expect("chart lock")
                            .frame(bounds.size)
                            .unwrap_or_else(|err| {
                                warn!(%err, "skipping chart frame");
                                RenderList::new()
                            });
                        ChartFrame {
                            origin: bounds.origin,
                            render,
                        }
                    },
                    move |_, frame, window, _| {
                        paint_frame(&frame, window);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle for reading or mutating a [`LineChart`] held inside a
/// [`GpuiLineChartView`].
///
/// The handle clones cheaply and can be moved into async tasks.
pub struct LineChartHandle<K> {
    chart: Arc<RwLock<LineChart<K>>>,
}

impl<K> Clone for LineChartHandle<K> {
    fn clone(&self) -> Self {
        Self {
            chart: Arc::clone(&self.chart),
        }
    }
}

impl<K> LineChartHandle<K> {
    /// Read the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&LineChart<K>) -> R) -> R {
        let chart = self.chart.read().expect("chart lock");
        f(&chart)
    }

    /// Mutate the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut LineChart<K>) -> R) -> R {
        let mut chart = self.chart.write().expect("chart lock");
        f(&mut chart)
    }
}

fn window_point(point: GpuiPoint<Pixels>) -> Point {
    Point::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}
