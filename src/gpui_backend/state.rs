use gpui::{Bounds, Pixels};

use crate::geom::Point;
use crate::view::ViewSize;

/// Placement of the chart canvas inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartBounds {
    pub(crate) origin: Point,
    pub(crate) size: ViewSize,
}

impl ChartBounds {
    pub(crate) fn from_gpui(bounds: Bounds<Pixels>) -> Self {
        Self {
            origin: Point::new(
                f64::from(f32::from(bounds.origin.x)),
                f64::from(f32::from(bounds.origin.y)),
            ),
            size: ViewSize::new(
                f64::from(f32::from(bounds.size.width)),
                f64::from(f32::from(bounds.size.height)),
            ),
        }
    }

    pub(crate) fn to_local(self, window_point: Point) -> Point {
        Point::new(window_point.x - self.origin.x, window_point.y - self.origin.y)
    }

    pub(crate) fn contains(self, window_point: Point) -> bool {
        let local = self.to_local(window_point);
        local.x >= 0.0 && local.x <= self.size.width && local.y >= 0.0 && local.y <= self.size.height
    }
}

/// Outcome of a pointer move for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragMove {
    Idle,
    Continue(Point, ViewSize),
    Ended,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ChartUiState {
    pub(crate) bounds: Option<ChartBounds>,
    pub(crate) dragging: bool,
}

impl ChartUiState {
    /// Start a drag if the press landed on the chart; returns the local touch.
    pub(crate) fn begin_drag(&mut self, window_point: Point) -> Option<(Point, ViewSize)> {
        let bounds = self.bounds?;
        if !bounds.contains(window_point) {
            return None;
        }
        self.dragging = true;
        Some((bounds.to_local(window_point), bounds.size))
    }

    /// Route a move event. A move without the left button held ends the
    /// drag, since the release may have happened outside the chart.
    pub(crate) fn drag_move(&mut self, window_point: Point, left_pressed: bool) -> DragMove {
        if !self.dragging {
            return DragMove::Idle;
        }
        if !left_pressed {
            self.dragging = false;
            return DragMove::Ended;
        }
        match self.bounds {
            Some(bounds) => DragMove::Continue(bounds.to_local(window_point), bounds.size),
            None => DragMove::Idle,
        }
    }

    /// End a drag; returns whether one was active.
    pub(crate) fn end_drag(&mut self) -> bool {
        std::mem::take(&mut self.dragging)
    }
}
