//! GPUI integration for gpui_linechart.
//!
//! This module provides a GPUI view that renders a [`LineChart`](crate::chart::LineChart)
//! and turns left-button drags into highlight updates.

mod paint;
mod state;
mod view;

pub use view::{GpuiLineChartView, LineChartHandle};
