//! Line chart entry points and builders.

use std::fmt;

use tracing::debug;

use crate::config::ChartConfig;
use crate::curve::{CurvePath, build_path};
use crate::error::ChartResult;
use crate::geom::{Point, Step};
use crate::interaction::{ChartValue, Highlight, HighlightEvent, LineInteraction};
use crate::normalize::NormalizedSeries;
use crate::render::{FrameStyle, RenderList, build_line_frame};
use crate::series::ChartData;
use crate::style::{ChartStyle, LineStyle};
use crate::transform::{PathScale, Transform};
use crate::view::ViewSize;

/// Callback receiving highlight events.
pub type HighlightListener<K> = Box<dyn FnMut(&HighlightEvent<K>) + Send + Sync>;

#[derive(Debug, Clone)]
struct CurveCache {
    generation: u64,
    normalized: NormalizedSeries,
    path: CurvePath,
}

impl CurveCache {
    fn build<K>(data: &ChartData<K>) -> ChartResult<Self> {
        let normalized = data.normalized()?;
        let path = build_path(normalized.points(), Step::UNIT);
        debug!(
            points = normalized.len(),
            segments = path.len(),
            length = path.arclen(),
            generation = data.generation(),
            "rebuilt curve path"
        );
        Ok(Self {
            generation: data.generation(),
            normalized,
            path,
        })
    }
}

fn refresh_curve<'a, K>(
    slot: &'a mut Option<CurveCache>,
    data: &ChartData<K>,
) -> ChartResult<&'a CurveCache> {
    let cache = match slot.take() {
        Some(cache) if cache.generation == data.generation() => cache,
        _ => CurveCache::build(data)?,
    };
    Ok(&*slot.insert(cache))
}

/// A single smooth line with touch highlighting.
///
/// The chart owns its data and rebuilds the curve lazily whenever the data
/// generation changes.
pub struct LineChart<K> {
    data: ChartData<K>,
    style: ChartStyle,
    line_style: LineStyle,
    config: ChartConfig,
    cache: Option<CurveCache>,
    interaction: LineInteraction<K>,
    listener: Option<HighlightListener<K>>,
}

impl<K: fmt::Debug> fmt::Debug for LineChart<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChart")
            .field("data", &self.data)
            .field("style", &self.style)
            .field("line_style", &self.line_style)
            .field("config", &self.config)
            .field("interaction", &self.interaction)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<K: Clone> LineChart<K> {
    /// Create a chart with default styling.
    pub fn new(data: ChartData<K>) -> Self {
        Self {
            data,
            style: ChartStyle::default(),
            line_style: LineStyle::default(),
            config: ChartConfig::default(),
            cache: None,
            interaction: LineInteraction::new(),
            listener: None,
        }
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> LineChartBuilder<K> {
        LineChartBuilder::default()
    }

    /// Access the chart data.
    pub fn data(&self) -> &ChartData<K> {
        &self.data
    }

    /// Replace the chart data wholesale.
    pub fn set_data(&mut self, data: ChartData<K>) {
        self.data = data;
        self.cache = None;
        debug!(count = self.data.len(), "replaced chart data");
    }

    /// Replace every sample, keeping the data's generation history.
    pub fn set_samples<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        self.data.set_samples(iter);
    }

    /// Append a sample and return its index.
    pub fn push(&mut self, key: K, value: f64) -> usize {
        self.data.push(key, value)
    }

    /// Access the chart colors.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Access the stroke styling.
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    /// Access the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The observed value.
    pub fn value(&self) -> &ChartValue<K> {
        self.interaction.value()
    }

    /// Indicator position in view fraction space while a touch is active.
    pub fn indicator(&self) -> Option<Point> {
        self.interaction.indicator()
    }

    /// Register a callback for highlight events, replacing any previous one.
    pub fn set_highlight_listener(
        &mut self,
        listener: impl FnMut(&HighlightEvent<K>) + Send + Sync + 'static,
    ) {
        self.listener = Some(Box::new(listener));
    }

    /// Normalized view of the current data.
    pub fn normalized(&mut self) -> ChartResult<&NormalizedSeries> {
        Ok(&refresh_curve(&mut self.cache, &self.data)?.normalized)
    }

    /// Curve through the current data, rebuilt if the data changed.
    pub fn path(&mut self) -> ChartResult<&CurvePath> {
        Ok(&refresh_curve(&mut self.cache, &self.data)?.path)
    }

    /// Handle a touch down or move at `touch` in a view of `size`.
    pub fn drag(&mut self, touch: Point, size: ViewSize) -> ChartResult<Option<Highlight<K>>> {
        let curve = refresh_curve(&mut self.cache, &self.data)?;
        let highlight = self.interaction.drag(
            touch,
            size,
            &self.data,
            &curve.path,
            &curve.normalized,
            self.config.hit_samples,
        );
        if let (Some(listener), Some(highlight)) = (self.listener.as_mut(), highlight.as_ref()) {
            listener(&HighlightEvent::Observed(highlight.clone()));
        }
        Ok(highlight)
    }

    /// Handle the end of a touch.
    pub fn release(&mut self) {
        self.interaction.release();
        if let Some(listener) = self.listener.as_mut() {
            listener(&HighlightEvent::Released);
        }
    }

    /// Build the draw commands for a view of `size`.
    ///
    /// Degenerate geometry (fewer than two samples, a flat series, an empty
    /// view) produces an empty list.
    pub fn frame(&mut self, size: ViewSize) -> ChartResult<RenderList> {
        let mut out = RenderList::new();
        let curve = refresh_curve(&mut self.cache, &self.data)?;
        let Some(scale) = PathScale::new(curve.normalized.len(), curve.normalized.range(), Step::UNIT)
        else {
            return Ok(out);
        };
        let Some(transform) = Transform::new(scale, size) else {
            return Ok(out);
        };
        let style = FrameStyle {
            chart: &self.style,
            line: self.line_style,
            config: &self.config,
        };
        build_line_frame(
            &curve.path,
            &transform,
            style,
            self.interaction.indicator(),
            &mut out,
        );
        Ok(out)
    }
}

/// Builder for configuring a chart before construction.
#[derive(Debug)]
pub struct LineChartBuilder<K> {
    data: ChartData<K>,
    style: ChartStyle,
    line_style: LineStyle,
    config: ChartConfig,
}

impl<K> Default for LineChartBuilder<K> {
    fn default() -> Self {
        Self {
            data: ChartData::default(),
            style: ChartStyle::default(),
            line_style: LineStyle::default(),
            config: ChartConfig::default(),
        }
    }
}

impl<K: Clone> LineChartBuilder<K> {
    /// Set the chart data.
    pub fn data(mut self, data: ChartData<K>) -> Self {
        self.data = data;
        self
    }

    /// Set the chart colors.
    pub fn style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the stroke styling.
    pub fn line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the configuration.
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the chart, validating the configuration.
    pub fn build(self) -> ChartResult<LineChart<K>> {
        self.config.validate()?;
        let mut chart = LineChart::new(self.data);
        chart.style = self.style;
        chart.line_style = self.line_style;
        chart.config = self.config;
        Ok(chart)
    }
}
