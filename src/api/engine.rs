use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Breakpoint, ChartKind, ColorSequence, DataNormalizer, HeuristicTextMeasurer, LayoutGeometry,
    MONOCHROME_COLORS, MULTI_COLORS, NormalizedSeries, Record, SeriesSpec, StackSchema,
    TextMeasurer, compute_layout, resolve_colors, resolve_container_width,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::ChartConfig;
use super::pie_frame_builder::build_pie_frame;
use super::slopegraph_frame_builder::build_slopegraph_frame;
use super::stacked_column_frame_builder::build_stacked_column_frame;

/// Receiver of the rendered content height, typically the iframe
/// embedding channel of the host page.
pub trait HeightSink {
    fn send_height(&mut self, height: f64);
}

impl<F> HeightSink for F
where
    F: FnMut(f64),
{
    fn send_height(&mut self, height: f64) {
        self(height);
    }
}

/// Summary of one completed render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    pub kind: ChartKind,
    pub breakpoint: Breakpoint,
    pub geometry: LayoutGeometry,
    pub content_height: f64,
    pub element_count: usize,
}

/// Palette a chart kind uses when the config names neither a theme nor colors.
#[must_use]
pub fn default_palette(kind: ChartKind) -> &'static [&'static str] {
    match kind {
        ChartKind::Pie | ChartKind::StackedColumn => &MULTI_COLORS,
        ChartKind::Slopegraph => &MONOCHROME_COLORS,
    }
}

/// Render entry point for one embedded graphic.
///
/// Holds the page's immutable records and configuration. Every call to
/// [`ChartEngine::render`] reruns normalize, theme, layout, scales and label
/// wrapping from scratch; nothing derived is cached between renders.
pub struct ChartEngine<R: Renderer, M: TextMeasurer = HeuristicTextMeasurer> {
    renderer: R,
    measurer: M,
    kind: ChartKind,
    records: Vec<Record>,
    config: ChartConfig,
    series_spec: SeriesSpec,
    front_classes: Vec<String>,
    height_sink: Option<Box<dyn HeightSink>>,
}

impl<R: Renderer> ChartEngine<R, HeuristicTextMeasurer> {
    pub fn new(
        renderer: R,
        kind: ChartKind,
        records: Vec<Record>,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        Self::with_measurer(
            renderer,
            HeuristicTextMeasurer::default(),
            kind,
            records,
            config,
        )
    }
}

impl<R: Renderer, M: TextMeasurer> ChartEngine<R, M> {
    /// Creates an engine with an explicit text-measurement backend.
    ///
    /// Fails when `records` is empty; stacked columns derive their segment
    /// order from the first record.
    pub fn with_measurer(
        renderer: R,
        measurer: M,
        kind: ChartKind,
        records: Vec<Record>,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "chart requires at least one record".to_owned(),
            ));
        }
        let series_spec = match kind {
            ChartKind::Pie => SeriesSpec::pie(),
            ChartKind::Slopegraph => SeriesSpec::slopegraph(),
            ChartKind::StackedColumn => {
                SeriesSpec::StackedColumn(StackSchema::from_records(&records)?)
            }
        };
        debug!(?kind, records = records.len(), "chart engine created");
        Ok(Self {
            renderer,
            measurer,
            kind,
            records,
            config,
            series_spec,
            front_classes: Vec::new(),
            height_sink: None,
        })
    }

    /// Replaces the field mapping, e.g. a pie reading `share` instead of `amt`
    /// or an explicit stack order.
    pub fn set_series_spec(&mut self, spec: SeriesSpec) -> ChartResult<()> {
        let matches_kind = matches!(
            (&spec, self.kind),
            (SeriesSpec::Pie { .. }, ChartKind::Pie)
                | (SeriesSpec::Slopegraph { .. }, ChartKind::Slopegraph)
                | (SeriesSpec::StackedColumn(_), ChartKind::StackedColumn)
        );
        if !matches_kind {
            return Err(ChartError::InvalidConfig(format!(
                "series spec does not match chart kind {:?}",
                self.kind
            )));
        }
        self.series_spec = spec;
        Ok(())
    }

    pub fn set_height_sink(&mut self, sink: Box<dyn HeightSink>) {
        self.height_sink = Some(sink);
    }

    /// Paints every element carrying `class` above the rest on each render.
    pub fn bring_to_front(&mut self, class: impl Into<String>) {
        self.front_classes.push(class.into());
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Normalizes the records with the configured coercion policy.
    pub fn normalized_series(&self) -> ChartResult<NormalizedSeries> {
        DataNormalizer::new(self.config.coercion).normalize(&self.records, &self.series_spec)
    }

    /// Colors for this render, from theme, explicit list or the kind's default.
    #[must_use]
    pub fn color_sequence(&self) -> ColorSequence {
        resolve_colors(self.config.theme_source(), default_palette(self.kind))
    }

    /// Geometry for `container_width`, falling back to the configured default width.
    #[must_use]
    pub fn layout(&self, container_width: Option<f64>) -> LayoutGeometry {
        let width = resolve_container_width(container_width, self.config.default_width());
        compute_layout(
            width,
            self.kind,
            self.config.margin_overrides(),
            self.config.breakpoints(),
        )
    }

    /// Runs the full pipeline and returns the frame without drawing it.
    pub fn build_render_frame(&self, container_width: Option<f64>) -> ChartResult<RenderFrame> {
        let series = self.normalized_series()?;
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "chart requires at least one record".to_owned(),
            ));
        }
        let colors = self.color_sequence();
        let geometry = self.layout(container_width).validate()?;

        let mut frame = match &series {
            NormalizedSeries::Pie(slices) => {
                build_pie_frame(slices, geometry, &colors, self.config.show_labels())
            }
            NormalizedSeries::Slopegraph(rows) => build_slopegraph_frame(
                rows,
                geometry,
                &colors,
                self.config.start_label(),
                self.config.end_label(),
                &self.measurer,
            )?,
            NormalizedSeries::StackedColumn(columns) => {
                build_stacked_column_frame(columns, geometry, &colors, &self.measurer)?
            }
        };

        for class in &self.front_classes {
            let moved = frame.move_to_front(class);
            trace!(class = class.as_str(), moved, "moved elements to front");
        }
        Ok(frame)
    }

    /// Renders for a new container width and reports the content height.
    ///
    /// `None` (or a zero width) uses the configured default width.
    pub fn render(&mut self, container_width: Option<f64>) -> ChartResult<RenderReport> {
        let frame = self.build_render_frame(container_width)?;
        let geometry = self.layout(container_width);
        self.renderer.render(&frame)?;

        let content_height = frame.height;
        if let Some(sink) = self.height_sink.as_mut() {
            sink.send_height(content_height);
        }

        let report = RenderReport {
            kind: self.kind,
            breakpoint: geometry.breakpoint,
            geometry,
            content_height,
            element_count: frame.elements.len(),
        };
        debug!(
            kind = ?report.kind,
            breakpoint = ?report.breakpoint,
            content_height,
            elements = report.element_count,
            "rendered chart"
        );
        Ok(report)
    }
}

impl<R: Renderer + std::fmt::Debug, M: TextMeasurer + std::fmt::Debug> std::fmt::Debug
    for ChartEngine<R, M>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartEngine")
            .field("renderer", &self.renderer)
            .field("measurer", &self.measurer)
            .field("kind", &self.kind)
            .field("records", &self.records.len())
            .field("config", &self.config)
            .field("front_classes", &self.front_classes)
            .field("height_sink", &self.height_sink.is_some())
            .finish()
    }
}
