//! Bar chart widget.

use crate::scroll::ScrollContent;
use fadebar_core::{
    Canvas, Color, Easing, FadeIn, FontMetrics, Size, TextStyle, Theme, DEFAULT_ACCENT,
};
use fadebar_layout::{
    compute_layout, BarEntry, ChartLayout, LayoutError, PrimitiveKind, ViewportConstraints,
    LABEL_FONT_SIZE,
};
use serde::{Deserialize, Serialize};

/// Brightness factor applied to the accent color for bar fills.
///
/// The rendered shade stays recognizably the accent while standing apart
/// from other accent-colored chrome.
pub const BAR_SHADE: f32 = 0.8;

/// Seconds between successive entries' fade-in starts.
pub const FADE_STAGGER: f64 = 0.2;

/// Seconds one entry's fade-in takes.
pub const FADE_DURATION: f64 = 0.6;

/// Paint configuration for a chart, passed in explicitly by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Accent color bars derive their fill from
    pub accent: Color,
    /// Theme the chart is drawn over
    pub theme: Theme,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            theme: Theme::Light,
        }
    }
}

impl ChartStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accent color.
    #[must_use]
    pub const fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Set the theme.
    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Fill color for bars: the accent with brightness scaled by
    /// [`BAR_SHADE`].
    #[must_use]
    pub fn bar_fill(&self) -> Color {
        self.accent.shaded(BAR_SHADE)
    }

    /// Style titles and value labels are drawn with.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            size: LABEL_FONT_SIZE,
            color: self.theme.foreground(),
            ..TextStyle::default()
        }
    }
}

/// Horizontal bar chart with fit-to-viewport layout and cascading fade-in.
///
/// Entries flow one way: [`update`](Self::update) runs the layout engine and
/// stores the result atomically; [`present`](Self::present) replays the
/// stored layout onto a canvas as a full redraw. Presentation is synchronous;
/// the fade-in schedule it produces is metadata for the host's animation
/// clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChart {
    entries: Vec<BarEntry>,
    style: ChartStyle,
    constraints: ViewportConstraints,
    metrics: FontMetrics,
    scroll: ScrollContent,
    #[serde(skip)]
    layout: Option<ChartLayout>,
    #[serde(skip)]
    fades: Vec<FadeIn>,
}

impl BarChart {
    /// Create a chart for the given viewport width.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            entries: Vec::new(),
            style: ChartStyle::default(),
            constraints: ViewportConstraints::new(width),
            metrics: FontMetrics::new(),
            scroll: ScrollContent::new(),
            layout: None,
            fades: Vec::new(),
        }
    }

    /// Set the paint style.
    #[must_use]
    pub const fn style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the full viewport constraints.
    #[must_use]
    pub const fn constraints(mut self, constraints: ViewportConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the font metrics used to measure labels.
    #[must_use]
    pub const fn metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the charted entries and recompute the layout.
    ///
    /// The new layout replaces the old one atomically: on error the chart
    /// keeps its previous entries, layout, and schedule untouched.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] from the engine.
    pub fn update(&mut self, entries: Vec<BarEntry>) -> Result<(), LayoutError> {
        let layout = compute_layout(&entries, &self.constraints, &self.metrics)?;
        self.entries = entries;
        self.layout = Some(layout);
        Ok(())
    }

    /// Re-run layout against a new viewport width.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`]; on error the previous width and layout
    /// stay in effect.
    pub fn resize(&mut self, width: f32) -> Result<(), LayoutError> {
        let mut constraints = self.constraints;
        constraints.width = width;
        let layout = compute_layout(&self.entries, &constraints, &self.metrics)?;
        self.constraints = constraints;
        self.layout = Some(layout);
        Ok(())
    }

    /// Present the stored layout: size the scroll content, clear the canvas,
    /// emit one draw command per primitive, and rebuild the fade-in schedule.
    ///
    /// Every presentation is a full redraw; nothing is diffed against the
    /// previous frame.
    pub fn present(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear();

        let Some(layout) = &self.layout else {
            self.scroll.set_content(Size::ZERO);
            self.fades.clear();
            return;
        };

        self.scroll.set_content(layout.content_size);

        let text_style = self.style.text_style();
        let bar_fill = self.style.bar_fill();

        for primitive in &layout.primitives {
            match primitive.kind {
                PrimitiveKind::Title => canvas.draw_text(
                    &self.entries[primitive.entry].title,
                    primitive.frame.origin(),
                    &text_style,
                ),
                PrimitiveKind::Bar => canvas.fill_rect(primitive.frame, bar_fill),
                PrimitiveKind::Value => canvas.draw_text(
                    &self.entries[primitive.entry].value_label(),
                    primitive.frame.origin(),
                    &text_style,
                ),
            }
        }

        self.fades = FadeIn::staggered(
            layout.entry_count,
            FADE_STAGGER,
            FADE_DURATION,
            Easing::EaseOut,
        );
    }

    /// The charted entries.
    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    /// The current layout, if one has been computed.
    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    /// Current paint style.
    #[must_use]
    pub const fn get_style(&self) -> ChartStyle {
        self.style
    }

    /// Scrollable content extent, valid after the last `present`.
    #[must_use]
    pub const fn scroll(&self) -> ScrollContent {
        self.scroll
    }

    /// Per-entry fade-in schedule from the last `present`.
    #[must_use]
    pub fn fade_schedule(&self) -> &[FadeIn] {
        &self.fades
    }

    /// Check if the chart has anything to draw.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fadebar_core::{DrawCommand, Rect, RecordingCanvas};

    fn sample_entries() -> Vec<BarEntry> {
        vec![BarEntry::new("Read", 5.0), BarEntry::new("Exercise", 12.0)]
    }

    #[test]
    fn test_bar_chart_defaults() {
        let chart = BarChart::new(400.0);
        assert!(!chart.has_data());
        assert!(chart.layout().is_none());
        assert_eq!(chart.get_style(), ChartStyle::default());
    }

    #[test]
    fn test_update_computes_layout() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");
        let layout = chart.layout().expect("layout stored");
        assert_eq!(layout.primitives.len(), 6);
        assert_eq!(layout.entry_count, 2);
    }

    #[test]
    fn test_update_error_keeps_previous_state() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");
        let before = chart.layout().expect("layout stored").clone();

        let err = chart.update(vec![BarEntry::new("bad", f64::NAN)]);
        assert!(err.is_err());
        assert_eq!(chart.layout(), Some(&before));
        assert_eq!(chart.entries().len(), 2);
    }

    #[test]
    fn test_present_emits_commands_in_layout_order() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);

        assert_eq!(canvas.command_count(), 6);
        match &canvas.commands()[0] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "Read"),
            DrawCommand::Rect { .. } => panic!("Expected title text first"),
        }
        assert!(matches!(canvas.commands()[1], DrawCommand::Rect { .. }));
        match &canvas.commands()[2] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "5"),
            DrawCommand::Rect { .. } => panic!("Expected value text third"),
        }
        match &canvas.commands()[3] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "Exercise"),
            DrawCommand::Rect { .. } => panic!("Expected second title fourth"),
        }
    }

    #[test]
    fn test_present_is_a_full_redraw() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);
        chart.present(&mut canvas);
        assert_eq!(canvas.command_count(), 6);
    }

    #[test]
    fn test_present_sets_scroll_content() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);

        // (40 + 40) * 2 + 30
        assert_eq!(chart.scroll().content(), Size::new(400.0, 190.0));
    }

    #[test]
    fn test_present_without_layout_clears() {
        let mut chart = BarChart::new(400.0);
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        chart.present(&mut canvas);
        assert!(canvas.is_empty());
        assert!(chart.fade_schedule().is_empty());
        assert_eq!(chart.scroll().content(), Size::ZERO);
    }

    #[test]
    fn test_text_color_follows_theme() {
        let mut chart = BarChart::new(400.0).style(ChartStyle::new().theme(Theme::Dark));
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);

        match &canvas.commands()[0] {
            DrawCommand::Text { style, .. } => {
                assert_eq!(style.color, Color::WHITE);
                assert_eq!(style.size, LABEL_FONT_SIZE);
            }
            DrawCommand::Rect { .. } => panic!("Expected text command"),
        }
    }

    #[test]
    fn test_bar_fill_is_shaded_accent() {
        let accent = Color::rgb(0.2, 0.47, 0.96);
        let mut chart = BarChart::new(400.0).style(ChartStyle::new().accent(accent));
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);

        match &canvas.commands()[1] {
            DrawCommand::Rect { color, .. } => {
                assert_eq!(*color, accent.shaded(BAR_SHADE));
                assert_ne!(*color, accent);
            }
            DrawCommand::Text { .. } => panic!("Expected bar command"),
        }
    }

    #[test]
    fn test_fade_schedule_cascades() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");

        let mut canvas = RecordingCanvas::new();
        chart.present(&mut canvas);

        let fades = chart.fade_schedule();
        assert_eq!(fades.len(), 2);
        assert_eq!(fades[0].delay, 0.0);
        assert!(fades[1].delay > fades[0].delay);
        assert_eq!(fades[0].duration, FADE_DURATION);
    }

    #[test]
    fn test_resize_recomputes_layout() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");
        let narrow_factor = chart.layout().expect("layout").factor;

        chart.resize(800.0).expect("fits");
        let layout = chart.layout().expect("layout");
        assert_eq!(layout.content_size.width, 800.0);
        // A wider viewport leaves more room, so the factor never grows.
        assert!(layout.factor <= narrow_factor);
    }

    #[test]
    fn test_resize_error_keeps_previous_width() {
        let mut chart = BarChart::new(400.0);
        chart.update(sample_entries()).expect("fits");

        let err = chart.resize(50.0);
        assert!(err.is_err());
        let layout = chart.layout().expect("layout");
        assert_eq!(layout.content_size.width, 400.0);
    }

    #[test]
    fn test_chart_style_serde_roundtrip() {
        let style = ChartStyle::new()
            .accent(Color::rgb(0.8, 0.3, 0.1))
            .theme(Theme::Dark);
        let json = serde_json::to_string(&style).expect("serialize");
        let back: ChartStyle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(style, back);
    }
}
