//! Segmented control widget
//!
//! A row of up to six mutually-exclusive segments with a spring-animated
//! highlight indicator. The indicator runs a two-state FSM: idle while
//! resting on the selection, animating while the spring is in flight. A new
//! activation during flight retargets the spring in place (last-write-wins,
//! nothing is queued).

use segstrip_animation::spring::{Spring, SpringConfig};
use segstrip_core::events::{event_types, Event, EventData};
use segstrip_core::fsm::StateMachine;
use segstrip_core::geometry::{Color, Point, Rect, Size};

use crate::content::{ContentType, Icon, SegmentModel};
use crate::context::WidgetContext;
use crate::error::{Result, WidgetError};
use crate::layout;
use crate::style::{Font, HighlightStyle, StyleConfig};
use crate::view::StripViews;
use crate::widget::WidgetId;

/// Indicator states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const ANIMATING: u32 = 1;
}

/// FSM events
mod fsm_events {
    pub const ACTIVATE: u32 = 1;
    pub const SETTLED: u32 = 2;
}

/// Observer invoked synchronously after each activation with
/// `(control, selected index)`
pub type SelectionObserver = Box<dyn FnMut(WidgetId, usize) + Send>;

/// Segmented control widget
pub struct SegmentedControl {
    id: WidgetId,
    model: SegmentModel,
    style: StyleConfig,
    selected: usize,
    bounds: Size,
    views: StripViews,
    indicator_spring: Spring,
    on_change: Option<SelectionObserver>,
}

impl SegmentedControl {
    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, fsm_events::ACTIVATE, states::ANIMATING)
            // Re-activation mid-flight restarts the animation target
            .on(states::ANIMATING, fsm_events::ACTIVATE, states::ANIMATING)
            .on(states::ANIMATING, fsm_events::SETTLED, states::IDLE)
            .build()
    }

    fn with_model(
        ctx: &mut WidgetContext,
        model: SegmentModel,
        bounds: Size,
        style: StyleConfig,
        on_change: Option<SelectionObserver>,
    ) -> Self {
        let id = ctx.register_widget_with_fsm(Self::create_fsm());
        let mut control = Self {
            id,
            model,
            style,
            selected: 0,
            bounds,
            views: StripViews::default(),
            indicator_spring: Spring::new(SpringConfig::indicator(), 0.0),
            on_change,
        };
        control.relayout();
        control
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Currently selected segment, 0-based
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Effective segment count (after truncation)
    pub fn segment_count(&self) -> usize {
        self.model.count()
    }

    pub fn content_type(&self) -> ContentType {
        self.model.content_type()
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The retained child views as the host should draw them
    pub fn views(&self) -> &StripViews {
        &self.views
    }

    /// Frame of segment `index` from the last layout pass
    pub fn segment_frame(&self, index: usize) -> Option<Rect> {
        self.views.segments.get(index).map(|s| s.frame)
    }

    /// Current indicator frame (mid-animation frames included)
    pub fn indicator_frame(&self) -> Rect {
        self.views.indicator.frame
    }

    /// Set the selection observer
    pub fn set_on_change<F: FnMut(WidgetId, usize) + Send + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Content mutation
    // ------------------------------------------------------------------

    /// Replace the model with text-only content
    pub fn set_titles<I, S>(&mut self, titles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_model(SegmentModel::from_titles(titles)?);
        Ok(())
    }

    /// Replace the model with icon-only content
    pub fn set_icons<I>(&mut self, icons: I) -> Result<()>
    where
        I: IntoIterator<Item = Icon>,
    {
        self.replace_model(SegmentModel::from_icons(icons)?);
        Ok(())
    }

    /// Replace the model with paired text + icon content. A length mismatch
    /// is rejected and leaves the existing model untouched.
    pub fn set_pairs<T, S, I>(&mut self, titles: T, icons: I) -> Result<()>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = Icon>,
    {
        self.replace_model(SegmentModel::hybrid(titles, icons)?);
        Ok(())
    }

    fn replace_model(&mut self, model: SegmentModel) {
        self.model = model;
        // Selection is derived state; repair it when the count shrinks
        self.selected = self.selected.min(self.model.count() - 1);
        self.relayout();
    }

    // ------------------------------------------------------------------
    // Style mutation (each triggers a full relayout)
    // ------------------------------------------------------------------

    pub fn set_highlight_color(&mut self, color: Color) {
        self.style.highlight_color = color;
        self.relayout();
    }

    pub fn set_tint(&mut self, color: Color) {
        self.style.tint = color;
        self.relayout();
    }

    pub fn set_highlight_tint(&mut self, color: Color) {
        self.style.highlight_tint = color;
        self.relayout();
    }

    pub fn set_edge_height(&mut self, height: f32) {
        self.style.edge_height = height;
        self.relayout();
    }

    pub fn set_highlight_style(&mut self, style: HighlightStyle) {
        self.style.highlight_style = style;
        self.relayout();
    }

    pub fn set_font(&mut self, font: Font) {
        self.style.font = font;
        self.relayout();
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Recompute all geometry and rebuild the child views.
    ///
    /// Idempotent: a second call with unchanged model/style/bounds produces
    /// identical views. All prior children are replaced wholesale, so
    /// repeated resize passes never accumulate stale views.
    pub fn relayout(&mut self) {
        let solved = layout::solve(
            self.model.content_type(),
            self.model.count(),
            self.bounds,
            self.selected,
            &self.style,
        );
        self.views = StripViews::rebuild(&self.model, &self.style, &solved, self.selected);

        let target_x = solved.indicator.x();
        if self.indicator_spring.is_settled() {
            self.indicator_spring.snap_to(target_x);
        } else {
            // Geometry moved under an in-flight animation; redirect it
            self.indicator_spring.set_target(target_x);
        }
        self.views.indicator.frame = solved.indicator.with_x(self.indicator_spring.value());

        tracing::debug!(
            count = self.model.count(),
            content_type = ?self.model.content_type(),
            width = self.bounds.width,
            "strip relayout"
        );
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Activate segment `index`, as the input layer does on tap.
    ///
    /// Retargets the indicator spring, retints segments so exactly the new
    /// selection is highlighted, updates the selection, and notifies the
    /// observer synchronously. Activating the current segment replays the
    /// transition and re-notifies; observers that care can dedupe.
    pub fn activate(&mut self, ctx: &mut WidgetContext, index: usize) -> Result<()> {
        let count = self.model.count();
        if index >= count {
            return Err(WidgetError::SegmentOutOfRange { index, count });
        }

        self.selected = index;
        self.views.set_selected(index, &self.style);

        // Width/y/height apply immediately; only x animates
        let segment = self.views.segments[index].frame;
        let target = layout::indicator_frame(segment, &self.style);
        self.indicator_spring.set_target(target.x());
        self.views.indicator.frame = target.with_x(self.indicator_spring.value());

        ctx.send_fsm(self.id, fsm_events::ACTIVATE);
        ctx.mark_dirty(self.id);

        tracing::debug!(index, "segment activated");

        if let Some(callback) = self.on_change.as_mut() {
            callback(self.id, index);
        }
        Ok(())
    }

    /// Handle a host event: pointer-up activates the segment under the
    /// pointer, resize updates bounds and relayouts. Other events are
    /// ignored.
    pub fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        match event.event_type {
            event_types::POINTER_UP => {
                if let Some((x, y)) = event.pointer_position() {
                    if let Some(index) = self.views.segment_at(Point::new(x, y)) {
                        // Index came from hit-testing live frames
                        let _ = self.activate(ctx, index);
                    }
                }
            }
            event_types::RESIZE => {
                if let EventData::Resize { width, height } = event.data {
                    self.bounds = Size::new(width, height);
                    self.relayout();
                }
            }
            _ => {}
        }
    }

    /// Advance the indicator animation (call each frame)
    pub fn tick(&mut self, ctx: &mut WidgetContext, dt: f32) {
        if ctx.get_fsm_state(self.id) != Some(states::ANIMATING) {
            return;
        }

        self.indicator_spring.step(dt);
        self.views.indicator.frame = self
            .views
            .indicator
            .frame
            .with_x(self.indicator_spring.value());
        ctx.mark_dirty(self.id);

        if self.indicator_spring.is_settled() {
            ctx.send_fsm(self.id, fsm_events::SETTLED);
        }
    }
}

// ----------------------------------------------------------------------
// Builder
// ----------------------------------------------------------------------

enum ModelSpec {
    Text(Vec<String>),
    Icons(Vec<Icon>),
    Hybrid(Vec<String>, Vec<Icon>),
}

/// Builder for creating segmented controls
pub struct SegmentedControlBuilder {
    spec: ModelSpec,
    style: StyleConfig,
    bounds: Size,
    on_change: Option<SelectionObserver>,
}

impl SegmentedControlBuilder {
    fn new(spec: ModelSpec) -> Self {
        Self {
            spec,
            style: StyleConfig::default(),
            bounds: Size::ZERO,
            on_change: None,
        }
    }

    /// Set the control's frame size
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.bounds = Size::new(width, height);
        self
    }

    /// Set the indicator geometry variant
    pub fn highlight_style(mut self, style: HighlightStyle) -> Self {
        self.style.highlight_style = style;
        self
    }

    /// Set the indicator fill color
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.style.highlight_color = color;
        self
    }

    /// Set the unselected content color
    pub fn tint(mut self, color: Color) -> Self {
        self.style.tint = color;
        self
    }

    /// Set the selected content color
    pub fn highlight_tint(mut self, color: Color) -> Self {
        self.style.highlight_tint = color;
        self
    }

    /// Set the edge-highlight bar thickness
    pub fn edge_height(mut self, height: f32) -> Self {
        self.style.edge_height = height;
        self
    }

    /// Set the label font
    pub fn font(mut self, font: Font) -> Self {
        self.style.font = font;
        self
    }

    /// Set the selection observer
    pub fn on_change<F: FnMut(WidgetId, usize) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Validate the content and build the control
    pub fn build(self, ctx: &mut WidgetContext) -> Result<SegmentedControl> {
        let model = match self.spec {
            ModelSpec::Text(titles) => SegmentModel::from_titles(titles)?,
            ModelSpec::Icons(icons) => SegmentModel::from_icons(icons)?,
            ModelSpec::Hybrid(titles, icons) => SegmentModel::hybrid(titles, icons)?,
        };
        Ok(SegmentedControl::with_model(
            ctx,
            model,
            self.bounds,
            self.style,
            self.on_change,
        ))
    }
}

/// Create a text-only segmented control
pub fn segmented<I, S>(titles: I) -> SegmentedControlBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SegmentedControlBuilder::new(ModelSpec::Text(
        titles.into_iter().map(Into::into).collect(),
    ))
}

/// Create an icon-only segmented control
pub fn segmented_icons<I>(icons: I) -> SegmentedControlBuilder
where
    I: IntoIterator<Item = Icon>,
{
    SegmentedControlBuilder::new(ModelSpec::Icons(icons.into_iter().collect()))
}

/// Create a text + icon segmented control
pub fn segmented_hybrid<T, S, I>(titles: T, icons: I) -> SegmentedControlBuilder
where
    T: IntoIterator<Item = S>,
    S: Into<String>,
    I: IntoIterator<Item = Icon>,
{
    SegmentedControlBuilder::new(ModelSpec::Hybrid(
        titles.into_iter().map(Into::into).collect(),
        icons.into_iter().collect(),
    ))
}
