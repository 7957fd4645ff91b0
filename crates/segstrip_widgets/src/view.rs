//! Retained child views
//!
//! The control keeps one view description per segment plus one indicator
//! view. Every relayout replaces the whole set (clear-all, rebuild-all), so
//! repeated passes can never accumulate stale children. The host renders
//! these descriptions; they carry no platform handles.

use segstrip_core::geometry::{Color, EdgeInsets, Point, Rect};

use crate::content::{ContentType, Icon, SegmentModel};
use crate::layout::StripLayout;
use crate::style::{Font, StyleConfig};

/// Fixed content padding for icon-only segments
pub const ICON_CONTENT_INSET: f32 = 8.0;

/// Base inset for hybrid segments; the label shift is half of it
pub const HYBRID_EDGE_INSET: f32 = 8.0;

/// One selectable segment as the host should draw it
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentView {
    pub index: usize,
    pub frame: Rect,
    pub title: Option<String>,
    pub icon: Option<Icon>,
    pub title_insets: EdgeInsets,
    pub icon_insets: EdgeInsets,
    /// Content color; exactly one segment uses the highlight tint
    pub tint: Color,
    pub font: Font,
}

/// The moving selection indicator
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorView {
    pub frame: Rect,
    pub color: Color,
}

/// Full child-view set for one layout pass
#[derive(Clone, Debug, PartialEq)]
pub struct StripViews {
    pub segments: Vec<SegmentView>,
    pub indicator: IndicatorView,
}

impl Default for StripViews {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            indicator: IndicatorView {
                frame: Rect::ZERO,
                color: Color::TRANSPARENT,
            },
        }
    }
}

impl StripViews {
    /// Build the complete view set from a solved layout
    pub fn rebuild(
        model: &SegmentModel,
        style: &StyleConfig,
        layout: &StripLayout,
        selected: usize,
    ) -> Self {
        let content_type = model.content_type();
        let (title_insets, icon_insets) = content_insets(content_type);

        let segments = layout
            .segments
            .iter()
            .enumerate()
            .map(|(index, frame)| SegmentView {
                index,
                frame: *frame,
                title: model.title(index).map(str::to_owned),
                icon: model.icon(index).cloned(),
                title_insets,
                icon_insets,
                tint: if index == selected {
                    style.highlight_tint
                } else {
                    style.tint
                },
                font: style.font.clone(),
            })
            .collect();

        Self {
            segments,
            indicator: IndicatorView {
                frame: layout.indicator,
                color: style.highlight_color,
            },
        }
    }

    /// Retint segments so exactly `selected` carries the highlight tint
    pub fn set_selected(&mut self, selected: usize, style: &StyleConfig) {
        for segment in &mut self.segments {
            segment.tint = if segment.index == selected {
                style.highlight_tint
            } else {
                style.tint
            };
        }
    }

    /// Segment index under a widget-local point, if any
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        self.segments
            .iter()
            .find(|segment| segment.frame.contains(point))
            .map(|segment| segment.index)
    }
}

/// Per-content-type insets: icons get uniform padding, hybrid content shifts
/// the icon left and the label right so the pair reads centered as a group.
fn content_insets(content_type: ContentType) -> (EdgeInsets, EdgeInsets) {
    match content_type {
        ContentType::Text => (EdgeInsets::ZERO, EdgeInsets::ZERO),
        ContentType::Icon => (EdgeInsets::ZERO, EdgeInsets::all(ICON_CONTENT_INSET)),
        ContentType::Hybrid => {
            let shift = HYBRID_EDGE_INSET / 2.0;
            (
                EdgeInsets::horizontal(shift, -shift),
                EdgeInsets::horizontal(-shift, shift),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use segstrip_core::geometry::Size;

    fn text_views(selected: usize) -> (SegmentModel, StyleConfig, StripViews) {
        let model = SegmentModel::from_titles(["a", "b", "c"]).unwrap();
        let style = StyleConfig::default();
        let solved = layout::solve(
            model.content_type(),
            model.count(),
            Size::new(300.0, 50.0),
            selected,
            &style,
        );
        let views = StripViews::rebuild(&model, &style, &solved, selected);
        (model, style, views)
    }

    #[test]
    fn test_rebuild_produces_one_view_per_segment() {
        let (_, style, views) = text_views(0);
        assert_eq!(views.segments.len(), 3);
        assert_eq!(views.indicator.color, style.highlight_color);
        assert_eq!(views.segments[1].title.as_deref(), Some("b"));
        assert!(views.segments[1].icon.is_none());
    }

    #[test]
    fn test_exactly_one_segment_highlighted() {
        let (_, style, mut views) = text_views(0);
        assert_eq!(views.segments[0].tint, style.highlight_tint);
        assert_eq!(views.segments[1].tint, style.tint);

        views.set_selected(2, &style);
        let highlighted: Vec<usize> = views
            .segments
            .iter()
            .filter(|s| s.tint == style.highlight_tint)
            .map(|s| s.index)
            .collect();
        assert_eq!(highlighted, vec![2]);
    }

    #[test]
    fn test_segment_at_hit_test() {
        let (_, _, views) = text_views(0);
        assert_eq!(views.segment_at(Point::new(50.0, 25.0)), Some(0));
        assert_eq!(views.segment_at(Point::new(250.0, 25.0)), Some(2));
        assert_eq!(views.segment_at(Point::new(150.0, 80.0)), None);
    }

    #[test]
    fn test_hybrid_insets_shift_icon_left_label_right() {
        let model = SegmentModel::hybrid(
            ["a", "b"],
            vec![Icon::new("x", 32.0, 32.0), Icon::new("y", 32.0, 32.0)],
        )
        .unwrap();
        let style = StyleConfig::default();
        let solved = layout::solve(model.content_type(), 2, Size::new(200.0, 40.0), 0, &style);
        let views = StripViews::rebuild(&model, &style, &solved, 0);

        let segment = &views.segments[0];
        assert_eq!(segment.icon_insets.left, -HYBRID_EDGE_INSET / 2.0);
        assert_eq!(segment.title_insets.left, HYBRID_EDGE_INSET / 2.0);
        // Opposite edges mirror, keeping the pair centered as a group
        assert_eq!(segment.icon_insets.right, -segment.icon_insets.left);
        assert_eq!(segment.title_insets.right, -segment.title_insets.left);
    }

    #[test]
    fn test_icon_mode_padding() {
        let model = SegmentModel::from_icons(vec![Icon::new("x", 32.0, 32.0)]).unwrap();
        let style = StyleConfig::default();
        let solved = layout::solve(model.content_type(), 1, Size::new(120.0, 40.0), 0, &style);
        let views = StripViews::rebuild(&model, &style, &solved, 0);

        assert_eq!(
            views.segments[0].icon_insets,
            EdgeInsets::all(ICON_CONTENT_INSET)
        );
        assert!(views.segments[0].title.is_none());
    }
}
