//! Strip layout solver
//!
//! Pure geometry: model + style + bounds in, segment frames and indicator
//! frame out. Nothing here is retained between passes; the control rebuilds
//! its views from a fresh solve every time.
//!
//! Icon strips reserve six fixed-width slots and horizontally center the
//! occupied group; text and hybrid strips always stretch segments across the
//! full width. The two policies are deliberately different per content type.

use segstrip_core::geometry::{Rect, Size};
use smallvec::SmallVec;

use crate::content::{ContentType, MAX_SEGMENTS};
use crate::style::{HighlightStyle, StyleConfig};

/// Resolved frames for one layout pass
#[derive(Clone, Debug, PartialEq)]
pub struct StripLayout {
    pub segments: SmallVec<[Rect; MAX_SEGMENTS]>,
    pub indicator: Rect,
}

/// Compute segment frames for `count` segments of `content_type` in `bounds`
pub fn segment_frames(
    content_type: ContentType,
    count: usize,
    bounds: Size,
) -> SmallVec<[Rect; MAX_SEGMENTS]> {
    let mut frames = SmallVec::new();
    if count == 0 {
        return frames;
    }

    match content_type {
        ContentType::Text | ContentType::Hybrid => {
            let width = bounds.width / count as f32;
            for i in 0..count {
                frames.push(Rect::new(i as f32 * width, 0.0, width, bounds.height));
            }
        }
        ContentType::Icon => {
            let width = bounds.width / MAX_SEGMENTS as f32;
            let available = bounds.width - width * (MAX_SEGMENTS - count) as f32;
            let start_x = (bounds.width - available) / 2.0;
            for i in 0..count {
                frames.push(Rect::new(start_x + i as f32 * width, 0.0, width, bounds.height));
            }
        }
    }
    frames
}

/// Indicator frame for the given segment frame and highlight style
pub fn indicator_frame(segment: Rect, style: &StyleConfig) -> Rect {
    match style.highlight_style {
        HighlightStyle::Background => {
            Rect::new(segment.x(), 0.0, segment.width(), segment.height())
        }
        HighlightStyle::TopEdge => {
            Rect::new(segment.x(), 0.0, segment.width(), style.edge_height)
        }
        HighlightStyle::BottomEdge => Rect::new(
            segment.x(),
            segment.height() - style.edge_height,
            segment.width(),
            style.edge_height,
        ),
    }
}

/// Solve a full layout pass
pub fn solve(
    content_type: ContentType,
    count: usize,
    bounds: Size,
    selected: usize,
    style: &StyleConfig,
) -> StripLayout {
    debug_assert!(selected < count.max(1), "selection past segment count");

    let segments = segment_frames(content_type, count, bounds);
    let indicator = segments
        .get(selected)
        .map(|segment| indicator_frame(*segment, style))
        .unwrap_or(Rect::ZERO);

    StripLayout { segments, indicator }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size::new(300.0, 50.0);

    #[test]
    fn test_text_segments_tile_full_width() {
        let frames = segment_frames(ContentType::Text, 3, BOUNDS);
        assert_eq!(frames.len(), 3);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.width(), 100.0);
            assert_eq!(frame.x(), i as f32 * 100.0);
            assert_eq!(frame.height(), 50.0);
        }
        // No gap or overlap between neighbours
        for pair in frames.windows(2) {
            assert_eq!(pair[0].max_x(), pair[1].x());
        }
        assert_eq!(frames.last().unwrap().max_x(), BOUNDS.width);
    }

    #[test]
    fn test_hybrid_uses_full_stretch() {
        // Hybrid follows the text policy, not the icon policy
        let frames = segment_frames(ContentType::Hybrid, 2, BOUNDS);
        assert_eq!(frames[0], Rect::new(0.0, 0.0, 150.0, 50.0));
        assert_eq!(frames[1], Rect::new(150.0, 0.0, 150.0, 50.0));
    }

    #[test]
    fn test_icon_segments_fixed_sixth_and_centered() {
        let frames = segment_frames(ContentType::Icon, 4, BOUNDS);
        let slot = BOUNDS.width / 6.0;
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_eq!(frame.width(), slot);
        }
        // The 4-segment group is centered: leading space equals trailing space
        let leading = frames[0].x();
        let trailing = BOUNDS.width - frames[3].max_x();
        assert!((leading - trailing).abs() < 1e-4);
        assert_eq!(leading, slot);
    }

    #[test]
    fn test_icon_full_house_starts_at_origin() {
        let frames = segment_frames(ContentType::Icon, 6, BOUNDS);
        assert_eq!(frames[0].x(), 0.0);
        assert_eq!(frames[5].max_x(), BOUNDS.width);
    }

    #[test]
    fn test_indicator_geometry_per_style() {
        let segment = Rect::new(100.0, 0.0, 100.0, 50.0);

        let background = StyleConfig::default();
        assert_eq!(
            indicator_frame(segment, &background),
            Rect::new(100.0, 0.0, 100.0, 50.0)
        );

        let top = StyleConfig::default()
            .highlight_style(HighlightStyle::TopEdge)
            .edge_height(3.0);
        assert_eq!(indicator_frame(segment, &top), Rect::new(100.0, 0.0, 100.0, 3.0));

        let bottom = StyleConfig::default()
            .highlight_style(HighlightStyle::BottomEdge)
            .edge_height(3.0);
        assert_eq!(
            indicator_frame(segment, &bottom),
            Rect::new(100.0, 47.0, 100.0, 3.0)
        );
    }

    #[test]
    fn test_indicator_tracks_selected_segment_width() {
        let layout = solve(ContentType::Icon, 3, BOUNDS, 2, &StyleConfig::default());
        assert_eq!(layout.indicator.width(), layout.segments[2].width());
        assert_eq!(layout.indicator.x(), layout.segments[2].x());
    }

    #[test]
    fn test_solve_is_pure() {
        let style = StyleConfig::default();
        let a = solve(ContentType::Text, 5, BOUNDS, 1, &style);
        let b = solve(ContentType::Text, 5, BOUNDS, 1, &style);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_bounds_produce_zero_frames() {
        let layout = solve(ContentType::Text, 3, Size::ZERO, 0, &StyleConfig::default());
        assert_eq!(layout.segments.len(), 3);
        for frame in &layout.segments {
            assert_eq!(frame.size, Size::ZERO);
        }
        assert_eq!(layout.indicator.size, Size::ZERO);
    }
}
