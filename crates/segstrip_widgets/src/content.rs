//! Segment content model
//!
//! Three mutually-exclusive content forms drive rendering: text-only,
//! icon-only, or paired text + icon. The model is a tagged enum with
//! statically-typed constructors; each constructor clamps its input to the
//! segment capacity and validates the one hard invariant (hybrid pairing).

use segstrip_core::geometry::Size;
use smallvec::SmallVec;

use crate::error::{Result, WidgetError};

/// Maximum number of segments a strip renders
pub const MAX_SEGMENTS: usize = 6;

/// Fixed display canvas for hybrid-mode icons
pub const ICON_CANVAS: Size = Size::new(20.0, 20.0);

/// Which content form drives rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Icon,
    Hybrid,
}

/// Opaque icon handle with a display size
///
/// Raster scaling is the host image pipeline's job; the model only records
/// the canvas the icon should be drawn into.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Host asset identifier
    pub source: String,
    /// Display canvas size
    pub size: Size,
}

impl Icon {
    pub fn new(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: source.into(),
            size: Size::new(width, height),
        }
    }

    /// The same icon drawn into a different canvas
    pub fn scaled_to(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

type Titles = SmallVec<[String; MAX_SEGMENTS]>;
type Icons = SmallVec<[Icon; MAX_SEGMENTS]>;

/// Clamp an input sequence to the first [`MAX_SEGMENTS`] elements
fn clamped<T>(items: impl IntoIterator<Item = T>) -> SmallVec<[T; MAX_SEGMENTS]> {
    let mut out: SmallVec<[T; MAX_SEGMENTS]> = SmallVec::new();
    let mut dropped = 0usize;
    for item in items {
        if out.len() < MAX_SEGMENTS {
            out.push(item);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::trace!(dropped, "segment content truncated to capacity");
    }
    out
}

/// The segment content model
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentModel {
    Text(Titles),
    Icons(Icons),
    Hybrid { titles: Titles, icons: Icons },
}

impl SegmentModel {
    /// Text-only content. Input past the capacity is silently truncated.
    pub fn from_titles<I, S>(titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Titles = clamped(titles.into_iter().map(Into::into));
        if titles.is_empty() {
            return Err(WidgetError::EmptyContent);
        }
        Ok(Self::Text(titles))
    }

    /// Icon-only content. Input past the capacity is silently truncated.
    pub fn from_icons<I>(icons: I) -> Result<Self>
    where
        I: IntoIterator<Item = Icon>,
    {
        let icons: Icons = clamped(icons);
        if icons.is_empty() {
            return Err(WidgetError::EmptyContent);
        }
        Ok(Self::Icons(icons))
    }

    /// Paired text + icon content.
    ///
    /// Each sequence is independently truncated to capacity *before* pairing,
    /// so e.g. 7 titles against 6 icons pair up cleanly. A genuine length
    /// mismatch after truncation is rejected and leaves the caller's model
    /// untouched. Icons are drawn into the fixed hybrid canvas.
    pub fn hybrid<T, S, I>(titles: T, icons: I) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = Icon>,
    {
        let titles: Titles = clamped(titles.into_iter().map(Into::into));
        let icons: Icons = clamped(icons);

        if titles.len() != icons.len() {
            tracing::warn!(
                titles = titles.len(),
                icons = icons.len(),
                "hybrid content rejected: title/icon counts differ"
            );
            return Err(WidgetError::HybridLengthMismatch {
                titles: titles.len(),
                icons: icons.len(),
            });
        }
        if titles.is_empty() {
            return Err(WidgetError::EmptyContent);
        }

        let icons: Icons = icons
            .into_iter()
            .map(|icon| icon.scaled_to(ICON_CANVAS))
            .collect();

        Ok(Self::Hybrid { titles, icons })
    }

    /// Effective segment count (after truncation)
    pub fn count(&self) -> usize {
        match self {
            Self::Text(titles) => titles.len(),
            Self::Icons(icons) => icons.len(),
            Self::Hybrid { titles, .. } => titles.len(),
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::Text,
            Self::Icons(_) => ContentType::Icon,
            Self::Hybrid { .. } => ContentType::Hybrid,
        }
    }

    /// Title for segment `index`, if this model carries text
    pub fn title(&self, index: usize) -> Option<&str> {
        match self {
            Self::Text(titles) | Self::Hybrid { titles, .. } => {
                titles.get(index).map(String::as_str)
            }
            Self::Icons(_) => None,
        }
    }

    /// Icon for segment `index`, if this model carries icons
    pub fn icon(&self, index: usize) -> Option<&Icon> {
        match self {
            Self::Icons(icons) | Self::Hybrid { icons, .. } => icons.get(index),
            Self::Text(_) => None,
        }
    }
}
