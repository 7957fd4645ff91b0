//! Widget error types
//!
//! Malformed inputs are rejected at the mutation boundary with a descriptive
//! error and the widget state left untouched. Over-long content arrays are
//! not errors; they are silently truncated to the segment capacity.

use thiserror::Error;

/// Widget-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
    /// Content arrays must carry at least one segment
    #[error("segment content is empty")]
    EmptyContent,

    /// Hybrid content requires matching title/icon counts after truncation
    #[error("hybrid content length mismatch: {titles} titles vs {icons} icons")]
    HybridLengthMismatch { titles: usize, icons: usize },

    /// Activation index past the effective segment count
    #[error("segment index {index} out of range for {count} segments")]
    SegmentOutOfRange { index: usize, count: usize },
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
