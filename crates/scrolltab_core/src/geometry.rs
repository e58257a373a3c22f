//! Scroll geometry
//!
//! Edge insets and the per-page scroll metrics the host reads and writes.

/// Insets from the four edges of a scrollable region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Create insets with the same value on all four edges
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Create insets with only the top edge set
    ///
    /// This is the shape the page host writes when reserving space for the
    /// header above a page's content.
    pub const fn top_only(top: f32) -> Self {
        Self {
            top,
            left: 0.0,
            bottom: 0.0,
            right: 0.0,
        }
    }
}

/// The scroll state a page exposes to the host
///
/// `offset_y` is owned by the page and incrementally adjusted by the host;
/// both inset fields are owned by the host and only read by the page's
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Vertical scroll position (negative while the header overlays content)
    pub offset_y: f32,
    /// Space reserved at the edges of the content
    pub content_inset: EdgeInsets,
    /// Space reserved for the scroll indicator
    pub indicator_inset: EdgeInsets,
}
