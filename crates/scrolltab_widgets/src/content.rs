//! Page content contract
//!
//! Any scrollable page takes part in header synchronization through this
//! capability set: expose the vertical offset, the content inset, and the
//! scroll-indicator inset, and report every offset change to the host
//! (`PageHost::page_scrolled`). Pages lacking the capability are simply not
//! constructed as host participants; there is no downcasting.

use scrolltab_core::{EdgeInsets, ScrollMetrics};

/// The scrollable-region capability a page exposes to the host
///
/// The offset is owned by the page and incrementally adjusted by the host;
/// the insets are owned by the host and written once a page becomes active.
pub trait PageContent {
    /// Current vertical scroll offset
    fn offset_y(&self) -> f32;

    /// Set the vertical scroll offset
    fn set_offset_y(&mut self, offset: f32);

    /// Current content insets
    fn content_inset(&self) -> EdgeInsets;

    /// Set the content insets
    fn set_content_inset(&mut self, insets: EdgeInsets);

    /// Current scroll-indicator insets
    fn indicator_inset(&self) -> EdgeInsets;

    /// Set the scroll-indicator insets
    fn set_indicator_inset(&mut self, insets: EdgeInsets);

    /// Set only the top scroll-indicator inset, keeping the other edges
    fn set_indicator_inset_top(&mut self, top: f32) {
        let mut insets = self.indicator_inset();
        insets.top = top;
        self.set_indicator_inset(insets);
    }

    /// Snapshot of the full scroll state
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset_y: self.offset_y(),
            content_inset: self.content_inset(),
            indicator_inset: self.indicator_inset(),
        }
    }
}

/// A plain scrollable region
///
/// The reference implementation of [`PageContent`], used by the controller
/// glue and anywhere a page needs nothing beyond the raw scroll state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollRegion {
    metrics: ScrollMetrics,
    /// Content height (informational; the host never clamps against it)
    content_height: f32,
}

impl ScrollRegion {
    /// Create a region with the given content height
    pub fn new(content_height: f32) -> Self {
        Self {
            metrics: ScrollMetrics::default(),
            content_height,
        }
    }

    /// Content height of the region
    pub fn content_height(&self) -> f32 {
        self.content_height
    }
}

impl PageContent for ScrollRegion {
    fn offset_y(&self) -> f32 {
        self.metrics.offset_y
    }

    fn set_offset_y(&mut self, offset: f32) {
        self.metrics.offset_y = offset;
    }

    fn content_inset(&self) -> EdgeInsets {
        self.metrics.content_inset
    }

    fn set_content_inset(&mut self, insets: EdgeInsets) {
        self.metrics.content_inset = insets;
    }

    fn indicator_inset(&self) -> EdgeInsets {
        self.metrics.indicator_inset
    }

    fn set_indicator_inset(&mut self, insets: EdgeInsets) {
        self.metrics.indicator_inset = insets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_top_preserves_other_edges() {
        let mut region = ScrollRegion::new(1000.0);
        region.set_indicator_inset(EdgeInsets {
            top: 280.0,
            left: 0.0,
            bottom: 12.0,
            right: 0.0,
        });

        region.set_indicator_inset_top(44.0);
        assert_eq!(region.indicator_inset().top, 44.0);
        assert_eq!(region.indicator_inset().bottom, 12.0);
    }

    #[test]
    fn test_metrics_snapshot() {
        let mut region = ScrollRegion::new(1000.0);
        region.set_offset_y(-120.0);
        region.set_content_inset(EdgeInsets::top_only(280.0));

        let metrics = region.metrics();
        assert_eq!(metrics.offset_y, -120.0);
        assert_eq!(metrics.content_inset.top, 280.0);
    }
}
