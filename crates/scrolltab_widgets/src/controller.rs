//! Controller glue
//!
//! Wires a concrete page implementation to the [`PageContent`] contract and
//! to the host's lifecycle hooks: the page forwards every scroll change to
//! the host, and the screen forwards "about to become visible again" so any
//! deferred reconciliation catches up.

use scrolltab_core::{ConfigError, EdgeInsets, HeaderConfig};

use crate::content::{PageContent, ScrollRegion};
use crate::host::{PageHost, PageTransition};

/// A list-backed page
///
/// The reference participant: a fixed number of uniform rows whose total
/// height defines the scrollable content, delegating the scroll state to an
/// inner [`ScrollRegion`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    rows: usize,
    row_height: f32,
    region: ScrollRegion,
}

impl ListPage {
    /// Create a page with `rows` uniform rows of `row_height`
    pub fn new(rows: usize, row_height: f32) -> Self {
        Self {
            rows,
            row_height,
            region: ScrollRegion::new(rows as f32 * row_height),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the first row visible under the header, clamped to the list
    pub fn first_visible_row(&self) -> usize {
        let offset = self.offset_y() + self.content_inset().top;
        let row = (offset.max(0.0) / self.row_height) as usize;
        row.min(self.rows.saturating_sub(1))
    }
}

impl PageContent for ListPage {
    fn offset_y(&self) -> f32 {
        self.region.offset_y()
    }

    fn set_offset_y(&mut self, offset: f32) {
        self.region.set_offset_y(offset);
    }

    fn content_inset(&self) -> EdgeInsets {
        self.region.content_inset()
    }

    fn set_content_inset(&mut self, insets: EdgeInsets) {
        self.region.set_content_inset(insets);
    }

    fn indicator_inset(&self) -> EdgeInsets {
        self.region.indicator_inset()
    }

    fn set_indicator_inset(&mut self, insets: EdgeInsets) {
        self.region.set_indicator_inset(insets);
    }
}

/// Host-screen adapter
///
/// Owns the page host and routes the embedder's lifecycle and scroll
/// notifications to it, mirroring how a screen controller forwards
/// `viewWillAppear`-style events.
pub struct PagerScreen<C: PageContent> {
    host: PageHost<C>,
}

impl<C: PageContent> PagerScreen<C> {
    /// Build the screen: validate the config, host the pages, and make the
    /// first page visible
    pub fn new(config: HeaderConfig, pages: Vec<C>) -> Result<Self, ConfigError> {
        let mut host = PageHost::new(config, pages)?;
        host.set_initial_page();
        Ok(Self { host })
    }

    /// The screen is about to become visible (again)
    pub fn will_appear(&mut self) {
        self.host.update_layout_if_needed();
    }

    /// A page's scroll surface moved
    pub fn scrolled(&mut self, index: usize, offset_y: f32) {
        self.host.page_scrolled(index, offset_y);
    }

    /// A tab button was tapped
    pub fn tab_pressed(&mut self, index: usize) -> Option<PageTransition> {
        self.host.press_tab(index)
    }

    /// The page host
    pub fn host(&self) -> &PageHost<C> {
        &self.host
    }

    /// Mutable access to the page host
    pub fn host_mut(&mut self) -> &mut PageHost<C> {
        &mut self.host
    }
}
