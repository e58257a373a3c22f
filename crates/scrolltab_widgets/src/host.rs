//! Page host
//!
//! Owns the paged set of scrollable contents and the collapsing header, and
//! runs the synchronization state machine that keeps the header position,
//! the active page's content inset, and the active page's scroll offset
//! mutually consistent across three triggers: vertical scrolling inside a
//! page, horizontal swipe paging, and tab-button taps. Each trigger leaves
//! the system in a state that is a pure function of the current page offset,
//! with no visible jump and no double-applied scroll delta.
//!
//! Single-threaded by construction: every entry point takes `&mut self` and
//! is expected to run on one UI event loop. Index lookups that can fail
//! (no visible page yet, page not found) are silent no-ops; they only occur
//! in benign transient states and the next event re-derives everything.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use scrolltab_core::{ConfigError, EdgeInsets, HeaderConfig, SyncEvent, SyncState};

use crate::content::PageContent;
use crate::header::HeaderView;

new_key_type! {
    /// Unique identifier for a hosted page
    pub struct PageId;
}

/// Direction of an animated page switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Reverse,
}

/// A tap-initiated page switch for the embedder to animate
///
/// The embedder starts the animation in the given direction and calls
/// [`PageHost::finish_transition`] from its completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    pub target: usize,
    pub direction: PageDirection,
}

/// Host for a fixed, ordered set of scrollable pages under one header
///
/// Pages are created once at construction and live for the lifetime of the
/// paging screen; steady-state operation only mutates offsets, insets, and
/// the sync state.
pub struct PageHost<C: PageContent> {
    pages: SlotMap<PageId, C>,
    /// Page order (parallel to the tab strip)
    order: Vec<PageId>,
    /// Currently visible page; None only transiently before the first page
    /// is set
    visible: Option<PageId>,
    header: HeaderView,
    sync: SyncState,
    /// Header position recorded on the last frame update (the header's y,
    /// so zero or negative)
    scroll_content_offset_y: f32,
    /// One-shot gate: when false, the next frame update skips repositioning
    /// the header, then re-arms. Prevents double-applying a delta that was
    /// just programmatically added to the page offset.
    scroll_frame: bool,
    on_page_changed: Option<Arc<dyn Fn(usize) + Send + Sync>>,
}

impl<C: PageContent> PageHost<C> {
    /// Create a host from a header config and the ordered page contents
    ///
    /// The page count must match the tab count.
    pub fn new(config: HeaderConfig, contents: Vec<C>) -> Result<Self, ConfigError> {
        config.validate_pages(contents.len())?;
        let header = HeaderView::new(config)?;

        let mut pages = SlotMap::with_key();
        let order = contents.into_iter().map(|c| pages.insert(c)).collect();

        Ok(Self {
            pages,
            order,
            visible: None,
            header,
            sync: SyncState::Idle,
            scroll_content_offset_y: 0.0,
            scroll_frame: true,
            on_page_changed: None,
        })
    }

    /// Register a callback fired when the committed active page changes
    pub fn on_page_changed<F>(&mut self, callback: F)
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_page_changed = Some(Arc::new(callback));
    }

    /// The header view
    pub fn header(&self) -> &HeaderView {
        &self.header
    }

    /// Current sync state
    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    /// Number of hosted pages
    pub fn page_count(&self) -> usize {
        self.order.len()
    }

    /// Read access to a page's content by index
    pub fn page(&self, index: usize) -> Option<&C> {
        self.order.get(index).and_then(|id| self.pages.get(*id))
    }

    /// Index of the currently visible page
    ///
    /// Derived, not stored: locates the visible page in the page order.
    pub fn current_index(&self) -> Option<usize> {
        let visible = self.visible?;
        self.order.iter().position(|id| *id == visible)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Make the first page visible and reserve header space on it
    ///
    /// Call once after construction, before feeding any events.
    pub fn set_initial_page(&mut self) {
        let Some(&first) = self.order.first() else {
            return;
        };
        self.visible = Some(first);
        self.set_header_content_inset();
        self.header.set_active_tab(0);
    }

    /// Catch up any deferred reconciliation when the screen reappears
    ///
    /// If a transition intent is still pending, re-applies the header inset
    /// and re-derives the target page's offset from the recorded header
    /// position. The intent stays pending only if the target's inset had not
    /// yet been set to the header height, so applying twice in a row changes
    /// nothing the second time.
    pub fn update_layout_if_needed(&mut self) {
        let Some(target) = self.sync.pending_target() else {
            return;
        };

        let height = self.header.height();
        let already_applied = self
            .order
            .get(target)
            .and_then(|id| self.pages.get(*id))
            .map(|page| page.content_inset().top == height)
            .unwrap_or(false);

        let scroll = self.scroll_content_offset_y;
        self.set_header_content_inset();
        self.set_header_view_offset_y(target, -scroll);

        if already_applied {
            tracing::trace!(index = target, "deferred reconciliation already applied");
            self.sync.step(&SyncEvent::TransitionFinished);
        }
    }

    // =========================================================================
    // Page Transitions
    // =========================================================================

    /// A tab button was tapped
    ///
    /// Marks the tab optimistically on the header and, if no transition is
    /// already in flight, records the reconciliation intent and returns the
    /// directional transition for the embedder to animate. Returns None when
    /// the request is ignored (in-flight transition, invalid index, or no
    /// visible page yet).
    pub fn press_tab(&mut self, index: usize) -> Option<PageTransition> {
        let current = self.current_index()?;
        self.header.pressed(index)?;
        if index == current {
            return None;
        }
        if !self.sync.step(&SyncEvent::TabPressed { index }) {
            tracing::debug!(index, "tab press ignored while transition in flight");
            return None;
        }

        let direction = if current < index {
            PageDirection::Forward
        } else {
            PageDirection::Reverse
        };
        Some(PageTransition {
            target: index,
            direction,
        })
    }

    /// The paging container is about to swipe to `target`
    ///
    /// Records the same reconciliation intent as a tap, without starting an
    /// explicit animation (the container pages natively).
    pub fn will_transition_to(&mut self, target: usize) {
        if self.visible.is_none() || target >= self.order.len() {
            return;
        }
        self.sync.step(&SyncEvent::SwipeBegan { target });
    }

    /// A page transition's completion callback fired
    ///
    /// `settled` is the page that is now visible (for a cancelled swipe this
    /// is the page the user started on). If a reconciliation was owed, the
    /// settled page gets the header content inset and its offset is
    /// re-derived from the recorded header position. The committed active
    /// tab follows the settled page.
    pub fn finish_transition(&mut self, settled: usize) {
        let Some(&id) = self.order.get(settled) else {
            return;
        };
        let previous = self.current_index();
        self.visible = Some(id);

        if self.sync.is_transitioning() {
            self.set_header_content_inset();
            self.set_header_view_offset_y(settled, -self.scroll_content_offset_y);
        }
        self.sync.step(&SyncEvent::TransitionFinished);

        self.header.set_active_tab(settled);
        if previous != Some(settled) {
            tracing::trace!(from = ?previous, to = settled, "page changed");
            if let Some(callback) = &self.on_page_changed {
                callback(settled);
            }
        }
    }

    // =========================================================================
    // Scroll Synchronization
    // =========================================================================

    /// The header's drag sensor surface reported a raw scroll offset
    ///
    /// Samples the sensor, applies the resulting delta to the active page's
    /// offset, and runs the frame rule. In the incremental (non-overscroll)
    /// case the frame update is suppressed once, since the header must not
    /// move for a delta it just injected itself.
    pub fn header_sensor_scrolled(&mut self, raw_offset: f32) {
        if self.visible.is_none() {
            return;
        }
        let displaced = self.header.vertical_offset() < 0.0;
        let sample = self.header.sensor_mut().sample(raw_offset, displaced);
        self.scroll_frame = sample.overscroll;
        self.sync.step(&SyncEvent::DragMoved);
        self.update_content_offset_y(sample.amount);
    }

    /// The drag gesture on the header ended
    pub fn drag_ended(&mut self) {
        self.header.sensor_mut().reset();
        self.sync.step(&SyncEvent::DragEnded);
    }

    /// The active page reported its own scroll offset
    ///
    /// Reports from non-visible pages update their stored offset but do not
    /// move the header.
    pub fn page_scrolled(&mut self, index: usize, offset_y: f32) {
        let Some(&id) = self.order.get(index) else {
            return;
        };
        let Some(page) = self.pages.get_mut(id) else {
            return;
        };
        page.set_offset_y(offset_y);
        if self.current_index() == Some(index) {
            self.update_content_view_frame();
        }
    }

    /// Reposition the header from the active page's offset
    ///
    /// While the page offset is above the tab-bar boundary the header is
    /// fully collapsed to the pinned tab bar; below it the header tracks the
    /// offset one-to-one. The indicator inset follows the visible header
    /// height either way.
    pub fn update_content_view_frame(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };
        let Some(page) = self.pages.get_mut(self.order[index]) else {
            return;
        };
        let height = self.header.height();
        let tab_height = self.header.tab_height();

        let scroll_offset_y = if page.offset_y() >= -tab_height {
            page.set_indicator_inset_top(tab_height);
            height - tab_height
        } else {
            page.set_indicator_inset_top(-page.offset_y());
            height + page.offset_y()
        };
        self.update_content_view(-scroll_offset_y);
    }

    /// Add a sensed drag delta to the active page's offset
    ///
    /// This is how a drag on the pinned header propagates into the page's
    /// own scroll state, so the two surfaces feel like one continuous
    /// scroll. A real scroll surface would report the programmatic move back
    /// through its own scroll callback; the frame rule runs here to mirror
    /// that.
    fn update_content_offset_y(&mut self, delta: f32) {
        let Some(index) = self.current_index() else {
            return;
        };
        let Some(page) = self.pages.get_mut(self.order[index]) else {
            return;
        };
        let offset = page.offset_y() + delta;
        page.set_offset_y(offset);
        self.update_content_view_frame();
    }

    /// Move the header unless the one-shot gate suppresses this frame
    fn update_content_view(&mut self, scroll: f32) {
        if self.scroll_frame {
            tracing::trace!(scroll, "header repositioned");
            self.header.set_vertical_offset(scroll);
            self.scroll_content_offset_y = scroll;
        }
        self.scroll_frame = true;
    }

    /// Reserve header space on the visible page
    fn set_header_content_inset(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };
        let Some(page) = self.pages.get_mut(self.order[index]) else {
            return;
        };
        let insets = EdgeInsets::top_only(self.header.height());
        page.set_content_inset(insets);
        page.set_indicator_inset(insets);
    }

    /// Inset-reconciliation rule
    ///
    /// Derives page `index`'s offset from a header scroll position so the
    /// switched-to page lines up with the header exactly as the previous one
    /// did. `scroll == 0` means the header is fully expanded. The rule only
    /// intervenes while the header is still in its collapsing range; once
    /// the page has scrolled past the pinned tab bar, rewriting the offset
    /// would fight the user's own scroll position.
    fn set_header_view_offset_y(&mut self, index: usize, scroll: f32) {
        let Some(&id) = self.order.get(index) else {
            return;
        };
        let Some(page) = self.pages.get_mut(id) else {
            return;
        };
        let height = self.header.height();
        let tab_height = self.header.tab_height();

        if scroll == 0.0 {
            page.set_offset_y(-height);
        } else if scroll < height - tab_height || page.offset_y() <= -tab_height {
            tracing::trace!(index, scroll, offset = scroll - height, "offset reconciled");
            page.set_offset_y(scroll - height);
        }
    }
}
