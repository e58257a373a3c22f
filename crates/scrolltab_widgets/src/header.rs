//! Collapsing tab header
//!
//! The header view owns its vertical offset, the tab button strip, and a
//! drag sensor: a tiny internal scroll surface, clamped to never rest at a
//! positive offset, that exists purely to capture vertical gesture deltas
//! while the header is pinned above the paged content. This avoids custom
//! gesture recognition entirely; the embedder forwards the sensor surface's
//! raw scroll offsets and the sensor turns them into deltas.
//!
//! The header's highlighted tab is an optimistic display layer. The page
//! host is the sole authority for the committed active index and calls
//! [`HeaderView::set_active_tab`] once a transition completes.

use smallvec::SmallVec;

use scrolltab_core::{ConfigError, HeaderConfig};

// ============================================================================
// Tab Buttons
// ============================================================================

/// One button in the tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    /// Display label
    pub label: String,
    /// Whether this tab is visually highlighted
    pub highlighted: bool,
}

// ============================================================================
// Drag Sensor
// ============================================================================

/// One sampled sensor reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Vertical scroll amount to apply to the active page
    pub amount: f32,
    /// True when the sensor was pulled past zero or the header was already
    /// displaced upward; the sensor has been snapped back to zero
    pub overscroll: bool,
}

/// Gesture-delta sensor backed by a zero-clamped scroll surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSensor {
    /// Sensor surface offset (kept at or below zero)
    offset: f32,
    /// Last recorded offset used to compute incremental deltas
    origin: f32,
}

impl DragSensor {
    /// Sample a raw scroll offset reported by the sensor surface
    ///
    /// `header_displaced` is true while the header sits above its normal
    /// position (already partially collapsed). In that case, or when the
    /// surface is pulled past zero, the raw offset is reported whole and the
    /// surface is snapped back so it never visibly scrolls. Otherwise the
    /// incremental delta since the last sample is reported and the origin
    /// advances.
    pub fn sample(&mut self, raw_offset: f32, header_displaced: bool) -> DragSample {
        if raw_offset > 0.0 || header_displaced {
            self.offset = 0.0;
            DragSample {
                amount: raw_offset,
                overscroll: true,
            }
        } else {
            let amount = raw_offset - self.origin;
            self.origin = raw_offset;
            self.offset = raw_offset;
            DragSample {
                amount,
                overscroll: false,
            }
        }
    }

    /// Re-arm the sensor once the gesture ends and the surface settles
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.origin = 0.0;
    }

    /// Last recorded origin offset
    pub fn origin(&self) -> f32 {
        self.origin
    }
}

// ============================================================================
// Header View
// ============================================================================

/// The header overlaying the paged content
pub struct HeaderView {
    config: HeaderConfig,
    tabs: SmallVec<[TabButton; 4]>,
    /// Committed active tab (written only via `set_active_tab`)
    active: usize,
    /// Visually highlighted tab (optimistic, may run ahead of `active`)
    highlighted: usize,
    /// Header's own vertical position; written only by the page host
    vertical_offset: f32,
    sensor: DragSensor,
}

impl HeaderView {
    /// Create a header from a validated config
    pub fn new(config: HeaderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tabs = config
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| TabButton {
                label: label.clone(),
                highlighted: i == 0,
            })
            .collect();
        Ok(Self {
            config,
            tabs,
            active: 0,
            highlighted: 0,
            vertical_offset: 0.0,
            sensor: DragSensor::default(),
        })
    }

    /// Header configuration
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Full header height
    pub fn height(&self) -> f32 {
        self.config.height
    }

    /// Tab bar height
    pub fn tab_height(&self) -> f32 {
        self.config.tab_height
    }

    /// The tab strip
    pub fn tabs(&self) -> &[TabButton] {
        &self.tabs
    }

    /// Committed active tab index
    pub fn active_tab(&self) -> usize {
        self.active
    }

    /// Visually highlighted tab index
    pub fn highlighted_tab(&self) -> usize {
        self.highlighted
    }

    /// Header's current vertical position
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    /// Reposition the header (page host only)
    pub(crate) fn set_vertical_offset(&mut self, offset: f32) {
        self.vertical_offset = offset;
    }

    /// The drag sensor
    pub fn sensor(&self) -> &DragSensor {
        &self.sensor
    }

    pub(crate) fn sensor_mut(&mut self) -> &mut DragSensor {
        &mut self.sensor
    }

    /// A tab button was tapped
    ///
    /// Highlights the tab immediately (optimistic; visual flicker on rapid
    /// taps is accepted) and returns the index for the host to act on, or
    /// None when the index is out of range.
    pub fn pressed(&mut self, index: usize) -> Option<usize> {
        if index >= self.tabs.len() {
            return None;
        }
        self.highlight(index);
        Some(index)
    }

    /// Commit the active tab
    ///
    /// Unhighlights the previous tab, highlights `index`, and stores it as
    /// the committed current tab. Out-of-range indices are ignored.
    pub fn set_active_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.highlight(index);
        self.active = index;
    }

    fn highlight(&mut self, index: usize) {
        self.tabs[self.highlighted].highlighted = false;
        self.tabs[index].highlighted = true;
        self.highlighted = index;
    }
}
