//! ScrollTab Widgets
//!
//! The widget-facing layer of the scroll-paging pattern: a collapsing tab
//! header overlaying a horizontally paged set of vertically scrollable
//! pages, kept consistent by the page host's synchronization state machine.
//!
//! - [`HeaderView`]: tab buttons plus the drag sensor that captures vertical
//!   gestures on the pinned header
//! - [`PageHost`]: owns the pages and the header and mediates every offset
//!   update between them
//! - [`PageContent`]: the contract any scrollable page implements to take
//!   part in header synchronization
//! - [`PagerScreen`] / [`ListPage`]: glue wiring a concrete list-backed page
//!   to the host's lifecycle hooks
//!
//! # Example
//!
//! ```rust
//! use scrolltab_core::HeaderConfig;
//! use scrolltab_widgets::{PageHost, ScrollRegion};
//!
//! let config = HeaderConfig::new(280.0, 44.0, ["Posts", "Likes"]);
//! let pages = vec![ScrollRegion::new(4400.0), ScrollRegion::new(4400.0)];
//! let mut host = PageHost::new(config, pages).unwrap();
//! host.set_initial_page();
//!
//! // The active page scrolling drives the header position.
//! host.page_scrolled(0, -120.0);
//! assert_eq!(host.header().vertical_offset(), -160.0);
//! ```

pub mod content;
pub mod controller;
pub mod header;
pub mod host;

pub use content::{PageContent, ScrollRegion};
pub use controller::{ListPage, PagerScreen};
pub use header::{DragSample, DragSensor, HeaderView, TabButton};
pub use host::{PageDirection, PageHost, PageId, PageTransition};

/// Commonly used types
pub mod prelude {
    pub use crate::content::{PageContent, ScrollRegion};
    pub use crate::header::HeaderView;
    pub use crate::host::{PageDirection, PageHost, PageTransition};
    pub use scrolltab_core::{ConfigError, EdgeInsets, HeaderConfig, SyncEvent, SyncState};
}
