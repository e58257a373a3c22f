//! ScrollTab Core
//!
//! Foundational primitives for the ScrollTab paging widgets:
//!
//! - **Sync state machine**: the explicit `Idle | Dragging | Transitioning`
//!   machine that decides what is currently authoritative for the header
//!   position
//! - **Sync events**: typed triggers fed to the machine by the page host
//! - **Scroll geometry**: edge insets and the offset/inset metrics a
//!   scrollable page exposes
//!
//! # Example
//!
//! ```rust
//! use scrolltab_core::{SyncEvent, SyncState};
//!
//! let mut state = SyncState::Idle;
//! state.step(&SyncEvent::TabPressed { index: 1 });
//! assert_eq!(state, SyncState::Transitioning { target: 1 });
//!
//! // A second request while one is in flight is ignored.
//! assert!(!state.step(&SyncEvent::TabPressed { index: 0 }));
//!
//! state.step(&SyncEvent::TransitionFinished);
//! assert_eq!(state, SyncState::Idle);
//! ```

pub mod config;
pub mod events;
pub mod geometry;
pub mod sync;

pub use config::{ConfigError, HeaderConfig};
pub use events::SyncEvent;
pub use geometry::{EdgeInsets, ScrollMetrics};
pub use sync::SyncState;
