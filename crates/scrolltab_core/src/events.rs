//! Sync event types
//!
//! The triggers that drive the header/page synchronization state machine.
//! All of them originate from user input or from the paging container's own
//! completion notifications, serialized on one UI event loop.

/// An event fed to [`SyncState::step`](crate::sync::SyncState::step)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// A tab button was tapped; the host should begin a directional
    /// page transition toward `index`
    TabPressed { index: usize },
    /// The paging container is about to swipe to `target`
    /// (pre-transition notification, no explicit animation started)
    SwipeBegan { target: usize },
    /// A page transition's completion callback fired
    TransitionFinished,
    /// The header's drag sensor reported a vertical delta
    DragMoved,
    /// The drag gesture on the header ended
    DragEnded,
}
