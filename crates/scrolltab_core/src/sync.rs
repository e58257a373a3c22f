//! Header/page synchronization state machine
//!
//! One tagged state answers "what is currently authoritative for the header
//! offset": the active page's own scroll position (`Idle`), the header's
//! drag sensor (`Dragging`), or a page switch whose completion callback
//! still owes a layout reconciliation (`Transitioning`).
//!
//! Transitions are matched exhaustively over `(state, event)`; an event with
//! no matching arm leaves the state untouched. A new tab tap or swipe while
//! a transition is already in flight is deliberately ignored so the pending
//! reconciliation target cannot be overwritten mid-flight.

use crate::events::SyncEvent;

/// Authority for the header's vertical position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyncState {
    /// Header offset tracks the active page's scroll offset one-to-one
    #[default]
    Idle,
    /// Header offset driven by the header's own drag sensor
    Dragging,
    /// A page switch is in flight; a layout reconciliation is owed to
    /// page `target` once the transition completes
    Transitioning { target: usize },
}

impl SyncState {
    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: &SyncEvent) -> Option<Self> {
        match (self, event) {
            (SyncState::Idle, SyncEvent::DragMoved) => Some(SyncState::Dragging),
            (SyncState::Idle, SyncEvent::TabPressed { index }) => {
                Some(SyncState::Transitioning { target: *index })
            }
            (SyncState::Idle, SyncEvent::SwipeBegan { target }) => {
                Some(SyncState::Transitioning { target: *target })
            }
            (SyncState::Idle, SyncEvent::DragEnded | SyncEvent::TransitionFinished) => None,
            (SyncState::Dragging, SyncEvent::DragEnded) => Some(SyncState::Idle),
            (SyncState::Dragging, SyncEvent::TabPressed { index }) => {
                Some(SyncState::Transitioning { target: *index })
            }
            (SyncState::Dragging, SyncEvent::SwipeBegan { target }) => {
                Some(SyncState::Transitioning { target: *target })
            }
            (SyncState::Dragging, SyncEvent::DragMoved | SyncEvent::TransitionFinished) => None,
            (SyncState::Transitioning { .. }, SyncEvent::TransitionFinished) => {
                Some(SyncState::Idle)
            }
            // New transition requests and drag noise are ignored while a
            // transition is in flight.
            (SyncState::Transitioning { .. }, _) => None,
        }
    }

    /// Apply an event in place
    ///
    /// Returns true if a transition arm matched (even when it re-enters the
    /// same state).
    pub fn step(&mut self, event: &SyncEvent) -> bool {
        match self.on_event(event) {
            Some(next) => {
                if next != *self {
                    tracing::trace!(from = ?self, to = ?next, ?event, "sync transition");
                }
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Check if a page switch is currently in flight
    pub fn is_transitioning(&self) -> bool {
        matches!(self, SyncState::Transitioning { .. })
    }

    /// The page index a reconciliation is still owed to, if any
    pub fn pending_target(&self) -> Option<usize> {
        match self {
            SyncState::Transitioning { target } => Some(*target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_transitions() {
        let mut state = SyncState::Idle;

        assert!(state.step(&SyncEvent::DragMoved));
        assert_eq!(state, SyncState::Dragging);

        // Repeated drag events keep the state.
        assert!(!state.step(&SyncEvent::DragMoved));
        assert_eq!(state, SyncState::Dragging);

        assert!(state.step(&SyncEvent::DragEnded));
        assert_eq!(state, SyncState::Idle);
    }

    #[test]
    fn test_tap_starts_transition() {
        let mut state = SyncState::Idle;
        state.step(&SyncEvent::TabPressed { index: 2 });
        assert_eq!(state, SyncState::Transitioning { target: 2 });
        assert_eq!(state.pending_target(), Some(2));
    }

    #[test]
    fn test_swipe_starts_transition() {
        let mut state = SyncState::Idle;
        state.step(&SyncEvent::SwipeBegan { target: 1 });
        assert_eq!(state, SyncState::Transitioning { target: 1 });
    }

    #[test]
    fn test_drag_interrupted_by_transition() {
        let mut state = SyncState::Dragging;
        state.step(&SyncEvent::SwipeBegan { target: 1 });
        assert_eq!(state, SyncState::Transitioning { target: 1 });
    }

    #[test]
    fn test_in_flight_requests_ignored() {
        let mut state = SyncState::Transitioning { target: 1 };

        assert!(!state.step(&SyncEvent::TabPressed { index: 0 }));
        assert_eq!(state, SyncState::Transitioning { target: 1 });

        assert!(!state.step(&SyncEvent::SwipeBegan { target: 0 }));
        assert_eq!(state, SyncState::Transitioning { target: 1 });

        // Sensor noise during an animated switch does not change authority.
        assert!(!state.step(&SyncEvent::DragMoved));
        assert_eq!(state, SyncState::Transitioning { target: 1 });
    }

    #[test]
    fn test_transition_finished() {
        let mut state = SyncState::Transitioning { target: 1 };
        assert!(state.step(&SyncEvent::TransitionFinished));
        assert_eq!(state, SyncState::Idle);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_spurious_completion_in_idle() {
        let mut state = SyncState::Idle;
        assert!(!state.step(&SyncEvent::TransitionFinished));
        assert_eq!(state, SyncState::Idle);
    }
}
