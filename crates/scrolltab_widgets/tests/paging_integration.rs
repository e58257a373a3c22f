//! Integration tests for header + host + content synchronization
//!
//! These tests drive full user sessions through the public surface and
//! verify that:
//! - vertical scrolling, swipe paging, and tab taps all leave the system in
//!   the same state for a given page offset
//! - drag gestures sensed on the header propagate into the active page
//!   without double-applying any delta
//! - deferred reconciliation catches up when the screen reappears

use scrolltab_core::{HeaderConfig, SyncState};
use scrolltab_widgets::{ListPage, PageContent, PageDirection, PagerScreen, ScrollRegion};

const HEIGHT: f32 = 280.0;
const TAB: f32 = 44.0;

fn screen() -> PagerScreen<ListPage> {
    let config = HeaderConfig::new(HEIGHT, TAB, ["Posts", "Likes", "About"]);
    let pages = vec![
        ListPage::new(100, 44.0),
        ListPage::new(100, 44.0),
        ListPage::new(100, 44.0),
    ];
    let mut screen = PagerScreen::new(config, pages).unwrap();
    // Scroll surface settles once the top inset is applied.
    screen.scrolled(0, -HEIGHT);
    screen
}

/// For a given current offset, a tap-switch and a swipe-switch must be
/// indistinguishable afterwards.
#[test]
fn test_tap_and_swipe_converge_to_same_state() {
    let mut tapped = screen();
    tapped.scrolled(0, -130.0);
    let transition = tapped.tab_pressed(1).unwrap();
    assert_eq!(transition.direction, PageDirection::Forward);
    tapped.host_mut().finish_transition(1);

    let mut swiped = screen();
    swiped.scrolled(0, -130.0);
    swiped.host_mut().will_transition_to(1);
    swiped.host_mut().finish_transition(1);

    assert_eq!(tapped.host().current_index(), Some(1));
    assert_eq!(swiped.host().current_index(), Some(1));
    assert_eq!(
        tapped.host().page(1).unwrap().metrics(),
        swiped.host().page(1).unwrap().metrics()
    );
    assert_eq!(
        tapped.host().header().vertical_offset(),
        swiped.host().header().vertical_offset()
    );
    assert_eq!(tapped.host().header().active_tab(), 1);
    assert_eq!(swiped.host().header().active_tab(), 1);
}

/// Scroll on A, visit B and C, come back: A's header position survives.
#[test]
fn test_three_page_tour_preserves_offsets() {
    let mut screen = screen();
    screen.scrolled(0, -100.0);
    let header_on_a = screen.host().header().vertical_offset();

    for target in [1, 2, 1, 0] {
        screen.host_mut().will_transition_to(target);
        screen.host_mut().finish_transition(target);
    }

    assert_eq!(screen.host().current_index(), Some(0));
    assert_eq!(screen.host().page(0).unwrap().offset_y(), -100.0);
    screen.scrolled(0, -100.0);
    assert_eq!(screen.host().header().vertical_offset(), header_on_a);
}

/// A drag on the pinned header collapses it exactly as far as the same
/// scroll applied inside the page would.
#[test]
fn test_header_drag_equivalent_to_page_scroll() {
    let mut dragged = screen();
    // Upward drags on the header sensor surface (overscroll samples).
    dragged.host_mut().header_sensor_scrolled(50.0);
    dragged.host_mut().header_sensor_scrolled(70.0);
    dragged.host_mut().drag_ended();

    let mut scrolled = screen();
    scrolled.scrolled(0, -HEIGHT + 120.0);

    assert_eq!(
        dragged.host().page(0).unwrap().offset_y(),
        scrolled.host().page(0).unwrap().offset_y()
    );
    assert_eq!(
        dragged.host().header().vertical_offset(),
        scrolled.host().header().vertical_offset()
    );
    assert_eq!(dragged.host().sync_state(), SyncState::Idle);
}

/// Tap, lose the completion, background the screen, come back twice.
#[test]
fn test_reappearance_settles_lost_completion() {
    let mut screen = screen();
    screen.scrolled(0, -130.0);

    screen.tab_pressed(2).unwrap();
    assert!(screen.host().sync_state().is_transitioning());

    screen.will_appear();
    let first_pass = screen.host().page(2).unwrap().metrics();

    screen.will_appear();
    assert_eq!(screen.host().page(2).unwrap().metrics(), first_pass);
    // scroll = 150 < 236: the target was pulled into the collapse range.
    assert_eq!(screen.host().page(2).unwrap().offset_y(), 150.0 - HEIGHT);
}

/// Plain ScrollRegion pages work through the same host surface.
#[test]
fn test_scroll_region_pages() {
    let config = HeaderConfig::new(HEIGHT, TAB, ["A", "B"]);
    let pages = vec![ScrollRegion::new(2000.0), ScrollRegion::new(2000.0)];
    let mut screen = PagerScreen::new(config, pages).unwrap();

    screen.scrolled(0, -HEIGHT);
    screen.scrolled(0, 10.0); // past the tab-bar boundary
    assert_eq!(
        screen.host().header().vertical_offset(),
        -(HEIGHT - TAB)
    );
    assert_eq!(screen.host().page(0).unwrap().indicator_inset().top, TAB);
}
