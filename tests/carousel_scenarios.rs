//! Indicator row driven by a carousel through its page-change notifications.

use card_indicator::config::IndicatorConfig;
use card_indicator::indicator::{
    classify, IndicatorCap, IndicatorController, IndicatorError, JumpPolicy, VisualState,
    WindowRange,
};
use card_indicator::pager::{Carousel, PagerHost};

use card_indicator::indicator::VisualState::*;

struct Harness {
    pager: Carousel<usize>,
    indicators: IndicatorController,
}

impl Harness {
    fn new(cap: i32, pages: usize) -> Self {
        Self::with_config(
            IndicatorConfig::default().with_cap(IndicatorCap::try_from(cap).unwrap()),
            pages,
        )
    }

    fn with_config(config: IndicatorConfig, pages: usize) -> Self {
        let mut pager = Carousel::new((0..pages).collect());
        let mut indicators = IndicatorController::new(config);
        indicators.rebuild(&mut pager);
        Self { pager, indicators }
    }

    fn pump(&mut self) {
        let id = self.indicators.subscription().unwrap();
        for change in self.pager.drain_events(id) {
            self.indicators.handle(change).unwrap();
        }
    }

    fn next(&mut self) {
        self.pager.swipe_next();
        self.pump();
    }

    fn prev(&mut self) {
        self.pager.swipe_prev();
        self.pump();
    }

    fn jump(&mut self, position: usize) {
        self.pager.set_current_item(position);
        self.pump();
    }

    fn states(&self) -> Vec<VisualState> {
        self.indicators.slots().iter().map(|slot| slot.state).collect()
    }

    fn assert_bounds(&self) {
        let range = self.indicators.range().unwrap();
        assert!(range.last < self.indicators.len(), "window {range} past end");
        assert!(range.first <= range.last);
    }
}

#[test]
fn test_ten_pages_cap_three_scenario() {
    let mut h = Harness::new(3, 10);
    assert_eq!(h.indicators.range(), Some(WindowRange::new(0, 2)));
    assert_eq!(&h.states()[..4], &[Normal, Normal, InfiniteEnd, Hidden]);

    h.jump(2);
    assert_eq!(h.indicators.range(), Some(WindowRange::new(1, 3)));
    assert_eq!(
        &h.states()[..5],
        &[Hidden, InfiniteStart, Normal, InfiniteEnd, Hidden]
    );
    assert!(h.states()[5..].iter().all(|s| *s == Hidden));
}

#[test]
fn test_five_pages_cap_three_reaches_last() {
    let mut h = Harness::new(3, 5);
    for _ in 0..4 {
        h.next();
    }
    assert_eq!(h.pager.current_item(), 4);
    assert_eq!(h.indicators.range(), Some(WindowRange::new(2, 4)));
    assert_eq!(h.states()[4], Last);
}

#[test]
fn test_cap_above_page_count() {
    let mut h = Harness::new(5, 3);
    assert_eq!(h.indicators.range(), Some(WindowRange::new(0, 2)));
    for _ in 0..2 {
        h.next();
        assert_eq!(h.states(), vec![Normal, Normal, Last]);
    }
    h.prev();
    assert_eq!(h.states(), vec![Normal, Normal, Last]);
}

#[test]
fn test_unlimited_stays_normal_for_any_walk() {
    let mut h = Harness::new(-1, 7);
    let walk = [1, 2, 3, 6, 0, 5, 4, 4, 1];
    for position in walk {
        h.jump(position);
        assert!(h.states().iter().all(|s| *s == Normal));
    }
}

#[test]
fn test_forward_walk_keeps_window_width() {
    for cap in 1..6 {
        let mut h = Harness::new(cap, 12);
        for _ in 0..11 {
            h.next();
            h.assert_bounds();
            let range = h.indicators.range().unwrap();
            assert_eq!(range.width(), cap as usize, "cap {cap} window {range}");
        }
    }
}

#[test]
fn test_back_and_forth_stays_in_bounds() {
    let mut h = Harness::new(4, 9);
    for step in 0..40 {
        if step % 7 < 4 {
            h.next();
        } else {
            h.prev();
        }
        h.assert_bounds();
        assert_eq!(h.indicators.range().unwrap().width(), 4);
    }
}

#[test]
fn test_exactly_one_state_per_dot() {
    let ranges = [
        WindowRange::new(0, 0),
        WindowRange::new(0, 2),
        WindowRange::new(3, 5),
        WindowRange::new(7, 9),
        WindowRange::new(0, 9),
    ];
    for range in ranges {
        for index in 0..10 {
            let state = classify(index, range, 9);
            assert_eq!(state.is_visible(), range.contains(index));
            if index == 0 {
                assert_ne!(state, InfiniteStart);
            }
            if index == 9 {
                assert_ne!(state, InfiniteEnd);
            }
        }
    }
}

#[test]
fn test_reselecting_same_page_changes_nothing() {
    let mut h = Harness::new(3, 10);
    h.jump(1);
    h.jump(2);
    let before = (
        h.indicators.range(),
        h.indicators.selection(),
        h.states(),
    );
    h.indicators.on_page_selected(2).unwrap();
    let after = (
        h.indicators.range(),
        h.indicators.selection(),
        h.states(),
    );
    assert_eq!(before, after);
}

#[test]
fn test_selection_follows_pager() {
    let mut h = Harness::new(3, 6);
    h.next();
    h.next();
    h.prev();
    let selected: Vec<usize> = h
        .indicators
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.selected)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(selected, vec![1]);
}

#[test]
fn test_adapter_change_rebuilds_from_pager() {
    let mut h = Harness::new(3, 4);
    h.jump(3);
    h.pager.push_page(4);
    h.pager.push_page(5);
    h.indicators.rebuild(&mut h.pager);
    assert_eq!(h.indicators.len(), 6);
    assert_eq!(h.indicators.selected_position(), 3);
    assert!(h.indicators.range().unwrap().contains(3));
    assert_eq!(h.pager.listener_count(), 1);

    // Events keep flowing through the new subscription
    h.next();
    assert_eq!(h.indicators.selected_position(), 4);
}

#[test]
fn test_empty_carousel_rejects_selection() {
    let mut h = Harness::new(3, 0);
    assert!(h.indicators.is_empty());
    assert_eq!(h.indicators.range(), None);
    assert_eq!(
        h.indicators.on_page_selected(0),
        Err(IndicatorError::InvalidPosition {
            position: 0,
            count: 0
        })
    );
    h.next();
    assert!(h.indicators.is_empty());
}

#[test]
fn test_snap_policy_keeps_selection_visible_on_jumps() {
    let mut config = IndicatorConfig::default().with_cap(IndicatorCap::limited(3).unwrap());
    config.jump_policy = JumpPolicy::SnapToContain;
    let mut h = Harness::with_config(config, 20);

    for position in [9, 2, 19, 0, 11, 12, 13, 5] {
        h.jump(position);
        h.assert_bounds();
        let range = h.indicators.range().unwrap();
        assert!(range.contains(position), "{position} outside {range}");
        assert_eq!(range.width(), 3);
        assert!(h.indicators.slots()[position].state.is_visible());
    }
}

#[test]
fn test_invalid_cap_is_rejected_before_rebuild() {
    assert_eq!(
        IndicatorCap::try_from(0),
        Err(IndicatorError::InvalidCap(0))
    );
    assert!(IndicatorCap::limited(0).is_err());
}
