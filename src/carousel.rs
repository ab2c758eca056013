//! Rotation index over the project list.
//!
//! [`CarouselState`] owns a single pointer into a fixed, ordered list of items. It advances
//! on arrow clicks, dot clicks, side-card clicks and an auto-advance timer, pauses while
//! the pointer hovers the carousel, and carries a focused item id for the detail modal.

use std::{fmt, sync::Arc, time::Duration};

use thiserror::Error;

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("index {index} is out of range for {count} items")]
    OutOfRange { index: usize, count: usize },
    #[error("no item with id {0}")]
    UnknownItem(String),
}

/// Stops and restarts page scrolling underneath an overlay.
pub trait ScrollBlocker: Send + Sync {
    fn block(&self);
    fn unblock(&self);
}

/// Holds page scrolling blocked for as long as it lives.
pub struct ScrollLock {
    blocker: Arc<dyn ScrollBlocker>,
}

impl ScrollLock {
    pub fn acquire(blocker: Arc<dyn ScrollBlocker>) -> Self {
        blocker.block();
        Self { blocker }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.blocker.unblock();
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLock")
    }
}

/// How the detail overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Escape,
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    /// Auto-advancing (or idle with auto-advance switched off).
    Idle,
    /// Pointer is over the carousel.
    Paused,
    /// Detail overlay is showing.
    FocusOpen,
}

/// Card placement in the 3-up layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Center,
    Right,
}

#[derive(Debug)]
struct Focus {
    id: String,
    _lock: ScrollLock,
}

pub struct CarouselState {
    ids: Vec<String>,
    index: usize,
    auto_advance: bool,
    hovered: bool,
    interval: Duration,
    elapsed: Duration,
    focus: Option<Focus>,
    blocker: Arc<dyn ScrollBlocker>,
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("index", &self.index)
            .field("count", &self.ids.len())
            .field("mode", &self.mode())
            .field("focused", &self.focused())
            .finish()
    }
}

impl CarouselState {
    /// Creates the state over item ids in display order. Auto-advance starts enabled.
    pub fn new<S: AsRef<str>>(ids: &[S], blocker: Arc<dyn ScrollBlocker>) -> Self {
        Self {
            ids: ids.iter().map(|s| s.as_ref().to_string()).collect(),
            index: 0,
            auto_advance: true,
            hovered: false,
            interval: AUTO_ADVANCE_INTERVAL,
            elapsed: Duration::ZERO,
            focus: None,
            blocker,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current_id(&self) -> Option<&str> {
        self.ids.get(self.index).map(String::as_str)
    }

    pub fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        self.index = (self.index + 1) % count;
    }

    pub fn previous(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        self.index = (self.index + count - 1) % count;
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let count = self.count();
        if index >= count {
            return Err(CarouselError::OutOfRange { index, count });
        }
        self.index = index;
        Ok(())
    }

    /// Re-centres on a card picked from the visible window.
    ///
    /// A miss means the rendered cards and the id list disagree. Debug builds panic on it;
    /// release builds log and leave the index where it was.
    pub fn select_visible(&mut self, id: &str) -> Result<(), CarouselError> {
        match self.ids.iter().position(|s| s == id) {
            Some(i) => self.go_to(i),
            None => {
                debug_assert!(false, "carousel card {id} is not in the item list");
                log::warn!("carousel card {id} is not in the item list, keeping index");
                Err(CarouselError::UnknownItem(id.to_string()))
            }
        }
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
        if !enabled {
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn mode(&self) -> CarouselMode {
        if self.focus.is_some() {
            CarouselMode::FocusOpen
        } else if self.hovered {
            CarouselMode::Paused
        } else {
            CarouselMode::Idle
        }
    }

    /// True while the auto-advance timer should be ticking.
    pub fn is_running(&self) -> bool {
        self.auto_advance && self.mode() == CarouselMode::Idle && self.count() > 1
    }

    /// Feeds elapsed time to the auto-advance timer and returns how many steps were taken.
    ///
    /// Every full interval while running advances the index once. Time spent paused,
    /// disabled or focused is not counted.
    pub fn elapse(&mut self, dt: Duration) -> usize {
        if !self.is_running() || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut steps = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.next();
            steps += 1;
        }
        steps
    }

    /// Opens the detail overlay on `id` without touching the rotation index.
    pub fn open_focus(&mut self, id: &str) -> Result<(), CarouselError> {
        if !self.ids.iter().any(|s| s == id) {
            return Err(CarouselError::UnknownItem(id.to_string()));
        }
        match &mut self.focus {
            // Already locked, only swap the item
            Some(focus) => focus.id = id.to_string(),
            None => {
                self.focus = Some(Focus {
                    id: id.to_string(),
                    _lock: ScrollLock::acquire(self.blocker.clone()),
                });
            }
        }
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Closes the overlay. Every close path clears the id and releases the scroll lock.
    pub fn close_focus(&mut self, reason: CloseReason) {
        if let Some(focus) = self.focus.take() {
            log::debug!("closing focus on {} ({reason:?})", focus.id);
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.as_ref().map(|f| f.id.as_str())
    }

    /// Indices of the (left, center, right) cards for the 3-up layout.
    pub fn visible_window(&self) -> Option<[(Slot, usize); 3]> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        Some([
            (Slot::Left, (self.index + count - 1) % count),
            (Slot::Center, self.index),
            (Slot::Right, (self.index + 1) % count),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingBlocker {
        depth: AtomicIsize,
        blocks: AtomicUsize,
    }

    impl ScrollBlocker for CountingBlocker {
        fn block(&self) {
            self.depth.fetch_add(1, Ordering::SeqCst);
            self.blocks.fetch_add(1, Ordering::SeqCst);
        }

        fn unblock(&self) {
            self.depth.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl CountingBlocker {
        fn is_blocked(&self) -> bool {
            self.depth.load(Ordering::SeqCst) > 0
        }
    }

    fn ids(count: usize) -> Vec<String> {
        (1..=count).map(|i| i.to_string()).collect()
    }

    fn carousel(count: usize) -> (CarouselState, Arc<CountingBlocker>) {
        let blocker = Arc::new(CountingBlocker::default());
        let state = CarouselState::new(&ids(count), blocker.clone());
        (state, blocker)
    }

    #[test]
    fn test_next_visits_every_item_and_wraps() {
        let (mut state, _) = carousel(6);
        let mut seen = vec![state.index()];
        for _ in 0..6 {
            state.next();
            seen.push(state.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_next_round_trip_for_any_count() {
        for count in 1..=8 {
            for start in 0..count {
                let (mut state, _) = carousel(count);
                state.go_to(start).unwrap();
                for _ in 0..count {
                    state.next();
                }
                assert_eq!(state.index(), start, "count = {count}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for count in 1..=6 {
            for start in 0..count {
                let (mut state, _) = carousel(count);
                state.go_to(start).unwrap();
                state.next();
                state.previous();
                assert_eq!(state.index(), start);
                state.previous();
                state.next();
                assert_eq!(state.index(), start);
            }
        }
    }

    #[test]
    fn test_previous_wraps_from_zero() {
        let (mut state, _) = carousel(6);
        state.previous();
        assert_eq!(state.index(), 5);
    }

    #[test]
    fn test_empty_carousel_is_noop() {
        let (mut state, _) = carousel(0);
        state.next();
        state.previous();
        assert_eq!(state.index(), 0);
        assert_eq!(state.current_id(), None);
        assert!(state.visible_window().is_none());
        assert_eq!(
            state.go_to(0),
            Err(CarouselError::OutOfRange { index: 0, count: 0 })
        );
        assert_eq!(state.elapse(Duration::from_secs(60)), 0);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let (mut state, _) = carousel(6);
        state.go_to(4).unwrap();
        let res = state.go_to(9);
        assert_eq!(res, Err(CarouselError::OutOfRange { index: 9, count: 6 }));
        assert_eq!(state.index(), 4);

        assert!(state.go_to(6).is_err());
        assert_eq!(state.index(), 4);
        assert!(state.go_to(5).is_ok());
        assert_eq!(state.index(), 5);
    }

    #[test]
    fn test_auto_advance_counts_intervals() {
        let (mut state, _) = carousel(6);
        assert_eq!(state.mode(), CarouselMode::Idle);
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL * 3), 3);
        assert_eq!(state.index(), 3);

        // Partial intervals accumulate
        state.elapse(Duration::from_millis(2500));
        assert_eq!(state.index(), 3);
        state.elapse(Duration::from_millis(2500));
        assert_eq!(state.index(), 4);

        // Wraps modulo count
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL * 4), 4);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_hover_suspends_auto_advance() {
        let (mut state, _) = carousel(6);
        state.elapse(Duration::from_millis(4000));

        state.pointer_enter();
        assert_eq!(state.mode(), CarouselMode::Paused);
        assert!(!state.is_running());
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL * 10), 0);
        assert_eq!(state.index(), 0);

        state.pointer_leave();
        assert_eq!(state.mode(), CarouselMode::Idle);
        // The partial interval from before the hover was dropped
        assert_eq!(state.elapse(Duration::from_millis(1000)), 0);
        assert_eq!(state.elapse(Duration::from_millis(4000)), 1);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_disabled_auto_advance() {
        let (mut state, _) = carousel(6);
        state.set_auto_advance(false);
        assert!(!state.is_running());
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL * 2), 0);
        state.set_auto_advance(true);
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL), 1);
    }

    #[test]
    fn test_custom_interval() {
        let (state, _) = carousel(3);
        let mut state = state.with_interval(Duration::from_millis(100));
        assert_eq!(state.interval(), Duration::from_millis(100));
        assert_eq!(state.elapse(Duration::from_millis(250)), 2);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_focus_keeps_index_and_locks_scroll() {
        let (mut state, blocker) = carousel(6);
        state.go_to(3).unwrap();

        state.open_focus("2").unwrap();
        assert_eq!(state.focused(), Some("2"));
        assert_eq!(state.index(), 3);
        assert_eq!(state.mode(), CarouselMode::FocusOpen);
        assert!(blocker.is_blocked());

        // Timer doesn't move the carousel behind the overlay
        assert_eq!(state.elapse(AUTO_ADVANCE_INTERVAL * 2), 0);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_every_close_path_releases_lock() {
        for reason in [CloseReason::Button, CloseReason::Escape, CloseReason::Backdrop] {
            let (mut state, blocker) = carousel(6);
            state.open_focus("5").unwrap();
            assert!(blocker.is_blocked());

            state.close_focus(reason);
            assert_eq!(state.focused(), None);
            assert!(!blocker.is_blocked(), "{reason:?} left the page locked");
            assert_eq!(state.mode(), CarouselMode::Idle);
        }
    }

    #[test]
    fn test_close_returns_to_prior_state() {
        let (mut state, _) = carousel(6);
        state.pointer_enter();
        state.open_focus("1").unwrap();
        assert_eq!(state.mode(), CarouselMode::FocusOpen);
        state.close_focus(CloseReason::Escape);
        assert_eq!(state.mode(), CarouselMode::Paused);
    }

    #[test]
    fn test_refocus_holds_single_lock() {
        let (mut state, blocker) = carousel(6);
        state.open_focus("1").unwrap();
        state.open_focus("4").unwrap();
        assert_eq!(state.focused(), Some("4"));
        assert_eq!(blocker.blocks.load(Ordering::SeqCst), 1);

        state.close_focus(CloseReason::Button);
        assert!(!blocker.is_blocked());

        // Closing twice is harmless
        state.close_focus(CloseReason::Button);
        assert_eq!(blocker.depth.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_focus_is_rejected() {
        let (mut state, blocker) = carousel(6);
        let res = state.open_focus("99");
        assert_eq!(res, Err(CarouselError::UnknownItem("99".to_string())));
        assert_eq!(state.focused(), None);
        assert!(!blocker.is_blocked());
    }

    #[test]
    fn test_drop_releases_lock() {
        let (mut state, blocker) = carousel(6);
        state.open_focus("3").unwrap();
        drop(state);
        assert!(!blocker.is_blocked());
    }

    #[test]
    fn test_visible_window() {
        let (mut state, _) = carousel(6);
        assert_eq!(
            state.visible_window(),
            Some([(Slot::Left, 5), (Slot::Center, 0), (Slot::Right, 1)])
        );
        state.go_to(5).unwrap();
        assert_eq!(
            state.visible_window(),
            Some([(Slot::Left, 4), (Slot::Center, 5), (Slot::Right, 0)])
        );

        let (single, _) = carousel(1);
        assert_eq!(
            single.visible_window(),
            Some([(Slot::Left, 0), (Slot::Center, 0), (Slot::Right, 0)])
        );
    }

    #[test]
    fn test_select_visible_centres_card() {
        let (mut state, _) = carousel(6);
        state.select_visible("6").unwrap();
        assert_eq!(state.index(), 5);
        assert_eq!(state.current_id(), Some("6"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not in the item list")]
    fn test_select_visible_miss_is_loud_in_debug() {
        let (mut state, _) = carousel(6);
        let _ = state.select_visible("missing");
    }
}
