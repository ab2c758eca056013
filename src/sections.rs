//! Scroll-driven section tracking.
//!
//! The page registers an ordered list of section anchors. [`SectionTracker`] samples the
//! scroll offset, resolves each anchor's extent through a caller supplied lookup, and
//! publishes the index of the section sitting under the observation point. The stepper
//! and the scroll progress bar are pure projections of that state.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Lookahead added to the scroll offset so a section counts as active once it passes
/// under the fixed navbar rather than the very top of the viewport.
pub const SCROLL_MARGIN: f64 = 100.0;

/// How long the progress bar stays highlighted after the last scroll sample.
pub const SCROLL_IDLE_MS: f64 = 150.0;

/// Vertical extent of a rendered section, sampled at read time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: usize,
    margin: f64,
}

impl SectionTracker {
    pub fn new<S: AsRef<str>>(sections: &[S]) -> Self {
        Self {
            sections: sections.iter().map(|s| s.as_ref().to_string()).collect(),
            active: 0,
            margin: SCROLL_MARGIN,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.sections.get(self.active).map(String::as_str)
    }

    /// Samples the page at `scroll_y` and returns the (possibly unchanged) active index.
    ///
    /// `lookup` resolves a section id to its current extent. Ids without a rendered
    /// element return `None` and are skipped. Sections are tested in list order and the
    /// first match wins. When nothing contains the observation point the previous index
    /// is kept.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, mut lookup: F) -> usize
    where
        F: FnMut(&str) -> Option<SectionExtent>,
    {
        let point = scroll_y + self.margin;
        let found = self.sections.iter().position(|id| {
            lookup(id)
                .map(|extent| extent.contains(point))
                .unwrap_or(false)
        });
        if let Some(i) = found {
            if i != self.active {
                log::debug!("active section {} -> {}", self.active, i);
            }
            self.active = i;
        }
        self.active
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    pub fn stepper(&self) -> StepperView<'_> {
        StepperView::new(&self.sections, self.active)
    }
}

/// One entry rendered by the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub index: usize,
    pub id: &'a str,
}

/// What the stepper renders for a given active index: the current marker plus optional
/// "go back" and "go forward" affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperView<'a> {
    pub previous: Option<Step<'a>>,
    pub current: Option<Step<'a>>,
    pub next: Option<Step<'a>>,
}

impl<'a> StepperView<'a> {
    pub fn new<S: AsRef<str>>(sections: &'a [S], active: usize) -> Self {
        let step = |index: usize| {
            sections.get(index).map(|id| Step {
                index,
                id: id.as_ref(),
            })
        };
        Self {
            previous: active.checked_sub(1).and_then(step),
            current: step(active),
            next: active.checked_add(1).and_then(step),
        }
    }
}

/// Icon class for a known section anchor. Unknown ids render their 1-based index instead.
pub fn section_icon(id: &str) -> Option<&'static str> {
    match id {
        "home" => Some("extra-home"),
        "about" => Some("extra-user"),
        "projects" => Some("extra-folder"),
        "services" => Some("extra-pricing"),
        "contact" => Some("extra-email"),
        _ => None,
    }
}

/// Coalesces scroll events so at most one sample runs per animation frame.
///
/// `request` returns true when the caller should schedule a frame; the frame callback
/// calls `release` before (or after) sampling. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: Arc<AtomicBool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> bool {
        !self.pending.swap(true, Ordering::AcqRel)
    }

    pub fn release(&self) {
        self.pending.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Fraction of the document scrolled, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub fn from_metrics(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scrollable = scroll_height - viewport_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return Self(0.0);
        }
        Self((scroll_top / scrollable).clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PAGE: [&str; 5] = ["home", "about", "projects", "services", "contact"];

    fn layout() -> HashMap<&'static str, SectionExtent> {
        HashMap::from([
            ("home", SectionExtent::new(0.0, 600.0)),
            ("about", SectionExtent::new(600.0, 400.0)),
            ("projects", SectionExtent::new(1000.0, 400.0)),
            ("services", SectionExtent::new(1400.0, 500.0)),
            ("contact", SectionExtent::new(1900.0, 300.0)),
        ])
    }

    #[test]
    fn test_projects_section_is_active() {
        let extents = layout();
        let mut tracker = SectionTracker::new(&PAGE);

        // Observation point 1200 + 100 = 1300 sits inside projects [1000, 1400)
        let active = tracker.on_scroll(1200.0, |id| extents.get(id).copied());
        assert_eq!(active, 2);
        assert_eq!(tracker.active_id(), Some("projects"));
    }

    #[test]
    fn test_active_matches_containing_section() {
        let extents = layout();
        let mut tracker = SectionTracker::new(&PAGE);

        for scroll_y in (0..2100).step_by(25) {
            let scroll_y = scroll_y as f64;
            let before = tracker.active();
            let active = tracker.on_scroll(scroll_y, |id| extents.get(id).copied());
            let point = scroll_y + SCROLL_MARGIN;
            let expected = PAGE
                .iter()
                .position(|id| extents[id].contains(point))
                .unwrap_or(before);
            assert_eq!(active, expected, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let extents = layout();
        let mut tracker = SectionTracker::new(&PAGE);

        // Point exactly at the top of about
        tracker.on_scroll(500.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 1);

        // Point exactly at the end of about belongs to projects
        tracker.on_scroll(900.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 2);
    }

    #[test]
    fn test_no_match_keeps_previous_index() {
        let extents = layout();
        let mut tracker = SectionTracker::new(&PAGE);

        tracker.on_scroll(1500.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 3);

        // Past the end of the last section
        tracker.on_scroll(5000.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 3);

        // Above the first section (negative overscroll)
        tracker.on_scroll(-500.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 3);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut extents = layout();
        extents.remove("about");
        let mut tracker = SectionTracker::new(&PAGE);

        tracker.on_scroll(1200.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 2);

        // Where about would be, nothing matches, so projects stays active
        tracker.on_scroll(700.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 2);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let extents = HashMap::from([
            ("a", SectionExtent::new(0.0, 500.0)),
            ("b", SectionExtent::new(200.0, 500.0)),
        ]);
        let mut tracker = SectionTracker::new(&["a", "b"]).with_margin(0.0);
        tracker.on_scroll(300.0, |id| extents.get(id).copied());
        assert_eq!(tracker.active(), 0);
    }

    #[test]
    fn test_empty_tracker() {
        let mut tracker = SectionTracker::new::<&str>(&[]);
        assert_eq!(tracker.on_scroll(100.0, |_| None), 0);
        assert_eq!(tracker.active_id(), None);
        let view = tracker.stepper();
        assert!(view.previous.is_none() && view.current.is_none() && view.next.is_none());
    }

    #[test]
    fn test_stepper_view() {
        let first = StepperView::new(&PAGE, 0);
        assert_eq!(first.previous, None);
        assert_eq!(first.current, Some(Step { index: 0, id: "home" }));
        assert_eq!(first.next, Some(Step { index: 1, id: "about" }));

        let middle = StepperView::new(&PAGE, 2);
        assert_eq!(middle.previous.map(|s| s.id), Some("about"));
        assert_eq!(middle.current.map(|s| s.id), Some("projects"));
        assert_eq!(middle.next.map(|s| s.id), Some("services"));

        let last = StepperView::new(&PAGE, 4);
        assert_eq!(last.previous.map(|s| s.id), Some("services"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_section_icons() {
        assert!(PAGE.iter().all(|id| section_icon(id).is_some()));
        assert_eq!(section_icon("contact"), Some("extra-email"));
        assert_eq!(section_icon("blog"), None);
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let gate = FrameGate::new();
        assert!(gate.request());
        // Further scroll events in the same frame don't schedule another
        assert!(!gate.request());
        assert!(!gate.clone().request());
        assert!(gate.is_pending());

        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(ScrollProgress::from_metrics(0.0, 3000.0, 1000.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_metrics(1000.0, 3000.0, 1000.0).value(), 0.5);
        assert_eq!(ScrollProgress::from_metrics(2000.0, 3000.0, 1000.0).value(), 1.0);
        // Overscroll is clamped
        assert_eq!(ScrollProgress::from_metrics(2500.0, 3000.0, 1000.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_metrics(-50.0, 3000.0, 1000.0).value(), 0.0);
        // Page shorter than the viewport
        assert_eq!(ScrollProgress::from_metrics(0.0, 800.0, 1000.0).value(), 0.0);
    }
}
