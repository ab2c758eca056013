//! Thin wrappers over the browser APIs the views need. Only call these from effects and
//! event handlers; there is no document on the server.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[cfg(feature = "hydrate")]
use crate::preferences::Theme;
use crate::{
    carousel::ScrollBlocker,
    sections::{ScrollProgress, SectionExtent},
};

static BODY_LOCKS: AtomicUsize = AtomicUsize::new(0);

/// Blocks page scrolling by toggling `overflow: hidden` on `<body>`.
///
/// Locks nest: the menu overlay and the project modal can both hold one, and scrolling
/// only comes back when the last is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollBlocker;

impl ScrollBlocker for BodyScrollBlocker {
    fn block(&self) {
        if BODY_LOCKS.fetch_add(1, Ordering::AcqRel) == 0 {
            set_body_overflow(Some("hidden"));
        }
    }

    fn unblock(&self) {
        let released = BODY_LOCKS
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok_and(|prev| prev == 1);
        if released {
            set_body_overflow(None);
        }
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let res = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = res {
        log::warn!("couldn't update body overflow: {e:?}");
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Document-relative extent of the element with `id`, if it is rendered.
pub fn section_extent(id: &str, scroll_y: f64) -> Option<SectionExtent> {
    let rect = document().get_element_by_id(id)?.get_bounding_client_rect();
    Some(SectionExtent::new(rect.top() + scroll_y, rect.height()))
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no section {id} to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_progress() -> ScrollProgress {
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    ScrollProgress::from_metrics(scroll_y(), scroll_height, viewport_height)
}

/// Puts the theme class on `<html>` so Tailwind's `dark:` variants follow it.
#[cfg(feature = "hydrate")]
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    let res = classes
        .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
        .and_then(|_| classes.add_1(theme.as_str()));
    if let Err(e) = res {
        log::warn!("couldn't apply {theme} theme: {e:?}");
    }
}
