use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query};
use web_sys::Element;

use crate::preferences::{CursorState, HoverRegistry};

#[derive(Debug, Clone, Copy)]
struct CursorContext {
    registry: RwSignal<HoverRegistry>,
}

pub fn provide_cursor() {
    provide_context(CursorContext {
        registry: RwSignal::new(HoverRegistry::new()),
    });
}

/// Directive for elements that should grow the custom cursor: `<a use:cursor_hover>`.
pub fn cursor_hover(el: Element) {
    let Some(ctx) = use_context::<CursorContext>() else {
        return;
    };
    let Some(key) = ctx.registry.try_update(HoverRegistry::register) else {
        return;
    };

    let _ = use_event_listener(el.clone(), ev::mouseenter, move |_| {
        ctx.registry.update(|r| r.enter(key));
    });
    let _ = use_event_listener(el, ev::mouseleave, move |_| {
        ctx.registry.update(|r| r.leave(key));
    });
    on_cleanup(move || {
        ctx.registry.try_update(|r| r.unregister(key));
    });
}

/// Follows the mouse on devices with a precise pointer. Touch screens never mount it.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let fine_pointer = use_media_query("(pointer: fine)");

    view! {
        <Show when=move || fine_pointer.get()>
            <CursorDot />
        </Show>
    }
}

#[component]
fn CursorDot() -> impl IntoView {
    let ctx = expect_context::<CursorContext>();
    let cursor = RwSignal::new(CursorState::default());

    let move_handle = window_event_listener(ev::mousemove, move |e| {
        cursor.update(|c| c.move_to(e.client_x() as f64, e.client_y() as f64));
    });
    // Leaving the window reports no related target
    let out_handle = window_event_listener(ev::mouseout, move |e| {
        if e.related_target().is_none() {
            cursor.update(CursorState::hide);
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        out_handle.remove();
    });

    let transform = move || {
        let scale = CursorState::scale(ctx.registry.with(HoverRegistry::is_hovering));
        cursor.with(|c| format!("translate3d({}px, {}px, 0) scale({scale})", c.x, c.y))
    };

    view! {
        <div
            class="custom-cursor"
            class=("opacity-0", move || !cursor.with(|c| c.visible))
            style:transform=transform
            aria-hidden="true"
        ></div>
    }
}
