use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::sections::{
    section_icon, FrameGate, ScrollProgress, SectionTracker, StepperView, SCROLL_IDLE_MS,
};

use super::{
    cursor::cursor_hover,
    dom::{scroll_progress, scroll_to_section, scroll_y, section_extent},
};

/// Runs `sample` at most once per animation frame while the window scrolls, plus once
/// after mount.
fn use_frame_sampled_scroll(sample: impl Fn() + Copy + 'static) {
    let gate = FrameGate::new();
    let handle = window_event_listener(ev::scroll, move |_| {
        if gate.request() {
            let gate = gate.clone();
            request_animation_frame(move || {
                gate.release();
                sample();
            });
        }
    });
    on_cleanup(move || handle.remove());

    Effect::new(move |_| request_animation_frame(sample));
}

/// Index of the section currently under the navbar.
fn use_active_section(sections: &'static [&'static str]) -> Memo<usize> {
    let tracker = RwSignal::new(SectionTracker::new(sections));

    use_frame_sampled_scroll(move || {
        let y = scroll_y();
        tracker.maybe_update(|t| {
            let before = t.active();
            t.on_scroll(y, |id| section_extent(id, y)) != before
        });
    });

    Memo::new(move |_| tracker.with(SectionTracker::active))
}

#[component]
fn StepIcon(index: usize, id: &'static str) -> impl IntoView {
    match section_icon(id) {
        Some(icon) => Either::Left(view! { <i class=icon aria-hidden="true"></i> }),
        None => Either::Right(view! { <span class="text-sm font-bold">{index + 1}</span> }),
    }
}

#[component]
fn StepArrow(id: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="w-8 h-8 rounded-full border-2 border-foreground/80 bg-background flex items-center justify-center opacity-80 hover:opacity-60 transition-opacity"
            aria-label=format!("{label}: {id}")
            on:click=move |_| scroll_to_section(id)
            use:cursor_hover
        >
            <i class=icon aria-hidden="true"></i>
        </button>
    }
}

/// Section navigation: a vertical stepper on desktop and a bottom bar on mobile.
#[component]
pub fn Stepper(sections: &'static [&'static str]) -> impl IntoView {
    let active = use_active_section(sections);
    let stepper = move || StepperView::new(sections, active.get());

    let steps = move |size: &'static str| {
        sections
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let is_active = move || active.get() == index;
                view! {
                    <button
                        class=format!(
                            "{size} rounded-full flex items-center justify-center border-2 border-foreground transition-all duration-300",
                        )
                        class=("bg-foreground", is_active)
                        class=("text-background", is_active)
                        class=("scale-110", is_active)
                        class=("opacity-50", move || !is_active())
                        aria-label=format!("Go to {id}")
                        aria-current=move || is_active().then_some("step")
                        on:click=move |_| scroll_to_section(id)
                        use:cursor_hover
                    >
                        <StepIcon index id />
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            class="fixed right-4 top-1/2 -translate-y-1/2 z-30 hidden lg:flex flex-col items-center gap-4"
            aria-label="Sections"
        >
            {move || {
                stepper()
                    .previous
                    .map(|step| view! { <StepArrow id=step.id icon="extra-arrow-up" label="Previous section" /> })
            }}
            <div class="flex flex-col items-center gap-3">{steps("w-10 h-10")}</div>
            {move || {
                stepper()
                    .next
                    .map(|step| view! { <StepArrow id=step.id icon="extra-arrow-down" label="Next section" /> })
            }}
        </nav>
        <nav
            class="fixed bottom-4 inset-x-0 z-30 flex lg:hidden justify-center"
            aria-label="Sections"
        >
            <div class="flex gap-2 px-3 py-2 rounded-full bg-background/90 border border-foreground/20 backdrop-blur">
                {steps("w-9 h-9")}
            </div>
        </nav>
    }
}

/// Thin bar along the top edge showing how far the page is scrolled.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (progress, set_progress) = signal(ScrollProgress::default());
    let (scrolling, set_scrolling) = signal(false);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_scrolling.set(false), SCROLL_IDLE_MS);
    let start = StoredValue::new_local(start);

    use_frame_sampled_scroll(move || {
        set_progress.set(scroll_progress());
        set_scrolling.set(true);
        start.with_value(|start| start(()));
    });

    view! {
        <div class="fixed top-0 inset-x-0 h-1 z-50 pointer-events-none" aria-hidden="true">
            <div
                class="h-full origin-left bg-foreground transition-opacity duration-300"
                class=("opacity-100", move || scrolling.get())
                class=("opacity-40", move || !scrolling.get())
                style:transform=move || format!("scaleX({})", progress.get().value())
            ></div>
        </div>
    }
}
