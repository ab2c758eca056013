use std::{collections::HashSet, sync::Arc};

use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_interval_fn, use_media_query, utils::Pausable};

use crate::{
    carousel::{CarouselState, CloseReason, Slot},
    content::{find_project, projects, GalleryItem},
};

use super::{cursor::cursor_hover, dom::BodyScrollBlocker};

/// Shared by the carousel, the gallery and the modal so that "View" anywhere opens the
/// same overlay.
type Carousel = RwSignal<CarouselState>;

fn open_project(state: Carousel, id: &str) {
    state.update(|s| {
        if let Err(e) = s.open_focus(id) {
            log::warn!("couldn't open project: {e}");
        }
    });
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ids = projects().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    let state: Carousel = RwSignal::new(CarouselState::new(&ids, Arc::new(BodyScrollBlocker)));
    provide_context(state);

    view! {
        <section id="projects" class="py-24 bg-background text-foreground">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="badge">"Portfolio"</span>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mt-4">"Featured Projects"</h2>
                    <p class="text-lg text-muted mt-4 max-w-2xl mx-auto">
                        "A selection of things I've designed and built, from client sites to full-stack apps."
                    </p>
                </div>
                <ProjectCarousel />
                <h3 class="text-2xl font-serif font-bold mt-24 mb-8 text-center">"All Projects"</h3>
                <ProjectGallery />
            </div>
            <ProjectModal />
        </section>
    }
}

#[component]
fn TechTags(item: &'static GalleryItem) -> impl IntoView {
    view! {
        <ul class="flex flex-wrap gap-2">
            {item
                .technologies
                .iter()
                .map(|tech| view! { <li class="tag">{tech.as_str()}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn CarouselCard(placement: Slot, item: &'static GalleryItem) -> impl IntoView {
    let state = expect_context::<Carousel>();
    let center = placement == Slot::Center;
    let on_click = move |_: ev::MouseEvent| {
        if center {
            open_project(state, &item.id);
        } else {
            // select_visible logs the miss itself
            let _ = state.try_update(|s| s.select_visible(&item.id));
        }
    };
    let class = match placement {
        Slot::Center => "carousel-card z-10 scale-100 opacity-100",
        Slot::Left | Slot::Right => "carousel-card hidden md:block scale-90 opacity-60 hover:opacity-80",
    };

    view! {
        <article
            class=class
            role="button"
            tabindex="0"
            aria-label=format!("{}: {}", if center { "Open" } else { "Show" }, item.title)
            on:click=on_click
            use:cursor_hover
        >
            <img
                src=item.image.as_str()
                alt=item.title.as_str()
                loading="lazy"
                class="w-full h-56 object-cover rounded-t-2xl"
            />
            <div class="p-6 flex flex-col gap-3">
                <h4 class="text-xl font-serif font-bold">{item.title.as_str()}</h4>
                <p class="text-sm text-muted line-clamp-3">{item.description.as_str()}</p>
                <TechTags item />
            </div>
        </article>
    }
}

/// Three-up carousel over all projects with arrows, dots, hover pause and auto-advance.
#[component]
fn ProjectCarousel() -> impl IntoView {
    let state = expect_context::<Carousel>();
    let items = projects();

    let interval = state.with_untracked(CarouselState::interval);
    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            state.update(|s| {
                s.elapse(interval);
            });
        },
        interval.as_millis() as u64,
    );
    let running = Memo::new(move |_| state.with(CarouselState::is_running));
    Effect::new(move |_| {
        if running.get() {
            resume();
        } else {
            pause();
        }
    });

    let cards = move || {
        state.with(|s| s.visible_window()).map(|window| {
            window
                .into_iter()
                .map(|(placement, i)| view! { <CarouselCard placement item=&items[i] /> })
                .collect_view()
        })
    };

    view! {
        <div
            class="relative"
            on:mouseenter=move |_| state.update(CarouselState::pointer_enter)
            on:mouseleave=move |_| state.update(CarouselState::pointer_leave)
        >
            <div class="flex items-center justify-center gap-6 min-h-[28rem]">
                {move || match cards() {
                    Some(cards) => Either::Left(cards),
                    None => Either::Right(view! { <p class="text-muted">"No projects yet."</p> }),
                }}
            </div>
            <button
                class="carousel-arrow left-0"
                aria-label="Previous project"
                on:click=move |_| state.update(CarouselState::previous)
                use:cursor_hover
            >
                <i class="extra-arrow-left" aria-hidden="true"></i>
            </button>
            <button
                class="carousel-arrow right-0"
                aria-label="Next project"
                on:click=move |_| state.update(CarouselState::next)
                use:cursor_hover
            >
                <i class="extra-arrow-right" aria-hidden="true"></i>
            </button>
            <div class="flex justify-center gap-2 mt-8">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let is_current = move || state.with(|s| s.index() == i);
                        view! {
                            <button
                                class="h-2 rounded-full bg-foreground transition-all duration-300"
                                class=("w-8", is_current)
                                class=("w-2", move || !is_current())
                                class=("opacity-30", move || !is_current())
                                aria-label=format!("Show {}", item.title)
                                on:click=move |_| {
                                    state.update(|s| {
                                        if let Err(e) = s.go_to(i) {
                                            log::warn!("{e}");
                                        }
                                    })
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Grid of every project. Details show on hover for mouse users and on tap for touch
/// screens, which have no hover.
#[component]
fn ProjectGallery() -> impl IntoView {
    let state = expect_context::<Carousel>();
    let touch = use_media_query("(hover: none)");
    let expanded = RwSignal::new(HashSet::<&'static str>::new());

    let toggle_expanded = move |id: &'static str| {
        expanded.update(|e| {
            if !e.remove(id) {
                e.insert(id);
            }
        });
    };

    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {projects()
                .iter()
                .map(|item| {
                    let id = item.id.as_str();
                    let is_expanded = move || expanded.with(|e| e.contains(id));
                    view! {
                        <article
                            class="group relative overflow-hidden rounded-2xl border border-foreground/10 aspect-[4/3]"
                            on:click=move |_| {
                                if touch.get_untracked() {
                                    toggle_expanded(id);
                                }
                            }
                        >
                            <img
                                src=item.image.as_str()
                                alt=item.title.as_str()
                                loading="lazy"
                                class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                            />
                            <div
                                class="gallery-overlay absolute inset-0 p-6 flex flex-col justify-end gap-3 bg-black/70 text-white opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                                class=("opacity-100", is_expanded)
                            >
                                <h4 class="text-xl font-serif font-bold">{item.title.as_str()}</h4>
                                <p class="text-sm line-clamp-2">{item.description.as_str()}</p>
                                <div class="flex gap-3">
                                    <button
                                        class="btn btn-light"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            open_project(state, id);
                                        }
                                        use:cursor_hover
                                    >
                                        "View"
                                    </button>
                                    {item
                                        .live_url
                                        .as_deref()
                                        .map(|url| {
                                            view! {
                                                <a
                                                    href=url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="btn btn-outline-light"
                                                    on:click=|ev| ev.stop_propagation()
                                                    use:cursor_hover
                                                >
                                                    "Visit"
                                                </a>
                                            }
                                        })}
                                </div>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Detail overlay for the focused project. Closes on the button, Escape, or a click on
/// the backdrop; each path releases the scroll lock through the carousel state.
#[component]
fn ProjectModal() -> impl IntoView {
    let state = expect_context::<Carousel>();
    let focused = Memo::new(move |_| state.with(|s| s.focused().and_then(find_project)));
    let close = move |reason: CloseReason| state.update(|s| s.close_focus(reason));

    let esc_handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && focused.get_untracked().is_some() {
            close(CloseReason::Escape);
        }
    });
    on_cleanup(move || esc_handle.remove());

    move || {
        focused.get().map(|item| {
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="project-modal-title"
                    on:click=move |_| close(CloseReason::Backdrop)
                >
                    <div
                        class="relative bg-background text-foreground rounded-2xl shadow-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            class="absolute top-4 right-4 z-10 w-10 h-10 rounded-full bg-background/80 flex items-center justify-center"
                            aria-label="Close"
                            on:click=move |_| close(CloseReason::Button)
                            use:cursor_hover
                        >
                            <i class="extra-close" aria-hidden="true"></i>
                        </button>
                        <img
                            src=item.image.as_str()
                            alt=item.title.as_str()
                            class="w-full h-64 md:h-80 object-cover rounded-t-2xl"
                        />
                        <div class="p-6 md:p-8 flex flex-col gap-6">
                            <h3 id="project-modal-title" class="text-3xl md:text-4xl font-serif font-bold">
                                {item.title.as_str()}
                            </h3>
                            <p class="text-lg leading-relaxed">{item.description.as_str()}</p>
                            <div>
                                <h4 class="text-xl font-semibold mb-4">"Technologies Used"</h4>
                                <TechTags item />
                            </div>
                            <div class="flex flex-wrap gap-4">
                                {item
                                    .live_url
                                    .as_deref()
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="btn btn-primary"
                                                use:cursor_hover
                                            >
                                                <i class="extra-link" aria-hidden="true"></i>
                                                "Live Demo"
                                            </a>
                                        }
                                    })}
                                {item
                                    .source_url
                                    .as_deref()
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="btn btn-outline"
                                                use:cursor_hover
                                            >
                                                <i class="devicon-github-plain" aria-hidden="true"></i>
                                                "Source Code"
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
