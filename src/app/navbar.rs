use std::sync::Arc;

use leptos::{ev, prelude::*};

use crate::{
    carousel::ScrollLock,
    config::{RESUME_URL, SECTIONS, SITE_NAME, SOCIAL_LINKS},
};

use super::{
    cursor::cursor_hover,
    dom::{scroll_to_section, BodyScrollBlocker},
    theme::ThemeToggle,
};

fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // Dropping the lock (menu closed or navbar unmounted) restores scrolling
    let lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move |_| {
        let open = menu_open.get();
        lock.set_value(open.then(|| ScrollLock::acquire(Arc::new(BodyScrollBlocker))));
    });

    let esc_handle = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && menu_open.get_untracked() {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || esc_handle.remove());

    let go_to = move |id: &'static str| {
        set_menu_open.set(false);
        scroll_to_section(id);
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-background/80 backdrop-blur border-b border-foreground/10">
            <nav class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a
                    href="#home"
                    class="font-serif text-2xl font-bold tracking-tight"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to("home");
                    }
                    use:cursor_hover
                >
                    {SITE_NAME.split_whitespace().next().unwrap_or(SITE_NAME)}
                    <span class="text-muted">"."</span>
                </a>
                <div class="flex items-center gap-3">
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden sm:inline-flex btn btn-outline"
                        use:cursor_hover
                    >
                        <i class="extra-download" aria-hidden="true"></i>
                        "Resume"
                    </a>
                    <ThemeToggle />
                    <button
                        class="w-10 h-10 rounded-full border border-foreground/30 flex items-center justify-center"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="site-menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        use:cursor_hover
                    >
                        <i
                            class=move || if menu_open.get() { "extra-close" } else { "extra-menu" }
                            aria-hidden="true"
                        ></i>
                    </button>
                </div>
            </nav>
        </header>
        <Show when=move || menu_open.get()>
            <div
                id="site-menu"
                class="fixed inset-0 z-30 bg-black/60 backdrop-blur-sm"
                on:click=move |_| set_menu_open.set(false)
            >
                <div
                    class="menu-panel absolute inset-y-0 right-0 w-full sm:w-96 bg-background text-foreground pt-24 px-10 flex flex-col gap-8"
                    on:click=|ev| ev.stop_propagation()
                >
                    <ul class="flex flex-col gap-4">
                        {SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(i, &id)| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{id}")
                                            class="group flex items-baseline gap-4 text-4xl font-serif font-bold hover:opacity-70 transition-opacity"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go_to(id);
                                            }
                                            use:cursor_hover
                                        >
                                            <span class="text-sm font-mono text-muted">
                                                {format!("{:02}", i + 1)}
                                            </span>
                                            {section_label(id)}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="mt-auto mb-10 flex gap-4 text-2xl">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="hover:opacity-70"
                                        use:cursor_hover
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
