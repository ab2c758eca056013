use leptos::prelude::*;

use crate::config::{build_date, copyright_year, SECTIONS, SITE_NAME, SOCIAL_LINKS};

use super::{cursor::cursor_hover, dom::scroll_to_section};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-foreground/10 bg-background text-foreground">
            <div class="max-w-7xl mx-auto px-6 py-12 flex flex-col md:flex-row gap-8 md:items-center md:justify-between">
                <div>
                    <p class="font-serif text-2xl font-bold">{SITE_NAME}</p>
                    <p class="text-sm text-muted mt-1">"Clean, fast websites built with care."</p>
                </div>
                <nav class="flex flex-wrap gap-x-6 gap-y-2" aria-label="Footer">
                    {SECTIONS
                        .iter()
                        .map(|&id| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="capitalize text-sm hover:underline"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(id);
                                    }
                                    use:cursor_hover
                                >
                                    {id}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex gap-4 text-xl">
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
            <div class="border-t border-foreground/10 py-6 text-center text-xs text-muted">
                <p>{format!("© {} {SITE_NAME}. All rights reserved.", copyright_year())}</p>
                <p class="mt-1">
                    "Built with Rust and Leptos. Last updated " {build_date()}
                </p>
            </div>
        </footer>
    }
}
