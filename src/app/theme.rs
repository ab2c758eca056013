use leptos::prelude::*;
use web_sys::AnimationEvent;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::preferences::THEME_STORAGE_KEY;
use crate::preferences::{Preferences, Theme};

#[cfg(feature = "hydrate")]
use super::dom::apply_theme_class;
use super::cursor::cursor_hover;

// Keyframe names in input.css
const ROLL_IN: &str = "page-roll-in";
const ROLL_OUT: &str = "page-roll-out";

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    prefs: RwSignal<Preferences>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.prefs.with(Preferences::theme)
    }

    pub fn is_animating(&self) -> bool {
        self.prefs.with(Preferences::is_animating)
    }

    pub fn toggle(&self) {
        self.prefs.update(|p| {
            if !p.toggle() {
                log::debug!("theme flip already running, ignoring toggle");
            }
        });
    }

    fn covered(&self) {
        self.prefs.update(|p| {
            if let Some(theme) = p.on_covered() {
                log::debug!("page covered, switching to {theme}");
            }
        });
    }

    fn finished(&self) {
        self.prefs.update(|p| {
            if let Some(theme) = p.on_finished() {
                log::debug!("flip finished without cover, switched to {theme}");
            }
        });
    }
}

/// Provides the site preferences and keeps them in sync with local storage and the
/// `<html>` class.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        prefs: RwSignal::new(Preferences::default()),
    };
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
        let restored = RwSignal::new(false);

        Effect::watch(
            || (),
            move |_, _, _| {
                let theme = Theme::from_stored(&stored.get_untracked());
                ctx.prefs.update(|p| p.restore(theme));
                restored.set(true);
            },
            true,
        );

        // Hold off writing until storage has been read, or the default would clobber it
        Effect::new(move |_| {
            let theme = ctx.theme();
            if !restored.get() {
                return;
            }
            apply_theme_class(theme);
            set_stored.set(theme.to_string());
        });
    }

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Renders the page and, while a theme flip is running, the overlay that rolls across it.
///
/// The overlay's animations drive the flip: the theme swaps when the roll-in ends and
/// the overlay unmounts when the roll-out ends.
#[component]
pub fn PageFlip(children: Children) -> impl IntoView {
    let theme = use_theme();
    let on_animation_end = move |ev: AnimationEvent| match ev.animation_name().as_str() {
        ROLL_IN => theme.covered(),
        ROLL_OUT => theme.finished(),
        _ => {}
    };

    view! {
        {children()}
        <Show when=move || theme.is_animating()>
            <div class="page-flip" aria-hidden="true" on:animationend=on_animation_end></div>
        </Show>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let label = move || match theme.theme() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };
    let icon = move || match theme.theme() {
        Theme::Light => "extra-moon",
        Theme::Dark => "extra-sun",
    };

    view! {
        <button
            class="w-10 h-10 rounded-full border border-foreground/30 flex items-center justify-center hover:bg-foreground/10 transition-colors"
            aria-label=label
            title=label
            disabled=move || theme.is_animating()
            on:click=move |_| theme.toggle()
            use:cursor_hover
        >
            <i class=icon aria-hidden="true"></i>
        </button>
    }
}
