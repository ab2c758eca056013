use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const CURSOR_SIZE: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything unrecognised in storage falls back to light.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Where a theme toggle is in its page-flip animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePhase {
    #[default]
    Idle,
    /// Overlay is rolling in; the old theme is still applied.
    PendingSwap(Theme),
    /// Overlay covered the page and the new theme is applied; waiting for it to roll out.
    Swapped,
}

/// Site-wide preferences, provided through context from the app root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    theme: Theme,
    phase: ThemePhase,
}

impl Preferences {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            phase: ThemePhase::Idle,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn phase(&self) -> ThemePhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != ThemePhase::Idle
    }

    /// Starts a theme flip. Returns false when one is already running.
    pub fn toggle(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.phase = ThemePhase::PendingSwap(self.theme.toggled());
        true
    }

    /// Called when the overlay fully covers the page. Returns the theme to apply, if any.
    pub fn on_covered(&mut self) -> Option<Theme> {
        match self.phase {
            ThemePhase::PendingSwap(target) => {
                self.theme = target;
                self.phase = ThemePhase::Swapped;
                Some(target)
            }
            _ => None,
        }
    }

    /// Called when the overlay animation has finished.
    ///
    /// If the covering callback never fired (reduced motion skips the keyframe) the swap
    /// is applied here so the toggle is never lost. Returns the theme applied by this call.
    pub fn on_finished(&mut self) -> Option<Theme> {
        let applied = self.on_covered();
        self.phase = ThemePhase::Idle;
        applied
    }

    /// Replaces the theme outside an animation, e.g. from storage on mount.
    pub fn restore(&mut self, theme: Theme) {
        if !self.is_animating() {
            self.theme = theme;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HoverKey(u64);

/// Elements that enlarge the custom cursor opt in here instead of being found by
/// scanning the document.
#[derive(Debug, Clone, Default)]
pub struct HoverRegistry {
    next_key: u64,
    registered: HashSet<HoverKey>,
    hovered: HashSet<HoverKey>,
}

impl HoverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> HoverKey {
        let key = HoverKey(self.next_key);
        self.next_key += 1;
        self.registered.insert(key);
        key
    }

    /// Drops a key, clearing its hover if the element unmounts under the pointer.
    pub fn unregister(&mut self, key: HoverKey) {
        self.registered.remove(&key);
        self.hovered.remove(&key);
    }

    pub fn enter(&mut self, key: HoverKey) {
        if self.registered.contains(&key) {
            self.hovered.insert(key);
        }
    }

    pub fn leave(&mut self, key: HoverKey) {
        self.hovered.remove(&key);
    }

    pub fn is_hovering(&self) -> bool {
        !self.hovered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        // Parked off-screen until the first mouse move
        Self {
            x: -100.0,
            y: -100.0,
            visible: false,
        }
    }
}

impl CursorState {
    /// Centres the cursor on the pointer position.
    pub fn move_to(&mut self, client_x: f64, client_y: f64) {
        self.x = client_x - CURSOR_SIZE / 2.0;
        self.y = client_y - CURSOR_SIZE / 2.0;
        self.visible = true;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn scale(hovering: bool) -> f64 {
        if hovering {
            2.0
        } else {
            1.0
        }
    }
}
