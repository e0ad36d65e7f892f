//! # Theme
//!
//! A single dark-mode flag shared by every screen for the whole session.
//! [`ThemeContext::global`] is initialized on first use and never torn down;
//! tests build their own instances with [`ThemeContext::new`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::info;

static THEME: OnceLock<ThemeContext> = OnceLock::new();

/// Colors the screens paint with, as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub table_header: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#FFFFFF",
        surface: "#FFFFFF",
        text: "#000000",
        table_header: "#F0F0F0",
        card: "#FFFFFF",
        accent: "#2196F3",
    };

    pub const DARK: Palette = Palette {
        background: "#1D1D1D",
        surface: "#232323",
        text: "#FFFFFF",
        table_header: "#333333",
        card: "#444444",
        accent: "#1E88E5",
    };
}

#[derive(Debug, Default)]
pub struct ThemeContext {
    dark_mode: AtomicBool,
}

impl ThemeContext {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode: AtomicBool::new(dark_mode),
        }
    }

    /// The process-wide context, starting in light mode.
    pub fn global() -> &'static ThemeContext {
        THEME.get_or_init(ThemeContext::default)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::Acquire)
    }

    /// Flips the flag and returns the new value.
    pub fn toggle_theme(&self) -> bool {
        let dark_mode = !self.dark_mode.fetch_xor(true, Ordering::AcqRel);
        info!(dark_mode, "Theme toggled");
        dark_mode
    }

    pub fn palette(&self) -> Palette {
        if self.dark_mode() {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}
