//! Light/dark theme context

use leptos::prelude::*;
use recipeshare_core::theme::DARK_CLASS;
use recipeshare_core::Theme;

use crate::storage::{prefers_dark_scheme, BrowserStorage};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(Theme::is_dark)
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        let theme = self.theme.get_untracked();

        if let Err(e) = theme.save(&BrowserStorage) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        apply_to_document(theme);
    }
}

/// Put the `dark` class on `<html>` so the stylesheet switches palettes
fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let theme = Theme::load(&BrowserStorage, prefers_dark_scheme());
    apply_to_document(theme);

    let context = ThemeContext {
        theme: RwSignal::new(theme),
    };
    provide_context(context);
    context
}

/// Hook to access the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
