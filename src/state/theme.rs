use gloo_storage::{LocalStorage, Storage};
use leptos::*;

const THEME_KEY: &str = "portal_theme";

/// Theme variants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// String form used for storage and the `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Theme context: current theme plus a toggle
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggle());
    }
}

/// Saved preference first, then the OS preference, then light
fn initial_theme() -> Theme {
    if let Ok(saved) = LocalStorage::get::<String>(THEME_KEY) {
        if let Some(theme) = Theme::parse(&saved) {
            return theme;
        }
    }

    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Apply theme to the document root element
fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Provide the theme context. Call once at the app root.
pub fn provide_theme_context() {
    let initial = initial_theme();
    apply_theme(initial);

    let (theme, set_theme) = create_signal(initial);

    // Re-apply and persist whenever the theme changes
    create_effect(move |_| {
        let current = theme.get();
        apply_theme(current);
        let _ = LocalStorage::set(THEME_KEY, current.as_str());
    });

    provide_context(ThemeContext { theme, set_theme });
}

/// Access the theme context provided by a parent
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_variants() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("solarized"), None);
    }
}
