use leptos::*;

use crate::state::{use_theme, Theme};

/// Centered wrapper for the login and signup pages
#[component]
pub fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="auth-shell">
            <div class="auth-shell-inner">{children()}</div>
        </div>
    }
}

/// Theme toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let label = move || {
        match theme_ctx.theme.get() {
            Theme::Light => "Dark", // Show what clicking will do
            Theme::Dark => "Light",
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme_ctx.toggle()
        >
            {label}
        </button>
    }
}
