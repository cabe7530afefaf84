use leptos::*;

use crate::components::layout::AuthShell;
use crate::components::toast::{provide_toaster, ToastViewport};
use crate::components::{Dashboard, Leaderboard, LoginForm, SignupForm};
use crate::state::{provide_theme_context, AppView, Session};

/// Composition root: owns the session state and renders exactly one of
/// the four views at a time, passing state down as props and receiving
/// intent back through callbacks.
#[component]
pub fn App() -> impl IntoView {
    // Ambient contexts at the app root
    provide_theme_context();
    provide_toaster();

    let session = Session::new();

    view! {
        <ToastViewport />
        {move || match session.view() {
            AppView::Login => view! {
                <AuthShell>
                    <LoginForm
                        on_login=move |email: String| session.login(&email)
                        on_switch_to_signup=move |_| session.show_signup()
                    />
                </AuthShell>
            }
            .into_view(),
            AppView::Signup => view! {
                <AuthShell>
                    <SignupForm
                        on_signup=move |(name, email): (String, String)| {
                            session.signup(&name, &email)
                        }
                        on_switch_to_login=move |_| session.show_login()
                    />
                </AuthShell>
            }
            .into_view(),
            AppView::Dashboard => view! {
                <Dashboard
                    display_name=session.display_name()
                    on_logout=move |_| session.logout()
                    on_view_leaderboard=move |_| session.go_to_leaderboard()
                />
            }
            .into_view(),
            AppView::Leaderboard => view! {
                <Leaderboard
                    display_name=session.display_name()
                    on_back=move |_| session.go_to_dashboard()
                    on_logout=move |_| session.logout()
                />
            }
            .into_view(),
        }}
    }
}
