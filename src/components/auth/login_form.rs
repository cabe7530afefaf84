use leptos::*;

/// Login form. The identifier is passed through to the shell on submit;
/// the password field is collected but never checked, there is no
/// account store behind this demo.
#[component]
pub fn LoginForm(
    #[prop(into)] on_login: Callback<String>,
    #[prop(into)] on_switch_to_signup: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_login.call(email.get_untracked());
    };

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2 class="auth-title">"Welcome Back"</h2>
                <p class="auth-subtitle">"Sign in to your internship account"</p>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for="login-password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="login-password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required=true
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            aria-label="Toggle password visibility"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>

                <button type="submit" class="button button-primary button-full">
                    "Sign In"
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| on_switch_to_signup.call(())
                >
                    "Sign up"
                </button>
            </p>
        </div>
    }
}
