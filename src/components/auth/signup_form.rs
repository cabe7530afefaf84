use leptos::*;
use thiserror::Error;

/// Why a signup submission was withheld
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Full name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Gate for the signup form: name and email must be non-blank after
/// trimming and the two password fields must agree. The shell itself
/// never rejects a signup, this check simply withholds the callback.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), SignupError> {
    if name.trim().is_empty() {
        return Err(SignupError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(SignupError::MissingEmail);
    }
    if password != confirm_password {
        return Err(SignupError::PasswordMismatch);
    }
    Ok(())
}

/// Signup form. Invalid input keeps the user on this view and shows the
/// reason inline instead of failing silently.
#[component]
pub fn SignupForm(
    #[prop(into)] on_signup: Callback<(String, String)>,
    #[prop(into)] on_switch_to_login: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (error, set_error) = create_signal(None::<SignupError>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let name = name.get_untracked();
        let email = email.get_untracked();
        match validate_signup(
            &name,
            &email,
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(()) => {
                set_error.set(None);
                on_signup.call((name, email));
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2 class="auth-title">"Join Our Program"</h2>
                <p class="auth-subtitle">"Create your internship account"</p>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="signup-name">"Full Name"</label>
                    <input
                        id="signup-name"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label for="signup-password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="signup-password"
                            type=password_type
                            placeholder="Create a password"
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

                <div class="form-field">
                    <label for="signup-confirm">"Confirm Password"</label>
                    <input
                        id="signup-confirm"
                        type=password_type
                        placeholder="Confirm your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required=true
                    />
                </div>

                {move || {
                    error.get().map(|err| {
                        view! { <p class="form-error" role="alert">{err.to_string()}</p> }
                    })
                }}

                <button type="submit" class="button button-primary button-full">
                    "Create Account"
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| on_switch_to_login.call(())
                >
                    "Sign in"
                </button>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            validate_signup("", "a@b.com", "pw", "pw"),
            Err(SignupError::MissingName)
        );
        assert_eq!(
            validate_signup("   ", "a@b.com", "pw", "pw"),
            Err(SignupError::MissingName)
        );
    }

    #[test]
    fn blank_email_is_rejected() {
        assert_eq!(
            validate_signup("Amy Lee", "  ", "pw", "pw"),
            Err(SignupError::MissingEmail)
        );
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(
            validate_signup("Amy Lee", "amy@x.com", "pw1", "pw2"),
            Err(SignupError::PasswordMismatch)
        );
    }

    #[test]
    fn matching_input_passes() {
        assert_eq!(validate_signup("Amy Lee", "amy@x.com", "pw", "pw"), Ok(()));
    }

    #[test]
    fn invalid_signup_withholds_the_transition() {
        use crate::state::{AppView, Session};

        let runtime = create_runtime();

        let session = Session::new();
        session.show_signup();

        // The form only invokes the callback when validation passes
        for (name, email, pw, confirm) in [
            ("", "a@b.com", "pw", "pw"),
            ("Amy Lee", "amy@x.com", "pw1", "pw2"),
        ] {
            if validate_signup(name, email, pw, confirm).is_ok() {
                session.signup(name, email);
            }
            assert_eq!(session.view(), AppView::Signup);
        }

        session.signup("Amy Lee", "amy@x.com");
        assert_eq!(session.view(), AppView::Dashboard);
        assert_eq!(session.display_name(), "Amy Lee");

        runtime.dispose();
    }
}
