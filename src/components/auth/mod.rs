mod login_form;
mod signup_form;

pub use login_form::LoginForm;
pub use signup_form::{validate_signup, SignupError, SignupForm};
