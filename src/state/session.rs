use leptos::*;

/// The four top-level screens the shell can render
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppView {
    Login,
    Signup,
    Dashboard,
    Leaderboard,
}

/// Session state owned by the app shell: the active view and the
/// signed-in user's display name. Leaf views never mutate these
/// directly; they report intent through the transition methods.
#[derive(Clone, Copy)]
pub struct Session {
    view: RwSignal<AppView>,
    display_name: RwSignal<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: create_rw_signal(AppView::Login),
            display_name: create_rw_signal(String::new()),
        }
    }

    pub fn view(&self) -> AppView {
        self.view.get()
    }

    pub fn display_name(&self) -> String {
        self.display_name.get()
    }

    /// Log in with an identifier string. The display name is derived from
    /// the email's local part; any string is accepted, there is no account
    /// store to check against.
    pub fn login(&self, email: &str) {
        self.display_name.set(display_name_from_email(email));
        self.view.set(AppView::Dashboard);
    }

    /// Complete signup. The name is taken verbatim; the email is accepted
    /// but unused beyond the form's own validation.
    pub fn signup(&self, name: &str, _email: &str) {
        self.display_name.set(name.to_string());
        self.view.set(AppView::Dashboard);
    }

    pub fn logout(&self) {
        self.display_name.set(String::new());
        self.view.set(AppView::Login);
    }

    pub fn show_login(&self) {
        self.view.set(AppView::Login);
    }

    pub fn show_signup(&self) {
        self.view.set(AppView::Signup);
    }

    pub fn go_to_dashboard(&self) {
        self.view.set(AppView::Dashboard);
    }

    pub fn go_to_leaderboard(&self) {
        self.view.set(AppView::Leaderboard);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive a display name from an email address: take the local part
/// (everything before `@`, or the whole string when there is no `@`),
/// split it on `.` and `_`, capitalize each word, join with spaces.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);

    local
        .split(['.', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn derives_name_from_dotted_local_part() {
        assert_eq!(display_name_from_email("jane.doe@x.com"), "Jane Doe");
    }

    #[test]
    fn derives_name_from_underscored_local_part() {
        assert_eq!(display_name_from_email("bob_smith@x.com"), "Bob Smith");
    }

    #[test]
    fn treats_string_without_at_as_local_part() {
        assert_eq!(display_name_from_email("carol"), "Carol");
    }

    #[test]
    fn collapses_consecutive_separators() {
        assert_eq!(display_name_from_email("a..b@x.com"), "A B");
    }

    #[test]
    fn empty_email_gives_empty_name() {
        assert_eq!(display_name_from_email(""), "");
    }

    #[test]
    fn starts_on_login_with_empty_name() {
        with_runtime(|| {
            let session = Session::new();
            assert_eq!(session.view.get_untracked(), AppView::Login);
            assert_eq!(session.display_name.get_untracked(), "");
        });
    }

    #[test]
    fn login_derives_name_and_lands_on_dashboard() {
        with_runtime(|| {
            let session = Session::new();
            session.login("jane.doe@x.com");
            assert_eq!(session.view.get_untracked(), AppView::Dashboard);
            assert_eq!(session.display_name.get_untracked(), "Jane Doe");
        });
    }

    #[test]
    fn signup_takes_name_verbatim() {
        with_runtime(|| {
            let session = Session::new();
            session.show_signup();
            session.signup("Amy Lee", "amy@x.com");
            assert_eq!(session.view.get_untracked(), AppView::Dashboard);
            assert_eq!(session.display_name.get_untracked(), "Amy Lee");
        });
    }

    #[test]
    fn leaderboard_round_trip_keeps_name() {
        with_runtime(|| {
            let session = Session::new();
            session.login("bob_smith@x.com");
            session.go_to_leaderboard();
            assert_eq!(session.view.get_untracked(), AppView::Leaderboard);
            session.go_to_dashboard();
            assert_eq!(session.view.get_untracked(), AppView::Dashboard);
            assert_eq!(session.display_name.get_untracked(), "Bob Smith");
        });
    }

    #[test]
    fn logout_resets_from_dashboard_and_leaderboard() {
        with_runtime(|| {
            let session = Session::new();
            session.login("jane.doe@x.com");
            session.logout();
            assert_eq!(session.view.get_untracked(), AppView::Login);
            assert_eq!(session.display_name.get_untracked(), "");

            session.login("bob_smith@x.com");
            session.go_to_leaderboard();
            session.logout();
            assert_eq!(session.view.get_untracked(), AppView::Login);
            assert_eq!(session.display_name.get_untracked(), "");
        });
    }

    #[test]
    fn login_and_signup_pages_can_switch_back_and_forth() {
        with_runtime(|| {
            let session = Session::new();
            session.show_signup();
            assert_eq!(session.view.get_untracked(), AppView::Signup);
            session.show_login();
            assert_eq!(session.view.get_untracked(), AppView::Login);
        });
    }
}
