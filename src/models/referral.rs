use serde::{Deserialize, Serialize};

/// Fixed suffix appended to every referral code
pub const REFERRAL_SUFFIX: &str = "2025";

/// Base URL a referral code is appended to
pub const REFERRAL_BASE_URL: &str = "https://internship-portal.com/ref/";

/// Title used for the native share sheet
pub const SHARE_TITLE: &str = "Join our Internship Program";

/// Referral code and URL, derived deterministically from the display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub code: String,
    pub url: String,
}

impl Referral {
    /// Lower-case the display name, strip all whitespace, append the suffix.
    pub fn for_user(display_name: &str) -> Self {
        let slug: String = display_name.to_lowercase().split_whitespace().collect();
        let code = format!("{slug}{REFERRAL_SUFFIX}");
        let url = format!("{REFERRAL_BASE_URL}{code}");
        Self { code, url }
    }

    /// Text body for the share sheet
    pub fn share_text(&self) -> String {
        format!("Use my referral code: {}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_lowercased_stripped_and_suffixed() {
        let referral = Referral::for_user("Jane Doe");
        assert_eq!(referral.code, "janedoe2025");
    }

    #[test]
    fn url_embeds_the_code() {
        let referral = Referral::for_user("Jane Doe");
        assert_eq!(referral.url, "https://internship-portal.com/ref/janedoe2025");
    }

    #[test]
    fn share_text_embeds_the_code() {
        let referral = Referral::for_user("Amy Lee");
        assert_eq!(referral.share_text(), "Use my referral code: amylee2025");
    }
}
