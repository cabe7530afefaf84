use leptos::*;

use crate::components::toast::{use_toaster, Toaster};
use crate::models::Referral;
use crate::share::{self, ShareError, ShareOutcome};

/// How long the check mark stays on the copy buttons
const COPIED_RESET_MS: u32 = 2_000;

/// Referral code and link with copy buttons and a share button
#[component]
pub fn ReferralCard(referral: Referral) -> impl IntoView {
    let toaster = use_toaster();
    let (copied, set_copied) = create_signal(false);

    let copy = move |text: String, what: &'static str| {
        spawn_local(async move {
            match share::copy_text(&text).await {
                Ok(()) => {
                    toaster.info("Copied!", &format!("{what} copied to clipboard"));
                    set_copied.set(true);

                    #[cfg(target_arch = "wasm32")]
                    {
                        use gloo_timers::callback::Timeout;
                        Timeout::new(COPIED_RESET_MS, move || set_copied.set(false)).forget();
                    }
                }
                Err(err) => {
                    log::warn!("clipboard write failed: {err}");
                    toaster.error("Error", "Failed to copy to clipboard");
                }
            }
        });
    };

    let code = referral.code.clone();
    let url = referral.url.clone();
    let code_value = referral.code.clone();
    let url_value = referral.url.clone();
    let share_target = referral.clone();

    let copy_label = move || if copied.get() { "✓" } else { "Copy" };

    view! {
        <div class="card referral-card">
            <h3>"Your Referral Code"</h3>

            <div class="form-field">
                <label>"Referral Code"</label>
                <div class="copy-row">
                    <input class="referral-code" prop:value=code_value readonly=true />
                    <button
                        class="button button-outline"
                        on:click=move |_| copy(code.clone(), "Referral code")
                    >
                        {copy_label}
                    </button>
                </div>
            </div>

            <div class="form-field">
                <label>"Referral Link"</label>
                <div class="copy-row">
                    <input class="referral-url" prop:value=url_value readonly=true />
                    <button
                        class="button button-outline"
                        on:click=move |_| copy(url.clone(), "Referral link")
                    >
                        {copy_label}
                    </button>
                </div>
            </div>

            <button
                class="button button-primary button-full"
                on:click=move |_| spawn_share(share_target.clone(), toaster)
            >
                "Share Referral"
            </button>
        </div>
    }
}

/// Kick off the share flow: native sheet when the browser has one,
/// otherwise the referral link goes to the clipboard.
pub(super) fn spawn_share(referral: Referral, toaster: Toaster) {
    spawn_local(async move {
        match share::share_referral(&referral).await {
            Ok(ShareOutcome::Shared) => {}
            Ok(ShareOutcome::CopiedLink) => {
                toaster.info("Copied!", "Referral link copied to clipboard");
            }
            // Dismissing the share sheet rejects the promise; not an error
            Err(ShareError::Share(reason)) => log::debug!("share sheet closed: {reason}"),
            Err(err) => {
                log::warn!("share failed: {err}");
                toaster.error("Error", "Failed to share referral");
            }
        }
    });
}
