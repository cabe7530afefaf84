//! Clipboard and share-sheet plumbing. Both browser capabilities are
//! optional; absence of the share sheet falls back to copying the link.

use thiserror::Error;

use crate::models::Referral;

/// Failures at the browser boundary, surfaced as transient notices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("clipboard is not available")]
    ClipboardUnavailable,
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
    #[error("share failed: {0}")]
    Share(String),
}

/// How a share request was fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet handled it
    Shared,
    /// No share capability, the referral link went to the clipboard
    CopiedLink,
}

/// Write `text` to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), ShareError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or(ShareError::ClipboardUnavailable)?;
        let clipboard = window.navigator().clipboard();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ShareError::ClipboardWrite(js_error_string(&err)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
        Err(ShareError::ClipboardUnavailable)
    }
}

/// Open the native share sheet for a referral, or copy the referral URL
/// to the clipboard when the browser has no share capability.
pub async fn share_referral(referral: &Referral) -> Result<ShareOutcome, ShareError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;

        use crate::models::referral::SHARE_TITLE;

        let window = web_sys::window().ok_or(ShareError::ClipboardUnavailable)?;
        let navigator = window.navigator();

        let has_share = js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share"))
            .unwrap_or(false);

        if !has_share {
            copy_text(&referral.url).await?;
            return Ok(ShareOutcome::CopiedLink);
        }

        let data = web_sys::ShareData::new();
        data.set_title(SHARE_TITLE);
        data.set_text(&referral.share_text());
        data.set_url(&referral.url);

        JsFuture::from(navigator.share_with_data(&data))
            .await
            .map(|_| ShareOutcome::Shared)
            .map_err(|err| ShareError::Share(js_error_string(&err)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = referral;
        Err(ShareError::ClipboardUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error_string(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
