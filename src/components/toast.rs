use leptos::*;

/// How long a toast stays visible
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Info,
    Error,
}

/// A transient notice shown in the corner of the screen
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
}

/// Toast context: at most one notice is visible at a time; showing a new
/// one replaces the old and restarts the dismiss timer.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    epoch: RwSignal<u32>,
}

impl Toaster {
    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn info(&self, title: &str, message: &str) {
        self.show(Toast {
            title: title.to_string(),
            message: message.to_string(),
            level: ToastLevel::Info,
        });
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(Toast {
            title: title.to_string(),
            message: message.to_string(),
            level: ToastLevel::Error,
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, toast: Toast) {
        self.current.set(Some(toast));

        // Bump the epoch so an older timer cannot dismiss a newer toast
        let id = self.epoch.get_untracked() + 1;
        self.epoch.set(id);

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::callback::Timeout;

            let current = self.current;
            let epoch = self.epoch;
            Timeout::new(TOAST_DURATION_MS, move || {
                if epoch.get_untracked() == id {
                    current.set(None);
                }
            })
            .forget();
        }
    }
}

/// Provide the toast context. Call once at the app root.
pub fn provide_toaster() {
    provide_context(Toaster {
        current: create_rw_signal(None),
        epoch: create_rw_signal(0),
    });
}

/// Access the toast context provided by a parent
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster must be provided by a parent component")
}

/// Renders the active toast, if any. Clicking a toast dismisses it early.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            {move || {
                toaster.current().map(|toast| {
                    let class = match toast.level {
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toaster.dismiss()>
                            <strong class="toast-title">{toast.title}</strong>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_and_dismissing_a_toast() {
        let runtime = create_runtime();

        let toaster = Toaster {
            current: create_rw_signal(None),
            epoch: create_rw_signal(0),
        };
        assert!(toaster.current.get_untracked().is_none());

        toaster.info("Copied!", "Referral code copied to clipboard");
        let toast = toaster.current.get_untracked().unwrap();
        assert_eq!(toast.level, ToastLevel::Info);
        assert_eq!(toast.title, "Copied!");

        toaster.error("Error", "Failed to copy to clipboard");
        let toast = toaster.current.get_untracked().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);

        toaster.dismiss();
        assert!(toaster.current.get_untracked().is_none());

        runtime.dispose();
    }
}
