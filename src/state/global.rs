//! Global Application State
//!
//! Reactive state shared through the component tree. The authenticated
//! user is the only cross-cutting value; everything else lives in local
//! component state and is fetched per view.

use leptos::*;

use crate::api::types::User;
use crate::state::auth::{self, AuthSession};

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Authenticated user, mirrored to local storage
    pub user: RwSignal<Option<User>>,
    /// Mobile navigation menu open flag
    pub menu_open: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree. The cached auth blob is
/// read synchronously here so guards see the session on first render.
pub fn provide_app_state() {
    let state = AppState {
        user: create_rw_signal(auth::get_auth().map(|s| s.user)),
        menu_open: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    pub fn is_authed(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_farmer(&self) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_farmer()).unwrap_or(false))
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Persist the session and update the user signal.
    pub fn login(&self, session: AuthSession) {
        auth::save_auth(&session);
        self.user.set(Some(session.user));
    }

    pub fn logout(&self) {
        auth::clear_auth();
        self.user.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
