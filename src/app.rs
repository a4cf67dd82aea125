//! App Root Component
//!
//! Main application component with routing, auth guards, and global
//! providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Footer, Header, Toast};
use crate::pages::{Auth, ChatPage, Dashboard, Equipment, Home, Knowledge, Marketplace};
use crate::state::global::{provide_app_state, use_app_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_app_state();

    // Warm the API once on boot to reduce first-load latency (cold starts)
    spawn_local(api::prewarm());

    // Re-validate the cached session. A 401 clears the blob itself, so
    // only then does the user signal get dropped; transient network
    // failures keep the cached session.
    if state.user.with_untracked(|u| u.is_some()) {
        let state = state.clone();
        spawn_local(async move {
            match api::me().await {
                Ok(user) => state.user.set(Some(user)),
                Err(_) => {
                    if crate::state::get_auth().is_none() {
                        state.user.set(None);
                    }
                }
            }
        });
    }

    view! {
        <Router>
            <ScrollToTop />

            <div class="min-h-screen bg-gray-50 flex flex-col">
                <Header />

                <main class="flex-1">
                    <Routes>
                        // Public
                        <Route path="/" view=Home />
                        <Route path="/login" view=LoginRoute />

                        // Protected (any logged-in user)
                        <Route path="/marketplace" view=|| view! {
                            <RequireAuth><Marketplace /></RequireAuth>
                        } />
                        <Route path="/equipment" view=|| view! {
                            <RequireAuth><Equipment /></RequireAuth>
                        } />
                        <Route path="/knowledge" view=|| view! {
                            <RequireAuth><Knowledge /></RequireAuth>
                        } />

                        // Farmer/admin only
                        <Route path="/dashboard" view=|| view! {
                            <RequireRole roles=&["farmer", "admin"]>
                                <Dashboard />
                            </RequireRole>
                        } />

                        // Chat route (Book Now redirects here)
                        <Route path="/chat/:id" view=|| view! {
                            <RequireAuth><ChatPage /></RequireAuth>
                        } />

                        // Fallback
                        <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Login page, redirecting home when already authenticated.
#[component]
fn LoginRoute() -> impl IntoView {
    let state = use_app_state();

    view! {
        {move || {
            if state.is_authed() {
                view! { <Redirect path="/" /> }.into_view()
            } else {
                view! { <Auth /> }.into_view()
            }
        }}
    }
}

/// Gate for routes that need any logged-in user.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = use_app_state();

    view! {
        {move || {
            if state.is_authed() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Gate for routes restricted to specific roles. Unauthenticated users
/// go to login; wrong-role users go home.
#[component]
fn RequireRole(roles: &'static [&'static str], children: ChildrenFn) -> impl IntoView {
    let state = use_app_state();

    view! {
        {move || {
            let role = state.user.with(|u| u.as_ref().map(|u| u.role.to_lowercase()));
            match role {
                None => view! { <Redirect path="/login" /> }.into_view(),
                Some(role) if roles.contains(&role.as_str()) => children().into_view(),
                Some(_) => view! { <Redirect path="/" /> }.into_view(),
            }
        }}
    }
}

/// Reset scroll position and close the mobile menu on navigation.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    let state = use_app_state();

    create_effect(move |_| {
        location.pathname.track();
        state.menu_open.set(false);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {}
}
