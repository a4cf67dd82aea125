//! Auth Page
//!
//! Combined login / signup form. A successful login lands farmers on
//! their dashboard and buyers in the marketplace.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, LoginPayload, SignupPayload};
use crate::state::auth::AuthSession;
use crate::state::use_app_state;

/// Roles a visitor can sign up as. The backend validates these
/// case-sensitively, so the capitalized form goes over the wire.
const SIGNUP_ROLES: [&str; 2] = ["Buyer", "Farmer"];

/// Where to land after authenticating.
fn post_login_path(role: &str) -> &'static str {
    if role.eq_ignore_ascii_case("farmer") || role.eq_ignore_ascii_case("admin") {
        "/dashboard"
    } else {
        "/marketplace"
    }
}

#[component]
pub fn Auth() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let (signup_mode, set_signup_mode) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(SIGNUP_ROLES[0].to_string());
    let (location, set_location) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let submit = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);

            let state = state.clone();
            let navigate = navigate.clone();
            let is_signup = signup_mode.get_untracked();

            spawn_local(async move {
                let result = if is_signup {
                    api::signup(&SignupPayload {
                        name: name.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                        role: role.get_untracked(),
                        location: {
                            let loc = location.get_untracked().trim().to_string();
                            (!loc.is_empty()).then_some(loc)
                        },
                    })
                    .await
                } else {
                    api::login(&LoginPayload {
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                    })
                    .await
                };
                set_busy.set(false);

                match result {
                    Ok(auth) => {
                        let target = post_login_path(&auth.user.role);
                        state.login(AuthSession {
                            token: auth.token,
                            user: auth.user,
                        });
                        state.show_success("Welcome to Farmunity!");
                        navigate(target, Default::default());
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-4 py-12">
            <div class="bg-white w-full max-w-md rounded-2xl shadow-sm border border-green-100 p-6 sm:p-8">
                <h1 class="text-2xl font-bold text-center text-green-800">
                    {move || if signup_mode.get() { "Create your account" } else { "Welcome back" }}
                </h1>

                <form on:submit=submit class="mt-6 space-y-4">
                    <Show when=move || signup_mode.get()>
                        <div>
                            <label class="block text-sm text-gray-600 mb-1">"Full Name"</label>
                            <input
                                type="text"
                                required
                                class="w-full border rounded-lg px-3 py-2 text-sm"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Email"</label>
                        <input
                            type="email"
                            required
                            class="w-full border rounded-lg px-3 py-2 text-sm"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-1">"Password"</label>
                        <input
                            type="password"
                            required
                            class="w-full border rounded-lg px-3 py-2 text-sm"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || signup_mode.get()>
                        <div>
                            <label class="block text-sm text-gray-600 mb-1">"I am a"</label>
                            <select
                                class="w-full border rounded-lg px-3 py-2 text-sm bg-white"
                                on:change=move |ev| set_role.set(event_target_value(&ev))
                            >
                                {SIGNUP_ROLES.into_iter().map(|value| view! {
                                    <option value=value selected=move || role.with(|r| r == value)>
                                        {value}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm text-gray-600 mb-1">
                                "Location (optional)"
                            </label>
                            <input
                                type="text"
                                placeholder="City, State"
                                class="w-full border rounded-lg px-3 py-2 text-sm"
                                prop:value=move || location.get()
                                on:input=move |ev| set_location.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="w-full bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 font-medium disabled:opacity-50"
                        disabled=move || busy.get()
                    >
                        {move || {
                            if busy.get() {
                                "Please wait…"
                            } else if signup_mode.get() {
                                "Sign Up"
                            } else {
                                "Login"
                            }
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-4">
                    {move || if signup_mode.get() { "Already have an account?" } else { "New to Farmunity?" }}
                    " "
                    <button
                        class="text-green-700 font-medium hover:underline"
                        on:click=move |_| set_signup_mode.update(|s| *s = !*s)
                    >
                        {move || if signup_mode.get() { "Login" } else { "Sign Up" }}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_depends_on_role() {
        assert_eq!(post_login_path("farmer"), "/dashboard");
        assert_eq!(post_login_path("Admin"), "/dashboard");
        assert_eq!(post_login_path("buyer"), "/marketplace");
        assert_eq!(post_login_path(""), "/marketplace");
    }

    #[test]
    fn signup_sends_capitalized_roles() {
        // The backend accepts exactly "Farmer" and "Buyer".
        assert_eq!(SIGNUP_ROLES, ["Buyer", "Farmer"]);

        let payload = SignupPayload {
            name: "Raj".into(),
            email: "raj@example.com".into(),
            password: "secret".into(),
            role: SIGNUP_ROLES[1].into(),
            location: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"role\":\"Farmer\""));
    }
}
