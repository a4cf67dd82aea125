//! Header Component
//!
//! Sticky navigation bar with brand, nav links, notification bell, and
//! auth controls. Protected destinations route through the same gating
//! as the router guards so the buttons never dead-end.

use leptos::*;
use leptos_router::*;

use crate::components::NotificationBell;
use crate::state::global::use_app_state;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/marketplace", "Marketplace"),
    ("/equipment", "Equipment"),
    ("/knowledge", "Knowledge"),
];

/// Navigation header component
#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let logout = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |_| {
            state.logout();
            navigate("/", Default::default());
        }
    };

    let menu_open = state.menu_open;

    view! {
        <header class="bg-white shadow-sm border-b border-green-100 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <A href="/" class="flex items-center">
                        <div class="w-8 h-8 bg-green-600 rounded-full flex items-center justify-center">
                            <span class="text-white font-bold text-sm">"F"</span>
                        </div>
                        <span class="ml-2 text-xl font-bold text-green-800">"Farmunity"</span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex space-x-4">
                        {NAV_LINKS.into_iter().map(|(href, label)| view! {
                            <NavLink href=href label=label />
                        }).collect_view()}
                    </nav>

                    // Right side
                    <div class="flex items-center space-x-3">
                        {
                            let state = state.clone();
                            move || {
                                if state.is_authed() {
                                    view! { <NotificationBell /> }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }
                        }

                        {
                            let state = state.clone();
                            move || {
                                if state.is_farmer() || state.is_admin() {
                                    view! {
                                        <A
                                            href="/dashboard"
                                            class="bg-green-600 hover:bg-green-700 text-white px-3 py-2 rounded-md text-sm font-medium transition-colors"
                                        >
                                            "Dashboard"
                                        </A>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }
                        }

                        {
                            let state = state.clone();
                            let logout = logout.clone();
                            move || {
                                if state.is_authed() {
                                    let logout = logout.clone();
                                    view! {
                                        <button
                                            on:click=logout
                                            class="bg-green-50 hover:bg-green-100 text-green-700 px-4 py-2 rounded-md text-sm font-medium transition-colors border border-green-200"
                                        >
                                            "Logout"
                                        </button>
                                    }.into_view()
                                } else {
                                    view! {
                                        <A
                                            href="/login"
                                            class="bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                                        >
                                            "Login"
                                        </A>
                                    }.into_view()
                                }
                            }
                        }

                        // Mobile menu toggle
                        <button
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                            class="md:hidden text-gray-600 hover:text-green-600 transition-colors text-2xl leading-none"
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            {move || {
                if menu_open.get() {
                    view! {
                        <div class="md:hidden border-t border-green-100">
                            <div class="px-2 pt-2 pb-3 space-y-1 bg-white">
                                {NAV_LINKS.into_iter().map(|(href, label)| view! {
                                    <A
                                        href=href
                                        class="block w-full text-left px-3 py-2 text-base font-medium rounded-md text-gray-700 hover:text-green-700 hover:bg-green-50"
                                    >
                                        {label}
                                    </A>
                                }).collect_view()}
                            </div>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}

/// Individual navigation link with active highlight
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-3 py-2 text-sm font-medium rounded-md text-gray-700 hover:text-green-700 hover:bg-green-50 transition-colors"
            active_class="text-green-700 bg-green-50"
            exact=true
        >
            {label}
        </A>
    }
}
