//! Home Page
//!
//! Landing hero plus the three service cards. Service buttons send
//! anonymous visitors to login instead of dead-ending on a guard.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::use_app_state;

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    cta: &'static str,
    href: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "🌾",
        title: "Crop Marketplace",
        blurb: "Sell your harvest directly to buyers at fair prices. Live mandi \
                rates for your state, updated through the day.",
        cta: "Browse Marketplace",
        href: "/marketplace",
    },
    Service {
        icon: "🚜",
        title: "Equipment Rental",
        blurb: "Rent tractors, harvesters, drones and more from verified owners \
                near you. Certified listings carry an inspection badge.",
        cta: "Find Equipment",
        href: "/equipment",
    },
    Service {
        icon: "📚",
        title: "Knowledge Hub",
        blurb: "Ask the farming assistant, join community discussions, and get \
                weather advisories for the week ahead.",
        cta: "Explore Knowledge",
        href: "/knowledge",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let go = {
        let state = state.clone();
        move |href: &'static str| {
            let target = if state.is_authed() { href } else { "/login" };
            navigate(target, Default::default());
        }
    };

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-green-700 to-green-500 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 sm:py-24 text-center">
                    <h1 class="text-3xl sm:text-5xl font-bold">
                        "Growing Together, Harvesting Success"
                    </h1>
                    <p class="mt-4 text-base sm:text-lg text-green-100 max-w-2xl mx-auto">
                        "One platform for selling crops, renting equipment, and \
                         learning from the farming community."
                    </p>
                </div>
            </section>

            // Services
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16">
                <h2 class="text-2xl sm:text-3xl font-bold text-center text-gray-800">
                    "Our Services"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
                    {SERVICES.iter().map(|service| {
                        let go = go.clone();
                        let href = service.href;
                        view! {
                            <div class="bg-white rounded-2xl shadow-sm border border-green-100 p-6 flex flex-col">
                                <div class="text-4xl">{service.icon}</div>
                                <h3 class="text-lg font-semibold mt-3">{service.title}</h3>
                                <p class="text-sm text-gray-600 mt-2 flex-1">{service.blurb}</p>
                                <button
                                    on:click=move |_| go(href)
                                    class="mt-4 bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 text-sm font-medium transition-colors"
                                >
                                    {service.cta}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
