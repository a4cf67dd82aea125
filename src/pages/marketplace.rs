//! Marketplace Page
//!
//! Live mandi price snapshot for the selected state plus the crop
//! listings grid. Listings refresh on an interval; a request generation
//! counter drops responses that arrive after the filters changed.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::{self, types::Crop, CropFilters};
use crate::components::{CardSkeleton, ChatBox};
use crate::state::use_app_state;

/// Listings refresh cadence.
const REFRESH_MS: u32 = 8_000;

/// States served by the price snapshot, used until `/api/states` loads.
const STATES_FALLBACK: [&str; 29] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
];

const CATEGORIES: [(&str, &str); 5] = [
    ("", "All"),
    ("grains", "Grains"),
    ("vegetables", "Vegetables"),
    ("fruits", "Fruits"),
    ("organic", "Organic"),
];

/// Classify a listing when the seller left the category blank.
fn infer_category(crop: &str) -> &'static str {
    let name = crop.to_lowercase();
    if name.contains("organic") {
        return "organic";
    }
    const GRAINS: [&str; 6] = ["wheat", "rice", "corn", "maize", "barley", "millet"];
    const VEGETABLES: [&str; 6] = ["tomato", "onion", "potato", "cabbage", "carrot", "brinjal"];
    const FRUITS: [&str; 6] = ["mango", "banana", "apple", "grape", "orange", "guava"];
    if GRAINS.iter().any(|g| name.contains(g)) {
        "grains"
    } else if VEGETABLES.iter().any(|v| name.contains(v)) {
        "vegetables"
    } else if FRUITS.iter().any(|f| name.contains(f)) {
        "fruits"
    } else {
        "other"
    }
}

/// Seller the chat modal is opened against.
#[derive(Clone)]
struct ChatTarget {
    owner_id: String,
    farmer: String,
    crop_id: String,
}

#[component]
pub fn Marketplace() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <PriceBoard />
            <Listings />
        </div>
    }
}

/// Today's wholesale/retail snapshot for one state.
#[component]
fn PriceBoard() -> impl IntoView {
    let (states, set_states) = create_signal(
        STATES_FALLBACK.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
    );
    let (state_sel, set_state_sel) = create_signal("Punjab".to_string());
    let (price_type, set_price_type) = create_signal("wholesale".to_string());
    let (prices, set_prices) = create_signal(None::<api::PriceResponse>);

    spawn_local(async move {
        if let Ok(fetched) = api::fetch_states().await {
            if !fetched.is_empty() {
                set_states.set(fetched);
            }
        }
    });

    create_effect(move |_| {
        let state = state_sel.get();
        let kind = price_type.get();
        spawn_local(async move {
            match api::fetch_today_prices(&state, &kind).await {
                Ok(snapshot) => set_prices.set(Some(snapshot)),
                Err(_) => set_prices.set(None),
            }
        });
    });

    view! {
        <section class="bg-white rounded-2xl shadow-sm border border-green-100 p-4 sm:p-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3">
                <h2 class="text-xl font-bold text-gray-800">"Today's Mandi Prices"</h2>
                <div class="flex items-center gap-2">
                    <select
                        class="border rounded-lg px-3 py-1.5 text-sm bg-white"
                        on:change=move |ev| set_state_sel.set(event_target_value(&ev))
                    >
                        {move || states.get().into_iter().map(|s| {
                            let selected = state_sel.with_untracked(|sel| *sel == s);
                            view! { <option value=s.clone() selected=selected>{s}</option> }
                        }).collect_view()}
                    </select>
                    {["wholesale", "retail"].into_iter().map(|kind| view! {
                        <button
                            on:click=move |_| set_price_type.set(kind.to_string())
                            class=move || {
                                let active = price_type.with(|t| t == kind);
                                if active {
                                    "px-3 py-1.5 rounded-lg text-sm bg-green-600 text-white capitalize"
                                } else {
                                    "px-3 py-1.5 rounded-lg text-sm bg-gray-100 text-gray-700 capitalize"
                                }
                            }
                        >
                            {kind}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            {move || match prices.get() {
                None => view! {
                    <p class="text-sm text-gray-400 mt-4">"Prices unavailable right now."</p>
                }.into_view(),
                Some(snapshot) => view! {
                    <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-3 mt-4">
                        {snapshot.items.into_iter().map(|row| {
                            let change = row.change_pct.unwrap_or(0.0);
                            let badge = if change >= 0.0 {
                                ("text-green-700 bg-green-50", format!("▲ {:.1}%", change))
                            } else {
                                ("text-red-700 bg-red-50", format!("▼ {:.1}%", change.abs()))
                            };
                            view! {
                                <div class="border rounded-xl p-3">
                                    <div class="text-sm font-medium">{row.crop}</div>
                                    <div class="text-lg font-bold text-gray-800">
                                        {row.price_per_qt
                                            .map(|p| format!("₹{:.0}", p))
                                            .unwrap_or_else(|| "—".into())}
                                    </div>
                                    <div class="text-[11px] text-gray-500">
                                        {row.unit.unwrap_or_else(|| "per quintal".into())}
                                    </div>
                                    <span class=format!("inline-block mt-1 text-xs px-1.5 py-0.5 rounded {}", badge.0)>
                                        {badge.1}
                                    </span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view(),
            }}
        </section>
    }
}

/// Crop listings grid with search, category chips, and live refresh.
#[component]
fn Listings() -> impl IntoView {
    let state = use_app_state();

    let (search, set_search) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (crops, set_crops) = create_signal(Vec::<Crop>::new());
    let (loading, set_loading) = create_signal(true);
    let (chat_target, set_chat_target) = create_signal(None::<ChatTarget>);

    // Stale responses (filters changed mid-flight) are discarded.
    let generation = create_rw_signal(0u64);

    let load = move |show_spinner: bool| {
        let gen = generation.with_untracked(|g| g + 1);
        generation.set(gen);
        if show_spinner {
            set_loading.set(true);
        }

        let filters = CropFilters {
            q: {
                let q = search.get_untracked().trim().to_string();
                (!q.is_empty()).then_some(q)
            },
            category: {
                let c = category.get_untracked();
                (!c.is_empty()).then_some(c)
            },
            sort: Some("createdAt".into()),
            order: Some("desc".into()),
            ..Default::default()
        };

        spawn_local(async move {
            let result = api::fetch_crops(&filters).await;
            if generation.get_untracked() != gen {
                return;
            }
            if let Ok(response) = result {
                set_crops.set(response.items);
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| {
        search.track();
        category.track();
        load(true);
    });

    let refresh = Interval::new(REFRESH_MS, move || load(false));
    on_cleanup(move || drop(refresh));

    let contact_seller = {
        let state = state.clone();
        move |crop: &Crop| match &crop.owner_id {
            Some(owner_id) => set_chat_target.set(Some(ChatTarget {
                owner_id: owner_id.clone(),
                farmer: crop.farmer.clone(),
                crop_id: crop.id.clone(),
            })),
            None => state.show_error("This seller cannot be contacted yet"),
        }
    };

    view! {
        <section>
            <div class="flex flex-col sm:flex-row sm:items-center gap-3">
                <input
                    type="search"
                    placeholder="Search crops, sellers, locations…"
                    class="flex-1 border rounded-lg px-3 py-2 text-sm bg-white"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="flex gap-2 overflow-x-auto">
                    {CATEGORIES.into_iter().map(|(value, label)| view! {
                        <button
                            on:click=move |_| set_category.set(value.to_string())
                            class=move || {
                                let active = category.with(|c| c == value);
                                if active {
                                    "px-3 py-1.5 rounded-full text-sm bg-green-600 text-white whitespace-nowrap"
                                } else {
                                    "px-3 py-1.5 rounded-full text-sm bg-white border text-gray-700 whitespace-nowrap"
                                }
                            }
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            {
                let contact_seller = contact_seller.clone();
                move || {
                    if loading.get() {
                        return view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5 mt-6">
                                {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view();
                    }
                    let items = crops.get();
                    if items.is_empty() {
                        return view! {
                            <p class="text-center text-gray-400 mt-10">
                                "No listings match these filters."
                            </p>
                        }.into_view();
                    }
                    let contact_seller = contact_seller.clone();
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5 mt-6">
                            {items.into_iter().map(|crop| {
                                let contact_seller = contact_seller.clone();
                                let card = crop.clone();
                                let category_tag = crop
                                    .category
                                    .clone()
                                    .unwrap_or_else(|| infer_category(&crop.crop).to_string());
                                view! {
                                    <div class="bg-white rounded-2xl shadow-sm border border-green-100 overflow-hidden flex flex-col">
                                        <div class="h-36 bg-green-50 flex items-center justify-center text-5xl">
                                            {crop.image.clone().map(|src| view! {
                                                <img src=src alt=crop.crop.clone() class="w-full h-full object-cover" />
                                            }.into_view()).unwrap_or_else(|| view! { "🌾" }.into_view())}
                                        </div>
                                        <div class="p-4 flex-1 flex flex-col">
                                            <div class="flex items-start justify-between">
                                                <h3 class="font-semibold">{crop.crop.clone()}</h3>
                                                <span class="text-xs bg-green-50 text-green-700 px-2 py-0.5 rounded-full capitalize">
                                                    {category_tag}
                                                </span>
                                            </div>
                                            <div class="text-sm text-gray-600 mt-1">
                                                {crop.farmer.clone()} " · " {crop.location.clone()}
                                            </div>
                                            <div class="text-sm text-gray-500">
                                                {crop.quantity.clone()} " · " {crop.quality.clone()}
                                            </div>
                                            <div class="flex items-center justify-between mt-3">
                                                <span class="text-lg font-bold text-green-700">
                                                    {format!("₹{:.0}/qt", crop.price)}
                                                </span>
                                                {crop.rating.map(|r| view! {
                                                    <span class="text-sm text-yellow-600">{format!("★ {:.1}", r)}</span>
                                                })}
                                            </div>
                                            <button
                                                on:click=move |_| contact_seller(&card)
                                                class="mt-3 bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-2 text-sm font-medium"
                                            >
                                                "Contact Seller"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }

            {move || chat_target.get().map(|target| view! {
                <ChatBox
                    recipient_id=target.owner_id
                    recipient_name=target.farmer
                    crop_id=target.crop_id
                    on_close=Callback::new(move |_| set_chat_target.set(None))
                />
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_inference_prefers_organic() {
        assert_eq!(infer_category("Organic Wheat"), "organic");
        assert_eq!(infer_category("Basmati Rice"), "grains");
        assert_eq!(infer_category("Fresh Tomatoes"), "vegetables");
        assert_eq!(infer_category("Alphonso Mango"), "fruits");
        assert_eq!(infer_category("Sugarcane"), "other");
    }
}
