//! Equipment Rental Page
//!
//! Rental listings with city search and category chips, both mirrored
//! to the URL query so filtered views can be shared. Live updates
//! arrive over the equipment SSE stream.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::api::{self, types::Equipment as EquipmentItem, EquipmentFilters};
use crate::components::{CardSkeleton, CertBadge, CertificateModal};
use crate::state::{subscribe_equipment_stream, use_app_state};

const CATEGORIES: [(&str, &str); 6] = [
    ("", "All"),
    ("tractors", "Tractors"),
    ("harvesters", "Harvesters"),
    ("drones", "Drones"),
    ("tillers", "Tillers"),
    ("irrigation", "Irrigation"),
];

/// Query string mirroring the current filters, "" when unfiltered.
fn filters_query(category: &str, city: &str) -> String {
    let mut pairs = api::QueryPairs::new();
    pairs.set("category", category);
    pairs.set("city", city);
    pairs.to_query()
}

#[component]
pub fn Equipment() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let query = use_query_map();

    // Seed filters from the URL so shared links open pre-filtered.
    let initial_category = query.with_untracked(|q| q.get("category").cloned()).unwrap_or_default();
    let initial_city = query.with_untracked(|q| q.get("city").cloned()).unwrap_or_default();

    let (category, set_category) = create_signal(initial_category);
    let (city, set_city) = create_signal(initial_city);
    let (page, set_page) = create_signal(1u32);
    let (items, set_items) = create_signal(Vec::<EquipmentItem>::new());
    let (has_more, set_has_more) = create_signal(false);
    let (loading, set_loading) = create_signal(true);
    let (cert_modal, set_cert_modal) = create_signal(None::<api::types::Certification>);
    let (booking, set_booking) = create_signal(None::<String>);

    let generation = create_rw_signal(0u64);

    let load = move |show_spinner: bool| {
        let gen = generation.with_untracked(|g| g + 1);
        generation.set(gen);
        if show_spinner {
            set_loading.set(true);
        }

        let current_page = page.get_untracked();
        let filters = EquipmentFilters {
            category: {
                let c = category.get_untracked();
                (!c.is_empty()).then_some(c)
            },
            city: {
                let c = city.get_untracked().trim().to_string();
                (!c.is_empty()).then_some(c)
            },
            page: current_page,
            ..Default::default()
        };

        spawn_local(async move {
            let result = api::fetch_equipment(&filters).await;
            if generation.get_untracked() != gen {
                return;
            }
            if let Ok(response) = result {
                set_has_more.set(response.has_more);
                if current_page > 1 {
                    set_items.update(|all| all.extend(response.items));
                } else {
                    set_items.set(response.items);
                }
            }
            set_loading.set(false);
        });
    };

    // Refetch on filter change and mirror the filters into the URL.
    {
        let navigate = navigate.clone();
        create_effect(move |_| {
            let cat = category.get();
            let city_q = city.get();
            set_page.set(1);
            load(true);
            navigate(
                &format!("/equipment{}", filters_query(&cat, city_q.trim())),
                leptos_router::NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    }

    // SSE nudges refresh the current view in place.
    let stream = subscribe_equipment_stream(move || load(false));
    on_cleanup(move || stream.close());

    let load_more = move |_| {
        set_page.update(|p| *p += 1);
        load(false);
    };

    let book = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |id: String| {
            if booking.get_untracked().is_some() {
                return;
            }
            set_booking.set(Some(id.clone()));
            let state = state.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::request_equipment(&id).await {
                    Ok(conversation_id) => {
                        navigate(&format!("/chat/{}", conversation_id), Default::default());
                    }
                    Err(err) => state.show_error(&err),
                }
                set_booking.set(None);
            });
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-800">"Equipment Rental"</h1>

            <div class="flex flex-col sm:flex-row sm:items-center gap-3 mt-4">
                <input
                    type="search"
                    placeholder="Search by city…"
                    class="flex-1 border rounded-lg px-3 py-2 text-sm bg-white"
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
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
                let book = book.clone();
                move || {
                    if loading.get() {
                        return view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5 mt-6">
                                {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view();
                    }
                    let listings = items.get();
                    if listings.is_empty() {
                        return view! {
                            <p class="text-center text-gray-400 mt-10">
                                "No equipment matches these filters."
                            </p>
                        }.into_view();
                    }
                    let book = book.clone();
                    view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-5 mt-6">
                            {listings.into_iter().map(|item| {
                                let book = book.clone();
                                let id = item.id.clone();
                                let cert = item.certification.clone();
                                let cert_status = cert
                                    .as_ref()
                                    .and_then(|c| c.status.clone());
                                let show_cert = cert
                                    .as_ref()
                                    .filter(|c| c.status.as_deref() == Some("certified"))
                                    .cloned();
                                let image = item.images.first().cloned();
                                view! {
                                    <div class="bg-white rounded-2xl shadow-sm border border-green-100 overflow-hidden flex flex-col">
                                        <div class="h-36 bg-green-50 flex items-center justify-center text-5xl">
                                            {image.map(|src| view! {
                                                <img src=src alt=item.title.clone() class="w-full h-full object-cover" />
                                            }.into_view()).unwrap_or_else(|| view! { "🚜" }.into_view())}
                                        </div>
                                        <div class="p-4 flex-1 flex flex-col">
                                            <div class="flex items-start justify-between gap-2">
                                                <h3 class="font-semibold">{item.title.clone()}</h3>
                                                {cert_status.map(|status| view! { <CertBadge status=status /> })}
                                            </div>
                                            <div class="text-sm text-gray-600 mt-1">
                                                {item.location.display()}
                                                {item.owner.name.clone().map(|n| format!(" · {}", n))}
                                            </div>
                                            <div class="flex items-center gap-2 mt-1 text-sm">
                                                {item.rating.map(|r| view! {
                                                    <span class="text-yellow-600">{format!("★ {:.1}", r)}</span>
                                                })}
                                                <span class=if item.available {
                                                    "text-xs bg-green-50 text-green-700 px-2 py-0.5 rounded-full"
                                                } else {
                                                    "text-xs bg-red-50 text-red-700 px-2 py-0.5 rounded-full"
                                                }>
                                                    {if item.available { "Available" } else { "Booked" }}
                                                </span>
                                            </div>
                                            <div class="flex items-baseline gap-2 mt-3">
                                                <span class="text-lg font-bold text-green-700">
                                                    {format!("₹{:.0}/day", item.price.day)}
                                                </span>
                                                <span class="text-xs text-gray-500">
                                                    {format!("₹{:.0}/week", item.price.week)}
                                                </span>
                                            </div>
                                            <div class="flex gap-2 mt-3">
                                                <button
                                                    on:click={
                                                        let book = book.clone();
                                                        let id = id.clone();
                                                        move |_| book(id.clone())
                                                    }
                                                    class="flex-1 bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-2 text-sm font-medium disabled:opacity-50"
                                                    disabled=move || !item.available || booking.get().is_some()
                                                >
                                                    "Book Now"
                                                </button>
                                                {show_cert.map(|cert| view! {
                                                    <button
                                                        on:click=move |_| set_cert_modal.set(Some(cert.clone()))
                                                        class="px-3 py-2 rounded-lg border text-sm hover:bg-gray-50"
                                                    >
                                                        "Certificate"
                                                    </button>
                                                })}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }

            <Show when=move || has_more.get() && !loading.get()>
                <div class="text-center mt-6">
                    <button
                        on:click=load_more
                        class="px-5 py-2 rounded-lg border bg-white hover:bg-gray-50 text-sm font-medium"
                    >
                        "Load More"
                    </button>
                </div>
            </Show>

            {move || cert_modal.get().map(|cert| view! {
                <CertificateModal
                    cert=cert
                    on_close=Callback::new(move |_| set_cert_modal.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_mirror_to_query_string() {
        assert_eq!(filters_query("", ""), "");
        assert_eq!(filters_query("drones", ""), "?category=drones");
        assert_eq!(
            filters_query("tractors", "Ludhiana"),
            "?category=tractors&city=Ludhiana"
        );
    }
}
