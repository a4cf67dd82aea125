//! Dashboard Page
//!
//! Farmer workspace: profile card, headline stats, crop and equipment
//! management, and the certification upload flow. Admins additionally
//! see the pending certification review queue.

use leptos::*;

use crate::api::{
    self,
    types::{Certification, Crop, DashboardSummary, Equipment, EquipmentLocation, RentalPrice},
    EquipmentPayload, NewCrop, PendingCert,
};
use crate::components::{CertBadge, ListSkeleton};
use crate::state::use_app_state;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <ProfileCard />
            <StatsRow />
            <MyCrops />
            <MyEquipment />
            <Show when=move || state.is_admin()>
                <AdminCertQueue />
            </Show>
        </div>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let state = use_app_state();

    view! {
        {move || state.user.get().map(|user| view! {
            <section class="bg-white rounded-2xl shadow-sm border border-green-100 p-5 flex items-center gap-4">
                <div class="w-14 h-14 rounded-full bg-green-600 text-white flex items-center justify-center text-xl font-bold">
                    {user.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                </div>
                <div class="flex-1">
                    <div class="font-semibold text-lg">{user.name.clone()}</div>
                    <div class="text-sm text-gray-600">
                        {user.email.clone()}
                        {user.location.clone().map(|l| format!(" · {}", l))}
                    </div>
                </div>
                <div class="text-right">
                    <span class="text-xs bg-green-50 text-green-700 px-2 py-1 rounded-full capitalize">
                        {user.role.clone()}
                    </span>
                    {user.rating.map(|r| view! {
                        <div class="text-sm text-yellow-600 mt-1">{format!("★ {:.1}", r)}</div>
                    })}
                </div>
            </section>
        })}
    }
}

#[component]
fn StatsRow() -> impl IntoView {
    let (summary, set_summary) = create_signal(DashboardSummary::default());

    spawn_local(async move {
        if let Ok(fetched) = api::fetch_dashboard_summary().await {
            set_summary.set(fetched);
        }
    });

    view! {
        <section class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            <StatCard
                label="Active Listings"
                value=Signal::derive(move || summary.with(|s| s.crops_count.to_string()))
            />
            <StatCard
                label="Total Earnings"
                value=Signal::derive(move || summary.with(|s| format!("₹{:.0}", s.earnings)))
            />
            <StatCard
                label="Equipment Rented"
                value=Signal::derive(move || summary.with(|s| s.equipment_rented.to_string()))
            />
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-green-100 p-5">
            <div class="text-sm text-gray-500">{label}</div>
            <div class="text-2xl font-bold text-gray-800 mt-1">{move || value.get()}</div>
        </div>
    }
}

/// The farmer's own crop listings with create and delete.
#[component]
fn MyCrops() -> impl IntoView {
    let state = use_app_state();

    let (crops, set_crops) = create_signal(Vec::<Crop>::new());
    let (loaded, set_loaded) = create_signal(false);
    let (show_form, set_show_form) = create_signal(false);

    let (crop_name, set_crop_name) = create_signal(String::new());
    let (quantity, set_quantity) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (location, set_location) = create_signal(String::new());
    let (quality, set_quality) = create_signal("Grade A".to_string());

    let load = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_my_crops().await {
                set_crops.set(fetched);
            }
            set_loaded.set(true);
        });
    };
    load();

    let submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let state = state.clone();
            let payload = NewCrop {
                farmer: state.user.with_untracked(|u| {
                    u.as_ref().map(|u| u.name.clone()).unwrap_or_default()
                }),
                crop: crop_name.get_untracked().trim().to_string(),
                quantity: quantity.get_untracked().trim().to_string(),
                price: price.get_untracked().trim().parse().unwrap_or(0.0),
                location: location.get_untracked().trim().to_string(),
                quality: quality.get_untracked(),
                image: None,
                category: None,
            };
            if payload.crop.is_empty() || payload.quantity.is_empty() {
                state.show_error("Crop name and quantity are required");
                return;
            }
            spawn_local(async move {
                match api::create_crop(&payload).await {
                    Ok(_) => {
                        state.show_success("Listing published");
                        set_show_form.set(false);
                        set_crop_name.set(String::new());
                        set_quantity.set(String::new());
                        set_price.set(String::new());
                        set_location.set(String::new());
                        load();
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    let remove = {
        let state = state.clone();
        move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                match api::delete_crop(&id).await {
                    Ok(()) => {
                        state.show_success("Listing removed");
                        load();
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm border border-green-100 p-5">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-bold text-gray-800">"My Crop Listings"</h2>
                <button
                    on:click=move |_| set_show_form.update(|s| *s = !*s)
                    class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-1.5 text-sm font-medium"
                >
                    {move || if show_form.get() { "Cancel" } else { "+ Add Crop" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form
                    on:submit=submit.clone()
                    class="grid grid-cols-1 sm:grid-cols-2 gap-3 mt-4 border rounded-xl p-4 bg-gray-50"
                >
                    <input
                        type="text"
                        placeholder="Crop (e.g. Organic Wheat)"
                        required
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || crop_name.get()
                        on:input=move |ev| set_crop_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Quantity (e.g. 500 quintals)"
                        required
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Price per quintal (₹)"
                        required
                        min="1"
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Location (City, State)"
                        required
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                    <select
                        class="border rounded-lg px-3 py-2 text-sm bg-white"
                        on:change=move |ev| set_quality.set(event_target_value(&ev))
                    >
                        <option value="Grade A">"Grade A"</option>
                        <option value="Grade B">"Grade B"</option>
                        <option value="Organic Certified">"Organic Certified"</option>
                    </select>
                    <button
                        type="submit"
                        class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-2 text-sm font-medium"
                    >
                        "Publish Listing"
                    </button>
                </form>
            </Show>

            {
                let remove = remove.clone();
                move || {
                    if !loaded.get() {
                        return view! { <div class="mt-4"><ListSkeleton /></div> }.into_view();
                    }
                    let items = crops.get();
                    if items.is_empty() {
                        return view! {
                            <p class="text-sm text-gray-400 mt-4">"No listings yet."</p>
                        }.into_view();
                    }
                    let remove = remove.clone();
                    view! {
                        <div class="divide-y mt-4">
                            {items.into_iter().map(|crop| {
                                let remove = remove.clone();
                                let id = crop.id.clone();
                                view! {
                                    <div class="flex items-center justify-between py-3">
                                        <div>
                                            <div class="font-medium text-sm">{crop.crop.clone()}</div>
                                            <div class="text-xs text-gray-500">
                                                {crop.quantity.clone()}
                                                " · "
                                                {format!("₹{:.0}/qt", crop.price)}
                                                " · "
                                                {crop.location.clone()}
                                            </div>
                                        </div>
                                        <button
                                            on:click=move |_| remove(id.clone())
                                            class="text-sm text-red-600 hover:underline"
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }
        </section>
    }
}

/// The owner's equipment listings with create, edit, delete, and the
/// certification upload flow.
#[component]
fn MyEquipment() -> impl IntoView {
    let state = use_app_state();

    let (items, set_items) = create_signal(Vec::<Equipment>::new());
    let (loaded, set_loaded) = create_signal(false);
    // None = closed, Some(None) = creating, Some(Some(id)) = editing.
    let (editing, set_editing) = create_signal(None::<Option<String>>);
    let (cert_for, set_cert_for) = create_signal(None::<String>);

    let (title, set_title) = create_signal(String::new());
    let (category, set_category) = create_signal("tractors".to_string());
    let (city, set_city) = create_signal(String::new());
    let (region, set_region) = create_signal(String::new());
    let (day_price, set_day_price) = create_signal(String::new());
    let (week_price, set_week_price) = create_signal(String::new());
    let (available, set_available) = create_signal(true);

    let load = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_my_equipment().await {
                set_items.set(fetched);
            }
            set_loaded.set(true);
        });
    };
    load();

    let open_create = move |_| {
        set_title.set(String::new());
        set_category.set("tractors".to_string());
        set_city.set(String::new());
        set_region.set(String::new());
        set_day_price.set(String::new());
        set_week_price.set(String::new());
        set_available.set(true);
        set_editing.set(Some(None));
    };

    let open_edit = move |item: &Equipment| {
        set_title.set(item.title.clone());
        set_category.set(item.category.clone().unwrap_or_else(|| "tractors".into()));
        set_city.set(item.location.city.clone().unwrap_or_default());
        set_region.set(item.location.state.clone().unwrap_or_default());
        set_day_price.set(format!("{}", item.price.day));
        set_week_price.set(format!("{}", item.price.week));
        set_available.set(item.available);
        set_editing.set(Some(Some(item.id.clone())));
    };

    let submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let Some(target) = editing.get_untracked() else {
                return;
            };
            let state = state.clone();
            let payload = EquipmentPayload {
                title: title.get_untracked().trim().to_string(),
                category: category.get_untracked(),
                location: EquipmentLocation {
                    city: {
                        let c = city.get_untracked().trim().to_string();
                        (!c.is_empty()).then_some(c)
                    },
                    state: {
                        let s = region.get_untracked().trim().to_string();
                        (!s.is_empty()).then_some(s)
                    },
                },
                price: RentalPrice {
                    day: day_price.get_untracked().trim().parse().unwrap_or(0.0),
                    week: week_price.get_untracked().trim().parse().unwrap_or(0.0),
                },
                features: Vec::new(),
                images: Vec::new(),
                available: available.get_untracked(),
            };
            if payload.title.is_empty() {
                state.show_error("Equipment title is required");
                return;
            }
            spawn_local(async move {
                let result = match &target {
                    Some(id) => api::update_equipment(id, &payload).await,
                    None => api::create_equipment(&payload).await,
                };
                match result {
                    Ok(_) => {
                        state.show_success("Equipment saved");
                        set_editing.set(None);
                        load();
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    let remove = {
        let state = state.clone();
        move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                match api::delete_equipment(&id).await {
                    Ok(()) => {
                        state.show_success("Equipment removed");
                        load();
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm border border-green-100 p-5">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-bold text-gray-800">"My Equipment"</h2>
                <button
                    on:click=open_create
                    class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-1.5 text-sm font-medium"
                >
                    "+ Add Equipment"
                </button>
            </div>

            {
                let remove = remove.clone();
                let open_edit = open_edit.clone();
                move || {
                    if !loaded.get() {
                        return view! { <div class="mt-4"><ListSkeleton /></div> }.into_view();
                    }
                    let listings = items.get();
                    if listings.is_empty() {
                        return view! {
                            <p class="text-sm text-gray-400 mt-4">"No equipment listed yet."</p>
                        }.into_view();
                    }
                    let remove = remove.clone();
                    let open_edit = open_edit.clone();
                    view! {
                        <div class="divide-y mt-4">
                            {listings.into_iter().map(|item| {
                                let remove = remove.clone();
                                let open_edit = open_edit.clone();
                                let edit_item = item.clone();
                                let delete_id = item.id.clone();
                                let cert_id = item.id.clone();
                                let cert_status = item
                                    .certification
                                    .as_ref()
                                    .and_then(|c| c.status.clone());
                                let needs_cert = cert_status.is_none()
                                    || cert_status.as_deref() == Some("rejected")
                                    || cert_status.as_deref() == Some("expired");
                                view! {
                                    <div class="flex items-center justify-between py-3 gap-3">
                                        <div class="flex-1">
                                            <div class="flex items-center gap-2">
                                                <span class="font-medium text-sm">{item.title.clone()}</span>
                                                {cert_status.clone().map(|status| view! {
                                                    <CertBadge status=status />
                                                })}
                                            </div>
                                            <div class="text-xs text-gray-500">
                                                {item.location.display()}
                                                " · "
                                                {format!("₹{:.0}/day", item.price.day)}
                                                " · "
                                                {if item.available { "Available" } else { "Unavailable" }}
                                            </div>
                                        </div>
                                        <div class="flex items-center gap-3 text-sm">
                                            <Show when=move || needs_cert>
                                                {
                                                    let cert_id = cert_id.clone();
                                                    view! {
                                                        <button
                                                            on:click=move |_| set_cert_for.set(Some(cert_id.clone()))
                                                            class="text-green-700 hover:underline"
                                                        >
                                                            "Get Certified"
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                            <button
                                                on:click=move |_| open_edit(&edit_item)
                                                class="text-gray-600 hover:underline"
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                on:click=move |_| remove(delete_id.clone())
                                                class="text-red-600 hover:underline"
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }

            <Show when=move || editing.get().is_some()>
                <form
                    on:submit=submit.clone()
                    class="grid grid-cols-1 sm:grid-cols-2 gap-3 mt-4 border rounded-xl p-4 bg-gray-50"
                >
                    <input
                        type="text"
                        placeholder="Title (e.g. John Deere 5310)"
                        required
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <select
                        class="border rounded-lg px-3 py-2 text-sm bg-white"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {[
                            ("tractors", "Tractors"),
                            ("harvesters", "Harvesters"),
                            ("drones", "Drones"),
                            ("tillers", "Tillers"),
                            ("irrigation", "Irrigation"),
                        ]
                            .into_iter()
                            .map(|(value, label)| view! {
                                <option value=value selected=move || category.with_untracked(|c| c == value)>
                                    {label}
                                </option>
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="City"
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || city.get()
                        on:input=move |ev| set_city.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="State"
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || region.get()
                        on:input=move |ev| set_region.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Price per day (₹)"
                        required
                        min="1"
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || day_price.get()
                        on:input=move |ev| set_day_price.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Price per week (₹)"
                        min="1"
                        class="border rounded-lg px-3 py-2 text-sm"
                        prop:value=move || week_price.get()
                        on:input=move |ev| set_week_price.set(event_target_value(&ev))
                    />
                    <label class="flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            prop:checked=move || available.get()
                            on:change=move |ev| set_available.set(event_target_checked(&ev))
                        />
                        "Available for rent"
                    </label>
                    <button
                        type="submit"
                        class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-2 text-sm font-medium"
                    >
                        {move || {
                            if editing.get().flatten().is_some() { "Save Changes" } else { "Add Equipment" }
                        }}
                    </button>
                </form>
            </Show>

            {move || cert_for.get().map(|equipment_id| {
                let refreshed_id = equipment_id.clone();
                view! {
                    <CertUploadModal
                        equipment_id=equipment_id
                        on_done=Callback::new(move |_| {
                            set_cert_for.set(None);
                            // Refresh just the row that gained a pending cert.
                            let id = refreshed_id.clone();
                            spawn_local(async move {
                                if let Ok(updated) = api::fetch_equipment_item(&id).await {
                                    set_items.update(|all| {
                                        if let Some(slot) =
                                            all.iter_mut().find(|e| e.id == updated.id)
                                        {
                                            *slot = updated;
                                        }
                                    });
                                }
                            });
                        })
                        on_close=Callback::new(move |_| set_cert_for.set(None))
                    />
                }
            })}
        </section>
    }
}

/// Multipart upload of purchase invoice and inspection certificate.
#[component]
fn CertUploadModal(
    equipment_id: String,
    on_done: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_app_state();

    let (issuer, set_issuer) = create_signal(String::new());
    let (certificate_no, set_certificate_no) = create_signal(String::new());
    let (issue_date, set_issue_date) = create_signal(String::new());
    let (expiry_date, set_expiry_date) = create_signal(String::new());
    let (uploading, set_uploading) = create_signal(false);

    let invoice_ref = create_node_ref::<html::Input>();
    let certificate_ref = create_node_ref::<html::Input>();

    let submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if uploading.get_untracked() {
                return;
            }

            let invoice = invoice_ref.get().and_then(|input| input.files()).and_then(|f| f.get(0));
            let certificate = certificate_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|f| f.get(0));
            let (Some(invoice), Some(certificate)) = (invoice, certificate) else {
                state.show_error("Both invoice and certificate files are required");
                return;
            };

            let Ok(form) = web_sys::FormData::new() else {
                state.show_error("Could not build the upload form");
                return;
            };
            let appended = form
                .append_with_blob("invoice", &invoice)
                .and_then(|_| form.append_with_blob("certificate", &certificate))
                .and_then(|_| form.append_with_str("issuer", issuer.get_untracked().trim()))
                .and_then(|_| {
                    form.append_with_str("certificateNo", certificate_no.get_untracked().trim())
                })
                .and_then(|_| form.append_with_str("issueDate", issue_date.get_untracked().trim()))
                .and_then(|_| {
                    form.append_with_str("expiryDate", expiry_date.get_untracked().trim())
                });
            if appended.is_err() {
                state.show_error("Could not build the upload form");
                return;
            }

            set_uploading.set(true);
            let state = state.clone();
            let equipment_id = equipment_id.clone();
            spawn_local(async move {
                match api::submit_certification(&equipment_id, form).await {
                    Ok(_) => {
                        state.show_success("Certification submitted for review");
                        on_done.call(());
                    }
                    Err(err) => state.show_error(&err),
                }
                set_uploading.set(false);
            });
        }
    };

    view! {
        <div class="fixed inset-0 z-50 bg-black/40 flex items-center justify-center p-3">
            <div class="bg-white w-full max-w-lg rounded-2xl p-5 max-h-[85vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-3">
                    <h3 class="text-lg font-semibold">"Certification Request"</h3>
                    <button
                        on:click=move |_| on_close.call(())
                        class="p-1 rounded hover:bg-black/10"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=submit class="space-y-3 text-sm">
                    <div>
                        <label class="block text-gray-600 mb-1">"Purchase Invoice"</label>
                        <input type="file" node_ref=invoice_ref required accept=".pdf,.jpg,.jpeg,.png" />
                    </div>
                    <div>
                        <label class="block text-gray-600 mb-1">"Inspection Certificate"</label>
                        <input type="file" node_ref=certificate_ref required accept=".pdf,.jpg,.jpeg,.png" />
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        <input
                            type="text"
                            placeholder="Issuing authority"
                            required
                            class="border rounded-lg px-3 py-2"
                            prop:value=move || issuer.get()
                            on:input=move |ev| set_issuer.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Certificate number"
                            required
                            class="border rounded-lg px-3 py-2"
                            prop:value=move || certificate_no.get()
                            on:input=move |ev| set_certificate_no.set(event_target_value(&ev))
                        />
                        <div>
                            <label class="block text-gray-600 mb-1">"Issue date"</label>
                            <input
                                type="date"
                                required
                                class="border rounded-lg px-3 py-2 w-full"
                                prop:value=move || issue_date.get()
                                on:input=move |ev| set_issue_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-gray-600 mb-1">"Expiry date"</label>
                            <input
                                type="date"
                                class="border rounded-lg px-3 py-2 w-full"
                                prop:value=move || expiry_date.get()
                                on:input=move |ev| set_expiry_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 font-medium disabled:opacity-50"
                        disabled=move || uploading.get()
                    >
                        {move || if uploading.get() { "Uploading…" } else { "Submit for Review" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Admin review queue: approve or reject pending certifications.
#[component]
fn AdminCertQueue() -> impl IntoView {
    let state = use_app_state();

    let (pending, set_pending) = create_signal(Vec::<PendingCert>::new());
    let (notes, set_notes) = create_signal(String::new());
    let (acting, set_acting) = create_signal(false);

    let load = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_pending_certs().await {
                set_pending.set(fetched);
            }
        });
    };
    load();

    let review = {
        let state = state.clone();
        move |equipment_id: String, approve: bool| {
            if acting.get_untracked() {
                return;
            }
            set_acting.set(true);
            let state = state.clone();
            let note = {
                let n = notes.get_untracked().trim().to_string();
                (!n.is_empty()).then_some(n)
            };
            spawn_local(async move {
                match api::review_certification(&equipment_id, approve, note.as_deref(), None).await
                {
                    Ok(status) => {
                        state.show_success(&format!("Certification marked {}", status));
                        set_notes.set(String::new());
                        load();
                    }
                    Err(err) => state.show_error(&err),
                }
                set_acting.set(false);
            });
        }
    };

    view! {
        <section class="bg-white rounded-2xl shadow-sm border border-green-100 p-5">
            <h2 class="text-lg font-bold text-gray-800">"Pending Certifications"</h2>

            {
                let review = review.clone();
                move || {
                    let queue = pending.get();
                    if queue.is_empty() {
                        return view! {
                            <p class="text-sm text-gray-400 mt-4">"Nothing waiting for review."</p>
                        }.into_view();
                    }
                    let review = review.clone();
                    view! {
                        <div class="divide-y mt-4">
                            {queue.into_iter().map(|item| {
                                let review = review.clone();
                                let approve_id = item.id.clone();
                                let reject_id = item.id.clone();
                                let approve = review.clone();
                                view! {
                                    <div class="py-3">
                                        <div class="flex items-center justify-between gap-3">
                                            <div>
                                                <div class="font-medium text-sm">
                                                    {item.title.clone().unwrap_or_else(|| "Untitled equipment".into())}
                                                </div>
                                                <div class="text-xs text-gray-500">
                                                    {item.owner.name.clone().unwrap_or_else(|| "Unknown owner".into())}
                                                    {item.certification.issuer.clone().map(|i| format!(" · {}", i))}
                                                    {item.certification.certificate_no.clone().map(|n| format!(" · #{}", n))}
                                                </div>
                                            </div>
                                            <div class="flex items-center gap-2">
                                                <CertDocLinks cert=item.certification.clone() />
                                                <button
                                                    on:click=move |_| approve(approve_id.clone(), true)
                                                    class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-3 py-1.5 text-xs font-medium disabled:opacity-50"
                                                    disabled=move || acting.get()
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    on:click=move |_| review(reject_id.clone(), false)
                                                    class="bg-red-600 hover:bg-red-700 text-white rounded-lg px-3 py-1.5 text-xs font-medium disabled:opacity-50"
                                                    disabled=move || acting.get()
                                                >
                                                    "Reject"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }

            <input
                type="text"
                placeholder="Review notes (sent with the next decision)"
                class="w-full border rounded-lg px-3 py-2 text-sm mt-4"
                prop:value=move || notes.get()
                on:input=move |ev| set_notes.set(event_target_value(&ev))
            />
        </section>
    }
}

#[component]
fn CertDocLinks(cert: Certification) -> impl IntoView {
    view! {
        {["invoice", "certificate"].into_iter().filter_map(|kind| {
            cert.document(kind).map(|doc| {
                let url = doc.url.clone();
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noreferrer"
                        class="text-xs text-green-700 hover:underline capitalize"
                    >
                        {kind}
                    </a>
                }
            })
        }).collect_view()}
    }
}
