//! Certification Components
//!
//! Status badge and detail modal for equipment certifications.

use leptos::*;

use crate::api::types::Certification;

/// Small status chip shown next to equipment titles.
#[component]
pub fn CertBadge(#[prop(into)] status: String) -> impl IntoView {
    let classes = match status.as_str() {
        "certified" => "bg-green-100 text-green-800",
        "pending" => "bg-yellow-100 text-yellow-800",
        "rejected" => "bg-red-100 text-red-800",
        "expired" => "bg-gray-200 text-gray-700",
        _ => "bg-gray-100 text-gray-700",
    };

    let label = {
        let mut chars = status.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => return view! {}.into_view(),
        }
    };

    view! {
        <span class=format!("px-2 py-0.5 text-xs rounded-full {}", classes)>
            {label}
        </span>
    }
    .into_view()
}

/// Modal with full certification details and document links.
#[component]
pub fn CertificateModal(
    cert: Certification,
    on_close: Callback<()>,
) -> impl IntoView {
    let field = |value: Option<String>| value.unwrap_or_else(|| "—".to_string());

    let certificate_url = cert.document("certificate").map(|d| d.url.clone());
    let invoice_url = cert.document("invoice").map(|d| d.url.clone());
    let verified = if cert.verified_by.is_some() { "Admin" } else { "—" };

    view! {
        <div class="fixed inset-0 z-50 bg-black/40 flex items-center justify-center p-3">
            <div class="bg-white w-full max-w-lg rounded-2xl p-4 sm:p-6 max-h-[80vh] overflow-y-auto">
                <div class="flex items-center justify-between mb-3">
                    <h3 class="text-base sm:text-lg font-semibold">"Certification Details"</h3>
                    <button
                        on:click=move |_| on_close.call(())
                        class="p-1 rounded hover:bg-black/10"
                    >
                        "✕"
                    </button>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 text-sm">
                    <div>
                        <div class="text-gray-500">"Issuer"</div>
                        <div>{field(cert.issuer.clone())}</div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Certificate No."</div>
                        <div class="break-all">{field(cert.certificate_no.clone())}</div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Issue Date"</div>
                        <div>{field(cert.issue_date.clone())}</div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Expiry Date"</div>
                        <div>{field(cert.expiry_date.clone())}</div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Status"</div>
                        <div class="capitalize">{field(cert.status.clone())}</div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Verified By"</div>
                        <div>{verified}</div>
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row gap-2 sm:gap-3 mt-4">
                    {certificate_url.map(|url| view! {
                        <a
                            class="px-3 py-2 rounded-lg border hover:bg-gray-50 text-center"
                            href=url
                            target="_blank"
                            rel="noreferrer"
                        >
                            "View Certificate"
                        </a>
                    })}
                    {invoice_url.map(|url| view! {
                        <a
                            class="px-3 py-2 rounded-lg border hover:bg-gray-50 text-center"
                            href=url
                            target="_blank"
                            rel="noreferrer"
                        >
                            "View Invoice"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}
