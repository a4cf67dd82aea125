//! Loading Component
//!
//! Spinners and shimmer skeletons shown while data streams in.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Shimmer card matching the listing-card layout
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden animate-pulse">
            <div class="h-40 sm:h-48 bg-gray-200" />
            <div class="p-5 sm:p-6 space-y-3">
                <div class="h-5 bg-gray-200 rounded w-2/3" />
                <div class="h-4 bg-gray-200 rounded w-1/3" />
                <div class="h-4 bg-gray-200 rounded w-1/2" />
                <div class="h-10 bg-gray-200 rounded" />
            </div>
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
