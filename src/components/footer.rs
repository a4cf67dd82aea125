//! Footer Component

use leptos::*;
use leptos_router::*;

/// Site footer with quick links
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-green-900 text-green-100 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <div class="flex items-center mb-3">
                            <div class="w-8 h-8 bg-green-600 rounded-full flex items-center justify-center">
                                <span class="text-white font-bold text-sm">"F"</span>
                            </div>
                            <span class="ml-2 text-lg font-bold text-white">"Farmunity"</span>
                        </div>
                        <p class="text-sm text-green-200">
                            "Fair prices, equipment access, and expert guidance for farmers."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-3">"Services"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><A href="/marketplace" class="hover:text-white">"Crop Marketplace"</A></li>
                            <li><A href="/equipment" class="hover:text-white">"Equipment Rental"</A></li>
                            <li><A href="/knowledge" class="hover:text-white">"Knowledge Hub"</A></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-3">"Support"</h4>
                        <ul class="space-y-2 text-sm text-green-200">
                            <li>"help@farmunity.example"</li>
                            <li>"1800-000-000 (toll free)"</li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-green-800 mt-8 pt-6 text-center text-sm text-green-300">
                    "© 2026 Farmunity. Built by farmers, for farmers."
                </div>
            </div>
        </footer>
    }
}
