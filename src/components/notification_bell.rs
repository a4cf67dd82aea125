//! Notification Bell
//!
//! Header dropdown that polls the notifications feed. Equipment
//! interest notifications expose a reply shortcut that drops the owner
//! straight into a chat with the requester.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, types::Notification};
use crate::state::use_app_state;
use crate::util::time_ago;

/// Poll cadence for the notification feed.
const POLL_MS: u32 = 20_000;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let (open, set_open) = create_signal(false);
    let (notifications, set_notifications) = create_signal(Vec::<Notification>::new());

    let refresh = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_notifications().await {
                set_notifications.set(fetched);
            }
        });
    };

    refresh();
    let poll = Interval::new(POLL_MS, refresh);
    on_cleanup(move || drop(poll));

    let unread = create_memo(move |_| {
        notifications.with(|items| items.iter().filter(|n| !n.is_read).count())
    });
    let has_unread = move || unread.get() > 0;

    // The backend has no read receipt endpoint; opening the dropdown
    // clears the badge locally.
    let mark_all_read = move || {
        set_notifications.update(|items| {
            for item in items.iter_mut() {
                item.is_read = true;
            }
        });
    };

    let toggle = move |_| {
        let now_open = !open.get_untracked();
        set_open.set(now_open);
        if !now_open {
            mark_all_read();
        }
    };

    let reply = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |requester_id: String| {
            let state = state.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::start_conversation(&requester_id, None).await {
                    Ok(conversation) => {
                        set_open.set(false);
                        navigate(&format!("/chat/{}", conversation.id), Default::default());
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    view! {
        <div class="relative">
            <button
                on:click=toggle
                class="relative p-2 text-gray-600 hover:text-green-600 transition-colors"
            >
                "🔔"
                <Show when=has_unread>
                    <span class="absolute -top-0.5 -right-0.5 bg-red-500 text-white text-[10px] rounded-full min-w-[1.1rem] h-[1.1rem] flex items-center justify-center px-1">
                        {move || unread.get()}
                    </span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-80 max-w-[90vw] bg-white rounded-xl shadow-lg border z-50">
                    <div class="px-4 py-2 border-b font-semibold text-sm">"Notifications"</div>
                    <div class="max-h-80 overflow-y-auto">
                        {
                            let reply = reply.clone();
                            move || {
                                let reply = reply.clone();
                                let items = notifications.get();
                                if items.is_empty() {
                                    return view! {
                                        <p class="px-4 py-6 text-center text-sm text-gray-400">
                                            "Nothing new yet."
                                        </p>
                                    }
                                    .into_view();
                                }
                                let now = Utc::now();
                                items
                                    .into_iter()
                                    .map(|item| {
                                        let tint = if item.is_read { "" } else { "bg-green-50" };
                                        let stamp = item
                                            .created_at
                                            .as_deref()
                                            .map(|raw| time_ago(raw, now))
                                            .unwrap_or_default();
                                        let target = item.reply_target().map(str::to_string);
                                        let reply = reply.clone();
                                        view! {
                                            <div class=format!("px-4 py-3 border-b last:border-b-0 {}", tint)>
                                                <div class="text-sm font-medium">
                                                    {item.title.clone().unwrap_or_else(|| "Notification".into())}
                                                </div>
                                                <div class="text-xs text-gray-600">
                                                    {item.message.clone().unwrap_or_default()}
                                                </div>
                                                <div class="flex items-center justify-between mt-1">
                                                    <span class="text-[11px] text-gray-400">{stamp}</span>
                                                    {target.map(|requester| view! {
                                                        <button
                                                            on:click=move |_| reply(requester.clone())
                                                            class="text-xs text-green-700 hover:underline font-medium"
                                                        >
                                                            "Reply"
                                                        </button>
                                                    })}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_view()
                            }
                        }
                    </div>
                </div>
            </Show>
        </div>
    }
}
