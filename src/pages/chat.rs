//! Chat Page
//!
//! Full-page messaging view reached from booking requests and
//! notification replies. Conversations list on the left, active thread
//! on the right, with the same polling cadence as the listing modal.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api::{self, types::ChatMessage, types::Conversation};
use crate::components::chat_box::thread_changed;
use crate::components::Loading;
use crate::state::use_app_state;
use crate::util::{format_clock, time_ago};

const POLL_MS: u32 = 1_500;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let params = use_params_map();

    let my_id = state.user_id().unwrap_or_default();

    let active_id = create_memo(move |_| {
        params.with(|p| p.get("id").cloned().unwrap_or_default())
    });

    let (conversations, set_conversations) = create_signal(Vec::<Conversation>::new());
    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);
    let (thread_loading, set_thread_loading) = create_signal(true);

    let list_ref = create_node_ref::<html::Div>();

    spawn_local(async move {
        if let Ok(fetched) = api::fetch_conversations().await {
            set_conversations.set(fetched);
        }
    });

    // Load the thread whenever the route id changes.
    create_effect(move |_| {
        let id = active_id.get();
        set_messages.set(Vec::new());
        if id.is_empty() {
            return;
        }
        set_thread_loading.set(true);
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_messages(&id).await {
                set_messages.set(fetched);
            }
            set_thread_loading.set(false);
        });
    });

    let poll = Interval::new(POLL_MS, move || {
        let id = active_id.get_untracked();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_messages(&id).await {
                if messages.with_untracked(|current| thread_changed(current, &fetched)) {
                    set_messages.set(fetched);
                }
            }
        });
    });
    on_cleanup(move || drop(poll));

    create_effect(move |_| {
        messages.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let send = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let text = draft.get_untracked().trim().to_string();
            let id = active_id.get_untracked();
            if text.is_empty() || id.is_empty() || sending.get_untracked() {
                return;
            }
            set_sending.set(true);
            set_draft.set(String::new());

            let placeholder = ChatMessage {
                id: format!("local-{}", messages.with_untracked(|m| m.len())),
                conversation_id: id.clone(),
                sender_id: state.user_id().unwrap_or_default(),
                text: text.clone(),
                created_at: None,
            };
            set_messages.update(|m| m.push(placeholder));

            let state = state.clone();
            spawn_local(async move {
                if let Err(err) = api::send_message(&id, &text).await {
                    state.show_error(&err);
                }
                set_sending.set(false);
            });
        }
    };

    let peer_name = move || {
        let id = active_id.get();
        conversations.with(|all| {
            all.iter()
                .find(|c| c.id == id)
                .and_then(|c| c.peer.as_ref().map(|p| p.name.clone()))
                .unwrap_or_else(|| "Conversation".to_string())
        })
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 h-[70vh]">
                // Conversation list
                <div class="bg-white rounded-2xl border border-green-100 overflow-y-auto hidden md:block">
                    <div class="px-4 py-3 border-b font-semibold text-sm">"Messages"</div>
                    <Show
                        when=move || !conversations.with(|c| c.is_empty())
                        fallback=|| view! {
                            <p class="px-4 py-6 text-sm text-gray-400">"No conversations yet."</p>
                        }
                    >
                        {
                            let navigate = navigate.clone();
                            move || {
                                let navigate = navigate.clone();
                                let now = Utc::now();
                                let current = active_id.get();
                                conversations.get().into_iter().map(|conversation| {
                                    let navigate = navigate.clone();
                                    let id = conversation.id.clone();
                                    let selected = conversation.id == current;
                                    let name = conversation
                                        .peer
                                        .as_ref()
                                        .map(|p| p.name.clone())
                                        .unwrap_or_else(|| "Unknown".to_string());
                                    let preview = conversation
                                        .last_message
                                        .as_ref()
                                        .map(|m| m.text.clone())
                                        .unwrap_or_default();
                                    let stamp = conversation
                                        .updated_at
                                        .as_deref()
                                        .map(|raw| time_ago(raw, now))
                                        .unwrap_or_default();
                                    view! {
                                        <button
                                            on:click=move |_| navigate(
                                                &format!("/chat/{}", id),
                                                Default::default(),
                                            )
                                            class=format!(
                                                "w-full text-left px-4 py-3 border-b last:border-b-0 {}",
                                                if selected { "bg-green-50" } else { "hover:bg-gray-50" },
                                            )
                                        >
                                            <div class="flex items-center justify-between">
                                                <span class="font-medium text-sm">{name}</span>
                                                <span class="text-[11px] text-gray-400">{stamp}</span>
                                            </div>
                                            <div class="text-xs text-gray-500 truncate">{preview}</div>
                                        </button>
                                    }
                                }).collect_view()
                            }
                        }
                    </Show>
                </div>

                // Active thread
                <div class="md:col-span-2 bg-white rounded-2xl border border-green-100 flex flex-col">
                    <div class="px-4 py-3 border-b font-semibold">{peer_name}</div>

                    <div node_ref=list_ref class="flex-1 overflow-y-auto px-4 py-3 space-y-2 bg-gray-50">
                        <Show when=move || thread_loading.get()>
                            <Loading />
                        </Show>
                        {
                            let mine = my_id.clone();
                            move || {
                                let mine = mine.clone();
                                messages.get().into_iter().map(|msg| {
                                    let from_me = msg.sender_id == mine;
                                    let bubble = if from_me {
                                        "ml-auto bg-green-600 text-white"
                                    } else {
                                        "mr-auto bg-white border"
                                    };
                                    let stamp = msg
                                        .created_at
                                        .as_deref()
                                        .map(format_clock)
                                        .unwrap_or_default();
                                    view! {
                                        <div class=format!("max-w-[75%] rounded-2xl px-3 py-2 {}", bubble)>
                                            <div class="text-sm break-words">{msg.text}</div>
                                            <div class="text-[10px] opacity-60 text-right">{stamp}</div>
                                        </div>
                                    }
                                }).collect_view()
                            }
                        }
                    </div>

                    <form on:submit=send class="flex gap-2 p-3 border-t">
                        <input
                            type="text"
                            class="flex-1 border rounded-lg px-3 py-2 text-sm"
                            placeholder="Type a message"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 text-sm disabled:opacity-50"
                            disabled=move || sending.get()
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
