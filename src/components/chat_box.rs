//! Chat Box
//!
//! Modal conversation opened from a marketplace listing. Opens (or
//! resumes) the conversation with the seller, then polls for new
//! messages while the modal stays mounted.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::{self, types::ChatMessage};
use crate::state::use_app_state;
use crate::util::format_clock;

/// Poll cadence for the open conversation.
const POLL_MS: u32 = 1_500;

#[component]
pub fn ChatBox(
    /// Seller to open the conversation with.
    #[prop(into)]
    recipient_id: String,
    /// Display name shown in the modal header.
    #[prop(into)]
    recipient_name: String,
    /// Listing the conversation is about, if any.
    #[prop(optional, into)]
    crop_id: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_app_state();
    let my_id = state.user_id().unwrap_or_default();

    let (conversation_id, set_conversation_id) = create_signal(None::<String>);
    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let list_ref = create_node_ref::<html::Div>();

    // Start (or resume) the conversation when the modal mounts.
    {
        let recipient_id = recipient_id.clone();
        let state = state.clone();
        spawn_local(async move {
            match api::start_conversation(&recipient_id, crop_id.as_deref()).await {
                Ok(conversation) => {
                    set_conversation_id.set(Some(conversation.id.clone()));
                    if let Ok(fetched) = api::fetch_messages(&conversation.id).await {
                        set_messages.set(fetched);
                    }
                }
                Err(err) => state.show_error(&err),
            }
        });
    }

    // Poll while the modal is mounted; dropped guard stops the timer.
    let poll = Interval::new(POLL_MS, move || {
        let Some(id) = conversation_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_messages(&id).await {
                if messages.with_untracked(|current| thread_changed(current, &fetched)) {
                    set_messages.set(fetched);
                }
            }
        });
    });
    on_cleanup(move || drop(poll));

    // Stick to the newest message.
    create_effect(move |_| {
        messages.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        let Some(id) = conversation_id.get_untracked() else {
            return;
        };
        if text.is_empty() || sending.get_untracked() {
            return;
        }

        set_sending.set(true);
        set_draft.set(String::new());

        // Optimistic append; the next poll reconciles with the server.
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
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    view! {
        <div class="fixed inset-0 z-50 bg-black/40 flex items-end sm:items-center justify-center p-0 sm:p-4">
            <div class="bg-white w-full sm:max-w-md rounded-t-2xl sm:rounded-2xl flex flex-col h-[70vh] sm:h-[32rem]">
                <div class="flex items-center justify-between px-4 py-3 border-b">
                    <div>
                        <div class="font-semibold">{recipient_name.clone()}</div>
                        <div class="text-xs text-gray-500">"Usually replies within a day"</div>
                    </div>
                    <button
                        on:click=move |_| on_close.call(())
                        class="p-1 rounded hover:bg-black/10"
                    >
                        "✕"
                    </button>
                </div>

                <div node_ref=list_ref class="flex-1 overflow-y-auto px-4 py-3 space-y-2 bg-gray-50">
                    {
                        let mine = my_id.clone();
                        move || {
                            let mine = mine.clone();
                            let thread = messages.get();
                            if thread.is_empty() {
                                return view! {
                                    <p class="text-center text-sm text-gray-400 mt-8">
                                        "Say hello and ask about the listing."
                                    </p>
                                }
                                .into_view();
                            }
                            thread
                                .into_iter()
                                .map(|msg| {
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
                                        <div class=format!("max-w-[80%] rounded-2xl px-3 py-2 {}", bubble)>
                                            <div class="text-sm break-words">{msg.text}</div>
                                            <div class="text-[10px] opacity-60 text-right">{stamp}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_view()
                        }
                    }
                </div>

                <form on:submit=on_submit class="flex gap-2 p-3 border-t">
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
    }
}

/// A poll result replaces the local thread when anything differs, so an
/// optimistic placeholder is reconciled even when the lengths match.
pub(crate) fn thread_changed(current: &[ChatMessage], fetched: &[ChatMessage]) -> bool {
    current != fetched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, text: &str, created_at: Option<&str>) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            conversation_id: "c1".to_string(),
            sender_id: "u1".to_string(),
            text: text.to_string(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn identical_thread_is_unchanged() {
        let thread = vec![
            message("m1", "hello", Some("2026-08-01T10:00:00Z")),
            message("m2", "still there?", Some("2026-08-01T10:01:00Z")),
        ];
        assert!(!thread_changed(&thread, &thread.clone()));
    }

    #[test]
    fn optimistic_placeholder_is_reconciled_at_equal_length() {
        let current = vec![
            message("m1", "hello", Some("2026-08-01T10:00:00Z")),
            message("local-1", "is the maize still available?", None),
        ];
        let fetched = vec![
            message("m1", "hello", Some("2026-08-01T10:00:00Z")),
            message("m2", "is the maize still available?", Some("2026-08-01T10:02:00Z")),
        ];
        assert!(thread_changed(&current, &fetched));
    }

    #[test]
    fn new_message_triggers_replacement() {
        let current = vec![message("m1", "hello", Some("2026-08-01T10:00:00Z"))];
        let mut fetched = current.clone();
        fetched.push(message("m2", "hi!", Some("2026-08-01T10:03:00Z")));
        assert!(thread_changed(&current, &fetched));
    }
}
