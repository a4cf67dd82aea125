//! Knowledge Hub Page
//!
//! Four tabs: the AI farming assistant, community forum, a small
//! article library, and the weather advisory.

use leptos::*;

use crate::api::{
    self,
    types::{AiMessage, AiSession, Discussion},
};
use crate::state::use_app_state;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Assistant,
    Forum,
    Articles,
    Weather,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Assistant => "AI Assistant",
            Tab::Forum => "Community Forum",
            Tab::Articles => "Articles",
            Tab::Weather => "Weather",
        }
    }
}

const TABS: [Tab; 4] = [Tab::Assistant, Tab::Forum, Tab::Articles, Tab::Weather];

const SUGGESTIONS: [&str; 4] = [
    "Best fertilizer schedule for wheat?",
    "How do I control aphids organically?",
    "When should I sow paddy in Punjab?",
    "Drip irrigation vs sprinkler for tomatoes?",
];

struct Article {
    title: &'static str,
    summary: &'static str,
    read_minutes: u8,
}

const ARTICLES: [Article; 4] = [
    Article {
        title: "Soil Health: Testing Before You Sow",
        summary: "Why an annual soil test pays for itself, and how to read \
                  the NPK numbers on the report.",
        read_minutes: 6,
    },
    Article {
        title: "Drip Irrigation on a Budget",
        summary: "Laying out a low-cost drip system for a one-acre vegetable \
                  plot, with pump sizing tips.",
        read_minutes: 8,
    },
    Article {
        title: "Reading Mandi Price Trends",
        summary: "Seasonal patterns behind wholesale price swings, and when \
                  holding stock makes sense.",
        read_minutes: 5,
    },
    Article {
        title: "Integrated Pest Management Basics",
        summary: "Cutting pesticide spend with trap crops, beneficial \
                  insects, and threshold-based spraying.",
        read_minutes: 7,
    },
];

#[component]
pub fn Knowledge() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Assistant);

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-2xl font-bold text-gray-800">"Knowledge Hub"</h1>

            <div class="flex gap-2 overflow-x-auto mt-4 border-b pb-px">
                {TABS.into_iter().map(|t| view! {
                    <button
                        on:click=move |_| set_tab.set(t)
                        class=move || {
                            if tab.get() == t {
                                "px-4 py-2 text-sm font-medium border-b-2 border-green-600 text-green-700 whitespace-nowrap"
                            } else {
                                "px-4 py-2 text-sm text-gray-600 hover:text-green-700 whitespace-nowrap"
                            }
                        }
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="mt-6">
                {move || match tab.get() {
                    Tab::Assistant => view! { <AssistantTab /> }.into_view(),
                    Tab::Forum => view! { <ForumTab /> }.into_view(),
                    Tab::Articles => view! { <ArticlesTab /> }.into_view(),
                    Tab::Weather => view! { <WeatherTab /> }.into_view(),
                }}
            </div>
        </div>
    }
}

/// AI assistant with a stored-session sidebar.
#[component]
fn AssistantTab() -> impl IntoView {
    let state = use_app_state();

    let (sessions, set_sessions) = create_signal(Vec::<AiSession>::new());
    let (session_id, set_session_id) = create_signal(None::<String>);
    let (messages, set_messages) = create_signal(Vec::<AiMessage>::new());
    let (question, set_question) = create_signal(String::new());
    let (thinking, set_thinking) = create_signal(false);

    let load_sessions = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_ai_sessions().await {
                set_sessions.set(fetched);
            }
        });
    };
    load_sessions();

    let open_session = move |id: String| {
        spawn_local(async move {
            match api::fetch_ai_session(&id).await {
                Ok(session) => {
                    set_session_id.set(Some(session.id));
                    set_messages.set(session.messages);
                }
                Err(_) => {}
            }
        });
    };

    let delete_session = {
        let state = state.clone();
        move |id: String| {
            let state = state.clone();
            spawn_local(async move {
                match api::delete_ai_session(&id).await {
                    Ok(()) => {
                        if session_id.get_untracked().as_deref() == Some(id.as_str()) {
                            set_session_id.set(None);
                            set_messages.set(Vec::new());
                        }
                        load_sessions();
                    }
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    let ask = {
        let state = state.clone();
        move |text: String| {
            let text = text.trim().to_string();
            if text.is_empty() || thinking.get_untracked() {
                return;
            }
            set_question.set(String::new());
            set_thinking.set(true);
            set_messages.update(|m| {
                m.push(AiMessage {
                    role: "user".into(),
                    text: text.clone(),
                    created_at: None,
                })
            });

            let state = state.clone();
            spawn_local(async move {
                let current = session_id.get_untracked();
                match api::ask_ai(&text, current.as_deref()).await {
                    Ok(reply) => {
                        set_messages.update(|m| {
                            m.push(AiMessage {
                                role: "assistant".into(),
                                text: reply.answer,
                                created_at: None,
                            })
                        });
                        // A fresh question opens a new stored session.
                        if current.is_none() {
                            set_session_id.set(reply.session_id);
                            load_sessions();
                        }
                    }
                    Err(err) => state.show_error(&err),
                }
                set_thinking.set(false);
            });
        }
    };

    let new_chat = move |_| {
        set_session_id.set(None);
        set_messages.set(Vec::new());
    };

    let on_submit = {
        let ask = ask.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            ask(question.get_untracked());
        }
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-4">
            // Stored sessions
            <div class="bg-white rounded-2xl border border-green-100 p-3">
                <div class="flex items-center justify-between mb-2">
                    <span class="text-sm font-semibold">"Past Chats"</span>
                    <button
                        on:click=new_chat
                        class="text-xs text-green-700 hover:underline font-medium"
                    >
                        "+ New"
                    </button>
                </div>
                <Show
                    when=move || !sessions.with(|s| s.is_empty())
                    fallback=|| view! {
                        <p class="text-xs text-gray-400">"No saved chats yet."</p>
                    }
                >
                    {
                        let open_session = open_session.clone();
                        let delete_session = delete_session.clone();
                        move || {
                            let open_session = open_session.clone();
                            let delete_session = delete_session.clone();
                            let current = session_id.get();
                            sessions.get().into_iter().map(|session| {
                                let open_session = open_session.clone();
                                let delete_session = delete_session.clone();
                                let open_id = session.id.clone();
                                let delete_id = session.id.clone();
                                let active = current.as_deref() == Some(session.id.as_str());
                                view! {
                                    <div class=format!(
                                        "flex items-center justify-between gap-1 rounded-lg px-2 py-1.5 text-sm {}",
                                        if active { "bg-green-50" } else { "hover:bg-gray-50" },
                                    )>
                                        <button
                                            on:click=move |_| open_session(open_id.clone())
                                            class="flex-1 text-left truncate"
                                        >
                                            {session.title.clone().unwrap_or_else(|| "Untitled chat".into())}
                                        </button>
                                        <button
                                            on:click=move |_| delete_session(delete_id.clone())
                                            class="text-gray-400 hover:text-red-600 text-xs"
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                </Show>
            </div>

            // Conversation
            <div class="lg:col-span-3 bg-white rounded-2xl border border-green-100 flex flex-col h-[28rem]">
                <div class="flex-1 overflow-y-auto p-4 space-y-3">
                    <Show
                        when=move || !messages.with(|m| m.is_empty())
                        fallback={
                            let ask = ask.clone();
                            move || {
                                let ask = ask.clone();
                                view! {
                                    <div class="text-center mt-10">
                                        <p class="text-gray-500">"Ask anything about farming."</p>
                                        <div class="flex flex-wrap justify-center gap-2 mt-4">
                                            {SUGGESTIONS.into_iter().map(|suggestion| {
                                                let ask = ask.clone();
                                                view! {
                                                    <button
                                                        on:click=move |_| ask(suggestion.to_string())
                                                        class="text-xs border rounded-full px-3 py-1.5 hover:bg-green-50"
                                                    >
                                                        {suggestion}
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </div>
                                }
                            }
                        }
                    >
                        {move || messages.get().into_iter().map(|msg| {
                            let bubble = if msg.role == "user" {
                                "ml-auto bg-green-600 text-white"
                            } else {
                                "mr-auto bg-gray-100"
                            };
                            view! {
                                <div class=format!("max-w-[85%] rounded-2xl px-3 py-2 text-sm whitespace-pre-wrap {}", bubble)>
                                    {msg.text}
                                </div>
                            }
                        }).collect_view()}
                    </Show>
                    <Show when=move || thinking.get()>
                        <div class="mr-auto bg-gray-100 rounded-2xl px-3 py-2 text-sm text-gray-500">
                            "Thinking…"
                        </div>
                    </Show>
                </div>
                <form on:submit=on_submit class="flex gap-2 p-3 border-t">
                    <input
                        type="text"
                        class="flex-1 border rounded-lg px-3 py-2 text-sm"
                        placeholder="Ask the farming assistant"
                        prop:value=move || question.get()
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 text-sm disabled:opacity-50"
                        disabled=move || thinking.get()
                    >
                        "Ask"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Community forum: threads with inline replies.
#[component]
fn ForumTab() -> impl IntoView {
    let state = use_app_state();

    let (discussions, set_discussions) = create_signal(Vec::<Discussion>::new());
    let (new_title, set_new_title) = create_signal(String::new());
    let (expanded, set_expanded) = create_signal(None::<String>);
    let (reply_draft, set_reply_draft) = create_signal(String::new());

    let load = move || {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_discussions().await {
                set_discussions.set(fetched);
            }
        });
    };
    load();

    let post_discussion = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let title = new_title.get_untracked().trim().to_string();
            if title.is_empty() {
                return;
            }
            set_new_title.set(String::new());
            let state = state.clone();
            spawn_local(async move {
                match api::create_discussion(&title, None).await {
                    Ok(_) => load(),
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    let post_reply = {
        let state = state.clone();
        move |discussion_id: String| {
            let text = reply_draft.get_untracked().trim().to_string();
            if text.is_empty() {
                return;
            }
            set_reply_draft.set(String::new());
            let state = state.clone();
            spawn_local(async move {
                match api::create_reply(&discussion_id, &text).await {
                    Ok(_) => load(),
                    Err(err) => state.show_error(&err),
                }
            });
        }
    };

    view! {
        <div class="max-w-3xl">
            <form on:submit=post_discussion class="flex gap-2">
                <input
                    type="text"
                    placeholder="Start a discussion…"
                    class="flex-1 border rounded-lg px-3 py-2 text-sm bg-white"
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="bg-green-600 hover:bg-green-700 text-white rounded-lg px-4 py-2 text-sm"
                >
                    "Post"
                </button>
            </form>

            <div class="space-y-3 mt-4">
                {
                    let post_reply = post_reply.clone();
                    move || {
                        let post_reply = post_reply.clone();
                        let open_thread = expanded.get();
                        discussions.get().into_iter().map(|discussion| {
                            let post_reply = post_reply.clone();
                            let id = discussion.id.clone();
                            let toggle_id = discussion.id.clone();
                            let reply_count = discussion.replies.len();
                            let is_open = open_thread.as_deref() == Some(discussion.id.as_str());
                            view! {
                                <div class="bg-white rounded-2xl border border-green-100 p-4">
                                    <button
                                        on:click=move |_| set_expanded.update(|e| {
                                            if e.as_deref() == Some(toggle_id.as_str()) {
                                                *e = None;
                                            } else {
                                                *e = Some(toggle_id.clone());
                                            }
                                        })
                                        class="w-full text-left"
                                    >
                                        <div class="font-semibold">{discussion.title.clone()}</div>
                                        <div class="text-xs text-gray-500 mt-0.5">
                                            {discussion.author.clone()}
                                            " · "
                                            {format!("{} replies", reply_count)}
                                        </div>
                                    </button>

                                    <Show when=move || is_open>
                                        <div class="mt-3 space-y-2 border-t pt-3">
                                            {discussion.replies.iter().map(|reply| view! {
                                                <div class="text-sm">
                                                    <span class="font-medium">{reply.author.clone()}</span>
                                                    ": "
                                                    {reply.text.clone()}
                                                </div>
                                            }).collect_view()}
                                            <div class="flex gap-2 pt-1">
                                                <input
                                                    type="text"
                                                    placeholder="Write a reply…"
                                                    class="flex-1 border rounded-lg px-3 py-1.5 text-sm"
                                                    prop:value=move || reply_draft.get()
                                                    on:input=move |ev| set_reply_draft.set(event_target_value(&ev))
                                                />
                                                <button
                                                    on:click={
                                                        let post_reply = post_reply.clone();
                                                        let id = id.clone();
                                                        move |_| post_reply(id.clone())
                                                    }
                                                    class="text-sm text-green-700 font-medium hover:underline"
                                                >
                                                    "Reply"
                                                </button>
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }).collect_view()
                    }
                }
            </div>
        </div>
    }
}

#[component]
fn ArticlesTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 max-w-4xl">
            {ARTICLES.iter().map(|article| view! {
                <div class="bg-white rounded-2xl border border-green-100 p-4">
                    <h3 class="font-semibold">{article.title}</h3>
                    <p class="text-sm text-gray-600 mt-1">{article.summary}</p>
                    <div class="text-xs text-gray-400 mt-2">
                        {format!("{} min read", article.read_minutes)}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn WeatherTab() -> impl IntoView {
    let (now, set_now) = create_signal(None::<api::types::WeatherNow>);
    let (advisory, set_advisory) = create_signal(None::<api::types::WeatherAdvisory>);

    spawn_local(async move {
        if let Ok(weather) = api::fetch_weather_now().await {
            set_now.set(Some(weather));
        }
        if let Ok(note) = api::fetch_weather_advisory().await {
            set_advisory.set(Some(note));
        }
    });

    view! {
        <div class="max-w-2xl space-y-4">
            {move || match now.get() {
                None => view! {
                    <p class="text-sm text-gray-400">"Loading weather…"</p>
                }.into_view(),
                Some(weather) => view! {
                    <div class="bg-white rounded-2xl border border-green-100 p-5">
                        <div class="flex items-center justify-between">
                            <div>
                                <div class="text-sm text-gray-500">{weather.location}</div>
                                <div class="text-3xl font-bold">
                                    {format!("{:.0}°C", weather.temperature_c)}
                                </div>
                                <div class="text-sm text-gray-600">{weather.condition}</div>
                            </div>
                            <div class="text-right text-sm text-gray-500 space-y-1">
                                {weather.humidity_pct.map(|h| view! {
                                    <div>{format!("Humidity {:.0}%", h)}</div>
                                })}
                                {weather.rainfall_mm.map(|r| view! {
                                    <div>{format!("Rainfall {:.1} mm", r)}</div>
                                })}
                            </div>
                        </div>
                    </div>
                }.into_view(),
            }}

            {move || advisory.get().map(|note| view! {
                <div class="bg-amber-50 border border-amber-200 rounded-2xl p-4 text-sm text-amber-900">
                    <div class="font-semibold mb-1">"Farm Advisory"</div>
                    {note.advisory}
                </div>
            })}
        </div>
    }
}
