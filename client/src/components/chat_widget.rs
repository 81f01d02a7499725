//! Floating pet-assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript lives in the session `RwSignal<ChatState>` so it survives
//! route changes. A send is split around the network await: `submit_draft`
//! appends the user message and arms the pending guard synchronously, the
//! endpoint call runs in a local task, and `resolve` appends exactly one
//! assistant message when it finishes.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::assistant::{AssistantEndpoint, FunctionEndpoint};
#[cfg(not(feature = "hydrate"))]
use crate::net::assistant::AssistantError;
use crate::net::types::{ChatRequest, ChatRole};
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::ui::UiState;

/// Run the outbound call for an accepted send and settle the transcript.
fn dispatch(chat: RwSignal<ChatState>, request: ChatRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = FunctionEndpoint::from_build_env().invoke(&request).await;
        chat.update(|c| c.resolve(outcome));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        chat.update(|c| c.resolve(Err(AssistantError::Unavailable)));
    }
}

fn message_row(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    view! {
        <div class="chat-widget__row" class:chat-widget__row--user=is_user>
            <div class="chat-widget__avatar">{if is_user { "🧑" } else { "🤖" }}</div>
            <div class="chat-widget__bubble" class:chat-widget__bubble--user=is_user>
                {message.content}
            </div>
        </div>
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let transcript_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_open = move || ui.with(|u| u.chat_open);
    let pending = move || chat.with(|c| c.pending);

    let do_send = move || {
        if let Some(request) = chat.try_update(ChatState::submit_draft).flatten() {
            dispatch(chat, request);
        }
    };

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.pending));
        #[cfg(feature = "hydrate")]
        if let Some(el) = transcript_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    Effect::new(move || {
        if !is_open() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <Show
            when=is_open
            fallback=move || {
                view! {
                    <button
                        class="chat-widget__toggle"
                        title="Open pet assistant"
                        on:click=move |_| ui.update(|u| u.chat_open = true)
                    >
                        "💬"
                    </button>
                }
            }
        >
            <div class="chat-widget">
                <div class="chat-widget__header">
                    <div class="chat-widget__title">
                        <span class="chat-widget__avatar">"🤖"</span>
                        <div>
                            <h3>"Pet Assistant"</h3>
                            <p>"AI-powered help"</p>
                        </div>
                    </div>
                    <button
                        class="chat-widget__close"
                        title="Close"
                        on:click=move |_| ui.update(|u| u.chat_open = false)
                    >
                        "✕"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=transcript_ref>
                    <For
                        each=move || chat.with(|c| c.messages.clone())
                        key=|message| message.id.clone()
                        children=message_row
                    />
                    <Show when=pending>
                        <div class="chat-widget__row">
                            <div class="chat-widget__avatar">"🤖"</div>
                            <div class="chat-widget__bubble chat-widget__bubble--thinking">"…"</div>
                        </div>
                    </Show>
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about pet care..."
                        node_ref=input_ref
                        prop:value=move || chat.with(|c| c.draft.clone())
                        on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=pending
                    />
                    <button
                        class="chat-widget__send"
                        title="Send"
                        disabled=move || !chat.with(ChatState::can_send)
                        on:click=move |_| do_send()
                    >
                        "➤"
                    </button>
                </div>
            </div>
        </Show>
    }
}
