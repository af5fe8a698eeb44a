use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::{ChatAction, EntryContent};

use crate::api_client::query::submit_query;
use crate::components::chat::bubble::ChatBubble;
use crate::components::chat::reply::BotReply;
use crate::components::loading::Loading;
use crate::state::ChatStore;

/// The chat page: transcript of user/bot exchanges plus the prompt form.
///
/// Submissions run independently; a second prompt sent before the first
/// resolves is neither cancelled nor de-duplicated, and each reply is
/// appended whenever it arrives.
#[function_component(Chat)]
pub fn chat() -> Html {
    let store = use_reducer(ChatStore::default);
    let prompt = use_state(String::new);

    let on_input = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            prompt.set(input.value());
        })
    };

    let on_submit = {
        let store = store.clone();
        let prompt = prompt.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let text = prompt.trim().to_string();
            if text.is_empty() {
                return;
            }
            prompt.set(String::new());

            log::debug!("Dispatching submission: {}", text);
            store.dispatch(ChatAction::Submitted(text.clone()));

            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_query(&text).await;
                store.dispatch(ChatAction::Resolved(result));
            });
        })
    };

    let busy = store.0.is_busy();

    html! {
        <div class="flex-1 flex flex-col">
            <div class="flex-1 p-6 overflow-y-auto space-y-6">
                { for store.0.transcript.iter().enumerate().map(|(idx, entry)| {
                    let body = match &entry.content {
                        EntryContent::Prompt(text) => html! {
                            <p class="text-lg">{text}</p>
                        },
                        EntryContent::Reply(response) => html! {
                            <BotReply
                                response={response.clone()}
                                chart_id={format!("chat-chart-{}", idx)}
                            />
                        },
                    };
                    html! {
                        <ChatBubble speaker={entry.speaker} at={entry.at}>
                            { body }
                        </ChatBubble>
                    }
                })}
                {if busy {
                    html! { <Loading text="Running query..." /> }
                } else {
                    html! {}
                }}
            </div>

            <form
                onsubmit={on_submit}
                class="sticky bottom-0 w-full bg-base-100 p-4 shadow-md flex gap-3"
            >
                <input
                    type="text"
                    value={(*prompt).clone()}
                    oninput={on_input}
                    placeholder="Ask something like 'Sales by ShipRegion' – view results in different chart types!"
                    class="input input-bordered flex-1 text-lg"
                />
                <button type="submit" disabled={busy} class="btn btn-primary px-6">
                    {if busy { "Running..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}
