use chrono::{DateTime, Local, Utc};
use yew::prelude::*;

use common::Speaker;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub speaker: Speaker,
    pub at: DateTime<Utc>,
    pub children: Children,
}

/// One chat bubble with avatar; user bubbles align right, bot bubbles
/// align left.
#[function_component(ChatBubble)]
pub fn chat_bubble(props: &Props) -> Html {
    let (row_class, avatar_class, bubble_class, icon) = match props.speaker {
        Speaker::User => (
            "flex items-start gap-3 max-w-4xl ml-auto flex-row-reverse",
            "p-3 rounded-full shadow-md bg-blue-600 text-white",
            "px-5 py-4 rounded-2xl shadow-md max-w-xl bg-blue-600 text-white",
            "fas fa-user",
        ),
        Speaker::Bot => (
            "flex items-start gap-3 max-w-4xl mr-auto",
            "p-3 rounded-full shadow-md bg-gray-200 text-gray-700",
            "px-5 py-4 rounded-2xl shadow-md max-w-xl bg-base-100 text-gray-800",
            "fas fa-robot",
        ),
    };

    let when = props.at.with_timezone(&Local).format("%H:%M").to_string();

    html! {
        <div class={row_class}>
            <div class={avatar_class} title={when}>
                <i class={icon}></i>
            </div>
            <div class={bubble_class}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
