use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center gap-3 text-gray-500 italic py-2">
            <span class="loading loading-dots loading-md"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
