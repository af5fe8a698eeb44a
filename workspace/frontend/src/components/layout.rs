use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
                <div class="flex-1 px-4">
                    <Link<Route> to={Route::Chat} classes="text-xl font-bold">
                        {"DataChat"}
                    </Link<Route>>
                    <span class="ml-4 text-sm text-gray-500" id="page-title">
                        { &props.title }
                    </span>
                </div>
                <div class="flex-none gap-2 px-4">
                    <Link<Route> to={Route::About} classes="btn btn-ghost btn-sm">
                        {"About"}
                    </Link<Route>>
                </div>
            </div>
            <main class="flex-1 flex flex-col overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
