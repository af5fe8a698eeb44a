use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod settings;
pub mod state;

use components::chat::Chat;
use components::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Chat,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Chat => {
            log::trace!("Rendering Chat page");
            html! { <Layout title="Ask your data"><Chat /></Layout> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! {
                <Layout title="About">
                    <div class="prose">
                        <p>{"DataChat turns plain-language questions into queries and \
                            renders the answers as tables and charts."}</p>
                    </div>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== DataChat Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
