use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod mirror;
mod pages {
    pub mod landing;
}
mod components {
    pub mod mirror_modal;
    pub mod nav;
}
mod utils {
    pub mod scroll;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting The Razor's Edge AI");
    yew::Renderer::<App>::new().render();
}
