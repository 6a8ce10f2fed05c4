use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod content;
mod pages;
mod theme;

use pages::landing::Landing;
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        // Single-page site: everything renders the landing page.
        Route::Home | Route::NotFound => html! { <Landing /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let dark = use_state(|| false);
    let toggle = {
        let dark = dark.clone();
        Callback::from(move |_| dark.set(!*dark))
    };
    let theme = Theme {
        dark: *dark,
        toggle,
    };
    html! {
        <BrowserRouter>
            <ContextProvider<Theme> context={theme}>
                <Switch<Route> render={switch} />
            </ContextProvider<Theme>>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("esteammate landing starting");
    yew::Renderer::<App>::new().render();
}
