use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod navigation;
pub mod pages;
pub mod sections;
pub mod utils;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        // Single page: anything else lands on the home page.
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={config::router_basename()}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
