pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::content::RESTAURANT;
use crate::device::provide_device_detection;
use pages::{
    ChefPage, EventsPage, HomePage, MenuIndexPage, MenuPage, NotFound, OffersPage,
    ReservationsPage, SetLunchPage,
};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_device_detection();

    let site_name = RESTAURANT.name.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/saffron.css"/>
        <Title formatter=move |text: String| format!("{text} | {site_name}")/>
        <Meta name="description" content="Indian soul food, bar bites and a weekday set lunch in London."/>
        <Meta name="theme-color" content="#f4a300"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/menu") view=MenuIndexPage/>
                <Route path=path!("/menu/:slug") view=MenuPage/>
                <Route path=path!("/set-lunch") view=SetLunchPage/>
                <Route path=path!("/events") view=EventsPage/>
                <Route path=path!("/offers") view=OffersPage/>
                <Route path=path!("/reservations") view=ReservationsPage/>
                <Route path=path!("/chef") view=ChefPage/>
            </Routes>
        </Router>
    }
}
