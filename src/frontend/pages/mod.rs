//! One component per route.

mod chef;
mod events;
mod home;
mod menu;
mod not_found;
mod offers;
mod reservations;
mod set_lunch;

pub use chef::ChefPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use menu::{MenuIndexPage, MenuPage};
pub use not_found::NotFound;
pub use offers::OffersPage;
pub use reservations::ReservationsPage;
pub use set_lunch::SetLunchPage;

/// Sets the status of the response being rendered. Does nothing in the browser.
pub(crate) fn set_response_status(status: u16) {
    #[cfg(feature = "ssr")]
    {
        use actix_web::http::StatusCode;

        let Ok(status) = StatusCode::from_u16(status) else {
            return;
        };
        if let Some(response) = leptos::prelude::use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(status);
        }
    }
    #[cfg(not(feature = "ssr"))]
    let _ = status;
}
