//! The site's content, authored in code and built once on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::common::ContentError;
use crate::content::{
    ChefProfile, Event, Menu, Offer, RestaurantInfo, SetLunchMenu, Testimonial,
};

pub use site::{HOME_HERO, NAV_LINKS};

mod menus;
mod site;

pub static MENUS: LazyLock<Vec<Menu>> = LazyLock::new(|| {
    vec![
        menus::soul_food(),
        menus::bar_bites(),
        menus::drinks(),
        menus::desserts(),
    ]
});

pub static SET_LUNCH: LazyLock<SetLunchMenu> = LazyLock::new(site::set_lunch);

pub static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(site::testimonials);

pub static RESTAURANT: LazyLock<RestaurantInfo> = LazyLock::new(site::restaurant);

pub static EVENTS: LazyLock<Vec<Event>> = LazyLock::new(site::events);

pub static OFFERS: LazyLock<Vec<Offer>> = LazyLock::new(site::offers);

pub static CHEF: LazyLock<ChefProfile> = LazyLock::new(site::chef);

pub fn find_menu(slug: &str) -> Result<&'static Menu, ContentError> {
    MENUS
        .iter()
        .find(|m| m.slug == slug)
        .ok_or_else(|| ContentError::UnknownMenu(slug.to_string()))
}

/// Checks every shipped module. The server runs this before it binds.
pub fn validate_all() -> Result<(), ContentError> {
    let mut slugs = HashSet::new();
    for menu in MENUS.iter() {
        menu.validate()?;
        if !slugs.insert(menu.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(menu.slug.clone()));
        }
    }

    SET_LUNCH.validate()?;

    for testimonial in TESTIMONIALS.iter() {
        testimonial.validate()?;
    }

    Ok(())
}
