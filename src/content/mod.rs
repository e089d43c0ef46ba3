//! Typed restaurant content: menus, set lunch, testimonials and venue details.

pub use data::*;
pub use menu::*;
pub use set_lunch::*;
pub use testimonial::*;
pub use venue::*;

mod data;
mod menu;
mod set_lunch;
mod testimonial;
mod venue;
