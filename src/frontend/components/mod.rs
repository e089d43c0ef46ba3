//! Reusable UI components for the Saffron House site

mod button;
mod cards;
mod error_boundary;
mod footer;
mod hero;
mod layout;
mod menu_card;
mod nav;
mod perf;
mod responsive;

pub use button::{ButtonVariant, LinkButton};
pub use cards::{EventCard, HighlightCard, OfferCard, TestimonialCard};
pub use error_boundary::{ErrorPanel, PageErrorBoundary, retry};
pub use footer::Footer;
pub use hero::{HeroMedia, VideoHero};
pub use layout::{PageHeader, PageLayout};
pub use menu_card::{DietBadge, MenuCategoryAccordion, MenuCategoryGrid, MenuItemCard, PriceTag};
pub use nav::Nav;
pub use perf::PerformanceMarks;
pub use responsive::{select_variant, Responsive, Variant};
