use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{find_menu, HOME_HERO, RESTAURANT, TESTIMONIALS};
use crate::frontend::components::{
    ButtonVariant, HighlightCard, LinkButton, MenuItemCard, PageLayout, PerformanceMarks,
    Responsive, TestimonialCard, VideoHero,
};

/// Dishes from the soul food menu shown on the home page.
const FEATURED_COUNT: usize = 3;

#[component]
fn Highlights() -> impl IntoView {
    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6">
                <HighlightCard
                    icon="🔥"
                    title="Cooked Over Fire"
                    desc="Breads, kebabs and tikka from a charcoal tandoor that is lit before we open."
                />
                <HighlightCard
                    icon="🌿"
                    title="Vegetarian at Heart"
                    desc="Half of every menu is vegetarian, and marked so you never have to ask."
                />
                <HighlightCard
                    icon="🍛"
                    title="Set Lunch"
                    desc="Three courses with the day's dal, vegetable and rice, every weekday."
                />
            </div>
        </section>
    }
}

#[component]
fn FeaturedDishes() -> impl IntoView {
    let featured = find_menu("soul-food").map(|menu| {
        menu.items()
            .take(FEATURED_COUNT)
            .cloned()
            .map(|item| view! { <MenuItemCard item=item/> })
            .collect_view()
    });

    view! {
        <section class="py-20 px-6 bg-white">
            <div class="max-w-3xl mx-auto">
                <h2 class="font-serif text-3xl md:text-4xl font-bold text-center mb-10">"From the Kitchen"</h2>
                {featured}
                <div class="text-center mt-10">
                    <a href="/menu" class="btn-primary">"See the Full Menu"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let cards = || {
        TESTIMONIALS
            .iter()
            .cloned()
            .map(|t| view! { <TestimonialCard testimonial=t/> })
            .collect_view()
    };

    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="font-serif text-3xl md:text-4xl font-bold text-center mb-10">"What Our Guests Say"</h2>
                <Responsive
                    mobile=move || view! {
                        <div class="flex gap-4 overflow-x-auto snap-x snap-mandatory -mx-6 px-6">
                            {TESTIMONIALS
                                .iter()
                                .cloned()
                                .map(|t| view! {
                                    <div class="snap-center shrink-0 w-[85%]">
                                        <TestimonialCard testimonial=t/>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    desktop=move || view! { <div class="grid grid-cols-2 gap-6">{cards()}</div> }
                    fallback=move || view! { <div class="grid gap-6">{cards()}</div> }
                />
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Indian Soul Food"/>
        <PerformanceMarks/>
        <PageLayout>
            <VideoHero
                source=HOME_HERO
                title=RESTAURANT.name.clone()
                subtitle=RESTAURANT.tagline.clone()
            >
                <LinkButton href="/reservations">"Book a Table"</LinkButton>
                <LinkButton href="/menu" variant=ButtonVariant::Ghost>"View Menu"</LinkButton>
            </VideoHero>
            <Highlights/>
            <FeaturedDishes/>
            <Testimonials/>
        </PageLayout>
    }
}
