use leptos::prelude::*;

use crate::content::{Event, Offer, Testimonial};

#[component]
pub fn HighlightCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="group p-6 rounded-xl bg-white border border-stone-200
                    hover:border-saffron-500/60 transition-all duration-300">
            <span class="text-4xl mb-4 block group-hover:scale-110 transition-transform duration-300">
                {icon}
            </span>
            <h3 class="text-xl font-semibold text-stone-900 mb-2">{title}</h3>
            <p class="text-stone-600 text-sm leading-relaxed">{desc}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = testimonial.stars();
    let rating_label = format!("Rated {} out of 5", testimonial.rating);

    view! {
        <figure class="testimonial p-6 rounded-xl bg-stone-50 border border-stone-200">
            <p class="text-saffron-600 tracking-widest mb-3" aria-label=rating_label>{stars}</p>
            <blockquote class="font-serif text-lg text-stone-800 mb-4">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </blockquote>
            <figcaption class="text-sm">
                <span class="font-semibold text-stone-900">{testimonial.author}</span>
                <span class="text-stone-500">", "{testimonial.title}</span>
            </figcaption>
        </figure>
    }
}

#[component]
pub fn EventCard(event: Event, #[prop(optional)] horizontal: bool) -> impl IntoView {
    let layout = if horizontal {
        "grid grid-cols-[2fr_3fr] gap-8 items-center"
    } else {
        "flex flex-col gap-4"
    };
    let alt = event.title.clone();

    view! {
        <article class=format!("event-card {layout}")>
            <img src=event.image alt=alt loading="lazy" class="w-full aspect-[4/3] object-cover rounded-xl"/>
            <div>
                <p class="text-xs uppercase tracking-wider text-saffron-700 mb-1">{event.when}</p>
                <h3 class="font-serif text-2xl text-stone-900 mb-2">{event.title}</h3>
                <p class="text-stone-600">{event.description}</p>
            </div>
        </article>
    }
}

#[component]
pub fn OfferCard(offer: Offer) -> impl IntoView {
    view! {
        <article class="offer-card p-6 rounded-xl border-2 border-dashed border-saffron-500/60 bg-white">
            <p class="text-xs uppercase tracking-wider text-stone-500 mb-1">{offer.title}</p>
            <h3 class="font-serif text-2xl text-stone-900 mb-3">{offer.headline}</h3>
            <p class="text-stone-700 mb-4">{offer.description}</p>
            <p class="text-xs text-stone-500">{offer.terms}</p>
        </article>
    }
}
