use leptos::prelude::*;

use crate::content::{NAV_LINKS, RESTAURANT};

#[component]
pub fn Footer() -> impl IntoView {
    let info = &*RESTAURANT;

    view! {
        <footer class="border-t border-stone-800 bg-stone-950 text-stone-300">
            <div class="max-w-6xl mx-auto px-6 py-12 grid gap-10 md:grid-cols-3">
                <div>
                    <p class="font-serif text-2xl font-bold text-saffron-400 mb-2">{info.name.clone()}</p>
                    <p class="text-stone-400 mb-4">{info.tagline.clone()}</p>
                    <address class="not-italic text-sm leading-relaxed">
                        {info.address.iter().map(|line| view! { <span class="block">{line.clone()}</span> }).collect_view()}
                    </address>
                </div>
                <div>
                    <p class="font-semibold text-white mb-3">"Opening Hours"</p>
                    <dl class="text-sm space-y-2">
                        {info
                            .opening_hours
                            .iter()
                            .map(|h| view! {
                                <div>
                                    <dt class="text-stone-400">{h.days.clone()}</dt>
                                    <dd>{h.hours.clone()}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
                <div>
                    <p class="font-semibold text-white mb-3">"Visit"</p>
                    <ul class="text-sm space-y-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.path class="hover:text-white">{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                    <p class="text-sm mt-4">
                        <a href=info.phone_href() class="hover:text-white">{info.phone.clone()}</a>
                        <br/>
                        <a href=info.email_href() class="hover:text-white">{info.email.clone()}</a>
                    </p>
                </div>
            </div>
            <p class="text-center text-xs text-stone-600 pb-8">
                {format!("© {}. All rights reserved.", info.name)}
            </p>
        </footer>
    }
}
