use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{NavLink, NAV_LINKS, RESTAURANT};
use crate::frontend::components::Responsive;

fn is_current(pathname: &str, link: &NavLink) -> bool {
    match link.path {
        "/" => pathname == "/",
        path => pathname == path || pathname.starts_with(&format!("{path}/")),
    }
}

#[component]
fn DesktopLinks() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex items-center gap-6">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    let pathname = location.pathname;
                    let class = move || {
                        if pathname.with(|p| is_current(p, link)) {
                            "text-saffron-400"
                        } else {
                            "text-stone-300 hover:text-white transition-colors"
                        }
                    };
                    view! { <a href=link.path class=class>{link.label}</a> }
                })
                .collect_view()}
            <a href="/reservations" class="btn-primary text-sm px-4 py-2">"Book a Table"</a>
        </div>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button
            type="button"
            class="p-2 text-stone-200"
            aria-label="Toggle navigation"
            aria-expanded=move || open.get().to_string()
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            {move || if open.get() { "✕" } else { "☰" }}
        </button>
        <Show when=move || open.get()>
            <div class="absolute top-full left-0 right-0 bg-stone-950 border-b border-stone-800 px-6 py-4 flex flex-col gap-4">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! {
                        <a href=link.path class="text-lg text-stone-200" on:click=move |_| set_open.set(false)>
                            {link.label}
                        </a>
                    })
                    .collect_view()}
                <a href=RESTAURANT.phone_href() class="btn-primary text-center">"Call to Book"</a>
            </div>
        </Show>
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-stone-950/85 border-b border-stone-800">
            <div class="relative max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3">
                    <span class="text-2xl" aria-hidden="true">"🌼"</span>
                    <span class="font-serif text-xl font-bold text-saffron-400">
                        {RESTAURANT.name.clone()}
                    </span>
                </a>
                <Responsive
                    mobile=|| view! { <MobileMenu/> }
                    desktop=|| view! { <DesktopLinks/> }
                    fallback=|| view! {
                        <a href="/reservations" class="btn-primary text-sm px-4 py-2">"Book a Table"</a>
                    }
                />
            </div>
        </nav>
    }
}
