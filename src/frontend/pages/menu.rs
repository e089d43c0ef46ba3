use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::set_response_status;
use crate::content::{find_menu, Menu, MENUS};
use crate::frontend::components::{
    MenuCategoryAccordion, MenuCategoryGrid, PageHeader, PageLayout, Responsive,
};

fn menu_href(slug: &str) -> String {
    format!("/menu/{slug}")
}

#[component]
fn MenuTabs(#[prop(into)] active: String) -> impl IntoView {
    view! {
        <nav class="menu-tabs max-w-6xl mx-auto px-6 mb-10 flex gap-2 overflow-x-auto" aria-label="Menus">
            {MENUS
                .iter()
                .map(|menu| {
                    let current = menu.slug == active;
                    let class = if current {
                        "px-4 py-2 rounded-full whitespace-nowrap bg-stone-900 text-white"
                    } else {
                        "px-4 py-2 rounded-full whitespace-nowrap bg-white text-stone-700 hover:bg-stone-200"
                    };
                    view! {
                        <a
                            href=menu_href(&menu.slug)
                            class=class
                            aria-current=current.then_some("page")
                        >
                            {menu.menu_name.clone()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn MenuBody(menu: Menu) -> impl IntoView {
    let mobile_menu = menu.clone();
    let desktop_menu = menu.clone();

    view! {
        <Title text=menu.menu_name.clone()/>
        <PageHeader
            title=menu.menu_name.clone()
            intro="Dishes marked vegetarian contain no meat or fish. Please tell us about any allergies when you order."
        />
        <MenuTabs active=menu.slug.clone()/>
        <div class="max-w-6xl mx-auto px-6 pb-20">
            <Responsive
                mobile=move || {
                    mobile_menu
                        .categories
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(i, category)| view! { <MenuCategoryAccordion category=category open={i == 0}/> })
                        .collect_view()
                }
                desktop=move || {
                    desktop_menu
                        .categories
                        .iter()
                        .cloned()
                        .map(|category| view! { <MenuCategoryGrid category=category/> })
                        .collect_view()
                }
            />
        </div>
    }
}

/// `/menu`: every menu, one card each.
#[component]
pub fn MenuIndexPage() -> impl IntoView {
    view! {
        <Title text="Menus"/>
        <PageLayout>
            <PageHeader
                title="Our Menus"
                intro="Home-style cooking from across India, with bar bites, drinks and desserts to go with it."
            />
            <div class="max-w-6xl mx-auto px-6 pb-20 grid gap-6 md:grid-cols-2">
                {MENUS
                    .iter()
                    .map(|menu| {
                        let dishes = menu.items().count();
                        let vegetarian: usize = menu.categories.iter().map(|c| c.vegetarian_count()).sum();
                        view! {
                            <a
                                href=menu_href(&menu.slug)
                                class="block p-8 rounded-xl bg-white border border-stone-200 hover:border-saffron-500/60"
                            >
                                <h2 class="font-serif text-2xl text-stone-900 mb-2">{menu.menu_name.clone()}</h2>
                                <p class="text-sm text-stone-600">
                                    {format!("{dishes} dishes, {vegetarian} vegetarian")}
                                </p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </PageLayout>
    }
}

/// `/menu/:slug`. An unknown slug surfaces through the page's error boundary
/// and answers 404 when rendered on the server.
#[component]
pub fn MenuPage() -> impl IntoView {
    let params = use_params_map();

    let menu = move || {
        let slug = params.read().get("slug").unwrap_or_default();
        find_menu(&slug)
            .inspect_err(|e| set_response_status(e.http_status()))
            .map(|menu| view! { <MenuBody menu=menu.clone()/> })
    };

    view! {
        <PageLayout>
            {menu}
        </PageLayout>
    }
}
