use leptos::prelude::*;

use crate::content::{MenuCategory, MenuItem, Price};

#[component]
pub fn PriceTag(price: Price) -> impl IntoView {
    let parts = price
        .parts()
        .into_iter()
        .map(|(label, amount)| {
            let amount = amount.to_string();
            view! {
                <span class="price-part inline-flex items-baseline gap-1">
                    {label.map(|l| view! { <span class="price-label text-xs uppercase text-stone-500">{l}</span> })}
                    <span class="price-amount font-semibold text-saffron-700">{amount}</span>
                </span>
            }
        })
        .collect_view();

    view! { <span class="price inline-flex flex-wrap gap-3">{parts}</span> }
}

/// Indian menu convention: a green mark for vegetarian, red for everything else.
#[component]
pub fn DietBadge(vegetarian: bool) -> impl IntoView {
    let (class, label) = if vegetarian {
        ("diet-badge diet-veg border-green-700 text-green-700", "Vegetarian")
    } else {
        ("diet-badge diet-non-veg border-red-700 text-red-700", "Non-vegetarian")
    };

    view! {
        <span class=format!("inline-flex items-center gap-1 text-xs border rounded px-1.5 py-0.5 {}", class)>
            <span aria-hidden="true">"●"</span>
            {label}
        </span>
    }
}

#[component]
pub fn MenuItemCard(item: MenuItem) -> impl IntoView {
    let has_description = !item.description.is_empty();

    view! {
        <article class="menu-item py-4 border-b border-stone-200 last:border-0" data-vegetarian=item.vegetarian.to_string()>
            <div class="flex items-start justify-between gap-4">
                <h3 class="menu-item-name font-semibold text-stone-900">{item.name}</h3>
                <PriceTag price=item.price/>
            </div>
            {has_description.then(|| view! {
                <p class="menu-item-description text-sm text-stone-600 mt-1">{item.description}</p>
            })}
            <div class="mt-2">
                <DietBadge vegetarian=item.vegetarian/>
            </div>
        </article>
    }
}

fn category_notes(notes: Vec<String>) -> impl IntoView {
    let has_notes = !notes.is_empty();
    has_notes.then(|| {
        view! {
            <ul class="category-notes text-xs italic text-stone-500 mb-3 space-y-1">
                {notes.into_iter().map(|n| view! { <li>{n}</li> }).collect_view()}
            </ul>
        }
    })
}

/// Whole category laid out as a two-column grid.
#[component]
pub fn MenuCategoryGrid(category: MenuCategory) -> impl IntoView {
    view! {
        <section class="menu-category mb-12">
            <h2 class="font-serif text-3xl text-stone-900 mb-2">{category.category_name}</h2>
            {category_notes(category.category_notes)}
            <div class="grid grid-cols-2 gap-x-12">
                {category.items.into_iter().map(|item| view! { <MenuItemCard item=item/> }).collect_view()}
            </div>
        </section>
    }
}

/// Category collapsed behind its heading; the first one starts open.
#[component]
pub fn MenuCategoryAccordion(category: MenuCategory, #[prop(optional)] open: bool) -> impl IntoView {
    let count = category.items.len();

    view! {
        <details class="menu-category border-b border-stone-200" open=open>
            <summary class="flex items-center justify-between py-4 cursor-pointer">
                <span class="font-serif text-xl text-stone-900">{category.category_name}</span>
                <span class="text-xs text-stone-500">{format!("{count} dishes")}</span>
            </summary>
            {category_notes(category.category_notes)}
            <div class="pb-4">
                {category.items.into_iter().map(|item| view! { <MenuItemCard item=item/> }).collect_view()}
            </div>
        </details>
    }
}
