use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::CHEF;
use crate::frontend::components::{LinkButton, PageLayout};

#[component]
pub fn ChefPage() -> impl IntoView {
    let chef = &*CHEF;

    view! {
        <Title text="Our Chef"/>
        <PageLayout>
            <div class="max-w-6xl mx-auto px-6 py-16 grid gap-12 md:grid-cols-[2fr_3fr] items-start">
                <img
                    src=chef.portrait.clone()
                    alt=format!("Portrait of {}", chef.name)
                    class="w-full aspect-[3/4] object-cover rounded-xl"
                />
                <div>
                    <p class="text-saffron-700 font-semibold mb-1">{chef.role.clone()}</p>
                    <h1 class="font-serif text-4xl md:text-5xl font-bold text-stone-900 mb-6">{chef.name.clone()}</h1>
                    <div class="space-y-4 text-stone-700 leading-relaxed">
                        {chef.biography.iter().map(|p| view! { <p>{p.clone()}</p> }).collect_view()}
                    </div>
                    <h2 class="font-serif text-2xl text-stone-900 mt-10 mb-4">"Signature Dishes"</h2>
                    <ul class="list-disc pl-5 space-y-1 text-stone-700 mb-10">
                        {chef.signature_dishes.iter().map(|d| view! { <li>{d.clone()}</li> }).collect_view()}
                    </ul>
                    <LinkButton href="/menu/soul-food">"Taste the Menu"</LinkButton>
                </div>
            </div>
        </PageLayout>
    }
}
