use leptos::prelude::*;
use leptos_meta::Title;

use super::set_response_status;
use crate::frontend::components::PageLayout;

#[component]
pub fn NotFound() -> impl IntoView {
    set_response_status(404);

    view! {
        <Title text="Page Not Found"/>
        <PageLayout>
            <div class="min-h-[60vh] flex items-center justify-center px-6">
                <div class="text-center">
                    <h1 class="font-serif text-8xl md:text-9xl font-bold text-saffron-500 mb-4">"404"</h1>
                    <p class="text-2xl font-semibold text-stone-900 mb-2">"Page not found"</p>
                    <p class="text-stone-600 mb-8 max-w-md">
                        "That page isn't on the menu. It may have moved, or the link may be out of date."
                    </p>
                    <a href="/" class="btn-primary">"Return Home"</a>
                </div>
            </div>
        </PageLayout>
    }
}
