use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav, PageErrorBoundary};

/// Navigation, page body inside an error boundary, footer.
#[component]
pub fn PageLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-stone-100 text-stone-900">
            <Nav/>
            <main class="flex-grow pt-16">
                <PageErrorBoundary>{children()}</PageErrorBoundary>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(into)] intro: String) -> impl IntoView {
    view! {
        <header class="max-w-6xl mx-auto px-6 pt-16 pb-10">
            <h1 class="font-serif text-4xl md:text-5xl font-bold text-stone-900 mb-4">{title}</h1>
            <p class="text-lg text-stone-600 max-w-2xl">{intro}</p>
        </header>
    }
}
