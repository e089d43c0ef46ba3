use leptos::prelude::*;

/// Panel shown in place of a page section that failed to render.
#[component]
pub fn ErrorPanel(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div role="alert" class="max-w-xl mx-auto my-16 p-8 rounded-xl border border-red-500/30 bg-red-500/5 text-center">
            <h2 class="text-2xl font-semibold text-stone-900 mb-2">"Something went wrong"</h2>
            <p class="text-stone-600 mb-6">"This part of the page could not be shown."</p>
            <button
                type="button"
                class="btn-primary"
                on:click=move |_| on_retry.run(())
            >
                "Try Again"
            </button>
        </div>
    }
}

/// Clears the caught errors and bumps `attempt`, which the boundary's children
/// track, so they render again.
pub fn retry(errors: &ArcRwSignal<Errors>, attempt: RwSignal<u32>) {
    errors.set(Errors::default());
    attempt.update(|n| *n += 1);
}

/// Catches errors thrown by its children and offers a retry.
///
/// "Try Again" clears the caught errors and runs the children again.
#[component]
pub fn PageErrorBoundary(children: ChildrenFn) -> impl IntoView {
    let attempt = RwSignal::new(0u32);

    let fallback = move |errors: ArcRwSignal<Errors>| {
        let on_retry = Callback::new(move |_: ()| retry(&errors, attempt));

        view! { <ErrorPanel on_retry=on_retry/> }
    };

    view! {
        <ErrorBoundary fallback=fallback>
            {move || {
                attempt.track();
                children()
            }}
        </ErrorBoundary>
    }
}
