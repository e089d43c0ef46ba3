use leptos::prelude::*;

/// Marks `homepage_start` when mounted and `homepage_loaded` once the window
/// has loaded, then logs the time between them. Renders nothing.
#[component]
pub fn PerformanceMarks() -> impl IntoView {
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        record_page_load();
    });
}

#[cfg(feature = "hydrate")]
fn record_page_load() {
    use leptos::ev;

    use crate::instrumentation::{browser, HOMEPAGE_LOAD, HOMEPAGE_LOADED, HOMEPAGE_START};

    browser::mark(HOMEPAGE_START);

    let finish = || {
        browser::mark(HOMEPAGE_LOADED);
        browser::measure(HOMEPAGE_LOAD, HOMEPAGE_START, HOMEPAGE_LOADED);
    };

    if browser::document_loaded() {
        finish();
    } else {
        let handle = window_event_listener(ev::load, move |_| finish());
        on_cleanup(move || handle.remove());
    }
}
