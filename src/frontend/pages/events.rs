use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::EVENTS;
use crate::frontend::components::{EventCard, LinkButton, PageHeader, PageLayout, Responsive};

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <Title text="Events"/>
        <PageLayout>
            <PageHeader
                title="Events"
                intro="Supper clubs, festival feasts and the occasional cookery class. Places are limited, so book early."
            />
            <div class="max-w-6xl mx-auto px-6 pb-20">
                <Responsive
                    mobile=|| view! {
                        <div class="space-y-12">
                            {EVENTS.iter().cloned().map(|event| view! { <EventCard event=event/> }).collect_view()}
                        </div>
                    }
                    desktop=|| view! {
                        <div class="space-y-16">
                            {EVENTS
                                .iter()
                                .cloned()
                                .map(|event| view! { <EventCard event=event horizontal=true/> })
                                .collect_view()}
                        </div>
                    }
                />
                <div class="mt-16 text-center">
                    <LinkButton href="/reservations">"Reserve a Place"</LinkButton>
                </div>
            </div>
        </PageLayout>
    }
}
