use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::OFFERS;
use crate::frontend::components::{OfferCard, PageHeader, PageLayout};

#[component]
pub fn OffersPage() -> impl IntoView {
    view! {
        <Title text="Offers"/>
        <PageLayout>
            <PageHeader title="Offers" intro="A few reasons to come back midweek."/>
            <div class="max-w-6xl mx-auto px-6 pb-20 grid gap-6 md:grid-cols-3">
                {OFFERS.iter().cloned().map(|offer| view! { <OfferCard offer=offer/> }).collect_view()}
            </div>
        </PageLayout>
    }
}
