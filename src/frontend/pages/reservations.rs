use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::RESTAURANT;
use crate::frontend::components::{ButtonVariant, LinkButton, PageHeader, PageLayout};

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let info = &*RESTAURANT;

    view! {
        <Title text="Reservations"/>
        <PageLayout>
            <PageHeader
                title="Reservations"
                intro="Book online, or call us for tables of eight or more and anything else you would like to arrange."
            />
            <div class="max-w-6xl mx-auto px-6 pb-20 grid gap-10 md:grid-cols-2">
                <section class="p-8 rounded-xl bg-white border border-stone-200">
                    <h2 class="font-serif text-2xl text-stone-900 mb-6">"Book a Table"</h2>
                    <div class="flex flex-wrap gap-4 mb-6">
                        <LinkButton href=info.booking_url.clone() external=true>"Book Online"</LinkButton>
                        <LinkButton href=info.phone_href() variant=ButtonVariant::Ghost>
                            <span class="text-stone-900">{format!("Call {}", info.phone)}</span>
                        </LinkButton>
                    </div>
                    <p class="text-sm text-stone-600">
                        "Or email "
                        <a href=info.email_href() class="underline">{info.email.clone()}</a>
                    </p>
                </section>
                <section>
                    <h2 class="font-serif text-2xl text-stone-900 mb-4">"Find Us"</h2>
                    <address class="not-italic text-stone-700 mb-8">
                        {info.address.iter().map(|line| view! { <span class="block">{line.clone()}</span> }).collect_view()}
                    </address>
                    <h2 class="font-serif text-2xl text-stone-900 mb-4">"Opening Hours"</h2>
                    <table class="text-sm">
                        <tbody>
                            {info
                                .opening_hours
                                .iter()
                                .map(|h| view! {
                                    <tr>
                                        <th scope="row" class="text-left pr-6 py-1 font-semibold">{h.days.clone()}</th>
                                        <td class="py-1">{h.hours.clone()}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>
            </div>
        </PageLayout>
    }
}
