use chrono::{Datelike, Weekday};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Course, CourseSelection, DailyMenu, SET_LUNCH};
use crate::frontend::components::{DietBadge, LinkButton, PageHeader, PageLayout};

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    let body = match course.selection {
        CourseSelection::Choice { options } => view! {
            <p class="text-xs uppercase tracking-wider text-stone-500 mb-3">"Choose one"</p>
            <ul class="space-y-4">
                {options
                    .into_iter()
                    .map(|option| view! {
                        <li>
                            <div class="flex items-center justify-between gap-3">
                                <span class="font-semibold text-stone-900">{option.name}</span>
                                <DietBadge vegetarian=option.vegetarian/>
                            </div>
                            <p class="text-sm text-stone-600">{option.description}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        CourseSelection::Fixed { item } => view! {
            <p class="font-semibold text-stone-900">{item.name}</p>
            <p class="text-sm text-stone-600">{item.description}</p>
        }
        .into_any(),
    };

    view! {
        <article class="course p-6 rounded-xl bg-white border border-stone-200">
            <p class="text-saffron-700 font-semibold mb-1">{format!("Course {}", course.course_number)}</p>
            <h2 class="font-serif text-2xl text-stone-900 mb-4">{course.course_name}</h2>
            {body}
        </article>
    }
}

#[component]
fn SidesRow(day: Weekday, menu: DailyMenu, today: ReadSignal<Option<Weekday>>) -> impl IntoView {
    let is_today = move || today.get() == Some(day);

    view! {
        <tr
            class=move || if is_today() { "border-b border-stone-200 bg-saffron-50 today" } else { "border-b border-stone-200" }
            aria-current=move || is_today().then_some("date")
        >
            <th scope="row" class="text-left py-3 pr-4 font-semibold">{day_name(day)}</th>
            <td class="py-3 pr-4">{menu.vegetable}</td>
            <td class="py-3 pr-4">{menu.dal}</td>
            <td class="py-3">{menu.rice}</td>
        </tr>
    }
}

#[component]
pub fn SetLunchPage() -> impl IntoView {
    let lunch = &*SET_LUNCH;
    // Only known in the browser; the server renders no highlighted day.
    let (today, set_today) = signal(None::<Weekday>);

    Effect::new(move |_| {
        set_today.set(Some(chrono::Local::now().weekday()));
    });

    view! {
        <Title text=lunch.title.clone()/>
        <PageLayout>
            <PageHeader title=lunch.title.clone() intro=lunch.availability.clone()/>
            <div class="max-w-6xl mx-auto px-6 pb-20">
                <p class="font-serif text-3xl text-saffron-700 mb-8">{lunch.price.clone()}</p>
                <div class="grid gap-6 md:grid-cols-3 mb-16">
                    {lunch.courses.iter().cloned().map(|course| view! { <CourseCard course=course/> }).collect_view()}
                </div>

                <h2 class="font-serif text-3xl text-stone-900 mb-2">"Served With"</h2>
                <p class="text-stone-600 mb-6">"Every set lunch comes with the day's vegetable, dal and rice."</p>
                <div class="overflow-x-auto">
                    <table class="included-sides w-full text-sm">
                        <thead>
                            <tr class="text-left text-stone-500 border-b border-stone-300">
                                <th class="py-2 pr-4">"Day"</th>
                                <th class="py-2 pr-4">"Vegetable"</th>
                                <th class="py-2 pr-4">"Dal"</th>
                                <th class="py-2">"Rice"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {lunch
                                .included_sides
                                .days()
                                .into_iter()
                                .map(|(day, menu)| view! { <SidesRow day=day menu=menu.clone() today=today/> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>

                {(!lunch.notes.is_empty()).then(|| view! {
                    <ul class="mt-8 text-xs italic text-stone-500 space-y-1">
                        {lunch.notes.iter().map(|n| view! { <li>{n.clone()}</li> }).collect_view()}
                    </ul>
                })}

                <div class="mt-12">
                    <LinkButton href="/reservations">"Book for Lunch"</LinkButton>
                </div>
            </div>
        </PageLayout>
    }
}
