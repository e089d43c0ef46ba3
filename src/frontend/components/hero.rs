use leptos::html;
use leptos::prelude::*;

use crate::content::HeroMediaSource;

/// What the hero is currently showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeroMedia {
    #[default]
    Video,
    /// Playback was refused or the video failed; only the poster remains.
    Fallback,
}

impl HeroMedia {
    pub fn shows_video(&self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Full-bleed hero with a muted looping background video over its poster
/// image. If the video cannot play, it is removed and the poster stays.
#[component]
pub fn VideoHero(
    source: HeroMediaSource,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let media = RwSignal::new(HeroMedia::Video);
    let video_ref = NodeRef::<html::Video>::new();
    let poster_ref = NodeRef::<html::Img>::new();

    // A cached poster can finish loading before hydration attaches `on:load`.
    Effect::new(move |_| {
        if poster_ref.get().is_some_and(|img| img.complete()) {
            mark_hero_painted();
        }
    });

    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            start_playback(video, media);
        }
    });

    view! {
        <section class="hero relative isolate overflow-hidden min-h-[70vh] flex items-end">
            <img
                node_ref=poster_ref
                src=source.poster
                alt=source.alt
                class="hero-media absolute inset-0 -z-20 h-full w-full object-cover"
                fetchpriority="high"
                on:load=move |_| mark_hero_painted()
            />
            <Show when=move || media.get().shows_video()>
                <video
                    node_ref=video_ref
                    src=source.video
                    poster=source.poster
                    class="hero-media absolute inset-0 -z-10 h-full w-full object-cover"
                    autoplay=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    aria-hidden="true"
                    on:error=move |_| media.set(HeroMedia::Fallback)
                ></video>
            </Show>
            <div class="absolute inset-0 -z-10 bg-gradient-to-t from-stone-950/80 via-stone-950/30 to-transparent"></div>
            <div class="hero-copy w-full max-w-6xl mx-auto px-6 pb-16 text-white">
                <h1 class="font-serif text-4xl md:text-6xl font-bold mb-4">{title}</h1>
                <p class="text-lg md:text-xl text-stone-200 max-w-2xl mb-8">{subtitle}</p>
                <div class="flex flex-wrap gap-4">{children.map(|c| c())}</div>
            </div>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn start_playback(video: web_sys::HtmlVideoElement, media: RwSignal<HeroMedia>) {
    use wasm_bindgen_futures::JsFuture;

    use crate::dev_warn;

    video.set_muted(true);
    video.set_loop(true);

    match video.play() {
        Ok(promise) => leptos::task::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                dev_warn!("hero video refused to play: {:?}", e);
                media.set(HeroMedia::Fallback);
            }
        }),
        Err(e) => {
            dev_warn!("hero video could not start: {:?}", e);
            media.set(HeroMedia::Fallback);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn start_playback(_video: web_sys::HtmlVideoElement, _media: RwSignal<HeroMedia>) {}

fn mark_hero_painted() {
    #[cfg(feature = "hydrate")]
    crate::instrumentation::browser::mark_once(crate::instrumentation::LCP_LOADED);
}
