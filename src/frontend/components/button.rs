use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Light outline, for use over the hero image.
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-saffron-500 text-stone-950 hover:bg-saffron-400 focus:ring-saffron-500",
            Self::Ghost => "border border-white/60 text-white hover:bg-white/10 focus:ring-white",
        }
    }
}

/// Call-to-action link styled as a button.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center px-7 py-3 text-base font-semibold rounded-full transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 {}",
        variant.classes()
    );

    if external {
        view! {
            <a href=href class=classes target="_blank" rel="noopener">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any()
    }
}
