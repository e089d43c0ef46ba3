use leptos::prelude::*;

use crate::device::{use_device_detection, DetectionState, DeviceClass};

/// Which of a `Responsive`'s views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Fallback,
    Mobile,
    Tablet,
    Desktop,
}

/// Nothing device-specific is chosen until detection has completed. A tablet
/// without a tablet view gets the desktop one.
pub fn select_variant(state: DetectionState, has_tablet: bool) -> Variant {
    match state {
        DetectionState::Pending => Variant::Fallback,
        DetectionState::Detected(DeviceClass::Mobile) => Variant::Mobile,
        DetectionState::Detected(DeviceClass::Tablet) if has_tablet => Variant::Tablet,
        DetectionState::Detected(_) => Variant::Desktop,
    }
}

/// Renders exactly one of its views for the detected device.
///
/// The server cannot see the client's viewport, so server output and the
/// first client render both show `fallback` (empty by default).
#[component]
pub fn Responsive(
    #[prop(into)] mobile: ViewFn,
    #[prop(into)] desktop: ViewFn,
    #[prop(optional, into)] tablet: Option<ViewFn>,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    let state = use_device_detection().state();
    let has_tablet = tablet.is_some();
    let variant = Memo::new(move |_| select_variant(state.get(), has_tablet));

    move || match variant.get() {
        Variant::Fallback => fallback.run(),
        Variant::Mobile => mobile.run(),
        Variant::Tablet => match &tablet {
            Some(tablet) => tablet.run(),
            None => desktop.run(),
        },
        Variant::Desktop => desktop.run(),
    }
}
