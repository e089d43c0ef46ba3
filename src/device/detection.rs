use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use crate::common::DetectionError;
use crate::dev_warn;
use crate::device::{Breakpoints, DeviceClass, Debouncer, Viewport, RESIZE_DEBOUNCE};

/// Attribute on `<html>` that stylesheets key device-specific rules on.
pub const DEVICE_ATTRIBUTE: &str = "data-device";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DetectionState {
    /// Server render and the first client render. Nothing is known yet.
    #[default]
    Pending,
    Detected(DeviceClass),
}

impl DetectionState {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Detected(_))
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Detected(DeviceClass::Mobile))
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        match self {
            Self::Pending => None,
            Self::Detected(class) => Some(*class),
        }
    }

    /// A viewport that cannot be read resolves to desktop.
    pub fn resolve(viewport: Result<Viewport, DetectionError>, breakpoints: &Breakpoints) -> Self {
        match viewport {
            Ok(viewport) => Self::Detected(viewport.classify(breakpoints)),
            Err(e) => {
                dev_warn!("device detection failed, using desktop layout: {}", e);
                Self::Detected(DeviceClass::Desktop)
            }
        }
    }
}

/// Reactive handle on the detected device, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct DeviceDetection {
    state: Signal<DetectionState>,
}

impl DeviceDetection {
    /// A detection that never changes. Used for tests and static renders.
    pub fn fixed(state: DetectionState) -> Self {
        Self {
            state: Signal::stored(state),
        }
    }

    pub fn state(&self) -> Signal<DetectionState> {
        self.state
    }

    pub fn is_mobile(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_mobile())
    }

    pub fn is_detection_complete(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_complete())
    }

    pub fn device_class(&self) -> Signal<Option<DeviceClass>> {
        let state = self.state;
        Signal::derive(move || state.get().device_class())
    }
}

/// Creates the app-wide detection and makes it available to descendants.
pub fn provide_device_detection() -> DeviceDetection {
    let detection = create_device_detection(Breakpoints::default());
    provide_context(detection);
    detection
}

/// Returns the detection from context, creating one if no ancestor did.
pub fn use_device_detection() -> DeviceDetection {
    use_context::<DeviceDetection>().unwrap_or_else(provide_device_detection)
}

/// Detection bookkeeping with the clock and the timer kept outside: callers
/// pass the time in and own the timer handle `H` it hands back for clearing.
/// Transitions return the new state only when it differs from the current one.
#[derive(Debug)]
pub struct ViewportWatcher<H> {
    breakpoints: Breakpoints,
    pending: Debouncer<Result<Viewport, DetectionError>>,
    timer: Option<H>,
    state: DetectionState,
}

impl<H> ViewportWatcher<H> {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            pending: Debouncer::new(RESIZE_DEBOUNCE),
            timer: None,
            state: DetectionState::Pending,
        }
    }

    pub fn state(&self) -> DetectionState {
        self.state
    }

    pub fn wait(&self) -> Duration {
        self.pending.wait()
    }

    /// Resolves immediately, without debouncing.
    pub fn mount(
        &mut self,
        viewport: Result<Viewport, DetectionError>,
    ) -> Option<DetectionState> {
        let next = DetectionState::resolve(viewport, &self.breakpoints);
        self.transition(next)
    }

    /// Records a resize or orientation change. Returns the due time for the
    /// new timer and the previous timer, which the caller must clear.
    pub fn viewport_changed(
        &mut self,
        viewport: Result<Viewport, DetectionError>,
        now: Duration,
    ) -> (Duration, Option<H>) {
        let due = self.pending.call(viewport, now);
        (due, self.timer.take())
    }

    pub fn armed(&mut self, handle: H) {
        self.timer = Some(handle);
    }

    /// A timer armed for `due` went off. A stale timer finds a later due time
    /// and changes nothing.
    pub fn timer_fired(&mut self, due: Duration) -> Option<DetectionState> {
        let viewport = self.pending.take_due(due)?;
        self.timer = None;
        let next = DetectionState::resolve(viewport, &self.breakpoints);
        self.transition(next)
    }

    /// Drops any pending evaluation and returns the timer to clear.
    pub fn unmount(&mut self) -> Option<H> {
        self.pending.cancel();
        self.timer.take()
    }

    fn transition(&mut self, next: DetectionState) -> Option<DetectionState> {
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// Starts `Pending`; the mount effect resolves it after hydration and keeps it
/// current across debounced `resize` and `orientationchange` events.
pub fn create_device_detection(breakpoints: Breakpoints) -> DeviceDetection {
    let state = RwSignal::new(DetectionState::Pending);
    let watcher = StoredValue::new(ViewportWatcher::<TimeoutHandle>::new(breakpoints));

    let write = move |next: Option<DetectionState>| {
        if let Some(next) = next {
            state.set(next);
        }
    };

    let on_viewport_change = move || {
        let changed = watcher
            .try_update_value(|w| w.viewport_changed(Viewport::current(), clock_now()));
        let Some((due, previous)) = changed else {
            return;
        };
        if let Some(previous) = previous {
            previous.clear();
        }

        let fired = move || write(watcher.try_update_value(|w| w.timer_fired(due)).flatten());

        match set_timeout_with_handle(fired, watcher.with_value(|w| w.wait())) {
            Ok(handle) => watcher.update_value(|w| w.armed(handle)),
            Err(e) => dev_warn!("could not schedule viewport check: {:?}", e),
        }
    };

    // Effects never run on the server, so the first render is always Pending.
    Effect::new(move |_| {
        write(watcher.try_update_value(|w| w.mount(Viewport::current())).flatten());

        let resize = window_event_listener(ev::resize, move |_| on_viewport_change());
        let orientation = window_event_listener(
            ev::Custom::<web_sys::Event>::new("orientationchange"),
            move |_| on_viewport_change(),
        );

        on_cleanup(move || {
            resize.remove();
            orientation.remove();
            if let Some(handle) = watcher.try_update_value(|w| w.unmount()).flatten() {
                handle.clear();
            }
        });
    });

    Effect::new(move |previous: Option<Option<DeviceClass>>| {
        let current = state.get().device_class();
        if let Some(class) = current {
            if previous.flatten() != Some(class) {
                apply_device_attribute(class);
            }
        }
        current
    });

    DeviceDetection {
        state: state.into(),
    }
}

fn clock_now() -> Duration {
    let millis = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default();

    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}

fn apply_device_attribute(class: DeviceClass) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.set_attribute(DEVICE_ATTRIBUTE, class.as_str()) {
            dev_warn!("could not set {}: {:?}", DEVICE_ATTRIBUTE, e);
        }
    }
}
