//! Paint and load timings. Observability only: nothing here feeds back into
//! rendering, and nothing runs on the server.

use serde::Serialize;

pub const HOMEPAGE_START: &str = "homepage_start";
pub const HOMEPAGE_LOADED: &str = "homepage_loaded";
pub const LCP_LOADED: &str = "lcp-loaded";
pub const HOMEPAGE_LOAD: &str = "homepage_load";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub name: String,
    /// Milliseconds since navigation start.
    pub at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    pub name: String,
    pub start: String,
    pub end: String,
    pub duration_ms: f64,
}

/// Marks recorded for one page view.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Timeline {
    marks: Vec<Mark>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-marking a name moves it to the newer time.
    pub fn mark(&mut self, name: &str, at_ms: f64) {
        self.marks.retain(|m| m.name != name);
        self.marks.push(Mark {
            name: name.to_string(),
            at_ms,
        });
    }

    /// Records `name` only if it is absent. Returns whether it was recorded.
    pub fn mark_once(&mut self, name: &str, at_ms: f64) -> bool {
        if self.get(name).is_some() {
            return false;
        }
        self.mark(name, at_ms);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Mark> {
        self.marks.iter().find(|m| m.name == name)
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// `None` until both marks exist.
    pub fn measure(&self, name: &str, start: &str, end: &str) -> Option<Measure> {
        let from = self.get(start)?;
        let to = self.get(end)?;

        Some(Measure {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            duration_ms: to.at_ms - from.at_ms,
        })
    }
}

#[cfg(feature = "hydrate")]
pub mod browser {
    use std::cell::RefCell;

    use leptos::logging::log;

    use super::{Measure, Timeline};
    use crate::dev_warn;

    thread_local! {
        static TIMELINE: RefCell<Timeline> = RefCell::new(Timeline::new());
    }

    fn performance() -> Option<web_sys::Performance> {
        web_sys::window().and_then(|w| w.performance())
    }

    /// Records `name` in the browser's performance timeline and our own.
    pub fn mark(name: &str) {
        let Some(performance) = performance() else {
            return;
        };

        if let Err(e) = performance.mark(name) {
            dev_warn!("performance.mark({}) failed: {:?}", name, e);
        }

        let now = performance.now();
        TIMELINE.with(|t| t.borrow_mut().mark(name, now));
        log!("[perf] {} at {:.1}ms", name, now);
    }

    /// Like `mark`, but a name already in the timeline is left alone.
    pub fn mark_once(name: &str) {
        if !TIMELINE.with(|t| t.borrow().get(name).is_some()) {
            mark(name);
        }
    }

    pub fn measure(name: &str, start: &str, end: &str) -> Option<Measure> {
        if let Some(performance) = performance() {
            if let Err(e) = performance.measure_with_start_mark_and_end_mark(name, start, end) {
                dev_warn!("performance.measure({}) failed: {:?}", name, e);
            }
        }

        let measure = TIMELINE.with(|t| t.borrow().measure(name, start, end));
        if let Some(m) = &measure {
            log!("[perf] {} took {:.1}ms", m.name, m.duration_ms);
        }
        measure
    }

    pub fn document_loaded() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.ready_state() == "complete")
    }
}
