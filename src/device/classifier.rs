use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::common::DetectionError;

/// Widest viewport, in CSS pixels, that still gets the mobile layout.
pub const MOBILE_BREAKPOINT: u32 = 767;

static MOBILE_USER_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .case_insensitive(true)
        .build()
        .expect("Invalid mobile user agent pattern")
});

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout breakpoints. A tablet class only exists when `tablet_max` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub mobile_max: u32,
    pub tablet_max: Option<u32>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: MOBILE_BREAKPOINT,
            tablet_max: None,
        }
    }
}

/// The two inputs the classifier looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub user_agent: String,
}

impl Viewport {
    pub fn new(width: u32, user_agent: impl Into<String>) -> Self {
        Self {
            width,
            user_agent: user_agent.into(),
        }
    }

    /// Reads `window.innerWidth` and `navigator.userAgent`.
    #[cfg(feature = "hydrate")]
    pub fn current() -> Result<Self, DetectionError> {
        let window = web_sys::window().ok_or(DetectionError::NoWindow)?;

        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .filter(|w| w.is_finite() && *w >= 0.0)
            .ok_or(DetectionError::UnreadableWidth)?;

        let user_agent = window
            .navigator()
            .user_agent()
            .map_err(|_| DetectionError::UnreadableUserAgent)?;

        Ok(Self::new(width as u32, user_agent))
    }

    /// Outside the browser there is no viewport to read.
    #[cfg(not(feature = "hydrate"))]
    pub fn current() -> Result<Self, DetectionError> {
        Err(DetectionError::NoWindow)
    }

    /// Width first, user agent second.
    pub fn is_mobile(&self) -> bool {
        is_mobile_width(self.width) || is_mobile_user_agent(&self.user_agent)
    }

    pub fn classify(&self, breakpoints: &Breakpoints) -> DeviceClass {
        if self.width <= breakpoints.mobile_max || is_mobile_user_agent(&self.user_agent) {
            return DeviceClass::Mobile;
        }

        match breakpoints.tablet_max {
            Some(max) if self.width <= max => DeviceClass::Tablet,
            _ => DeviceClass::Desktop,
        }
    }
}

pub fn is_mobile_width(width: u32) -> bool {
    width <= MOBILE_BREAKPOINT
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}

/// Classifies the current browser. Always `false` when there is no browser.
pub fn is_mobile_device() -> bool {
    Viewport::current().map(|v| v.is_mobile()).unwrap_or(false)
}
