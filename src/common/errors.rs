use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Menu with slug {0:?} not found")]
    UnknownMenu(String),

    #[error("Menu {menu:?} uses `is_vegetarian` on item {item:?}; use `vegetarian`")]
    LegacyVegetarianField { menu: String, item: String },

    #[error("{0} must not be empty")]
    Empty(String),

    #[error("Item {0:?} has a glass/bottle price with neither tier set")]
    EmptyTieredPrice(String),

    #[error("Course {0:?} offers a choice but has no options")]
    NoCourseOptions(String),

    #[error("Course {course:?} has a stray `{field}` for its selection type")]
    MixedCourseSelection { course: String, field: &'static str },

    #[error("Course {course:?} has unknown field `{field}`")]
    UnknownCourseField { course: String, field: String },

    #[error("Testimonial by {author:?} has rating {rating}; expected 1 to 5")]
    RatingOutOfRange { author: String, rating: u8 },

    #[error("Menu slug {0:?} is used more than once")]
    DuplicateSlug(String),

    #[error("Malformed content: {0}")]
    Parse(String),
}

impl ContentError {
    /// HTTP status for a page whose content failed this way.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::UnknownMenu(_) => 404,
            _ => 500,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Viewport width could not be read")]
    UnreadableWidth,

    #[error("User agent could not be read")]
    UnreadableUserAgent,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
