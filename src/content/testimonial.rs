use serde::{Deserialize, Serialize};

use crate::common::ContentError;
use crate::content::menu::require_text;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub title: String,
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, title: &str, rating: u8) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            title: title.to_string(),
            rating,
        }
    }

    /// Filled stars followed by empty ones, always `MAX_RATING` long.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require_text(&self.quote, "testimonial quote")?;
        require_text(&self.author, "testimonial author")?;

        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err(ContentError::RatingOutOfRange {
                author: self.author.clone(),
                rating: self.rating,
            });
        }

        Ok(())
    }
}
