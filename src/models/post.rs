//! Blog post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post as stored in the posts JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    /// ISO date, e.g. "2025-11-03"
    pub date: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Renders the post date as "Nov 3, 2025".
    ///
    /// A date that does not parse is returned verbatim rather than failing
    /// the whole post.
    pub fn formatted_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}
