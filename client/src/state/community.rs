//! Mock community feed shown on the `/community` route.
//!
//! The feed is a fixed fixture compiled into the binary. There is no backend
//! behind it; likes, comments and share are decorative.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use serde::Deserialize;

const FEED_FIXTURE: &str = include_str!("../../assets/community_feed.json");

/// One post in the community feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeedPost {
    pub id: u32,
    pub author: String,
    pub author_location: String,
    pub image_url: String,
    pub likes: u32,
    pub comments: u32,
    pub caption: String,
    /// Place the photo was taken.
    pub spot: String,
    /// Photography styles the spot suits.
    #[serde(default)]
    pub best_for: Vec<String>,
}

impl FeedPost {
    /// "Best for" line as rendered under the caption.
    #[must_use]
    pub fn best_for_label(&self) -> String {
        self.best_for.join(", ")
    }
}

/// Parse a JSON array of feed posts.
///
/// # Errors
///
/// Returns the `serde_json` error when `raw` is not a valid post array.
pub fn parse_feed(raw: &str) -> Result<Vec<FeedPost>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The built-in mock feed. Logs and returns an empty feed if the fixture is malformed.
#[must_use]
pub fn mock_feed() -> Vec<FeedPost> {
    match parse_feed(FEED_FIXTURE) {
        Ok(posts) => posts,
        Err(err) => {
            log::error!("community feed fixture is invalid: {err}");
            Vec::new()
        }
    }
}
