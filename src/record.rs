use std::fmt;

use serde::Serialize;

use crate::api_stuff::Item;

/// Metadata of a single video search result.
///
/// `None` marks a field the API did not send, which is not the same as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadataRecord {
    video_id: String,
    title: Option<String>,
    description: Option<String>,
    published_at: Option<String>,
    channel_title: Option<String>,
}

impl VideoMetadataRecord {
    /// Returns `None` for an empty video id.
    pub fn new(
        video_id: impl Into<String>,
        title: Option<String>,
        description: Option<String>,
        published_at: Option<String>,
        channel_title: Option<String>,
    ) -> Option<Self> {
        let video_id = video_id.into();
        if video_id.is_empty() {
            return None;
        }
        Some(Self {
            video_id,
            title,
            description,
            published_at,
            channel_title,
        })
    }

    /// Channels and playlists have no video id and yield `None`.
    pub fn from_item(item: Item) -> Option<Self> {
        let video_id = item.id?.video_id?;
        let snippet = item.snippet.unwrap_or_default();
        Self::new(
            video_id,
            snippet.title,
            snippet.description,
            snippet.published_at,
            snippet.channel_title,
        )
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    pub fn channel_title(&self) -> Option<&str> {
        self.channel_title.as_deref()
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }

    /// First non-blank line of the description.
    pub fn summary(&self) -> Option<&str> {
        self.description()?
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

impl fmt::Display for VideoMetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {})",
            self.video_id,
            self.title().unwrap_or("<untitled>"),
            self.channel_title().unwrap_or("unknown channel"),
            self.published_at().unwrap_or("unknown date"),
        )
    }
}
