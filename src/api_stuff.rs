use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Only the members we read are declared; serde ignores the rest
// (etag, pageInfo, thumbnails, ...).

#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Deserialize, Debug)]
pub struct Item {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub channel_title: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Id {
    /// Missing when the result is a channel or a playlist.
    #[serde(default, deserialize_with = "string_or_absent")]
    pub video_id: Option<String>,
}

/// Anything other than a JSON string counts as absent.
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Error envelope the API sends with non-2xx responses.
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub message: String,
}
