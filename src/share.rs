//! Share request records and intent-URL construction.
//!
//! A share control carries a video title and a video id. Activating it opens
//! a pre-filled compose page on the social platform. This module is the pure
//! half of that flow: composing the share message and building the fully
//! encoded web-intent URL. Opening the result is the `opener` module's job.

use serde::{Deserialize, Serialize};

use crate::controls::DataSet;
use crate::video::WATCH_BASE;
use crate::{DATA_TITLE, DATA_VIDEO_ID};

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Web-intent compose endpoint.
pub const INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Fixed hashtags appended to every share message by default.
pub const DEFAULT_HASHTAGS: &[&str] = &["#炎上", "#YouTube", "#話題"];

// ============================================================================
// Data Structures
// ============================================================================

/// The typed record behind one share control, built once at bind time.
///
/// Both fields are free-form: the id is an opaque platform token and the
/// title may contain any Unicode text. Missing control data binds as an
/// empty string rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: String,
    pub video_id: String,
}

impl ShareRequest {
    pub fn new(title: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            video_id: video_id.into(),
        }
    }

    /// Read title and video id off a control's data attributes.
    pub fn from_data(data: &DataSet) -> Self {
        Self {
            title: data.get(DATA_TITLE).unwrap_or("").to_string(),
            video_id: data.get(DATA_VIDEO_ID).unwrap_or("").to_string(),
        }
    }
}

/// The fixed template strings of the share message and intent URL.
///
/// `Default` is the canonical wording; hosts wanting different copy or an
/// empty hashtag set supply their own config instead of forking the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Compose endpoint the intent URL targets.
    pub intent_base: String,
    /// Base of the canonical viewing URL; the video id is appended verbatim.
    pub watch_base: String,
    /// Prefix placed before the title on the first message line.
    pub lead_in: String,
    /// Fixed descriptive phrase on its own line after the title.
    pub call_to_action: String,
    /// Hashtags for the final line. May be empty.
    pub hashtags: Vec<String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_base: INTENT_BASE.to_string(),
            watch_base: WATCH_BASE.to_string(),
            lead_in: "🔥".to_string(),
            call_to_action: "炎上度チェック結果はこちら👇".to_string(),
            hashtags: DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Compose the human-readable share message for a title.
pub fn share_message(config: &ShareConfig, title: &str) -> String {
    let mut message = format!(
        "{} {}\n\n{}",
        config.lead_in, title, config.call_to_action
    );
    if !config.hashtags.is_empty() {
        message.push_str("\n\n");
        message.push_str(&config.hashtags.join(" "));
    }
    message
}

/// Build the fully encoded web-intent URL for a share request.
///
/// The message text and the canonical watch URL are percent-encoded
/// independently and embedded as exactly the `text` and `url` query
/// parameters. Never fails: any title and any id, including empty strings,
/// produce a well-formed URL.
pub fn build_share_url(config: &ShareConfig, request: &ShareRequest) -> String {
    let message = share_message(config, &request.title);
    let content_url = format!("{}{}", config.watch_base, request.video_id);

    format!(
        "{}?text={}&url={}",
        config.intent_base,
        urlencoding::encode(&message),
        urlencoding::encode(&content_url)
    )
}
