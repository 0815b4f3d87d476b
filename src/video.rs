//! Video URL validation and video id extraction.
//!
//! Share controls carry a bare video id, but ids enter the system as pasted
//! URLs. This module checks that a URL really points at the video platform
//! and digs the id out of the common URL shapes.

use regex::Regex;
use url::Url;

/// Base of the canonical viewing URL; the video id is appended verbatim.
pub const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Hosts accepted as the video platform.
const ALLOWED_HOSTS: &[&str] = &["www.youtube.com", "youtube.com", "m.youtube.com", "youtu.be"];

/// Result of video URL validation
#[derive(Debug, Clone)]
pub enum VideoUrlError {
    /// URL is malformed or cannot be parsed
    InvalidUrl(String),
    /// Host is not the video platform
    HostNotAllowed(String),
    /// URL parsed but no video id could be extracted
    NoVideoId,
}

impl std::fmt::Display for VideoUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoUrlError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            VideoUrlError::HostNotAllowed(host) => {
                write!(f, "Not a video platform host: {}", host)
            }
            VideoUrlError::NoVideoId => write!(f, "No video id in URL"),
        }
    }
}

impl std::error::Error for VideoUrlError {}

/// Check if a host is one of the accepted video platform hosts.
///
/// Exact match only: `youtube.com.evil.com` must not pass.
fn is_host_allowed(host: &str) -> bool {
    let host_lower = host.to_lowercase();
    ALLOWED_HOSTS.iter().any(|allowed| host_lower == *allowed)
}

/// Validate that a URL points at the video platform.
///
/// # Returns
/// * `Ok(Url)` - The parsed URL
/// * `Err(VideoUrlError)` - If parsing fails or the host is foreign
pub fn validate_video_url(url_str: &str) -> Result<Url, VideoUrlError> {
    let url = Url::parse(url_str).map_err(|e| VideoUrlError::InvalidUrl(e.to_string()))?;

    let host = url
        .host_str()
        .ok_or_else(|| VideoUrlError::InvalidUrl("No host in URL".to_string()))?;

    if !is_host_allowed(host) {
        return Err(VideoUrlError::HostNotAllowed(host.to_string()));
    }

    Ok(url)
}

/// Extract a video id from a URL or URL fragment.
///
/// Handles the common shapes: `watch?v=`, short `youtu.be/` links, shorts,
/// and embeds. Ids are treated as opaque tokens; whatever sits between the
/// marker and the next delimiter is returned as-is.
pub fn extract_video_id(input: &str) -> Option<String> {
    let patterns = [
        r"[?&]v=([^&#]+)",
        r"youtu\.be/([^?#/]+)",
        r"/shorts/([^?#/]+)",
        r"/embed/([^?#/]+)",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(input) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }
    None
}

/// Validate a URL and extract its video id in one step.
pub fn video_id_from_url(url_str: &str) -> Result<String, VideoUrlError> {
    let url = validate_video_url(url_str)?;
    extract_video_id(url.as_str()).ok_or(VideoUrlError::NoVideoId)
}

/// The canonical viewing URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("{}{}", WATCH_BASE, video_id)
}
