//! Tests for share message composition and intent-URL construction.
//!
//! The round-trip suite parses the built URL with the `url` crate and checks
//! that the `text` and `url` parameters decode back to the exact unencoded
//! message and watch URL, whatever the title contains.

use super::*;
use crate::controls::DataSet;
use crate::video::watch_url;
use url::Url;

// ============================================================================
// Helpers
// ============================================================================

/// Parse a built share URL and return its query pairs in order.
fn query_pairs(share_url: &str) -> Vec<(String, String)> {
    let url = Url::parse(share_url).expect("share URL must parse");
    url.query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Decoded value of a named query parameter, panicking if absent.
fn param(share_url: &str, name: &str) -> String {
    query_pairs(share_url)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing query parameter {}", name))
}

fn build(title: &str, video_id: &str) -> String {
    build_share_url(&ShareConfig::default(), &ShareRequest::new(title, video_id))
}

// ============================================================================
// Message composition
// ============================================================================

#[test]
fn test_message_contains_title_and_phrase() {
    let config = ShareConfig::default();
    let message = share_message(&config, "My Video");
    assert!(message.contains("My Video"));
    assert!(message.starts_with("🔥 My Video"));
    assert!(message.contains("炎上度チェック結果はこちら👇"));
}

#[test]
fn test_message_includes_hashtags_on_final_line() {
    let config = ShareConfig::default();
    let message = share_message(&config, "t");
    let last_line = message.lines().last().unwrap();
    assert_eq!(last_line, "#炎上 #YouTube #話題");
}

#[test]
fn test_message_omits_hashtag_block_when_empty() {
    let config = ShareConfig {
        hashtags: vec![],
        ..ShareConfig::default()
    };
    let message = share_message(&config, "t");
    assert!(!message.contains('#'));
    assert!(message.ends_with("炎上度チェック結果はこちら👇"));
}

#[test]
fn test_message_custom_wording() {
    let config = ShareConfig {
        lead_in: "Watch:".to_string(),
        call_to_action: "Full results here".to_string(),
        hashtags: vec!["#video".to_string()],
        ..ShareConfig::default()
    };
    let message = share_message(&config, "A Title");
    assert_eq!(message, "Watch: A Title\n\nFull results here\n\n#video");
}

#[test]
fn test_message_does_not_embed_watch_url() {
    // The watch URL travels in the `url` parameter only.
    let message = share_message(&ShareConfig::default(), "t");
    assert!(!message.contains("youtube.com"));
}

// ============================================================================
// URL structure
// ============================================================================

#[test]
fn test_url_targets_intent_endpoint() {
    let share_url = build("title", "abc123");
    assert!(share_url.starts_with("https://twitter.com/intent/tweet?text="));

    let url = Url::parse(&share_url).unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("twitter.com"));
    assert_eq!(url.path(), "/intent/tweet");
}

#[test]
fn test_url_has_exactly_text_and_url_params() {
    let pairs = query_pairs(&build("some title", "abc123"));
    let names: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["text", "url"]);
}

#[test]
fn test_url_param_is_watch_url() {
    let share_url = build("Hello & Welcome", "abc123");
    assert_eq!(
        param(&share_url, "url"),
        "https://www.youtube.com/watch?v=abc123"
    );
}

#[test]
fn test_no_double_encoding() {
    let share_url = build("Hello & Welcome", "abc123");
    // A double-encoded ampersand would surface as %2526.
    assert!(share_url.contains("%26"));
    assert!(!share_url.contains("%2526"));
    assert!(param(&share_url, "text").contains("Hello & Welcome"));
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_round_trip_plain_title() {
    let config = ShareConfig::default();
    let share_url = build("An Ordinary Title", "dQw4w9WgXcQ");
    assert_eq!(
        param(&share_url, "text"),
        share_message(&config, "An Ordinary Title")
    );
    assert_eq!(param(&share_url, "url"), watch_url("dQw4w9WgXcQ"));
}

#[test]
fn test_round_trip_reserved_characters() {
    for title in [
        "A & B",
        "50% = half",
        "#hashtag title",
        "path/with/slashes",
        "a?b=c&d=e",
        "plus + sign",
        "\"quoted\" 'title'",
    ] {
        let share_url = build(title, "abc123");
        let decoded = param(&share_url, "text");
        assert!(
            decoded.contains(title),
            "title {:?} did not survive the round trip: {:?}",
            title,
            decoded
        );
    }
}

#[test]
fn test_round_trip_multibyte_text() {
    let title = "【検証】日本語タイトル 🔥🎌 émojis ünïcode";
    let share_url = build(title, "ウxyz");
    assert!(param(&share_url, "text").contains(title));
    assert_eq!(
        param(&share_url, "url"),
        "https://www.youtube.com/watch?v=ウxyz"
    );
}

#[test]
fn test_round_trip_newlines() {
    let config = ShareConfig::default();
    let share_url = build("multi\nline\ntitle", "abc");
    assert_eq!(
        param(&share_url, "text"),
        share_message(&config, "multi\nline\ntitle")
    );
    // Newlines must be encoded, never literal, in the URL itself.
    assert!(!share_url.contains('\n'));
    assert!(share_url.contains("%0A"));
}

#[test]
fn test_empty_inputs_produce_well_formed_url() {
    let share_url = build("", "");
    let url = Url::parse(&share_url).expect("URL with empty inputs must parse");
    assert_eq!(url.host_str(), Some("twitter.com"));
    assert_eq!(param(&share_url, "url"), "https://www.youtube.com/watch?v=");
    // The message still carries the fixed phrases.
    assert!(param(&share_url, "text").contains("炎上度チェック結果はこちら👇"));
}

#[test]
fn test_video_id_passes_through_opaque() {
    // Ids are opaque tokens: no validation, but still encoded when embedded.
    let share_url = build("t", "id with spaces&reserved");
    assert_eq!(
        param(&share_url, "url"),
        "https://www.youtube.com/watch?v=id with spaces&reserved"
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_builder_is_deterministic() {
    let config = ShareConfig::default();
    let request = ShareRequest::new("Same Title", "same-id");
    let first = build_share_url(&config, &request);
    let second = build_share_url(&config, &request);
    assert_eq!(first, second);
}

// ============================================================================
// Bind-time record construction
// ============================================================================

#[test]
fn test_request_from_data() {
    let data: DataSet = [("title", "My Video"), ("id", "abc123")]
        .into_iter()
        .collect();
    let request = ShareRequest::from_data(&data);
    assert_eq!(request.title, "My Video");
    assert_eq!(request.video_id, "abc123");
}

#[test]
fn test_request_from_data_missing_keys_degrade_to_empty() {
    let request = ShareRequest::from_data(&DataSet::new());
    assert_eq!(request.title, "");
    assert_eq!(request.video_id, "");
    // And the builder still produces a parseable URL from it.
    let share_url = build_share_url(&ShareConfig::default(), &request);
    assert!(Url::parse(&share_url).is_ok());
}

#[test]
fn test_request_serialization() {
    let request = ShareRequest::new("Title", "abc123");
    let json = serde_json::to_string(&request).unwrap();
    let back: ShareRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}
