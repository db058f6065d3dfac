// SPDX-License-Identifier: MPL-2.0
//! Video link normalization.
//!
//! Plan videos are stored as whatever link the admin pasted. [`embed_url`]
//! turns the common YouTube link shapes into a single embeddable form.

const EMBED_MARKER: &str = "youtube.com/embed/";
const SHORT_LINK_MARKER: &str = "youtu.be/";
const WATCH_MARKER: &str = "watch?v=";
const WATCH_PATH_MARKER: &str = "youtube.com/watch";

/// Normalizes a YouTube link into an autoplaying, muted, looping embed URL.
///
/// - embed links are returned unchanged
/// - `youtu.be/ID` links use the ID before any `?`
/// - watch links use the `v` query parameter wherever it appears
/// - anything else is returned unchanged
#[must_use]
pub fn embed_url(url: &str) -> String {
    if url.contains(EMBED_MARKER) {
        return url.to_string();
    }

    match extract_video_id(url) {
        Some(id) => format!(
            "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}"
        ),
        None => url.to_string(),
    }
}

/// Extracts the YouTube video identifier from a short or watch link.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = if let Some((_, rest)) = url.split_once(SHORT_LINK_MARKER) {
        rest.split(['?', '#']).next().unwrap_or_default()
    } else if let Some((_, rest)) = url.split_once(WATCH_MARKER) {
        rest.split(['&', '#']).next().unwrap_or_default()
    } else if url.contains(WATCH_PATH_MARKER) {
        query_param(url, "v").unwrap_or_default()
    } else {
        ""
    };

    (!id.is_empty()).then_some(id)
}

fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_link_is_embedded() {
        let url = embed_url("https://youtu.be/abc123");
        assert_eq!(
            url,
            "https://www.youtube.com/embed/abc123?autoplay=1&mute=1&loop=1&playlist=abc123"
        );
    }

    #[test]
    fn short_link_drops_query() {
        let url = embed_url("https://youtu.be/abc123?si=tracking");
        assert!(url.contains("/embed/abc123?"));
        assert!(!url.contains("tracking"));
    }

    #[test]
    fn watch_link_with_extra_params() {
        let url = embed_url("https://www.youtube.com/watch?v=abc123&t=10");
        assert!(url.contains("abc123"));
        assert!(url.ends_with("playlist=abc123"));
        assert!(!url.contains("t=10"));
    }

    #[test]
    fn watch_link_with_v_not_first() {
        let link = "https://www.youtube.com/watch?feature=share&v=xyz789";
        assert_eq!(extract_video_id(link), Some("xyz789"));
        assert!(embed_url(link).contains("/embed/xyz789?"));
    }

    #[test]
    fn embed_link_is_unchanged() {
        let original = "https://www.youtube.com/embed/abc123?rel=0";
        assert_eq!(embed_url(original), original);
    }

    #[test]
    fn unknown_link_is_unchanged() {
        let original = "https://vimeo.com/12345";
        assert_eq!(embed_url(original), original);
    }

    #[test]
    fn watch_link_without_id_is_unchanged() {
        let original = "https://www.youtube.com/watch?list=PL123";
        assert_eq!(embed_url(original), original);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }
}
