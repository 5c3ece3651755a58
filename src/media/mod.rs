// SPDX-License-Identifier: MPL-2.0
//! Unified media handling for gallery entries.
//!
//! This module maps raw media identifiers (a local image path or a remote
//! video token) to typed descriptors, and derives the thumbnail and embed
//! URLs the UI renders.

pub mod image;

pub use image::{load_image, ImageData};

use crate::manifest::{MediaEntry, MediaKind};

/// Prefix of the derived thumbnail URL for remote videos.
const VIDEO_THUMBNAIL_PREFIX: &str = "https://i.ytimg.com/vi/";
/// Suffix of the derived thumbnail URL for remote videos.
const VIDEO_THUMBNAIL_SUFFIX: &str = "/hqdefault.jpg";
/// Prefix of the derived embed URL for remote videos.
const VIDEO_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
/// Suffix of the derived embed URL for remote videos.
const VIDEO_EMBED_SUFFIX: &str = "?rel=0";

/// Minimum length of a token that classifies as a remote video id.
const VIDEO_ID_MIN_LEN: usize = 10;

/// Typed descriptor derived from one raw media identifier.
///
/// The descriptor list always has the same length and order as the raw
/// input list; it carries no identity of its own and is rebuilt whenever
/// the input list is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDescriptor {
    /// A remote video referenced by its opaque id.
    RemoteVideo { id: String, thumbnail_url: String },
    /// A local image referenced by its path.
    LocalImage { src: String, thumbnail_url: String },
}

impl MediaDescriptor {
    /// Builds the remote-video variant, deriving its thumbnail URL.
    #[must_use]
    pub fn remote_video(id: impl Into<String>) -> Self {
        let id = id.into();
        let thumbnail_url =
            format!("{VIDEO_THUMBNAIL_PREFIX}{id}{VIDEO_THUMBNAIL_SUFFIX}");
        Self::RemoteVideo { id, thumbnail_url }
    }

    /// Builds the local-image variant; the thumbnail is the image itself.
    #[must_use]
    pub fn local_image(src: impl Into<String>) -> Self {
        let src = src.into();
        let thumbnail_url = src.clone();
        Self::LocalImage { src, thumbnail_url }
    }

    /// Checks if this descriptor is a remote video.
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, Self::RemoteVideo { .. })
    }

    /// Returns the thumbnail URL for this descriptor.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        match self {
            Self::RemoteVideo { thumbnail_url, .. } => thumbnail_url,
            Self::LocalImage { thumbnail_url, .. } => thumbnail_url,
        }
    }

    /// Returns the embeddable player URL for remote videos.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Self::RemoteVideo { id, .. } => {
                Some(format!("{VIDEO_EMBED_PREFIX}{id}{VIDEO_EMBED_SUFFIX}"))
            }
            Self::LocalImage { .. } => None,
        }
    }
}

/// Checks if `raw` has the shape of a remote video id: ten or more
/// characters drawn from `[A-Za-z0-9_-]` and nothing else.
fn is_video_id(raw: &str) -> bool {
    // All accepted characters are ASCII, so byte length equals char count.
    raw.len() >= VIDEO_ID_MIN_LEN
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Classifies one raw identifier into a typed descriptor.
///
/// Pure and total: every input string maps to exactly one variant. Strings
/// matching the video-id token shape become [`MediaDescriptor::RemoteVideo`];
/// everything else is a [`MediaDescriptor::LocalImage`] whose `src` is the
/// raw string unchanged.
#[must_use]
pub fn classify(raw: &str) -> MediaDescriptor {
    if is_video_id(raw) {
        MediaDescriptor::remote_video(raw)
    } else {
        MediaDescriptor::local_image(raw)
    }
}

/// Classifies one manifest entry.
///
/// Explicitly tagged entries bypass the token heuristic: a file that happens
/// to look like a video id can be pinned to `kind = "image"` in the manifest.
#[must_use]
pub fn classify_entry(entry: &MediaEntry) -> MediaDescriptor {
    match entry {
        MediaEntry::Bare(raw) => classify(raw),
        MediaEntry::Tagged { kind, src } => match kind {
            MediaKind::Video => MediaDescriptor::remote_video(src.clone()),
            MediaKind::Image => MediaDescriptor::local_image(src.clone()),
        },
    }
}

/// Classifies a whole entry list, preserving length and order.
#[must_use]
pub fn classify_entries(entries: &[MediaEntry]) -> Vec<MediaDescriptor> {
    entries.iter().map(classify_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_token_classifies_as_remote_video() {
        let descriptor = classify("dQw4w9WgXcQ");
        assert_eq!(
            descriptor,
            MediaDescriptor::RemoteVideo {
                id: "dQw4w9WgXcQ".to_string(),
                thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
                    .to_string(),
            }
        );
    }

    #[test]
    fn image_path_classifies_as_local_image_with_identical_thumbnail() {
        let descriptor = classify("photo.jpg");
        match descriptor {
            MediaDescriptor::LocalImage { src, thumbnail_url } => {
                assert_eq!(src, "photo.jpg");
                assert_eq!(thumbnail_url, src);
            }
            other => panic!("expected LocalImage, got {other:?}"),
        }
    }

    #[test]
    fn exactly_ten_token_characters_is_a_video() {
        assert!(classify("abcde_1234").is_video());
    }

    #[test]
    fn nine_token_characters_is_an_image() {
        assert!(!classify("abcde_123").is_video());
    }

    #[test]
    fn token_alphabet_allows_underscore_and_hyphen() {
        assert!(classify("a_b-c_d-e_f").is_video());
    }

    #[test]
    fn any_foreign_character_forces_local_image() {
        assert!(!classify("abcdefghij.png").is_video()); // dot
        assert!(!classify("abcde fghij").is_video()); // space
        assert!(!classify("abcdefghijé").is_video()); // non-ASCII
        assert!(!classify("images/abcdefghij").is_video()); // slash
    }

    #[test]
    fn empty_string_is_a_local_image() {
        match classify("") {
            MediaDescriptor::LocalImage { src, .. } => assert!(src.is_empty()),
            other => panic!("expected LocalImage, got {other:?}"),
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for raw in ["dQw4w9WgXcQ", "photo.jpg", "", "short-1"] {
            assert_eq!(classify(raw), classify(raw));
        }
    }

    #[test]
    fn entry_list_classification_preserves_length_order_and_duplicates() {
        let entries = vec![
            MediaEntry::Bare("dQw4w9WgXcQ".to_string()),
            MediaEntry::Bare("photo.jpg".to_string()),
            MediaEntry::Bare("photo.jpg".to_string()),
        ];

        let descriptors = classify_entries(&entries);
        assert_eq!(descriptors.len(), 3);
        assert!(descriptors[0].is_video());
        assert!(!descriptors[1].is_video());
        assert_eq!(descriptors[1], descriptors[2]);
    }

    #[test]
    fn tagged_image_entry_bypasses_the_token_heuristic() {
        // Looks like a video id, but the manifest pins it as an image.
        let entry = MediaEntry::Tagged {
            kind: MediaKind::Image,
            src: "Screenshot_01".to_string(),
        };
        assert!(!classify_entry(&entry).is_video());
    }

    #[test]
    fn tagged_video_entry_bypasses_the_token_heuristic() {
        let entry = MediaEntry::Tagged {
            kind: MediaKind::Video,
            src: "shortid".to_string(),
        };
        let descriptor = classify_entry(&entry);
        assert!(descriptor.is_video());
        assert_eq!(
            descriptor.thumbnail_url(),
            "https://i.ytimg.com/vi/shortid/hqdefault.jpg"
        );
    }

    #[test]
    fn embed_url_is_derived_for_videos_only() {
        assert_eq!(
            classify("dQw4w9WgXcQ").embed_url().as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0")
        );
        assert_eq!(classify("photo.jpg").embed_url(), None);
    }
}
