// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest: the ordered media list handed to the widget.
//!
//! A manifest is a small TOML file listing media entries in display order:
//!
//! ```toml
//! media = [
//!     "dQw4w9WgXcQ",
//!     "shots/front.jpg",
//!     { kind = "image", src = "Screenshot_01" },
//! ]
//! ```
//!
//! Bare strings are classified by shape (see [`crate::media::classify`]);
//! tagged tables pin the kind explicitly for identifiers the shape heuristic
//! would get wrong. A missing or malformed manifest yields an empty list
//! rather than an error, so the gallery simply renders nothing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Kind tag for explicitly tagged manifest entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One media entry: either an opaque identifier or a tagged table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaEntry {
    Bare(String),
    Tagged { kind: MediaKind, src: String },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub media: Vec<MediaEntry>,
}

/// Loads a manifest, treating every failure as an empty media list.
#[must_use]
pub fn load<P: AsRef<Path>>(path: P) -> Manifest {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}
