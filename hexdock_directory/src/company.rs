// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

/// One directory entry.
///
/// Serialized with camelCase keys, the format used by cached lists and admin
/// override snapshots. Missing fields deserialize to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    /// URL-safe slug derived from the name; see [`slugify`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Logo image URL.
    pub logo: String,
    /// Banner image URL for the detail view.
    pub header_image: String,
    /// Target of the QR code shown on the detail view.
    pub qr_code: String,
    /// One-line pitch.
    pub tagline: String,
    /// Long-form description.
    pub description: String,
    /// Local story paragraph.
    pub detroit_story: String,
    /// Funding stage or amount, free text.
    pub funding: String,
    /// Company website.
    pub website: String,
    /// Industries, most relevant first.
    pub industry: Vec<String>,
    /// Secondary tags such as business model or stage.
    pub modifiers: Vec<String>,
    /// Search tags.
    pub tags: Vec<String>,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// City and region.
    pub location: String,
    /// Campus the company is based at, when known.
    ///
    /// Older snapshots store this as `newlabLocation`.
    #[serde(alias = "newlabLocation")]
    pub campus: Option<String>,
}

impl Company {
    /// Creates a company with `name` and its derived id, all other fields empty.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            ..Self::default()
        }
    }

    /// Industries followed by modifiers.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.industry
            .iter()
            .chain(self.modifiers.iter())
            .map(String::as_str)
    }
}

/// Derives a stable id from a display name.
///
/// Lowercases, replaces every non `[a-z0-9]` character with `-`, collapses
/// runs of `-` and trims them from both ends.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_owned()
}
