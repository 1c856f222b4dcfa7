// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emoji stand-ins for companies without a usable logo.

use crate::company::Company;

const FALLBACK: &str = "🏢";

const INDUSTRY_GLYPHS: &[(&str, &str)] = &[
    ("Manufacturing", "🏭"),
    ("Technology", "💻"),
    ("Software", "💻"),
    ("Hardware", "🔧"),
    ("Automotive", "🚗"),
    ("Electric Vehicles", "⚡"),
    ("Clean Energy", "🔋"),
    ("Renewable Energy", "☀️"),
    ("Solar", "☀️"),
    ("Wind", "💨"),
    ("Robotics", "🤖"),
    ("AI", "🧠"),
    ("Machine Learning", "🧠"),
    ("Healthcare", "🏥"),
    ("Medical", "⚕️"),
    ("Biotech", "🧬"),
    ("Pharma", "💊"),
    ("Food", "🍎"),
    ("Agriculture", "🌾"),
    ("Sustainability", "🌱"),
    ("Environment", "🌍"),
    ("Transportation", "🚛"),
    ("Logistics", "📦"),
    ("Aerospace", "🚀"),
    ("Defense", "🛡️"),
    ("Construction", "🏗️"),
    ("Real Estate", "🏢"),
    ("Finance", "💰"),
    ("Insurance", "🛡️"),
    ("Education", "📚"),
    ("Entertainment", "🎬"),
    ("Gaming", "🎮"),
    ("Sports", "⚽"),
    ("Fashion", "👗"),
    ("Beauty", "💄"),
    ("Retail", "🛍️"),
    ("E-commerce", "🛒"),
    ("Telecommunications", "📡"),
    ("Media", "📺"),
    ("Publishing", "📖"),
    ("Travel", "✈️"),
    ("Hospitality", "🏨"),
    ("Marine", "⚓"),
    ("Maritime", "🚢"),
    ("Oil & Gas", "⛽"),
    ("Mining", "⛏️"),
    ("Materials", "🔩"),
    ("Chemicals", "⚗️"),
    ("Textiles", "🧵"),
    ("Furniture", "🪑"),
    ("Tools", "🔨"),
    ("Electronics", "📱"),
    ("Semiconductors", "💾"),
    ("Optics", "🔬"),
    ("Security", "🔒"),
    ("Consulting", "💼"),
    ("Services", "⚙️"),
];

// Checked in order; the first keyword contained in the lowercased name wins.
const NAME_GLYPHS: &[(&str, &str)] = &[
    ("electric", "⚡"),
    ("auto", "🚗"),
    ("motor", "🚗"),
    ("vehicle", "🚗"),
    ("tech", "💻"),
    ("soft", "💻"),
    ("robot", "🤖"),
    ("ai", "🧠"),
    ("data", "📊"),
    ("cloud", "☁️"),
    ("green", "🌱"),
    ("eco", "🌱"),
    ("solar", "☀️"),
    ("energy", "⚡"),
    ("power", "⚡"),
    ("bio", "🧬"),
    ("med", "⚕️"),
    ("health", "🏥"),
    ("food", "🍎"),
    ("farm", "🌾"),
    ("agri", "🌾"),
    ("space", "🚀"),
    ("aero", "🚀"),
    ("marine", "⚓"),
    ("water", "💧"),
    ("fire", "🔥"),
    ("security", "🔒"),
    ("finance", "💰"),
    ("bank", "🏦"),
    ("real estate", "🏢"),
    ("construction", "🏗️"),
    ("build", "🏗️"),
    ("material", "🔩"),
    ("metal", "⚙️"),
    ("steel", "⚙️"),
    ("plastic", "🔬"),
    ("chemical", "⚗️"),
    ("lab", "🔬"),
    ("research", "🔬"),
    ("innovation", "💡"),
    ("smart", "💡"),
    ("digital", "📱"),
    ("mobile", "📱"),
    ("app", "📱"),
    ("web", "🌐"),
    ("internet", "🌐"),
    ("network", "📡"),
    ("communication", "📡"),
    ("media", "📺"),
    ("game", "🎮"),
    ("entertainment", "🎬"),
    ("music", "🎵"),
    ("art", "🎨"),
    ("design", "🎨"),
    ("fashion", "👗"),
    ("beauty", "💄"),
    ("retail", "🛍️"),
    ("shop", "🛍️"),
    ("store", "🏪"),
    ("market", "🏪"),
    ("travel", "✈️"),
    ("tourism", "✈️"),
    ("hotel", "🏨"),
    ("restaurant", "🍽️"),
    ("logistics", "📦"),
    ("shipping", "🚛"),
    ("transport", "🚛"),
    ("delivery", "📦"),
    ("warehouse", "🏭"),
    ("factory", "🏭"),
    ("manufacturing", "🏭"),
    ("production", "🏭"),
    ("tool", "🔧"),
    ("equipment", "⚙️"),
    ("machine", "⚙️"),
    ("engine", "⚙️"),
];

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTER_GLYPHS: [&str; 26] = [
    "🅰️", "🅱️", "©️", "🔷", "📧", "🔥", "🟢", "🏨", "ℹ️", "🃏", "🔑", "🔗", "Ⓜ️", "🆕", "⭕",
    "🅿️", "🔍", "♻️", "💲", "🔝", "🔄", "✅", "〰️", "❌", "💛", "⚡",
];

const PLACEHOLDER_MARKERS: &[&str] = &[
    "via.placeholder.com",
    "placeholder",
    "example.com",
    "lorem",
    "ipsum",
    "temp",
    "test",
];

/// Picks an emoji to show in place of a company logo.
///
/// Lookup order: the first industry with an exact table entry, then the
/// first tag with one, then the first keyword found in the lowercased name,
/// then a glyph for the name's first ASCII letter, then 🏢.
#[must_use]
pub fn placeholder_glyph(company: &Company) -> &'static str {
    let exact = |label: &String| {
        INDUSTRY_GLYPHS
            .iter()
            .find(|(key, _)| *key == label.as_str())
            .map(|(_, glyph)| *glyph)
    };
    if let Some(glyph) = company.industry.iter().find_map(exact) {
        return glyph;
    }
    if let Some(glyph) = company.tags.iter().find_map(exact) {
        return glyph;
    }

    let lower = company.name.to_lowercase();
    if let Some((_, glyph)) = NAME_GLYPHS.iter().find(|(k, _)| lower.contains(k)) {
        return *glyph;
    }

    company
        .name
        .chars()
        .next()
        .and_then(|c| ALPHABET.find(c.to_ascii_uppercase()))
        .map_or(FALLBACK, |i| LETTER_GLYPHS[i])
}

/// Returns `false` for empty logo URLs and URLs that look like placeholders.
#[must_use]
pub fn is_valid_logo_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    !PLACEHOLDER_MARKERS.iter().any(|m| lower.contains(m))
}
