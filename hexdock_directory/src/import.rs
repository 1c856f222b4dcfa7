// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV import for the bundled company sheet.
//!
//! The sheet is exported from a spreadsheet whose column order drifts, so
//! columns are located by case-insensitive substring match on the header row
//! rather than by position. Every header containing `industry` contributes to
//! the company's industry list.

use crate::company::{Company, slugify};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};

const DEFAULT_DESCRIPTION: &str = "No description available";
const DEFAULT_FUNDING: &str = "Not disclosed";
const DEFAULT_WEBSITE: &str = "#";
const DEFAULT_LOCATION: &str = "Detroit, MI";
const EXTRA_TAGS: [&str; 2] = ["Detroit", "Startup"];

#[derive(Debug)]
struct Columns {
    name: usize,
    logo: Option<usize>,
    header_image: Option<usize>,
    qr_code: Option<usize>,
    photo: Option<usize>,
    tagline: Option<usize>,
    description: Option<usize>,
    detroit_story: Option<usize>,
    funding: Option<usize>,
    website: Option<usize>,
    industries: Vec<usize>,
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self> {
        let lowered: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |needle: &str| lowered.iter().position(|h| h.contains(needle));
        Ok(Self {
            name: find("company name").ok_or(DirectoryError::MissingColumn {
                column: "company name",
            })?,
            logo: find("logo url"),
            header_image: find("header image"),
            qr_code: find("qr code"),
            photo: find("photo url"),
            tagline: find("tagline"),
            description: find("description"),
            detroit_story: find("detroit"),
            funding: find("funding"),
            website: find("website"),
            industries: lowered
                .iter()
                .enumerate()
                .filter(|(_, h)| h.contains("industry"))
                .map(|(i, _)| i)
                .collect(),
        })
    }
}

/// Parses the company sheet.
///
/// - Fewer than two lines (no data rows) yields an empty list.
/// - Blank lines, rows with fewer than two fields and rows without a name are
///   skipped.
/// - Empty optional fields fall back to fixed defaults (`"No description
///   available"`, `"Not disclosed"`, `"#"`).
/// - Industry cells that are empty or repeat a sub-header (`Industry`,
///   `Modifiers`) are dropped; at most [`DirectoryConfig::max_industries`]
///   are kept.
/// - The result is truncated to [`DirectoryConfig::csv_limit`] companies.
///
/// # Errors
///
/// Returns [`DirectoryError::MissingColumn`] if no header contains
/// `company name`.
pub fn parse_csv(content: &str, config: &DirectoryConfig) -> Result<Vec<Company>> {
    let mut lines = content.trim().lines();
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let header = split_record(header);
    let mut rows = lines.filter(|l| !l.trim().is_empty()).peekable();
    if rows.peek().is_none() {
        return Ok(Vec::new());
    }
    let columns = Columns::locate(&header)?;

    let mut companies = Vec::new();
    for line in rows {
        if companies.len() >= config.csv_limit {
            break;
        }
        let fields = split_record(line);
        if fields.len() < 2 {
            continue;
        }
        if let Some(company) = company_from_fields(&fields, &columns, config) {
            companies.push(company);
        }
    }
    tracing::debug!(count = companies.len(), "parsed companies from CSV");
    Ok(companies)
}

fn company_from_fields(
    fields: &[String],
    columns: &Columns,
    config: &DirectoryConfig,
) -> Option<Company> {
    let cell = |index: Option<usize>| field(fields, index);
    let or_default = |index: Option<usize>, default: &str| match field(fields, index) {
        "" => default.to_owned(),
        value => value.to_owned(),
    };

    let name = cell(Some(columns.name));
    if name.is_empty() {
        return None;
    }

    let industry: Vec<String> = columns
        .industries
        .iter()
        .map(|&i| cell(Some(i)))
        .filter(|value| !value.is_empty() && *value != "Industry" && *value != "Modifiers")
        .take(config.max_industries)
        .map(str::to_owned)
        .collect();
    let tags = industry
        .iter()
        .cloned()
        .chain(EXTRA_TAGS.iter().map(|t| (*t).to_owned()))
        .collect();
    let images = match cell(columns.photo) {
        "" => Vec::new(),
        photo => vec![photo.to_owned()],
    };

    Some(Company {
        id: slugify(name),
        name: name.to_owned(),
        logo: cell(columns.logo).to_owned(),
        header_image: cell(columns.header_image).to_owned(),
        qr_code: cell(columns.qr_code).to_owned(),
        tagline: cell(columns.tagline).to_owned(),
        description: or_default(columns.description, DEFAULT_DESCRIPTION),
        detroit_story: cell(columns.detroit_story).to_owned(),
        funding: or_default(columns.funding, DEFAULT_FUNDING),
        website: or_default(columns.website, DEFAULT_WEBSITE),
        industry,
        modifiers: Vec::new(),
        tags,
        images,
        location: DEFAULT_LOCATION.to_owned(),
        campus: None,
    })
}

fn field(fields: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| fields.get(i))
        .map_or("", |value| value.trim())
}

/// Splits one CSV record on commas outside double quotes.
///
/// Quote characters toggle quoting and are not kept. A trailing `\r` is
/// ignored.
#[must_use]
pub fn split_record(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
