// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use crate::company::Company;

/// Narrows a company list by industry, campus and tag.
///
/// Every criterion is optional; an empty filter matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Keep companies listing at least one of these industries.
    pub industries: Vec<String>,
    /// Keep companies whose campus equals this, ignoring case.
    pub location: Option<String>,
    /// Keep companies carrying every one of these tags, across industries
    /// and modifiers.
    pub tags: Vec<String>,
}

impl CompanyFilter {
    /// Returns `true` if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.location.is_none() && self.tags.is_empty()
    }

    /// Returns `true` if `company` passes every criterion.
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        let industry_ok = self.industries.is_empty()
            || self
                .industries
                .iter()
                .any(|wanted| company.industry.contains(wanted));
        let location_ok = match &self.location {
            None => true,
            Some(wanted) => company
                .campus
                .as_deref()
                .is_some_and(|campus| campus.eq_ignore_ascii_case(wanted)),
        };
        let tags_ok = self
            .tags
            .iter()
            .all(|wanted| company.all_tags().any(|tag| tag == wanted.as_str()));
        industry_ok && location_ok && tags_ok
    }

    /// Returns the matching companies, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies.iter().filter(|c| self.matches(c)).collect()
    }

    /// Adds `tag` if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }
}

/// Sorted, de-duplicated industries across `companies`.
pub fn all_industries<'a>(companies: impl IntoIterator<Item = &'a Company>) -> Vec<String> {
    companies
        .into_iter()
        .flat_map(|c| c.industry.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated industries and modifiers across `companies`.
pub fn available_tags<'a>(companies: impl IntoIterator<Item = &'a Company>) -> Vec<String> {
    companies
        .into_iter()
        .flat_map(Company::all_tags)
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Swatch color (`#RRGGBB`) for an industry label, by keyword.
#[must_use]
pub fn industry_color(industry: &str) -> &'static str {
    const TABLE: &[(&[&str], &str)] = &[
        (&["mobility", "transportation", "automotive"], "#90EE90"),
        (&["manufacturing", "production"], "#D3D3D3"),
        (&["materials", "chemical"], "#98FB98"),
        (&["infrastructure", "construction"], "#DDA0DD"),
        (&["agriculture", "farming", "food"], "#F0E68C"),
        (&["built environment", "real estate", "housing"], "#FFDAB9"),
        (&["logistics", "supply chain", "delivery"], "#AFEEEE"),
        (&["energy", "power", "renewable"], "#F0E68C"),
        (
            &["technology", "tech", "software", "ai", "robotics"],
            "#D3D3D3",
        ),
    ];
    let lower = industry.to_lowercase();
    TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or("#E0E0E0", |(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::{CompanyFilter, all_industries, available_tags, industry_color};
    use crate::Company;

    fn company(name: &str, industry: &[&str], modifiers: &[&str], campus: Option<&str>) -> Company {
        let mut c = Company::named(name);
        c.industry = industry.iter().map(|s| (*s).to_owned()).collect();
        c.modifiers = modifiers.iter().map(|s| (*s).to_owned()).collect();
        c.campus = campus.map(str::to_owned);
        c
    }

    fn fixture() -> Vec<Company> {
        vec![
            company("Acme", &["Robotics", "AI"], &["B2B"], Some("Detroit")),
            company("Bolt", &["Energy"], &["Hardware"], Some("Brooklyn")),
            company("Crate", &["Logistics", "AI"], &["B2B", "Hardware"], None),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let list = fixture();
        let filter = CompanyFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&list).len(), 3);
    }

    #[test]
    fn industry_matches_any() {
        let list = fixture();
        let filter = CompanyFilter {
            industries: vec!["Energy".into(), "Logistics".into()],
            ..CompanyFilter::default()
        };
        let names: Vec<&str> = filter.apply(&list).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bolt", "Crate"]);
    }

    #[test]
    fn location_ignores_case_and_requires_campus() {
        let list = fixture();
        let filter = CompanyFilter {
            location: Some("detroit".into()),
            ..CompanyFilter::default()
        };
        let names: Vec<&str> = filter.apply(&list).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Acme"]);
    }

    #[test]
    fn tags_must_all_match() {
        let list = fixture();
        let mut filter = CompanyFilter::default();
        filter.toggle_tag("AI");
        filter.toggle_tag("B2B");
        let names: Vec<&str> = filter.apply(&list).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Acme", "Crate"]);

        filter.toggle_tag("Hardware");
        let names: Vec<&str> = filter.apply(&list).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Crate"]);

        filter.toggle_tag("AI");
        assert_eq!(filter.tags, ["B2B", "Hardware"]);
    }

    #[test]
    fn industries_and_tags_are_sorted_unique() {
        let list = fixture();
        assert_eq!(all_industries(&list), ["AI", "Energy", "Logistics", "Robotics"]);
        assert_eq!(
            available_tags(&list),
            ["AI", "B2B", "Energy", "Hardware", "Logistics", "Robotics"]
        );
    }

    #[test]
    fn industry_colors_by_keyword() {
        assert_eq!(industry_color("Smart Mobility"), "#90EE90");
        assert_eq!(industry_color("Renewable Energy"), "#F0E68C");
        assert_eq!(industry_color("Fintech"), "#D3D3D3");
        assert_eq!(industry_color("Fashion"), "#E0E0E0");
    }
}
