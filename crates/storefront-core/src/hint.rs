//! Request signals used to infer a first-visit country.

use std::cmp::Ordering;

use crate::CountryCode;

/// Locale signals extracted from an incoming request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleHint {
    /// Country reported by the edge location (e.g. a geo header).
    pub geo_country: Option<String>,
    /// Raw `Accept-Language` header value.
    pub accept_language: Option<String>,
}

impl LocaleHint {
    /// Create an empty hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the geo country.
    pub fn with_geo_country(mut self, country: impl Into<String>) -> Self {
        self.geo_country = Some(country.into());
        self
    }

    /// Set the `Accept-Language` header value.
    pub fn with_accept_language(mut self, header: impl Into<String>) -> Self {
        self.accept_language = Some(header.into());
        self
    }

    /// Candidate countries in preference order.
    ///
    /// The geo country comes first, followed by the region subtag of each
    /// `Accept-Language` entry ordered by descending quality. Duplicates and
    /// unparseable values are dropped.
    pub fn candidates(&self) -> Vec<CountryCode> {
        let mut out: Vec<CountryCode> = Vec::new();

        let geo = self
            .geo_country
            .as_deref()
            .and_then(|raw| CountryCode::parse(raw).ok());
        let languages = self
            .accept_language
            .as_deref()
            .map(accept_language_regions)
            .unwrap_or_default();

        for code in geo.into_iter().chain(languages) {
            if !out.contains(&code) {
                out.push(code);
            }
        }
        out
    }
}

/// Extract region subtags from an `Accept-Language` header.
///
/// `da-DK,da;q=0.9,en-US;q=0.8` yields `["dk", "us"]`. Entries with `q=0`
/// are excluded; equal weights keep header order.
pub fn accept_language_regions(header: &str) -> Vec<CountryCode> {
    let mut weighted: Vec<(CountryCode, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            let quality = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .next()
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            if quality <= 0.0 {
                return None;
            }
            region_subtag(tag).map(|code| (code, quality))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    weighted.into_iter().map(|(code, _)| code).collect()
}

/// The first two-letter subtag after the primary language (`zh-Hant-TW` → `tw`).
fn region_subtag(tag: &str) -> Option<CountryCode> {
    tag.split(['-', '_'])
        .skip(1)
        .find(|sub| sub.len() == 2 && sub.bytes().all(|b| b.is_ascii_alphabetic()))
        .and_then(|sub| CountryCode::parse(sub).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[CountryCode]) -> Vec<&str> {
        list.iter().map(CountryCode::as_str).collect()
    }

    #[test]
    fn test_accept_language_orders_by_quality() {
        let regions = accept_language_regions("en-US;q=0.5, da-DK, de-DE;q=0.8");
        assert_eq!(codes(&regions), vec!["dk", "de", "us"]);
    }

    #[test]
    fn test_accept_language_skips_bare_languages() {
        let regions = accept_language_regions("da, en;q=0.9, fr-FR;q=0.1");
        assert_eq!(codes(&regions), vec!["fr"]);
    }

    #[test]
    fn test_accept_language_skips_zero_quality() {
        let regions = accept_language_regions("en-GB;q=0, en-US;q=0.3");
        assert_eq!(codes(&regions), vec!["us"]);
    }

    #[test]
    fn test_accept_language_script_subtag() {
        let regions = accept_language_regions("zh-Hant-TW");
        assert_eq!(codes(&regions), vec!["tw"]);
    }

    #[test]
    fn test_accept_language_wildcard_and_garbage() {
        assert!(accept_language_regions("*").is_empty());
        assert!(accept_language_regions("").is_empty());
        assert!(accept_language_regions(";;,,").is_empty());
    }

    #[test]
    fn test_candidates_geo_first_and_deduplicated() {
        let hint = LocaleHint::new()
            .with_geo_country("DK")
            .with_accept_language("en-US,da-DK;q=0.9");
        assert_eq!(codes(&hint.candidates()), vec!["dk", "us"]);
    }

    #[test]
    fn test_candidates_ignore_invalid_geo() {
        let hint = LocaleHint::new()
            .with_geo_country("XX1")
            .with_accept_language("sv-SE");
        assert_eq!(codes(&hint.candidates()), vec!["se"]);
    }

    #[test]
    fn test_candidates_empty_hint() {
        assert!(LocaleHint::default().candidates().is_empty());
    }
}
