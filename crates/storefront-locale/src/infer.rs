//! First-visit country inference.

use storefront_core::{CountryCode, LocaleHint, StorefrontConfig};

/// Pick the first supported candidate from `hint`, or the configured default.
pub fn infer_country_code(hint: &LocaleHint, config: &StorefrontConfig) -> CountryCode {
    hint.candidates()
        .into_iter()
        .find(|code| config.is_supported(code))
        .unwrap_or_else(|| config.default_country_code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StorefrontConfig {
        StorefrontConfig::new(CountryCode::parse("us").unwrap())
            .with_country(CountryCode::parse("dk").unwrap())
            .with_country(CountryCode::parse("de").unwrap())
    }

    #[test]
    fn test_geo_country_wins() {
        let hint = LocaleHint::new()
            .with_geo_country("DE")
            .with_accept_language("da-DK");
        assert_eq!(infer_country_code(&hint, &config()).as_str(), "de");
    }

    #[test]
    fn test_unsupported_geo_falls_through_to_language() {
        let hint = LocaleHint::new()
            .with_geo_country("FR")
            .with_accept_language("fr-FR, da-DK;q=0.7");
        assert_eq!(infer_country_code(&hint, &config()).as_str(), "dk");
    }

    #[test]
    fn test_nothing_supported_uses_default() {
        let hint = LocaleHint::new()
            .with_geo_country("JP")
            .with_accept_language("ja-JP");
        assert_eq!(infer_country_code(&hint, &config()).as_str(), "us");
    }

    #[test]
    fn test_empty_hint_uses_default() {
        assert_eq!(
            infer_country_code(&LocaleHint::default(), &config()).as_str(),
            "us"
        );
    }
}
