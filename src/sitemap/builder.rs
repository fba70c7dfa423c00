//! Sitemap enumeration.
//!
//! Every configured locale is paired with every static route, then the fixed
//! in-page anchor sections are appended for the default locale.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::i18n::{Locale, LocaleSet};
use crate::sitemap::entry::{ChangeFrequency, SitemapEntry};

/// Priority of the home route (`""`).
pub const HOME_PRIORITY: f32 = 1.0;
/// Priority of every other route.
pub const ROUTE_PRIORITY: f32 = 0.8;
/// Priority of anchor-section entries.
pub const SECTION_PRIORITY: f32 = 0.5;

/// Builds sitemap entries from the static site description.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    base_url: String,
    routes: Vec<String>,
    sections: Vec<String>,
}

impl SitemapBuilder {
    pub fn new(base_url: &str, routes: Vec<String>, sections: Vec<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            routes,
            sections,
        }
    }

    pub fn from_config(site: &SiteConfig) -> Self {
        Self::new(&site.base_url, site.routes.clone(), site.sections.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Enumerate `locales × routes` followed by the anchor sections.
    pub fn build(&self, locales: &LocaleSet, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
        let mut entries = Vec::with_capacity(locales.len() * self.routes.len() + self.sections.len());

        for locale in locales.iter() {
            for route in &self.routes {
                let (priority, change_frequency) = if route.is_empty() {
                    (HOME_PRIORITY, ChangeFrequency::Daily)
                } else {
                    (ROUTE_PRIORITY, ChangeFrequency::Weekly)
                };

                entries.push(SitemapEntry {
                    url: self.localized_url(locale, route),
                    last_modified,
                    change_frequency,
                    priority,
                    alternates: Some(self.alternates(locales, route)),
                });
            }
        }

        let default = locales.default_locale();
        for section in &self.sections {
            entries.push(SitemapEntry {
                url: format!("{}#{}", self.localized_url(default, ""), section),
                last_modified,
                change_frequency: ChangeFrequency::Weekly,
                priority: SECTION_PRIORITY,
                alternates: None,
            });
        }

        tracing::debug!(entries = entries.len(), "Sitemap built");
        entries
    }

    fn localized_url(&self, locale: &Locale, route: &str) -> String {
        format!("{}/{}{}", self.base_url, locale.code(), route)
    }

    fn alternates(&self, locales: &LocaleSet, route: &str) -> BTreeMap<String, String> {
        locales
            .iter()
            .map(|l| (l.code().to_string(), self.localized_url(l, route)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn builder() -> SitemapBuilder {
        SitemapBuilder::new(
            "https://donuts.example/",
            vec!["".into(), "/menu".into()],
            vec!["about".into(), "menu".into(), "location".into()],
        )
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_entry_count_is_locales_times_routes_plus_sections() {
        let locales = LocaleSet::default();
        let entries = builder().build(&locales, timestamp());
        assert_eq!(entries.len(), 5 * 2 + 3);

        let routed = entries.iter().filter(|e| e.alternates.is_some()).count();
        assert_eq!(routed, 10);
    }

    #[test]
    fn test_urls_and_priorities() {
        let entries = builder().build(&LocaleSet::default(), timestamp());

        for entry in &entries {
            assert!(!entry.url.is_empty());
            assert!((0.0..=1.0).contains(&entry.priority));
            assert_eq!(entry.last_modified, timestamp());
        }

        let home = entries.iter().find(|e| e.url == "https://donuts.example/ja").unwrap();
        assert_eq!(home.priority, HOME_PRIORITY);
        assert_eq!(home.change_frequency, ChangeFrequency::Daily);

        let menu = entries.iter().find(|e| e.url == "https://donuts.example/ja/menu").unwrap();
        assert_eq!(menu.change_frequency, ChangeFrequency::Weekly);
        assert!(menu.priority < home.priority);
    }

    #[test]
    fn test_home_outranks_every_other_route() {
        let entries = builder().build(&LocaleSet::default(), timestamp());
        let (home, rest): (Vec<_>, Vec<_>) = entries
            .iter()
            .filter(|e| e.alternates.is_some())
            .partition(|e| e.change_frequency == ChangeFrequency::Daily);

        assert_eq!(home.len(), 5);
        let min_home = home.iter().map(|e| e.priority).fold(f32::MAX, f32::min);
        assert!(rest.iter().all(|e| e.priority < min_home));
        assert!(rest.iter().all(|e| e.change_frequency == ChangeFrequency::Weekly));
    }

    #[test]
    fn test_alternates_cover_every_locale() {
        let entries = builder().build(&LocaleSet::default(), timestamp());
        let menu = entries.iter().find(|e| e.url == "https://donuts.example/ko/menu").unwrap();
        let alternates = menu.alternates.as_ref().unwrap();

        assert_eq!(alternates.len(), 5);
        assert_eq!(alternates["es"], "https://donuts.example/es/menu");
        assert_eq!(alternates["ko"], menu.url);
    }

    #[test]
    fn test_sections_use_default_locale_anchor() {
        let locales = LocaleSet::new(&["en", "ja"], "ja").unwrap();
        let entries = builder().build(&locales, timestamp());
        let sections: Vec<_> = entries.iter().filter(|e| e.alternates.is_none()).collect();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].url, "https://donuts.example/ja#about");
        assert!(sections.iter().all(|e| e.priority == SECTION_PRIORITY));
    }

    #[test]
    fn test_json_record_shape() {
        let locales = LocaleSet::new(&["en", "ja"], "en").unwrap();
        let entries = builder().build(&locales, timestamp());

        let home = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(
            home,
            serde_json::json!({
                "url": "https://donuts.example/en",
                "lastModified": "2024-05-01T09:00:00Z",
                "changeFrequency": "daily",
                "priority": 1.0,
                "alternates": {
                    "en": "https://donuts.example/en",
                    "ja": "https://donuts.example/ja",
                },
            })
        );

        let section = serde_json::to_value(entries.last().unwrap()).unwrap();
        assert_eq!(section["changeFrequency"], "weekly");
        assert_eq!(section["priority"], 0.5);
        assert!(section.get("alternates").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(builder().base_url(), "https://donuts.example");
    }
}
