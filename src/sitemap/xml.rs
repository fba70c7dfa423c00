//! sitemaps.org XML rendering.

use std::fmt::Write;

use chrono::SecondsFormat;

use crate::sitemap::entry::SitemapEntry;

const URLSET_OPEN: &str = concat!(
    r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" "#,
    r#"xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
);

/// Render entries as a `urlset` document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::with_capacity(256 + entries.len() * 512);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(URLSET_OPEN);
    out.push('\n');

    for entry in entries {
        // Writing into a String cannot fail.
        let _ = write_entry(&mut out, entry);
    }

    out.push_str("</urlset>\n");
    out
}

fn write_entry(out: &mut String, entry: &SitemapEntry) -> std::fmt::Result {
    writeln!(out, "  <url>")?;
    writeln!(out, "    <loc>{}</loc>", escape(&entry.url))?;
    if let Some(alternates) = &entry.alternates {
        for (code, href) in alternates {
            writeln!(
                out,
                r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                escape(code),
                escape(href)
            )?;
        }
    }
    writeln!(
        out,
        "    <lastmod>{}</lastmod>",
        entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "    <changefreq>{}</changefreq>", entry.change_frequency.as_str())?;
    writeln!(out, "    <priority>{:.1}</priority>", entry.priority)?;
    writeln!(out, "  </url>")
}

/// Escape the five XML special characters.
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::entry::ChangeFrequency;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn entry(url: &str, alternates: Option<BTreeMap<String, String>>) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            last_modified: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
            alternates,
        }
    }

    #[test]
    fn test_render_single_entry() {
        let xml = render_xml(&[entry("https://donuts.example/en", None)]);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://donuts.example/en</loc>"));
        assert!(xml.contains("<lastmod>2024-05-01T09:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert!(!xml.contains("xhtml:link"));
    }

    #[test]
    fn test_render_alternates() {
        let mut alternates = BTreeMap::new();
        alternates.insert("en".to_string(), "https://donuts.example/en/menu".to_string());
        alternates.insert("ja".to_string(), "https://donuts.example/ja/menu".to_string());
        let xml = render_xml(&[entry("https://donuts.example/en/menu", Some(alternates))]);

        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="ja" href="https://donuts.example/ja/menu"/>"#
        ));
        assert_eq!(xml.matches("<xhtml:link").count(), 2);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a&b<c>\"'"), "a&amp;b&lt;c&gt;&quot;&apos;");
        let xml = render_xml(&[entry("https://donuts.example/en?x=1&y=2", None)]);
        assert!(xml.contains("<loc>https://donuts.example/en?x=1&amp;y=2</loc>"));
    }

    #[test]
    fn test_render_empty() {
        let xml = render_xml(&[]);
        assert!(!xml.contains("<url>"));
        assert!(xml.contains("<urlset"));
    }
}
