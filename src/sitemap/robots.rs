//! robots.txt policy.

use std::fmt::Write;

use serde::Serialize;

use crate::config::RoutingConfig;

/// Allow/disallow lists for one user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// Crawler policy plus the sitemap reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
}

impl RobotsPolicy {
    /// Allow everything except the reserved API and framework trees.
    pub fn for_site(base_url: &str, routing: &RoutingConfig) -> Self {
        Self {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: vec![
                    directory(&routing.api_prefix),
                    directory(&routing.framework_prefix),
                ],
            }],
            sitemap: format!("{}/sitemap.xml", base_url.trim_end_matches('/')),
        }
    }

    /// Render in robots.txt format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let _ = writeln!(out, "User-agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {}", path);
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {}", path);
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

fn directory(prefix: &str) -> String {
    if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}
