use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use locale_edge::config::{load_config, SiteEdgeConfig};
use locale_edge::i18n::LocaleSet;
use locale_edge::routing::{LocaleRouter, RoutingDecision, LOCALE_REDIRECT_STATUS};
use locale_edge::sitemap::{render_xml, RobotsPolicy, SitemapBuilder};

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Offline tools for the locale-aware site server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the routing decision for one or more request paths
    Classify {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the sitemap
    Sitemap {
        /// Emit JSON records instead of XML
        #[arg(long)]
        json: bool,
    },
    /// Print robots.txt
    Robots,
    /// Validate the configuration file
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteEdgeConfig::default(),
    };
    let locales = Arc::new(LocaleSet::new(
        &config.locales.supported,
        &config.locales.default,
    )?);

    match cli.command {
        Commands::Classify { paths } => {
            let router = LocaleRouter::new(&config.routing, locales);
            for path in paths {
                println!("{}\t{}", path, describe(&router.decide(&path)));
            }
        }
        Commands::Sitemap { json } => {
            let entries = SitemapBuilder::from_config(&config.site)
                .build(&locales, config.site.last_modified()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", render_xml(&entries));
            }
        }
        Commands::Robots => {
            print!(
                "{}",
                RobotsPolicy::for_site(&config.site.base_url, &config.routing).render()
            );
        }
        Commands::Check => {
            println!(
                "ok: {} locales (default {}), {} routes, {} sections",
                locales.len(),
                locales.default_locale(),
                config.site.routes.len(),
                config.site.sections.len()
            );
        }
    }

    Ok(())
}

fn describe(decision: &RoutingDecision) -> String {
    match decision {
        RoutingDecision::Bypass => "bypass".to_string(),
        RoutingDecision::Delegate => "delegate".to_string(),
        RoutingDecision::RedirectToLocale { location } => {
            format!("redirect {} {}", LOCALE_REDIRECT_STATUS.as_u16(), location)
        }
    }
}
