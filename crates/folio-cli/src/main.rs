mod simulate;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::navigation::IntentResolver;
use folio::sitemap::sitemap_xml;
use folio::{Href, LinkOrigin, RouteTable, SiteConfig};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Route table, link resolution and navigation simulator for the Transport Analytics & Insights site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site config (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the document title for a path
    Title {
        path: String,
    },
    /// Resolve a link click
    Resolve {
        /// `/path`, `/path#id` or `#id`
        href: String,
        /// Current pathname
        #[arg(long, default_value = "/")]
        from: String,
        /// Where the link lives
        #[arg(long, value_enum, default_value = "content")]
        origin: Origin,
    },
    /// Replay navigation steps against a headless document and print the
    /// settled state after each one
    Simulate {
        /// URL loaded first
        #[arg(long, default_value = "/")]
        from: String,
        /// `back`, `forward`, `reload`, `scroll=<y>`, `toc=#id` or an href
        steps: Vec<String>,
    },
    /// Write sitemap.xml
    Sitemap {
        /// Overrides the configured hostname
        #[arg(long)]
        hostname: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Origin {
    SiteNav,
    Toc,
    Content,
}

impl From<Origin> for LinkOrigin {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::SiteNav => LinkOrigin::SiteNav,
            Origin::Toc => LinkOrigin::TableOfContents,
            Origin::Content => LinkOrigin::Content,
        }
    }
}

#[derive(Serialize)]
struct RouteRow<'a> {
    path: &'a str,
    page: folio::Page,
    title: String,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SiteConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let routes = RouteTable::default();

    match cli.command {
        Commands::Routes { json } => {
            let rows: Vec<RouteRow> = routes
                .iter()
                .map(|route| RouteRow {
                    path: route.path,
                    page: route.page,
                    title: routes.title(route.path, &config.base_title),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{:<48} {:<22} {}", row.path, format!("{:?}", row.page), row.title);
                }
            }
        }

        Commands::Title { path } => {
            if routes.get(&path).is_none() {
                log::warn!("{path} is not a registered route, using the fallback title");
            }
            println!("{}", routes.title(&path, &config.base_title));
        }

        Commands::Resolve { href, from, origin } => {
            let href = Href::parse(&href)?;
            let outcome = IntentResolver::new(routes).resolve(&href, &from, origin.into());
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Simulate { from, steps } => {
            let snapshots = simulate::run(&config, &from, &steps)?;
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
        }

        Commands::Sitemap { hostname, output } => {
            let hostname = hostname.unwrap_or_else(|| config.hostname.clone());
            let xml = sitemap_xml(&hostname, &routes)?;
            match output {
                Some(path) => {
                    fs::write(&path, xml).with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Sitemap written to: {}", path.display());
                }
                None => println!("{xml}"),
            }
        }
    }

    Ok(())
}
