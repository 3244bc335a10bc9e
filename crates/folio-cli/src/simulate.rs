//! `folio simulate`: drive a headless session through a list of steps.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use folio::platform::headless::HeadlessSession;
use folio::{LinkOrigin, ScrollDecision, SiteConfig};
use serde::Serialize;

/// Viewport height used for simulated sessions.
pub const VIEWPORT_HEIGHT: f64 = 900.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Back,
    Forward,
    Reload,
    /// User scroll to an absolute offset.
    Scroll(f64),
    Click { href: String, origin: LinkOrigin },
}

impl FromStr for Step {
    type Err = anyhow::Error;

    /// `back`, `forward`, `reload`, `scroll=<y>`, `toc=#id`, or an href. Bare
    /// `#id` hrefs are header links; path hrefs are in-body links.
    fn from_str(step: &str) -> Result<Self> {
        Ok(match step {
            "back" => Step::Back,
            "forward" => Step::Forward,
            "reload" => Step::Reload,
            _ => {
                if let Some(offset) = step.strip_prefix("scroll=") {
                    let offset = offset
                        .parse()
                        .with_context(|| format!("invalid scroll offset in '{step}'"))?;
                    Step::Scroll(offset)
                } else if let Some(href) = step.strip_prefix("toc=") {
                    Step::Click {
                        href: href.to_string(),
                        origin: LinkOrigin::TableOfContents,
                    }
                } else if step.starts_with('#') {
                    Step::Click {
                        href: step.to_string(),
                        origin: LinkOrigin::SiteNav,
                    }
                } else if step.starts_with('/') {
                    Step::Click {
                        href: step.to_string(),
                        origin: LinkOrigin::Content,
                    }
                } else {
                    bail!("unknown step '{step}'");
                }
            }
        })
    }
}

/// Observable state after a step has settled.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub step: String,
    pub location: String,
    pub title: String,
    pub scroll_y: f64,
    pub decision: Option<ScrollDecision>,
    pub scrolled_after_settle: usize,
    pub active_section: Option<String>,
    pub history_index: usize,
}

fn snapshot(session: &HeadlessSession, step: &str, scrolled_after_settle: usize) -> Snapshot {
    Snapshot {
        step: step.to_string(),
        location: session.history().current().path_and_hash(),
        title: session.document().title().to_string(),
        scroll_y: session.document().scroll_position().1,
        decision: session.navigator().last_decision().cloned(),
        scrolled_after_settle,
        active_section: session.active_section().map(str::to_string),
        history_index: session.history().index(),
    }
}

pub fn run(config: &SiteConfig, from: &str, steps: &[String]) -> Result<Vec<Snapshot>> {
    let parsed = steps
        .iter()
        .map(|step| step.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut session = HeadlessSession::open(config, from, VIEWPORT_HEIGHT);
    let scrolled = session.settle();
    let mut snapshots = vec![snapshot(&session, &format!("open {from}"), scrolled)];

    for (raw, step) in steps.iter().zip(parsed) {
        match step {
            Step::Back => {
                if !session.back() {
                    log::warn!("back: already at the first entry");
                }
            }
            Step::Forward => {
                if !session.forward() {
                    log::warn!("forward: already at the last entry");
                }
            }
            Step::Reload => session.reload(),
            Step::Scroll(offset) => session.scroll_to(offset),
            Step::Click { href, origin } => {
                session
                    .click(&href, origin)
                    .with_context(|| format!("step '{raw}'"))?;
            }
        }
        let scrolled = session.settle();
        snapshots.push(snapshot(&session, raw, scrolled));
    }
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        assert_eq!("back".parse::<Step>().unwrap(), Step::Back);
        assert_eq!("scroll=1200".parse::<Step>().unwrap(), Step::Scroll(1200.0));
        assert_eq!(
            "toc=#notes".parse::<Step>().unwrap(),
            Step::Click {
                href: "#notes".into(),
                origin: LinkOrigin::TableOfContents,
            }
        );
        assert_eq!(
            "#about".parse::<Step>().unwrap(),
            Step::Click {
                href: "#about".into(),
                origin: LinkOrigin::SiteNav,
            }
        );
        assert_eq!("reload".parse::<Step>().unwrap(), Step::Reload);
        assert!("sideways".parse::<Step>().is_err());
        assert!("scroll=far".parse::<Step>().is_err());
    }

    #[test]
    fn back_to_projects_run() {
        let steps = vec!["/#projects".to_string(), "back".to_string()];
        let snapshots = run(&SiteConfig::default(), "/projects/brisbane_connectivity", &steps).unwrap();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1].location, "/");
        assert_eq!(snapshots[1].scrolled_after_settle, 1);
        assert_eq!(snapshots[2].decision, Some(ScrollDecision::DeferToBrowser));
    }

    #[test]
    fn invalid_href_fails_the_run() {
        let steps = vec!["//evil.example".to_string()];
        assert!(run(&SiteConfig::default(), "/", &steps).is_err());
    }
}
