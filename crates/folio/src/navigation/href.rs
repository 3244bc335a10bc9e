use std::fmt;
use std::str::FromStr;

use crate::error::{FolioError, Result};

/// An in-app link target: `/path`, `/path#id` or `#id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href {
    path: Option<String>,
    fragment: Option<String>,
}

impl Href {
    pub fn parse(href: &str) -> Result<Self> {
        let invalid = |reason| FolioError::InvalidHref {
            href: href.to_string(),
            reason,
        };
        if href.is_empty() {
            return Err(invalid("empty"));
        }
        if let Some(fragment) = href.strip_prefix('#') {
            if fragment.is_empty() {
                return Err(invalid("empty fragment"));
            }
            return Ok(Self::fragment(fragment));
        }
        if href.starts_with("//") {
            return Err(invalid("protocol-relative url"));
        }
        if !href.starts_with('/') {
            return Err(invalid("not an in-app path"));
        }
        let (path, fragment) = match href.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment).filter(|f| !f.is_empty())),
            None => (href, None),
        };
        Ok(Self {
            path: Some(path.to_string()),
            fragment: fragment.map(str::to_string),
        })
    }

    pub fn route(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            fragment: None,
        }
    }

    pub fn fragment(id: impl Into<String>) -> Self {
        Self {
            path: None,
            fragment: Some(id.into()),
        }
    }

    /// A route plus a target section, like the "Back to Projects" links.
    pub fn section_on(path: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            fragment: Some(id.into()),
        }
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn target_id(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl FromStr for Href {
    type Err = FolioError;

    fn from_str(href: &str) -> Result<Self> {
        Self::parse(href)
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            f.write_str(path)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_app_forms() {
        let href = Href::parse("/projects/brisbane_connectivity").unwrap();
        assert_eq!(href.path(), Some("/projects/brisbane_connectivity"));
        assert_eq!(href.target_id(), None);

        let href = Href::parse("#contact").unwrap();
        assert_eq!(href.path(), None);
        assert_eq!(href.target_id(), Some("contact"));

        let href = Href::parse("/#projects").unwrap();
        assert_eq!(href.path(), Some("/"));
        assert_eq!(href.target_id(), Some("projects"));
        assert_eq!(href.to_string(), "/#projects");
    }

    #[test]
    fn trailing_hash_has_no_target() {
        let href = Href::parse("/publications#").unwrap();
        assert_eq!(href.target_id(), None);
        assert_eq!(href.to_string(), "/publications");
    }

    #[test]
    fn rejects_external_and_relative() {
        for bad in ["", "#", "https://doi.org/10.1177", "//cdn.example", "projects", "mailto:x@y"] {
            assert!(
                matches!(Href::parse(bad), Err(FolioError::InvalidHref { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
