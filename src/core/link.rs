use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

/// A Bible repository reference in `org/repo[/ref]` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BibleLink {
    pub org: String,
    pub repo: String,
    pub reference: String,
}

impl BibleLink {
    pub fn new(org: &str, repo: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            reference: "master".to_string(),
        }
    }
}

impl FromStr for BibleLink {
    type Err = anyhow::Error;

    fn from_str(link: &str) -> Result<Self> {
        let mut parts = link.trim().split('/');
        let org = parts.next().unwrap_or_default();
        let repo = parts.next().unwrap_or_default();
        let reference = parts.next().filter(|r| !r.is_empty()).unwrap_or("master");
        if org.is_empty() || repo.is_empty() || parts.next().is_some() {
            bail!("Invalid Bible link: {link} (expected org/repo[/ref])");
        }
        Ok(Self {
            org: org.to_string(),
            repo: repo.to_string(),
            reference: reference.to_string(),
        })
    }
}

impl fmt::Display for BibleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.org, self.repo, self.reference)
    }
}
