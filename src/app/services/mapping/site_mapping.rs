//! Source site name to FITS site id lookups

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Site mapping table supplied by configuration
///
/// An empty table is valid; every measurement is then skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SiteMapping {
    sites: HashMap<String, String>,
}

impl SiteMapping {
    /// Create an empty site mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the FITS site id for a source site name
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sites.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.sites.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Merge another table over this one; entries in `other` win
    pub fn merge(&mut self, other: SiteMapping) {
        self.sites.extend(other.sites);
    }
}

impl FromIterator<SiteEntry> for SiteMapping {
    fn from_iter<I: IntoIterator<Item = SiteEntry>>(iter: I) -> Self {
        Self {
            sites: iter.into_iter().map(|e| (e.label, e.code)).collect(),
        }
    }
}

impl<L: Into<String>, C: Into<String>> FromIterator<(L, C)> for SiteMapping {
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        Self {
            sites: iter
                .into_iter()
                .map(|(l, c)| (l.into(), c.into()))
                .collect(),
        }
    }
}

impl fmt::Display for SiteMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.sites.iter().collect();
        entries.sort();
        write!(f, "{:?}", entries)
    }
}

/// One `label=code` site conversion as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    pub label: String,
    pub code: String,
}

impl FromStr for SiteEntry {
    type Err = Error;

    /// Split on the first `=`; the code may itself contain `=`
    fn from_str(arg: &str) -> Result<Self> {
        let (label, code) = arg.split_once('=').ok_or_else(|| {
            Error::configuration(format!(
                "invalid site \"{}\": expecting <string>=<string>",
                arg
            ))
        })?;

        Ok(Self {
            label: label.to_string(),
            code: code.to_string(),
        })
    }
}
