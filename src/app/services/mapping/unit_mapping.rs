//! Hilltop parameter name to FITS type code lookups

use serde::Deserialize;
use std::collections::HashMap;

use crate::constants::DEFAULT_UNIT_MAPPINGS;

/// Parameter mapping table
///
/// [`UnitMapping::default`] yields the built-in Hilltop table. The table is
/// an ordinary value so runs and tests can substitute their own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UnitMapping {
    units: HashMap<String, String>,
}

impl Default for UnitMapping {
    fn default() -> Self {
        DEFAULT_UNIT_MAPPINGS.iter().copied().collect()
    }
}

impl UnitMapping {
    /// Create an empty table with no known parameters
    pub fn empty() -> Self {
        Self {
            units: HashMap::new(),
        }
    }

    /// Return the table with an extra or replaced entry
    pub fn with_entry(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.units.insert(name.into(), code.into());
        self
    }

    /// Look up the FITS type code for a Hilltop parameter name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.units.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for UnitMapping {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        Self {
            units: iter
                .into_iter()
                .map(|(n, c)| (n.into(), c.into()))
                .collect(),
        }
    }
}
