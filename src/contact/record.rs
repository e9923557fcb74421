use anyhow::{bail, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// A scored attribute of a contact and the column it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Role,
    CompanySize,
    Country,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Role, Attribute::CompanySize, Attribute::Country];

    /// Column header in the contact file
    pub fn column(self) -> &'static str {
        match self {
            Attribute::Role => "Role",
            Attribute::CompanySize => "Company Size",
            Attribute::Country => "Country",
        }
    }

    /// Value substituted when the cell is missing
    pub fn default_value(self) -> &'static str {
        match self {
            Attribute::Role => "unknown",
            Attribute::CompanySize => "1-10",
            Attribute::Country => "unknown",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One row of the contact file, keyed by column name in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactRecord {
    fields: IndexMap<String, String>,
}

impl ContactRecord {
    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        self.get(attribute.column())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Header row plus the records read from one contact file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactTable {
    pub headers: Vec<String>,
    pub records: Vec<ContactRecord>,
}

impl ContactTable {
    pub fn new(headers: Vec<String>, records: Vec<ContactRecord>) -> Self {
        Self { headers, records }
    }

    /// Verify that every scored column is present and column names are unique.
    ///
    /// Missing *values* are handled by normalization; missing *columns* are not.
    pub fn check_schema(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = self
            .headers
            .iter()
            .filter(|h| !seen.insert(h.as_str()))
            .map(String::as_str)
            .collect();
        if !duplicates.is_empty() {
            bail!("Duplicate column names: {}", duplicates.join(", "));
        }

        let missing: Vec<&str> = Attribute::ALL
            .iter()
            .map(|a| a.column())
            .filter(|column| !seen.contains(column))
            .collect();
        if !missing.is_empty() {
            bail!(
                "Missing required columns: {} (found: {})",
                missing.join(", "),
                self.headers.join(", ")
            );
        }

        Ok(())
    }

    /// Values of `record` in header order. Absent columns are written empty.
    pub fn row_values<'a>(&'a self, record: &'a ContactRecord) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(|h| record.get(h).unwrap_or(""))
            .collect()
    }
}
