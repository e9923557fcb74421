use serde::Serialize;

use super::record::{Attribute, ContactRecord};

/// Cell texts treated as missing values, in addition to the empty string.
///
/// Matches the default null markers of common dataframe CSV readers so that
/// files exported from spreadsheets and notebooks score the same way.
pub const NULL_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "#N/A N/A",
    "#NA", "<NA>", "1.#IND", "1.#QNAN", "-1.#IND", "-1.#QNAN",
];

/// Whether a cell counts as missing. Whitespace-only cells are kept as values.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_empty() || NULL_MARKERS.contains(&v),
    }
}

/// The three scored attributes of a contact with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedContact {
    pub role: String,
    pub company_size: String,
    pub country: String,
    /// Attributes that were missing and received their default
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted: Vec<Attribute>,
}

impl NormalizedContact {
    pub fn value(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Role => &self.role,
            Attribute::CompanySize => &self.company_size,
            Attribute::Country => &self.country,
        }
    }
}

/// Extract the scored attributes of `record`, substituting defaults for
/// missing values. The record itself is left untouched.
pub fn normalize(record: &ContactRecord) -> NormalizedContact {
    let mut defaulted = Vec::new();
    let mut resolve = |attribute: Attribute| {
        let value = record.attribute(attribute);
        if is_missing(value) {
            defaulted.push(attribute);
            attribute.default_value().to_string()
        } else {
            value.unwrap_or_default().to_string()
        }
    };

    let role = resolve(Attribute::Role);
    let company_size = resolve(Attribute::CompanySize);
    let country = resolve(Attribute::Country);

    NormalizedContact {
        role,
        company_size,
        country,
        defaulted,
    }
}
