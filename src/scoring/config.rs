use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Defines the lookup tables and weights used to score contacts. Every field is
/// optional; an omitted field falls back to the reference value from
/// [`ScoringConfig::default`]. A supplied table replaces the reference table
/// entirely rather than merging into it.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights: { role: 0.5, company_size: 0.3, country: 0.2 }
///   roles:
///     ceo: 100
///     intern: 10
///   company_sizes:
///     "10000+": 100
///     "1-10": 20
///   countries:
///     tier_1: [usa, uk]
///     tier_2: [spain]
///     scores: { tier_1: 100, tier_2: 80, other: 60 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of each component in the final score
    #[serde(default)]
    pub weights: Option<Weights>,

    /// Role -> score. Keys are matched case-insensitively.
    #[serde(default)]
    pub roles: Option<IndexMap<String, u32>>,

    /// Company size bucket label -> score. Keys are matched exactly.
    #[serde(default)]
    pub company_sizes: Option<IndexMap<String, u32>>,

    /// Country tier membership and tier scores
    #[serde(default)]
    pub countries: Option<CountryConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Some(Weights::default()),
            roles: Some(default_roles()),
            company_sizes: Some(default_company_sizes()),
            countries: Some(CountryConfig::default()),
        }
    }
}

impl ScoringConfig {
    /// Weights in effect, falling back to the reference weights.
    pub fn effective_weights(&self) -> Weights {
        self.weights.unwrap_or_default()
    }

    /// Role table in effect, falling back to the reference table.
    pub fn effective_roles(&self) -> IndexMap<String, u32> {
        self.roles.clone().unwrap_or_else(default_roles)
    }

    /// Company size table in effect, falling back to the reference table.
    pub fn effective_company_sizes(&self) -> IndexMap<String, u32> {
        self.company_sizes
            .clone()
            .unwrap_or_else(default_company_sizes)
    }

    /// Country tiers in effect, falling back to the reference tiers.
    pub fn effective_countries(&self) -> CountryConfig {
        self.countries.clone().unwrap_or_default()
    }
}

/// Component weights.
///
/// The reference weights sum to 1.0 so that final scores stay on the same
/// 0-100 scale as the component scores. The sum is not enforced.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub role: f64,
    pub company_size: f64,
    pub country: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            role: 0.5,
            company_size: 0.3,
            country: 0.2,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.role + self.company_size + self.country
    }
}

/// Country tier configuration.
///
/// Membership decides the tier; any country listed in neither tier scores as
/// `other`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CountryConfig {
    #[serde(default)]
    pub tier_1: Vec<String>,

    #[serde(default)]
    pub tier_2: Vec<String>,

    #[serde(default)]
    pub scores: TierScores,
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self {
            tier_1: to_strings(&["usa", "uk", "germany", "france", "canada", "australia"]),
            tier_2: to_strings(&["spain", "italy", "brazil", "india"]),
            scores: TierScores::default(),
        }
    }
}

/// Score per country tier
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierScores {
    pub tier_1: u32,
    pub tier_2: u32,
    pub other: u32,
}

impl Default for TierScores {
    fn default() -> Self {
        Self {
            tier_1: 100,
            tier_2: 80,
            other: 60,
        }
    }
}

fn default_roles() -> IndexMap<String, u32> {
    to_table(&[
        ("ceo", 100),
        ("cfo", 90),
        ("cto", 90),
        ("manager", 80),
        ("consultant", 70),
        ("engineer", 60),
        ("developer", 50),
        ("analyst", 40),
        ("designer", 30),
        ("intern", 10),
    ])
}

fn default_company_sizes() -> IndexMap<String, u32> {
    to_table(&[
        ("10000+", 100),
        ("5001-10000", 90),
        ("1001-5000", 80),
        ("501-1000", 70),
        ("201-500", 60),
        ("51-200", 50),
        ("11-50", 30),
        ("1-10", 20),
    ])
}

fn to_table(entries: &[(&str, u32)]) -> IndexMap<String, u32> {
    entries
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
