use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::config::{ScoringConfig, TierScores};

/// Score for a role missing from the role table
pub const UNKNOWN_ROLE_SCORE: u32 = 20;

/// Score for a company size label missing from the size table
pub const UNKNOWN_COMPANY_SIZE_SCORE: u32 = 20;

/// Outcome of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Key was present in the table
    Matched(u32),
    /// Key was absent; carries the caller's default
    Fallback(u32),
}

impl Lookup {
    pub fn score(self) -> u32 {
        match self {
            Lookup::Matched(score) | Lookup::Fallback(score) => score,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// Look up `key` in `table`, returning `default` when it is absent.
pub fn lookup(table: &HashMap<String, u32>, key: &str, default: u32) -> Lookup {
    match table.get(key) {
        Some(score) => Lookup::Matched(*score),
        None => Lookup::Fallback(default),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryTier {
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    Other,
}

impl std::fmt::Display for CountryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryTier::Tier1 => write!(f, "tier_1"),
            CountryTier::Tier2 => write!(f, "tier_2"),
            CountryTier::Other => write!(f, "other"),
        }
    }
}

/// Immutable lookup tables built once from a [`ScoringConfig`].
///
/// Role and country keys are stored lowercased; company size keys are stored
/// exactly as configured since they are canonical bucket labels.
#[derive(Debug, Clone)]
pub struct ScoreTables {
    roles: HashMap<String, u32>,
    company_sizes: HashMap<String, u32>,
    tier_1: HashSet<String>,
    tier_2: HashSet<String>,
    tier_scores: TierScores,
}

impl ScoreTables {
    pub fn from_config(config: &ScoringConfig) -> Self {
        let roles = config
            .effective_roles()
            .into_iter()
            .map(|(role, score)| (role.to_lowercase(), score))
            .collect();
        let company_sizes = config.effective_company_sizes().into_iter().collect();
        let countries = config.effective_countries();

        Self {
            roles,
            company_sizes,
            tier_1: countries.tier_1.iter().map(|c| c.to_lowercase()).collect(),
            tier_2: countries.tier_2.iter().map(|c| c.to_lowercase()).collect(),
            tier_scores: countries.scores,
        }
    }

    pub fn lookup_role(&self, role: &str) -> Lookup {
        lookup(&self.roles, &role.to_lowercase(), UNKNOWN_ROLE_SCORE)
    }

    pub fn lookup_company_size(&self, size: &str) -> Lookup {
        lookup(&self.company_sizes, size, UNKNOWN_COMPANY_SIZE_SCORE)
    }

    /// Role score, case-insensitive. Unknown roles score 20.
    pub fn role_score(&self, role: &str) -> u32 {
        self.lookup_role(role).score()
    }

    /// Company size score, exact match. Unknown labels score 20.
    pub fn company_size_score(&self, size: &str) -> u32 {
        self.lookup_company_size(size).score()
    }

    /// Tier membership, case-insensitive. tier_1 is checked first.
    pub fn country_tier(&self, country: &str) -> CountryTier {
        let country = country.to_lowercase();
        if self.tier_1.contains(&country) {
            CountryTier::Tier1
        } else if self.tier_2.contains(&country) {
            CountryTier::Tier2
        } else {
            CountryTier::Other
        }
    }

    pub fn tier_score(&self, tier: CountryTier) -> u32 {
        match tier {
            CountryTier::Tier1 => self.tier_scores.tier_1,
            CountryTier::Tier2 => self.tier_scores.tier_2,
            CountryTier::Other => self.tier_scores.other,
        }
    }

    /// Country score: tier_1 100, tier_2 80, anything else 60.
    pub fn country_score(&self, country: &str) -> u32 {
        self.tier_score(self.country_tier(country))
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CountryConfig;
    use indexmap::IndexMap;

    #[test]
    fn test_role_score_case_insensitive() {
        let tables = ScoreTables::default();
        assert_eq!(tables.role_score("CEO"), 100);
        assert_eq!(tables.role_score("ceo"), 100);
        assert_eq!(tables.role_score("Manager"), 80);
        assert_eq!(tables.role_score("intern"), 10);
    }

    #[test]
    fn test_role_score_unknown() {
        let tables = ScoreTables::default();
        assert_eq!(tables.role_score("unknown-role"), 20);
        assert_eq!(tables.role_score(""), 20);
        assert!(tables.lookup_role("astronaut").is_fallback());
        assert!(!tables.lookup_role("CTO").is_fallback());
    }

    #[test]
    fn test_company_size_score_exact() {
        let tables = ScoreTables::default();
        assert_eq!(tables.company_size_score("10000+"), 100);
        assert_eq!(tables.company_size_score("11-50"), 30);
        assert_eq!(tables.company_size_score("1-10"), 20);
    }

    #[test]
    fn test_company_size_score_unknown() {
        let tables = ScoreTables::default();
        assert_eq!(tables.company_size_score("not-a-bucket"), 20);
        assert_eq!(tables.company_size_score(""), 20);
        // No trimming or normalization for bucket labels
        assert_eq!(
            tables.lookup_company_size(" 10000+"),
            Lookup::Fallback(UNKNOWN_COMPANY_SIZE_SCORE)
        );
    }

    #[test]
    fn test_country_score_tiers() {
        let tables = ScoreTables::default();
        assert_eq!(tables.country_score("USA"), 100);
        assert_eq!(tables.country_score("usa"), 100);
        assert_eq!(tables.country_score("Spain"), 80);
        assert_eq!(tables.country_score("Mongolia"), 60);
        assert_eq!(tables.country_score("unknown"), 60);
        assert_eq!(tables.country_score(""), 60);
        assert_eq!(tables.country_tier("GeRmAnY"), CountryTier::Tier1);
    }

    #[test]
    fn test_all_reference_scores_in_range() {
        let config = ScoringConfig::default();
        let tables = ScoreTables::default();
        for role in config.effective_roles().keys() {
            assert!(tables.role_score(role) <= 100);
        }
        for size in config.effective_company_sizes().keys() {
            assert!(tables.company_size_score(size) <= 100);
        }
        for country in ["usa", "india", "chile", ""] {
            assert!(tables.country_score(country) <= 100);
        }
    }

    #[test]
    fn test_custom_tables_lowercased() {
        let mut roles = IndexMap::new();
        roles.insert("VP Sales".to_string(), 95);
        let config = ScoringConfig {
            weights: None,
            roles: Some(roles),
            company_sizes: None,
            countries: Some(CountryConfig {
                tier_1: vec!["Japan".to_string()],
                tier_2: vec![],
                scores: TierScores {
                    tier_1: 90,
                    tier_2: 70,
                    other: 40,
                },
            }),
        };
        let tables = ScoreTables::from_config(&config);
        assert_eq!(tables.role_score("vp sales"), 95);
        // Custom table replaces the reference one
        assert_eq!(tables.role_score("ceo"), UNKNOWN_ROLE_SCORE);
        assert_eq!(tables.country_score("JAPAN"), 90);
        assert_eq!(tables.country_score("usa"), 40);
        // Omitted size table keeps the reference values
        assert_eq!(tables.company_size_score("10000+"), 100);
    }

    #[test]
    fn test_country_tier_display() {
        assert_eq!(CountryTier::Tier1.to_string(), "tier_1");
        assert_eq!(CountryTier::Other.to_string(), "other");
    }
}
