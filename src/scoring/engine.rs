use serde::Serialize;

use super::config::{ScoringConfig, Weights};
use super::tables::{CountryTier, ScoreTables};
use crate::contact::{Attribute, NormalizedContact};

/// Per-attribute scores, each in [0, 100] for valid configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentScores {
    pub role: u32,
    pub company_size: u32,
    pub country: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub components: ComponentScores,
    pub country_tier: CountryTier,
    /// Attributes whose value was not found in its table and got the default score
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized: Vec<Attribute>,
}

/// Combine component scores with `weights`.
///
/// Evaluated as role, then company size, then country so that equal inputs
/// always produce bit-identical sums.
pub fn weighted_score(components: &ComponentScores, weights: &Weights) -> f64 {
    components.role as f64 * weights.role
        + components.company_size as f64 * weights.company_size
        + components.country as f64 * weights.country
}

/// Scores normalized contacts against fixed tables and weights.
///
/// Built once per run; tables and weights never change afterwards.
#[derive(Debug, Clone)]
pub struct Scorer {
    tables: ScoreTables,
    weights: Weights,
}

impl Scorer {
    pub fn new(tables: ScoreTables, weights: Weights) -> Self {
        Self { tables, weights }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(ScoreTables::from_config(config), config.effective_weights())
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn score(&self, contact: &NormalizedContact) -> ScoreResult {
        let mut unrecognized = Vec::new();

        let role = self.tables.lookup_role(&contact.role);
        if role.is_fallback() {
            unrecognized.push(Attribute::Role);
        }

        let company_size = self.tables.lookup_company_size(&contact.company_size);
        if company_size.is_fallback() {
            unrecognized.push(Attribute::CompanySize);
        }

        let country_tier = self.tables.country_tier(&contact.country);
        if country_tier == CountryTier::Other {
            unrecognized.push(Attribute::Country);
        }

        let components = ComponentScores {
            role: role.score(),
            company_size: company_size.score(),
            country: self.tables.tier_score(country_tier),
        };

        ScoreResult {
            score: weighted_score(&components, &self.weights),
            components,
            country_tier,
            unrecognized,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{normalize, ContactRecord};

    fn contact(role: &str, size: &str, country: &str) -> NormalizedContact {
        normalize(&ContactRecord::from_pairs([
            ("Role", role),
            ("Company Size", size),
            ("Country", country),
        ]))
    }

    #[test]
    fn test_top_contact_scores_100() {
        let result = Scorer::default().score(&contact("ceo", "10000+", "usa"));
        assert_eq!(
            result.components,
            ComponentScores {
                role: 100,
                company_size: 100,
                country: 100
            }
        );
        assert!((result.score - 100.0).abs() < 1e-9);
        assert!(result.unrecognized.is_empty());
    }

    #[test]
    fn test_mixed_contact_scores_23() {
        let result = Scorer::default().score(&contact("intern", "1-10", "unknown"));
        assert_eq!(result.components.role, 10);
        assert_eq!(result.components.company_size, 20);
        assert_eq!(result.components.country, 60);
        assert_eq!(result.country_tier, CountryTier::Other);
        assert!((result.score - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_country_scores_other() {
        let normalized = normalize(&ContactRecord::from_pairs([
            ("Role", "CFO"),
            ("Company Size", "201-500"),
            ("Country", ""),
        ]));
        let result = Scorer::default().score(&normalized);
        assert_eq!(result.components.country, 60);
        // 90*0.5 + 60*0.3 + 60*0.2
        assert!((result.score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_values_use_defaults() {
        let result = Scorer::default().score(&contact("Wizard", "huge", "Atlantis"));
        assert_eq!(result.components.role, 20);
        assert_eq!(result.components.company_size, 20);
        assert_eq!(result.components.country, 60);
        assert_eq!(result.unrecognized, Attribute::ALL.to_vec());
    }

    #[test]
    fn test_custom_weights() {
        let scorer = Scorer::new(
            ScoreTables::default(),
            Weights {
                role: 0.0,
                company_size: 0.0,
                country: 1.0,
            },
        );
        let result = scorer.score(&contact("intern", "1-10", "Spain"));
        assert!((result.score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_score_matches_reference_formula() {
        let components = ComponentScores {
            role: 70,
            company_size: 50,
            country: 80,
        };
        let weights = Weights::default();
        let expected = 70.0 * 0.5 + 50.0 * 0.3 + 80.0 * 0.2;
        assert_eq!(weighted_score(&components, &weights), expected);
    }
}
