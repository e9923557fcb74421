use super::config::ScoringConfig;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Highest score any table may assign
pub const MAX_SCORE: u32 = 100;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Weights
    if let Some(weights) = config.weights {
        for (name, value) in [
            ("role", weights.role),
            ("company_size", weights.company_size),
            ("country", weights.country),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "scoring.weights.{}: must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
    }

    // Role table (case-insensitive keys)
    if let Some(ref roles) = config.roles {
        check_table("scoring.roles", roles, true, &mut errors);
    }

    // Company size table (exact keys)
    if let Some(ref sizes) = config.company_sizes {
        check_table("scoring.company_sizes", sizes, false, &mut errors);
    }

    // Country tiers
    if let Some(ref countries) = config.countries {
        let tier_1: HashSet<String> = countries.tier_1.iter().map(|c| c.to_lowercase()).collect();
        for (tier, members) in [("tier_1", &countries.tier_1), ("tier_2", &countries.tier_2)] {
            for (i, country) in members.iter().enumerate() {
                if country.is_empty() {
                    errors.push(format!("scoring.countries.{}[{}]: must not be empty", tier, i));
                }
            }
        }
        for (i, country) in countries.tier_2.iter().enumerate() {
            if tier_1.contains(&country.to_lowercase()) {
                errors.push(format!(
                    "scoring.countries.tier_2[{}]: '{}' is already listed in tier_1",
                    i, country
                ));
            }
        }
        for (name, score) in [
            ("tier_1", countries.scores.tier_1),
            ("tier_2", countries.scores.tier_2),
            ("other", countries.scores.other),
        ] {
            if score > MAX_SCORE {
                errors.push(format!(
                    "scoring.countries.scores.{}: {} exceeds {}",
                    name, score, MAX_SCORE
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Warn when the effective weights do not sum to 1.0.
///
/// Not an error: scores still rank correctly, they just leave the 0-100 scale.
pub fn weight_sum_warning(config: &ScoringConfig) -> Option<String> {
    let sum = config.effective_weights().sum();
    if (sum - 1.0).abs() > 1e-9 {
        Some(format!(
            "scoring.weights: weights sum to {} instead of 1.0; final scores are not on a 0-100 scale",
            sum
        ))
    } else {
        None
    }
}

fn check_table(
    path: &str,
    table: &IndexMap<String, u32>,
    case_insensitive: bool,
    errors: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for (key, score) in table {
        if key.is_empty() {
            errors.push(format!("{}: keys must not be empty", path));
        }
        if *score > MAX_SCORE {
            errors.push(format!("{}.{}: {} exceeds {}", path, key, score, MAX_SCORE));
        }
        if case_insensitive && !seen.insert(key.to_lowercase()) {
            errors.push(format!(
                "{}.{}: duplicates another key when compared case-insensitively",
                path, key
            ));
        }
    }
}
