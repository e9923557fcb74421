use serde::Serialize;

use crate::contact::{normalize, ContactRecord, NormalizedContact};
use crate::scoring::{ScoreResult, Scorer};

/// A contact with its derived scores. Only lives for the duration of ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredContact {
    /// Zero-based row index in the input
    pub position: usize,
    pub record: ContactRecord,
    pub normalized: NormalizedContact,
    pub result: ScoreResult,
}

/// Normalize and score every record, keeping input order.
pub fn score_contacts(records: Vec<ContactRecord>, scorer: &Scorer) -> Vec<ScoredContact> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let normalized = normalize(&record);
            let result = scorer.score(&normalized);
            if !result.unrecognized.is_empty() {
                log::debug!(
                    "Row {}: default score used for {}",
                    position + 1,
                    result
                        .unrecognized
                        .iter()
                        .map(|a| format!("{} '{}'", a, normalized.value(*a)))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            ScoredContact {
                position,
                record,
                normalized,
                result,
            }
        })
        .collect()
}

/// Score and sort contacts by final score, highest first.
///
/// The sort is stable: contacts with equal scores keep their input order.
pub fn rank_scored(records: Vec<ContactRecord>, scorer: &Scorer) -> Vec<ScoredContact> {
    let mut scored = score_contacts(records, scorer);
    scored.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
    scored
}

/// Drop the derived scores, keeping the ranked order.
pub fn strip_scores(ranked: Vec<ScoredContact>) -> Vec<ContactRecord> {
    ranked.into_iter().map(|scored| scored.record).collect()
}

/// Rank contacts and drop every derived score.
///
/// The returned records are the input records, reordered.
pub fn rank(records: Vec<ContactRecord>, scorer: &Scorer) -> Vec<ContactRecord> {
    strip_scores(rank_scored(records, scorer))
}
