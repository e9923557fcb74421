use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::contact::Attribute;
use crate::ranking::ScoredContact;
use crate::scoring::Weights;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a final score with one decimal place ("23.0", "87.5")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Short label for a contact: the first passthrough column, else its row number.
fn contact_label(scored: &ScoredContact) -> String {
    let scored_columns: Vec<&str> = Attribute::ALL.iter().map(|a| a.column()).collect();
    scored
        .record
        .columns()
        .find(|c| !scored_columns.contains(c))
        .and_then(|c| scored.record.get(c))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("row {}", scored.position + 1))
}

/// Format ranked contacts as a table: Index, Score, Role, Company Size, Country, Contact
/// Index column: 4 chars (fits "999."), right-aligned
/// Score column: 5 chars (fits "100.0"), right-aligned
pub fn format_ranked_table(contacts: &[ScoredContact], use_colors: bool) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let term_width = get_terminal_width();
    let role_width = column_width(contacts, Attribute::Role);
    let size_width = column_width(contacts, Attribute::CompanySize);
    let country_width = column_width(contacts, Attribute::Country);
    let separator = "  ";

    contacts
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>3}.", idx + 1);
            let score_str = format!("{:>5}", format_score(scored.result.score));
            let attributes = format!(
                "{:<rw$}{sep}{:<sw$}{sep}{:<cw$}",
                scored.normalized.role,
                scored.normalized.company_size,
                scored.normalized.country,
                rw = role_width,
                sw = size_width,
                cw = country_width,
                sep = separator,
            );

            let fixed_width = 4 + 1 + 5 + separator.len() * 2 + attributes.chars().count();
            let label = contact_label(scored);
            let label = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&label, width - fixed_width),
                Some(_) => truncate(&label, 20),
                None => label,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    attributes,
                    separator,
                    label.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, attributes, separator, label
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn column_width(contacts: &[ScoredContact], attribute: Attribute) -> usize {
    contacts
        .iter()
        .map(|c| c.normalized.value(attribute).chars().count())
        .max()
        .unwrap_or(0)
}

/// Format one contact's score breakdown over multiple lines (for `explain`)
pub fn format_breakdown(scored: &ScoredContact, weights: &Weights, use_colors: bool) -> String {
    let components = &scored.result.components;
    let rows = [
        (Attribute::Role, components.role, weights.role),
        (Attribute::CompanySize, components.company_size, weights.company_size),
        (Attribute::Country, components.country, weights.country),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header = format!(
        "{} (input row {}): {}",
        contact_label(scored),
        scored.position + 1,
        format_score(scored.result.score)
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for (attribute, score, weight) in rows {
        let mut notes = Vec::new();
        if scored.normalized.defaulted.contains(&attribute) {
            notes.push("missing, defaulted".to_string());
        }
        if attribute == Attribute::Country {
            notes.push(scored.result.country_tier.to_string());
        } else if scored.result.unrecognized.contains(&attribute) {
            notes.push("not in table".to_string());
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };

        let line = format!(
            "  {}: '{}' -> {} x {} = {}{}",
            attribute,
            scored.normalized.value(attribute),
            score,
            weight,
            format_score(score as f64 * weight),
            notes
        );
        lines.push(if use_colors && !notes.is_empty() {
            line.dimmed().to_string()
        } else {
            line
        });
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    #[serde(flatten)]
    contact: &'a ScoredContact,
}

/// Format ranked contacts as a pretty-printed JSON array
pub fn format_json(contacts: &[ScoredContact]) -> Result<String> {
    let entries: Vec<JsonEntry> = contacts
        .iter()
        .enumerate()
        .map(|(idx, contact)| JsonEntry {
            rank: idx + 1,
            contact,
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize ranking as JSON")
}
