use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const RECOMMENDATIONS_MARKER: &str = "Recommendations:";

pub const DEFAULT_RECOMMENDATION: &str =
    "Consider adjusting resource allocation to optimize efficiency.";

pub const FALLBACK_EXPLANATION: &str =
    "The optimization shows a balanced approach to resource allocation.";

/// Newline followed by a list marker such as `2.`, `-` or `*`.
static LIST_ITEM_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*[\d.\-*]+\s*").expect("list break pattern is valid"));

/// Leading marker of the first list item (`1. `, `- `, `* `).
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.|[-*])\s+").expect("leading marker pattern is valid"));

/// A numbered sentence inside free text, e.g. `1. Add a reviewer.`
static NUMBERED_SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*[^.]+\.").expect("numbered sentence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub explanation: String,
    pub recommendations: Vec<String>,
}

/// Splits generated analysis text into an explanation and recommendations.
///
/// Always yields at least one recommendation.
#[must_use]
pub fn parse_narrative(text: &str) -> Narrative {
    let mut parts = text.split(RECOMMENDATIONS_MARKER);
    let head = parts.next().unwrap_or_default();

    let (explanation, mut recommendations) = match parts.next() {
        Some(tail) => (head.trim().to_owned(), split_list_items(tail.trim())),
        None => (
            text.trim().to_owned(),
            NUMBERED_SENTENCE
                .find_iter(text)
                .map(|m| m.as_str().trim().to_owned())
                .collect(),
        ),
    };

    let explanation = if explanation.is_empty() {
        FALLBACK_EXPLANATION.to_owned()
    } else {
        explanation
    };
    if recommendations.is_empty() {
        recommendations.push(DEFAULT_RECOMMENDATION.to_owned());
    }

    Narrative {
        explanation,
        recommendations,
    }
}

fn split_list_items(text: &str) -> Vec<String> {
    LIST_ITEM_BREAK
        .split(text)
        .map(|item| LEADING_MARKER.replace(item.trim(), "").trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
