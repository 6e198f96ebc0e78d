use serde::{Deserialize, Serialize};
use std::fmt;

/// Source table columns consumed by the batch jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    EnglishWord,
    SpanishWord,
    RelationshipType,
    CulturalDomain,
    FrequencyComplexity,
    OverallComplexity,
    LevenshteinSimilarity,
    FirstAttestationEnglish,
    FirstAttestationSpanish,
}

impl Column {
    /// Columns the impact metrics report reads.
    pub const IMPACT: &'static [Column] = &[
        Column::EnglishWord,
        Column::RelationshipType,
        Column::CulturalDomain,
        Column::FrequencyComplexity,
    ];

    /// Columns the interactive plot reads.
    pub const PLOT: &'static [Column] = &[
        Column::EnglishWord,
        Column::SpanishWord,
        Column::CulturalDomain,
        Column::FirstAttestationEnglish,
        Column::FirstAttestationSpanish,
        Column::LevenshteinSimilarity,
        Column::OverallComplexity,
    ];

    pub const fn header(self) -> &'static str {
        match self {
            Self::EnglishWord => "english_word",
            Self::SpanishWord => "spanish_word",
            Self::RelationshipType => "relationship_type",
            Self::CulturalDomain => "cultural_domain",
            Self::FrequencyComplexity => "complexity_frequency_complexity",
            Self::OverallComplexity => "complexity_overall_complexity",
            Self::LevenshteinSimilarity => "levenshtein_similarity",
            Self::FirstAttestationEnglish => "first_attestation_english",
            Self::FirstAttestationSpanish => "first_attestation_spanish",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Cognates,
    FalseFriends,
    Other(String),
}

impl RelationshipType {
    pub fn from_raw(value: &str) -> Self {
        match value {
            "cognates" => Self::Cognates,
            "false_friends" => Self::FalseFriends,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Cognates => "True Cognates",
            Self::FalseFriends => "False Friends",
            Self::Other(raw) => raw,
        }
    }
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordPair {
    pub english_word: String,
    pub spanish_word: String,
    pub relationship_type: RelationshipType,
    pub cultural_domain: String,
    pub frequency_score: Option<f64>,
    pub overall_complexity: Option<f64>,
    pub levenshtein_similarity: Option<f64>,
    pub first_attestation_english: Option<i32>,
    pub first_attestation_spanish: Option<i32>,
}

impl WordPair {
    pub fn is_false_friend(&self) -> bool {
        self.relationship_type == RelationshipType::FalseFriends
    }

    pub fn is_cognate(&self) -> bool {
        self.relationship_type == RelationshipType::Cognates
    }

    /// Spanish minus English attestation year, when both are known.
    pub fn time_gap(&self) -> Option<i32> {
        match (self.first_attestation_spanish, self.first_attestation_english) {
            (Some(spanish), Some(english)) => Some(spanish - english),
            _ => None,
        }
    }
}

/// Turns a snake_case domain key into a display label, e.g. `family_kinship` -> `Family/Kinship`.
pub fn domain_label(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
