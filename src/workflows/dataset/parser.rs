use super::domain::{Column, RelationshipType, WordPair};
use super::normalizer::{normalize_category, normalize_header};
use super::DatasetError;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;

pub(crate) fn parse_records<R: Read>(
    reader: R,
    required: &[Column],
) -> Result<Vec<WordPair>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let present: HashSet<&str> = headers.iter().collect();
    if let Some(column) = required
        .iter()
        .find(|column| !present.contains(column.header()))
    {
        return Err(DatasetError::MissingColumn { column: *column });
    }
    csv_reader.set_headers(headers);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<MasterframeRow>() {
        records.push(row?.into_word_pair());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct MasterframeRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    english_word: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    spanish_word: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    relationship_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cultural_domain: Option<String>,
    #[serde(
        rename = "complexity_frequency_complexity",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    frequency_score: Option<String>,
    #[serde(
        rename = "complexity_overall_complexity",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    overall_complexity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    levenshtein_similarity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    first_attestation_english: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    first_attestation_spanish: Option<String>,
}

impl MasterframeRow {
    fn into_word_pair(self) -> WordPair {
        let relationship_type = self
            .relationship_type
            .as_deref()
            .map(normalize_category)
            .map(|raw| RelationshipType::from_raw(&raw))
            .unwrap_or_else(|| RelationshipType::Other(String::new()));

        WordPair {
            english_word: self.english_word.unwrap_or_default(),
            spanish_word: self.spanish_word.unwrap_or_default(),
            relationship_type,
            cultural_domain: self
                .cultural_domain
                .as_deref()
                .map(normalize_category)
                .unwrap_or_default(),
            frequency_score: self.frequency_score.as_deref().and_then(parse_number),
            overall_complexity: self.overall_complexity.as_deref().and_then(parse_number),
            levenshtein_similarity: self
                .levenshtein_similarity
                .as_deref()
                .and_then(parse_number),
            first_attestation_english: self
                .first_attestation_english
                .as_deref()
                .and_then(parse_year),
            first_attestation_spanish: self
                .first_attestation_spanish
                .as_deref()
                .and_then(parse_year),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn parse_year(value: &str) -> Option<i32> {
    let year = parse_number(value)?.trunc();
    if year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return None;
    }
    Some(year as i32)
}

#[cfg(test)]
pub(crate) fn parse_year_for_tests(value: &str) -> Option<i32> {
    parse_year(value)
}

#[cfg(test)]
pub(crate) fn parse_number_for_tests(value: &str) -> Option<f64> {
    parse_number(value)
}
