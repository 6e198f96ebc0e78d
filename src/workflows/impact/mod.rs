mod domains;
mod frequency;
mod pareto;
mod views;

pub use domains::{DomainRisk, DomainRiskRanking, HIGH_RISK_FFR_THRESHOLD};
pub use frequency::{
    BandCount, FrequencyBand, FrequencyImpact, BAND_EDGES, HIGH_FREQUENCY_THRESHOLD,
};
pub use pareto::{DomainPareto, DomainShare, WeightedPareto, PARETO_TARGET_PCT};

use crate::workflows::dataset::WordPairDataset;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("dataset contains no word pairs")]
    EmptyDataset,
    #[error("cannot compute {ratio}: no matching records")]
    EmptySubset { ratio: &'static str },
    #[error("frequency score {score} is out of range (must be greater than -1)")]
    InvalidFrequencyScore { score: f64 },
}

/// Business impact figures for language learning applications, computed in one pass over the
/// dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub total_records: usize,
    pub domain_risk: DomainRiskRanking,
    pub frequency: FrequencyImpact,
    pub weighted_pareto: WeightedPareto,
    pub domain_pareto: DomainPareto,
}

impl ImpactReport {
    pub fn compute(dataset: &WordPairDataset) -> Result<Self, ImpactError> {
        if dataset.is_empty() {
            return Err(ImpactError::EmptyDataset);
        }

        let domain_risk = DomainRiskRanking::compute(dataset)?;
        let frequency = FrequencyImpact::compute(dataset)?;
        let weighted_pareto = WeightedPareto::compute(dataset)?;
        let domain_pareto = DomainPareto::compute(dataset)?;

        debug!(
            records = dataset.len(),
            domains = domain_risk.ranked.len(),
            false_friends = frequency.false_friend_count,
            "impact metrics computed"
        );

        Ok(Self {
            total_records: dataset.len(),
            domain_risk,
            frequency,
            weighted_pareto,
            domain_pareto,
        })
    }
}

/// `part / whole * 100`, refusing an empty denominator instead of producing NaN or infinity.
pub(crate) fn percentage(
    part: usize,
    whole: usize,
    ratio: &'static str,
) -> Result<f64, ImpactError> {
    if whole == 0 {
        return Err(ImpactError::EmptySubset { ratio });
    }
    Ok(part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::workflows::dataset::{RelationshipType, WordPair};

    #[derive(Debug, Clone, Copy)]
    pub(crate) enum Kind {
        Cognate,
        FalseFriend,
    }

    pub(crate) fn pair(domain: &str, kind: Kind, frequency_score: f64) -> WordPair {
        let relationship_type = match kind {
            Kind::Cognate => RelationshipType::Cognates,
            Kind::FalseFriend => RelationshipType::FalseFriends,
        };
        WordPair {
            english_word: "word".to_string(),
            spanish_word: "palabra".to_string(),
            relationship_type,
            cultural_domain: domain.to_string(),
            frequency_score: Some(frequency_score),
            overall_complexity: None,
            levenshtein_similarity: None,
            first_attestation_english: None,
            first_attestation_spanish: None,
        }
    }

    #[test]
    fn percentage_guards_empty_denominator() {
        assert_eq!(percentage(1, 4, "share").expect("non-empty"), 25.0);
        assert!(matches!(
            percentage(0, 0, "share"),
            Err(ImpactError::EmptySubset { ratio: "share" })
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let error = ImpactReport::compute(&WordPairDataset::default()).expect_err("empty");
        assert!(matches!(error, ImpactError::EmptyDataset));
    }

    #[test]
    fn other_relationship_types_count_toward_domain_totals_only() {
        let mut loanword = pair("technology_tools", Kind::Cognate, 2.0);
        loanword.relationship_type = RelationshipType::Other("loanword_en_to_es".to_string());
        let records = vec![
            loanword,
            pair("technology_tools", Kind::FalseFriend, 2.0),
            pair("technology_tools", Kind::Cognate, 3.0),
            pair("technology_tools", Kind::Cognate, 3.0),
        ];
        let report = ImpactReport::compute(&WordPairDataset::from_records(records))
            .expect("report computes");

        assert_eq!(report.domain_risk.ranked[0].total, 4);
        assert_eq!(report.domain_risk.ranked[0].ffr, 25.0);
        assert_eq!(report.frequency.false_friend_count, 1);
        assert_eq!(report.frequency.cognate_mean, 3.0);
    }
}
