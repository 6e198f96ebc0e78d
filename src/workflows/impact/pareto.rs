use super::{percentage, ImpactError};
use crate::workflows::dataset::WordPairDataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Share of risk (in percent) the Pareto cuts aim to cover.
pub const PARETO_TARGET_SHARE: usize = 80;
pub const PARETO_TARGET_PCT: f64 = PARETO_TARGET_SHARE as f64;

/// Frequency-weighted cut: the smallest most-frequent-first prefix of false friends whose
/// normalized `1 / (score + 1)` weight reaches the target share.
///
/// Unscored false friends rank after every scored one, so they never enter the prefix but still
/// count toward the vocabulary share.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedPareto {
    pub false_friends: usize,
    pub considered: usize,
    pub prefix_len: usize,
    pub vocabulary_pct: f64,
    pub cumulative_weight_pct: f64,
}

impl WeightedPareto {
    pub(crate) fn compute(dataset: &WordPairDataset) -> Result<Self, ImpactError> {
        let false_friends = dataset.false_friends().count();
        let mut scores: Vec<f64> = dataset
            .false_friends()
            .filter_map(|record| record.frequency_score)
            .collect();
        if scores.is_empty() {
            return Err(ImpactError::EmptySubset {
                ratio: "frequency-weighted Pareto coverage",
            });
        }
        if let Some(score) = scores.iter().copied().find(|score| *score <= -1.0) {
            return Err(ImpactError::InvalidFrequencyScore { score });
        }
        scores.sort_by(|a, b| a.total_cmp(b));

        let weights: Vec<f64> = scores.iter().map(|score| 1.0 / (score + 1.0)).collect();
        let weight_sum: f64 = weights.iter().sum();

        let considered = scores.len();
        let mut running = 0.0;
        let mut cut = None;
        for (index, weight) in weights.iter().enumerate() {
            running += weight / weight_sum;
            let cumulative_weight_pct = running * 100.0;
            if cumulative_weight_pct >= PARETO_TARGET_PCT {
                cut = Some((index, cumulative_weight_pct));
                break;
            }
        }
        // Rounding can leave the final running total a hair under 100; the full list still counts.
        let (index, cumulative_weight_pct) = cut.unwrap_or((considered - 1, running * 100.0));
        let prefix_len = index + 1;

        Ok(Self {
            false_friends,
            considered,
            prefix_len,
            vocabulary_pct: percentage(
                prefix_len,
                false_friends,
                "frequency-weighted Pareto coverage",
            )?,
            cumulative_weight_pct,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainShare {
    pub domain: String,
    pub false_friends: usize,
    pub cumulative_pct: f64,
}

/// Domain cut: the longest prefix of domains (most false friends first) whose cumulative share of
/// false friends stays at or under the target.
#[derive(Debug, Clone, Serialize)]
pub struct DomainPareto {
    pub ranked: Vec<DomainShare>,
    pub selected: usize,
    pub selected_pct: f64,
}

impl DomainPareto {
    pub(crate) fn compute(dataset: &WordPairDataset) -> Result<Self, ImpactError> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in dataset.false_friends() {
            *counts.entry(record.cultural_domain.as_str()).or_default() += 1;
        }
        Self::from_counts(counts.into_iter().map(|(domain, count)| (domain.to_string(), count)))
    }

    pub fn from_counts<I>(counts: I) -> Result<Self, ImpactError>
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut counts: Vec<(String, usize)> =
            counts.into_iter().filter(|(_, count)| *count > 0).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let total: usize = counts.iter().map(|(_, count)| count).sum();
        let mut cumulative = 0;
        let mut selected = 0;
        let mut ranked = Vec::with_capacity(counts.len());
        for (domain, false_friends) in counts {
            cumulative += false_friends;
            if cumulative * 100 <= PARETO_TARGET_SHARE * total {
                selected += 1;
            }
            ranked.push(DomainShare {
                domain,
                false_friends,
                cumulative_pct: percentage(cumulative, total, "domain-based Pareto share")?,
            });
        }

        let selected_pct = percentage(selected, ranked.len(), "domain-based Pareto share")?;
        Ok(Self {
            ranked,
            selected,
            selected_pct,
        })
    }

    pub fn domain_count(&self) -> usize {
        self.ranked.len()
    }

    pub fn selected_domains(&self) -> &[DomainShare] {
        &self.ranked[..self.selected]
    }
}
