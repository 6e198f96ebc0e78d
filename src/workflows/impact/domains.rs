use super::{percentage, ImpactError};
use crate::workflows::dataset::WordPairDataset;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Domains at or above this false friends ratio are treated as high risk.
pub const HIGH_RISK_FFR_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRisk {
    pub domain: String,
    pub false_friends: usize,
    pub total: usize,
    pub ffr: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainRiskRanking {
    /// Every domain, highest FFR first.
    pub ranked: Vec<DomainRisk>,
    pub total_false_friends: usize,
    pub high_risk_false_friends: usize,
    pub coverage_pct: f64,
}

impl DomainRiskRanking {
    /// A domain's total counts only pairs with an English word; its false friends count every
    /// false-friend row.
    pub(crate) fn compute(dataset: &WordPairDataset) -> Result<Self, ImpactError> {
        let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for record in dataset.records() {
            let entry = groups.entry(record.cultural_domain.as_str()).or_default();
            if record.is_false_friend() {
                entry.0 += 1;
            }
            if !record.english_word.is_empty() {
                entry.1 += 1;
            }
        }

        let mut ranked = Vec::with_capacity(groups.len());
        for (domain, (false_friends, total)) in groups {
            if total == 0 {
                debug!(domain, false_friends, "domain has no English words; left unranked");
                continue;
            }
            ranked.push(DomainRisk {
                domain: domain.to_string(),
                false_friends,
                total,
                ffr: percentage(false_friends, total, "domain false friends ratio")?,
            });
        }
        // BTreeMap order already sorts by name, so a stable sort keeps ties alphabetical.
        ranked.sort_by(|a, b| b.ffr.total_cmp(&a.ffr));

        let total_false_friends: usize = ranked.iter().map(|risk| risk.false_friends).sum();
        let high_risk_false_friends: usize = ranked
            .iter()
            .take_while(|risk| risk.ffr >= HIGH_RISK_FFR_THRESHOLD)
            .map(|risk| risk.false_friends)
            .sum();
        let coverage_pct = percentage(
            high_risk_false_friends,
            total_false_friends,
            "high-risk domain coverage",
        )?;

        Ok(Self {
            ranked,
            total_false_friends,
            high_risk_false_friends,
            coverage_pct,
        })
    }

    pub fn high_risk(&self) -> &[DomainRisk] {
        let cutoff = self
            .ranked
            .partition_point(|risk| risk.ffr >= HIGH_RISK_FFR_THRESHOLD);
        &self.ranked[..cutoff]
    }
}
