use super::{percentage, ImpactError};
use crate::workflows::dataset::{WordPair, WordPairDataset};
use serde::Serialize;

/// Scores at or below this count as high-frequency (everyday) vocabulary.
pub const HIGH_FREQUENCY_THRESHOLD: f64 = 3.0;

/// Band edges; each band is right-closed and excludes its lower edge.
pub const BAND_EDGES: [f64; 5] = [0.0, 2.0, 3.0, 4.0, 6.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyBand {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl FrequencyBand {
    pub const fn ordered() -> [Self; 4] {
        [Self::VeryHigh, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::VeryHigh => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// `(lower, upper]` bounds of the band.
    pub const fn bounds(self) -> (f64, f64) {
        let index = self.index();
        (BAND_EDGES[index], BAND_EDGES[index + 1])
    }

    pub fn classify(score: f64) -> Option<Self> {
        Self::ordered().into_iter().find(|band| {
            let (lower, upper) = band.bounds();
            score > lower && score <= upper
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BandCount {
    pub band: FrequencyBand,
    pub count: usize,
    pub pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyImpact {
    pub false_friend_count: usize,
    pub false_friend_mean: f64,
    pub cognate_mean: f64,
    pub high_frequency_count: usize,
    pub high_frequency_pct: f64,
    pub bands: Vec<BandCount>,
    /// False friends with a missing score or one outside every band.
    pub unbanded_count: usize,
    pub unbanded_pct: f64,
}

impl FrequencyImpact {
    pub(crate) fn compute(dataset: &WordPairDataset) -> Result<Self, ImpactError> {
        let false_friends: Vec<&WordPair> = dataset.false_friends().collect();
        let false_friend_count = false_friends.len();

        let false_friend_mean = mean_score(
            false_friends.iter().copied(),
            "mean frequency score (false friends)",
        )?;
        let cognate_mean = mean_score(dataset.cognates(), "mean frequency score (true cognates)")?;

        let high_frequency_count = false_friends
            .iter()
            .filter(|record| {
                record
                    .frequency_score
                    .is_some_and(|score| score <= HIGH_FREQUENCY_THRESHOLD)
            })
            .count();
        let high_frequency_pct = percentage(
            high_frequency_count,
            false_friend_count,
            "high-frequency false friend share",
        )?;

        let mut counts = [0usize; 4];
        let mut unbanded_count = 0;
        for record in &false_friends {
            match record.frequency_score.and_then(FrequencyBand::classify) {
                Some(band) => counts[band.index()] += 1,
                None => unbanded_count += 1,
            }
        }

        let mut bands = Vec::with_capacity(counts.len());
        for band in FrequencyBand::ordered() {
            let count = counts[band.index()];
            bands.push(BandCount {
                band,
                count,
                pct: percentage(count, false_friend_count, "frequency band share")?,
            });
        }
        let unbanded_pct = percentage(unbanded_count, false_friend_count, "frequency band share")?;

        Ok(Self {
            false_friend_count,
            false_friend_mean,
            cognate_mean,
            high_frequency_count,
            high_frequency_pct,
            bands,
            unbanded_count,
            unbanded_pct,
        })
    }
}

fn mean_score<'a, I>(records: I, ratio: &'static str) -> Result<f64, ImpactError>
where
    I: Iterator<Item = &'a WordPair>,
{
    let (sum, count) = records
        .filter_map(|record| record.frequency_score)
        .fold((0.0, 0usize), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        return Err(ImpactError::EmptySubset { ratio });
    }
    Ok(sum / count as f64)
}
