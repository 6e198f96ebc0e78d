mod domain;
mod normalizer;
mod parser;

pub use domain::{domain_label, Column, RelationshipType, WordPair};

use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: Column },
}

/// Read-only view over the word pairs loaded from the masterframe CSV.
#[derive(Debug, Clone, Default)]
pub struct WordPairDataset {
    records: Vec<WordPair>,
}

impl WordPairDataset {
    pub fn from_path<P: AsRef<Path>>(path: P, required: &[Column]) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file, required)?;
        debug!(path = %path.display(), rows = dataset.len(), "loaded word pair dataset");
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R, required: &[Column]) -> Result<Self, DatasetError> {
        let records = parser::parse_records(reader, required)?;
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<WordPair>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WordPair] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn false_friends(&self) -> impl Iterator<Item = &WordPair> {
        self.records.iter().filter(|record| record.is_false_friend())
    }

    pub fn cognates(&self) -> impl Iterator<Item = &WordPair> {
        self.records.iter().filter(|record| record.is_cognate())
    }
}
