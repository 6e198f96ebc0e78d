mod figure;
mod jitter;

pub use figure::{
    attestation_layout, domain_trace, padded_range, HoverDetail, HOVER_TEMPLATE, TITLE_TEXT,
};
pub use jitter::{apply_jitter, JitterConfig, JitteredPoint, DEFAULT_SEED};

use crate::workflows::artifact::write_atomically;
use crate::workflows::dataset::{WordPair, WordPairDataset};
use plotly::configuration::DisplayModeBar;
use plotly::{Configuration, Plot};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to write interactive plot: {0}")]
    Io(#[from] std::io::Error),
}

/// A dataset domain drawn as one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSeries {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl DomainSeries {
    pub fn new(key: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub domains: Vec<DomainSeries>,
    pub jitter: JitterConfig,
    pub padding_ratio: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            domains: vec![
                DomainSeries::new("religion_spirituality", "Religion", "#A52A2A"),
                DomainSeries::new("technology_tools", "Technology", "#4682B4"),
            ],
            jitter: JitterConfig::default(),
            padding_ratio: 0.05,
        }
    }
}

/// A word pair eligible for plotting: in a configured domain with both attestation years.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRow<'a> {
    pub record: &'a WordPair,
    pub english_year: i32,
    pub spanish_year: i32,
    pub time_gap: i32,
}

impl PlotRow<'_> {
    pub fn hover_detail(&self) -> HoverDetail<'_> {
        HoverDetail {
            spanish_word: &self.record.spanish_word,
            english_word: &self.record.english_word,
            spanish_year: self.spanish_year,
            english_year: self.english_year,
            time_gap: self.time_gap,
        }
    }
}

pub fn plot_rows<'a>(dataset: &'a WordPairDataset, config: &PlotConfig) -> Vec<PlotRow<'a>> {
    dataset
        .records()
        .iter()
        .filter(|record| {
            config
                .domains
                .iter()
                .any(|series| series.key == record.cultural_domain)
        })
        .filter_map(|record| {
            let english_year = record.first_attestation_english?;
            let spanish_year = record.first_attestation_spanish?;
            Some(PlotRow {
                record,
                english_year,
                spanish_year,
                time_gap: spanish_year - english_year,
            })
        })
        .collect()
}

/// The jittered points of one plotted domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoints {
    pub label: String,
    pub points: Vec<JitteredPoint>,
    pub hover_text: Vec<String>,
}

/// A ready-to-render Plotly figure plus the values it was built from.
pub struct AttestationFigure {
    pub plot: Plot,
    pub series: Vec<SeriesPoints>,
    pub x_range: Option<[f64; 2]>,
    pub y_range: Option<[f64; 2]>,
}

impl AttestationFigure {
    pub fn series(&self, label: &str) -> Option<&SeriesPoints> {
        self.series.iter().find(|series| series.label == label)
    }

    /// Standalone page loading plotly.js from its CDN.
    pub fn to_html(&self) -> String {
        self.plot.to_html()
    }
}

/// Builds the attestation scatter: English year on x, Spanish-minus-English gap on y.
///
/// A configured domain without rows simply has no series.
pub fn build_figure(dataset: &WordPairDataset, config: &PlotConfig) -> AttestationFigure {
    let rows = plot_rows(dataset, config);
    let coordinates: Vec<(f64, f64)> = rows
        .iter()
        .map(|row| (f64::from(row.english_year), f64::from(row.time_gap)))
        .collect();
    let jittered = apply_jitter(&coordinates, &config.jitter);

    let x_range = padded_range(jittered.iter().map(|point| point.x), config.padding_ratio);
    let y_range = padded_range(jittered.iter().map(|point| point.y), config.padding_ratio);

    let mut plot = Plot::new();
    let mut series = Vec::with_capacity(config.domains.len());
    for domain in &config.domains {
        let mut points = Vec::new();
        let mut hover_text = Vec::new();
        for (row, point) in rows.iter().zip(&jittered) {
            if row.record.cultural_domain == domain.key {
                points.push(*point);
                hover_text.push(row.hover_detail().to_hover_text(&domain.label));
            }
        }

        if points.is_empty() {
            debug!(domain = %domain.key, "no plottable rows for domain; series skipped");
            continue;
        }
        debug!(domain = %domain.key, points = points.len(), "series built");

        plot.add_trace(domain_trace(
            &domain.label,
            &domain.color,
            points.iter().map(|point| point.x).collect(),
            points.iter().map(|point| point.y).collect(),
            hover_text.clone(),
        ));
        series.push(SeriesPoints {
            label: domain.label.clone(),
            points,
            hover_text,
        });
    }

    plot.set_layout(attestation_layout(x_range, y_range));
    plot.set_configuration(
        Configuration::new()
            .responsive(true)
            .display_mode_bar(DisplayModeBar::False),
    );

    AttestationFigure {
        plot,
        series,
        x_range,
        y_range,
    }
}

/// Builds the figure and writes it as a self-contained HTML page at `path`.
pub fn write_interactive_plot(
    dataset: &WordPairDataset,
    config: &PlotConfig,
    path: &Path,
) -> Result<AttestationFigure, PlotError> {
    let figure = build_figure(dataset, config);
    write_atomically(path, figure.to_html().as_bytes())?;
    Ok(figure)
}
