use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Regular,
    Bold,
    Italic,
}

/// A run of text sharing one style inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub style: SpanStyle,
}

impl<'a> Span<'a> {
    pub const fn regular(text: &'a str) -> Self {
        Self {
            text,
            style: SpanStyle::Regular,
        }
    }

    pub const fn bold(text: &'a str) -> Self {
        Self {
            text,
            style: SpanStyle::Bold,
        }
    }

    pub const fn italic(text: &'a str) -> Self {
        Self {
            text,
            style: SpanStyle::Italic,
        }
    }
}

pub type Paragraph<'a> = &'a [Span<'a>];

/// One headline number and its caption in the metrics grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCell {
    pub value: &'static str,
    pub label: &'static str,
}

const fn metric(value: &'static str, label: &'static str) -> MetricCell {
    MetricCell { value, label }
}

/// Each row holds two cells, rendered as value/label/value/label columns.
pub type MetricRow = [MetricCell; 2];

const METRICS: [MetricRow; 3] = [
    [
        metric("86.8%", "True Cognates"),
        metric("7.4%", "False Friends"),
    ],
    [
        metric("1 in 13", "Similar words trick learners"),
        metric("2.95", "Mean frequency (false friends)"),
    ],
    [
        metric("20.0%", "FFR: Family/Kinship"),
        metric("3.69%", "FFR: Technology/Tools"),
    ],
];

const FINDINGS: [Paragraph<'static>; 4] = [
    &[
        Span::bold("1. The False Friends Paradox:"),
        Span::regular(" High-frequency false friends (mean frequency 2.95 vs. true cognates) appear early in learning, creating outsized confusion. Abstract domains (Emotions: 13.33%, Family: 20.00% FFR) pose highest risk."),
    ],
    &[
        Span::bold("2. Strategic Loanword Patterns:"),
        Span::regular(" English→Spanish loans (frequency 2.84) dominate modern tech vocabulary—essential for contemporary communication. Spanish→English loans (frequency 3.76) are cultural specialties."),
    ],
    &[
        Span::bold("3. Complexity ≠ Similarity:"),
        Span::regular(" Levenshtein similarity shows near-zero correlation with complexity (r=0.008). Word length and syllables predict complexity (r≥0.76). Health/Medicine domains trend most complex."),
    ],
    &[
        Span::bold("4. Historical Patterns:"),
        Span::regular(" 55.3% of false friends emerged before 1400; only 5.3% in modern times. Ancient false friends remain the primary learning challenge."),
    ],
];

const RECOMMENDATIONS: [Paragraph<'static>; 3] = [
    &[
        Span::bold("Curriculum Design:"),
        Span::regular(" Flag high-frequency false friends ("),
        Span::italic("actual"),
        Span::regular(", "),
        Span::italic("embarazada"),
        Span::regular(", "),
        Span::italic("sensible"),
        Span::regular(") with explicit warnings in early-stage instruction. Sequence safe domains (Technology) before high-risk domains (Family, Emotions)."),
    ],
    &[
        Span::bold("Resource Allocation:"),
        Span::regular(" Prioritize false friend instruction in Family/Kinship and Emotions/Psychology domains where FFR exceeds 13%. Leverage 86.8% true cognate foundation for rapid vocabulary expansion."),
    ],
    &[
        Span::bold("Application Development:"),
        Span::regular(" Adaptive systems should prioritize false friend practice based on frequency data. Error prediction models benefit from domain-specific FFR rates. Personalize learning paths by complexity metrics (length, syllables) rather than similarity."),
    ],
];

/// Content of the one-page executive summary, kept apart from its layout.
#[derive(Debug, Clone)]
pub struct ExecutiveSummary {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub metrics: [MetricRow; 3],
    pub findings: [Paragraph<'static>; 4],
    pub recommendations: [Paragraph<'static>; 3],
    pub report_reference: &'static str,
}

impl ExecutiveSummary {
    /// Frozen figures from the published analysis; they are not recomputed from the dataset.
    pub fn snapshot() -> Self {
        Self {
            title: "EXECUTIVE SUMMARY",
            subtitle: "English-Spanish Cognate Analysis",
            metrics: METRICS,
            findings: FINDINGS,
            recommendations: RECOMMENDATIONS,
            report_reference: "findings.html",
        }
    }

    pub fn footer(&self, generated_on: NaiveDate) -> String {
        format!(
            "Generated: {} | Full report available at {}",
            generated_on.format("%B %Y"),
            self.report_reference
        )
    }

    pub fn metric_cells(&self) -> impl Iterator<Item = &MetricCell> {
        self.metrics.iter().flat_map(|row| row.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_fixed_grid_and_sections() {
        let summary = ExecutiveSummary::snapshot();
        assert_eq!(summary.metric_cells().count(), 6);
        assert_eq!(summary.findings.len(), 4);
        assert_eq!(summary.recommendations.len(), 3);

        let values: Vec<&str> = summary.metric_cells().map(|cell| cell.value).collect();
        assert_eq!(values, ["86.8%", "7.4%", "1 in 13", "2.95", "20.0%", "3.69%"]);
    }

    #[test]
    fn every_paragraph_leads_with_bold_heading() {
        let summary = ExecutiveSummary::snapshot();
        for paragraph in summary.findings.iter().chain(summary.recommendations.iter()) {
            assert_eq!(paragraph[0].style, SpanStyle::Bold);
            assert!(paragraph[0].text.ends_with(':'));
        }
    }

    #[test]
    fn footer_uses_month_and_year() {
        let summary = ExecutiveSummary::snapshot();
        let date = NaiveDate::from_ymd_opt(2025, 10, 25).expect("valid date");
        assert_eq!(
            summary.footer(date),
            "Generated: October 2025 | Full report available at findings.html"
        );
    }
}
