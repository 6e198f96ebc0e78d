use super::{
    ImpactReport, HIGH_FREQUENCY_THRESHOLD, HIGH_RISK_FFR_THRESHOLD, PARETO_TARGET_PCT,
};
use crate::workflows::dataset::domain_label;
use std::fmt;

const RULE_WIDTH: usize = 80;
const NAMED_HIGH_RISK_DOMAINS: usize = 3;

impl ImpactReport {
    /// Display labels of the highest-FFR high-risk domains, used by the findings sentences.
    pub fn top_high_risk_labels(&self) -> Vec<String> {
        self.domain_risk
            .high_risk()
            .iter()
            .take(NAMED_HIGH_RISK_DOMAINS)
            .map(|risk| domain_label(&risk.domain))
            .collect()
    }

    /// Findings-page sentences restating the headline figures.
    pub fn recommended_findings(&self) -> Vec<String> {
        let domains = self.top_high_risk_labels();
        let domain_note = if domains.is_empty() {
            String::new()
        } else {
            format!(" ({})", domains.join(", "))
        };

        vec![
            format!(
                "Prioritizing high-FFR domains{domain_note} could reduce learner confusion by targeting {:.0}% of all false friends.",
                self.domain_risk.coverage_pct
            ),
            format!(
                "Targeting high-frequency false friends first impacts approximately {:.0}% of daily usage scenarios where confusion is most likely.",
                self.frequency.high_frequency_pct
            ),
            format!(
                "Resource allocation efficiency: focusing on the top {:.0}% of false friends (ranked by frequency) addresses approximately {PARETO_TARGET_PCT:.0}% of confusion incidents.",
                self.weighted_pareto.vocabulary_pct
            ),
            format!(
                "Focusing on the top {:.0}% of domains addresses approximately {PARETO_TARGET_PCT:.0}% of false friends.",
                self.domain_pareto.selected_pct
            ),
        ]
    }
}

impl fmt::Display for ImpactReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "BUSINESS IMPACT ANALYSIS: Language Learning Application Metrics")?;
        writeln!(f)?;

        write_domain_section(self, f)?;
        write_frequency_section(self, f)?;
        write_pareto_section(self, f)?;
        write_summary(self, f)?;
        write_recommendations(self, f)
    }
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

fn write_domain_section(report: &ImpactReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let risk = &report.domain_risk;
    let high_risk = risk.high_risk();

    section(f, "1. HIGH-FFR DOMAIN PRIORITIZATION IMPACT")?;
    writeln!(f, "\nHigh-Risk Domains (FFR >= {HIGH_RISK_FFR_THRESHOLD:.0}%):")?;
    if high_risk.is_empty() {
        writeln!(f, "  - none")?;
    }
    for domain in high_risk {
        writeln!(
            f,
            "  - {}: {:.2}% FFR ({} false friends / {} pairs)",
            domain.domain, domain.ffr, domain.false_friends, domain.total
        )?;
    }

    writeln!(f, "\nHigh-Risk Domain Coverage:")?;
    writeln!(
        f,
        "  - False friends in high-risk domains: {} / {}",
        risk.high_risk_false_friends, risk.total_false_friends
    )?;
    writeln!(f, "  - Coverage: {:.1}% of all false friends", risk.coverage_pct)?;
    writeln!(
        f,
        "  - Impact: Targeting these {} domains addresses {:.1}% of false friend risk",
        high_risk.len(),
        risk.coverage_pct
    )
}

fn write_frequency_section(report: &ImpactReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let frequency = &report.frequency;

    writeln!(f)?;
    section(f, "2. HIGH-FREQUENCY FALSE FRIENDS IMPACT")?;
    writeln!(f, "\nFalse Friends Frequency Distribution:")?;
    writeln!(
        f,
        "  - Mean frequency score (False Friends): {:.2}",
        frequency.false_friend_mean
    )?;
    writeln!(
        f,
        "  - Mean frequency score (True Cognates): {:.2}",
        frequency.cognate_mean
    )?;
    writeln!(
        f,
        "  - Threshold for 'high frequency': ≤ {HIGH_FREQUENCY_THRESHOLD:.1}"
    )?;

    writeln!(f, "\nHigh-Frequency False Friends:")?;
    writeln!(
        f,
        "  - Count: {} / {}",
        frequency.high_frequency_count, frequency.false_friend_count
    )?;
    writeln!(f, "  - Percentage: {:.1}%", frequency.high_frequency_pct)?;
    writeln!(
        f,
        "  - Impact: Prioritizing high-frequency false friends targets {:.1}% of all false friends",
        frequency.high_frequency_pct
    )?;

    writeln!(f, "\nFalse Friends by Frequency Category:")?;
    for band in &frequency.bands {
        writeln!(f, "  - {}: {} ({:.1}%)", band.band.label(), band.count, band.pct)?;
    }
    if frequency.unbanded_count > 0 {
        writeln!(
            f,
            "  - Unbanded: {} ({:.1}%)",
            frequency.unbanded_count, frequency.unbanded_pct
        )?;
    }

    writeln!(f, "\nDaily Usage Scenario Impact:")?;
    writeln!(
        f,
        "  - False friends with freq ≤ {HIGH_FREQUENCY_THRESHOLD:.1}: {} / {}",
        frequency.high_frequency_count, frequency.false_friend_count
    )?;
    writeln!(f, "  - Percentage: {:.1}%", frequency.high_frequency_pct)?;
    writeln!(
        f,
        "  - Interpretation: Targeting high-frequency false friends impacts ~{:.0}% of daily usage scenarios",
        frequency.high_frequency_pct
    )
}

fn write_pareto_section(report: &ImpactReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let weighted = &report.weighted_pareto;
    let domains = &report.domain_pareto;

    writeln!(f)?;
    section(f, "3. RESOURCE ALLOCATION EFFICIENCY (PARETO ANALYSIS)")?;
    writeln!(f, "\nPareto Analysis (Frequency-Weighted):")?;
    writeln!(
        f,
        "  - Top {:.1}% of false friends (by frequency)",
        weighted.vocabulary_pct
    )?;
    writeln!(
        f,
        "  - Account for: ~{PARETO_TARGET_PCT:.0}% of potential confusion incidents"
    )?;
    writeln!(
        f,
        "  - Interpretation: Focus on {:.1}% of vocabulary to address {PARETO_TARGET_PCT:.0}% of errors",
        weighted.vocabulary_pct
    )?;

    let names: Vec<&str> = domains
        .selected_domains()
        .iter()
        .map(|share| share.domain.as_str())
        .collect();
    writeln!(f, "\nPareto Analysis (Domain-Based):")?;
    writeln!(
        f,
        "  - Top {} domains (out of {}) = {:.1}% of domains",
        domains.selected,
        domains.domain_count(),
        domains.selected_pct
    )?;
    writeln!(f, "  - Contain: ~{PARETO_TARGET_PCT:.0}% of all false friends")?;
    writeln!(f, "  - Top domains: {}", names.join(", "))
}

fn write_summary(report: &ImpactReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    banner(f, "SUMMARY: DATA-DRIVEN BUSINESS IMPACT METRICS")?;
    writeln!(f)?;

    writeln!(f, "HIGH-FFR DOMAIN PRIORITIZATION:")?;
    writeln!(
        f,
        "   → Targeting {} high-risk domains covers {:.1}% of false friend risk",
        report.domain_risk.high_risk().len(),
        report.domain_risk.coverage_pct
    )?;
    writeln!(f)?;

    writeln!(f, "HIGH-FREQUENCY FALSE FRIENDS:")?;
    writeln!(
        f,
        "   → Prioritizing high-frequency false friends impacts {:.0}% of daily usage scenarios",
        report.frequency.high_frequency_pct
    )?;
    writeln!(f)?;

    writeln!(f, "RESOURCE ALLOCATION EFFICIENCY:")?;
    writeln!(
        f,
        "   → Focusing on top {:.0}% of vocabulary addresses ~{PARETO_TARGET_PCT:.0}% of confusion incidents",
        report.weighted_pareto.vocabulary_pct
    )?;
    writeln!(
        f,
        "   → Focusing on top {:.0}% of domains ({} domains) covers ~{PARETO_TARGET_PCT:.0}% of false friends",
        report.domain_pareto.selected_pct, report.domain_pareto.selected
    )?;
    writeln!(f)
}

fn write_recommendations(report: &ImpactReport, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    banner(f, "RECOMMENDED METRICS FOR FINDINGS PAGE:")?;
    writeln!(f)?;
    for (index, finding) in report.recommended_findings().iter().enumerate() {
        writeln!(f, "{}. {finding}", index + 1)?;
        writeln!(f)?;
    }
    Ok(())
}
