use super::content::{ExecutiveSummary, Paragraph, Span, SpanStyle};
use chrono::NaiveDate;

pub const ACCENT: &str = "#0a3d62";
pub const TEXT_PRIMARY: &str = "#212529";
pub const TEXT_SECONDARY: &str = "#495057";

/// Value, label, value, label.
const METRIC_COLUMNS: &str = "(1.2in, 2.1in, 1.2in, 2.1in)";

/// Typst source for the one-page summary: letter paper, 0.65in side and 0.4in vertical margins.
pub fn typeset(summary: &ExecutiveSummary, generated_on: NaiveDate) -> String {
    let mut source = format!(
        "#set page(width: 8.5in, height: 11in, margin: (x: 0.65in, y: 0.4in))\n\
         #set text(size: 9pt, fill: rgb(\"{TEXT_PRIMARY}\"))\n\
         #set par(spacing: 0.8em)\n\n"
    );

    source.push_str(&format!(
        "#align(center, text(size: 24pt, weight: \"bold\", fill: rgb(\"{ACCENT}\"), {}))\n",
        string_literal(summary.title)
    ));
    source.push_str(&format!(
        "#align(center, text(size: 11pt, fill: rgb(\"{TEXT_SECONDARY}\"), {}))\n",
        string_literal(summary.subtitle)
    ));
    source.push_str("#v(0.12in)\n");

    source.push_str(&format!(
        "#grid(columns: {METRIC_COLUMNS}, row-gutter: 8pt, column-gutter: 4pt,\n"
    ));
    for cell in summary.metric_cells() {
        source.push_str(&format!(
            "  text(size: 11pt, strong({})), {},\n",
            string_literal(cell.value),
            string_literal(cell.label)
        ));
    }
    source.push_str(")\n#v(0.1in)\n");

    section(&mut source, "CORE FINDINGS");
    for finding in &summary.findings {
        paragraph(&mut source, finding);
    }

    section(&mut source, "STRATEGIC RECOMMENDATIONS");
    for recommendation in &summary.recommendations {
        paragraph(&mut source, recommendation);
    }

    source.push_str(&format!(
        "#v(1fr)\n#align(center, text(size: 7pt, style: \"italic\", fill: rgb(\"{TEXT_SECONDARY}\"), {}))\n",
        string_literal(&summary.footer(generated_on))
    ));

    source
}

fn section(source: &mut String, title: &str) {
    source.push_str(&format!(
        "\n#text(size: 11pt, weight: \"bold\", fill: rgb(\"{ACCENT}\"), {})\n\n",
        string_literal(title)
    ));
}

fn paragraph(source: &mut String, spans: Paragraph<'_>) {
    for span in spans {
        source.push_str(&inline(span));
    }
    source.push_str("\n\n");
}

/// Spans are emitted as code expressions so their text is never parsed as markup.
fn inline(span: &Span<'_>) -> String {
    let literal = string_literal(span.text);
    match span.style {
        SpanStyle::Regular => format!("#{literal}"),
        SpanStyle::Bold => format!("#strong({literal})"),
        SpanStyle::Italic => format!("#emph({literal})"),
    }
}

fn string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 25).expect("valid date")
    }

    #[test]
    fn metric_values_are_bold_grid_cells() {
        let source = typeset(&ExecutiveSummary::snapshot(), generated_on());

        assert!(source.contains("#grid(columns: (1.2in, 2.1in, 1.2in, 2.1in)"));
        assert!(source.contains("text(size: 11pt, strong(\"86.8%\")), \"True Cognates\","));
        assert!(source.contains("strong(\"1 in 13\")"));
    }

    #[test]
    fn sections_follow_the_grid_in_order() {
        let source = typeset(&ExecutiveSummary::snapshot(), generated_on());
        let position = |needle: &str| source.find(needle).expect("present");

        assert!(position("EXECUTIVE SUMMARY") < position("#grid("));
        assert!(position("#grid(") < position("CORE FINDINGS"));
        assert!(position("CORE FINDINGS") < position("STRATEGIC RECOMMENDATIONS"));
        assert!(position("STRATEGIC RECOMMENDATIONS") < position("Generated: October 2025"));
        assert!(source.contains("margin: (x: 0.65in, y: 0.4in)"));
    }

    #[test]
    fn styled_spans_stay_glued_in_one_paragraph() {
        let spans = [
            Span::regular("Flag ("),
            Span::italic("actual"),
            Span::regular(", "),
            Span::bold("#not-code"),
        ];
        let mut source = String::new();
        paragraph(&mut source, &spans);

        assert_eq!(
            source,
            "#\"Flag (\"#emph(\"actual\")#\", \"#strong(\"#not-code\")\n\n"
        );
    }

    #[test]
    fn string_literals_escape_quotes_and_backslashes() {
        assert_eq!(string_literal(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
        assert_eq!(string_literal("English→Spanish"), "\"English→Spanish\"");
    }
}
