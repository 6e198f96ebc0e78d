use plotly::common::{Anchor, DashType, Font, Line, Marker, Mode, Title};
use plotly::layout::{Axis, HoverMode, Layout, Legend, Margin, Shape, ShapeLine, ShapeType};
use plotly::Scatter;

/// Per-point hover body comes precomposed in `hovertext`.
pub const HOVER_TEMPLATE: &str = "%{hovertext}<extra></extra>";

pub const TITLE_TEXT: &str = concat!(
    "Cross-Linguistic Attestation Patterns: Religion vs Technology Terms in English and Spanish",
    "<br><sub>Hover over dots to see detailed word information</sub>",
);

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Hover fields of one plotted word pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverDetail<'a> {
    pub spanish_word: &'a str,
    pub english_word: &'a str,
    pub spanish_year: i32,
    pub english_year: i32,
    pub time_gap: i32,
}

impl HoverDetail<'_> {
    pub fn to_hover_text(&self, domain_label: &str) -> String {
        let spanish = escape_html(self.spanish_word);
        let english = escape_html(self.english_word);
        format!(
            "<b style=\"font-size:16px\">{spanish} / {english}</b><br><br>\
             <b>Domain:</b> {domain}<br>\
             <b>Spanish Word:</b> {spanish}<br>\
             <b>English Word:</b> {english}<br>\
             <b>English First Attestation:</b> {english_year}<br>\
             <b>Spanish First Attestation:</b> {spanish_year}<br>\
             <b>Time Gap:</b> {gap} years",
            domain = escape_html(domain_label),
            english_year = self.english_year,
            spanish_year = self.spanish_year,
            gap = self.time_gap,
        )
    }
}

/// Marker-only series: size 12, 70% opacity, thin black outline.
pub fn domain_trace(
    label: &str,
    color: &str,
    x: Vec<f64>,
    y: Vec<f64>,
    hover_text: Vec<String>,
) -> Box<Scatter<f64, f64>> {
    Scatter::new(x, y)
        .mode(Mode::Markers)
        .name(label)
        .hover_text_array(hover_text)
        .hover_template(HOVER_TEMPLATE)
        .marker(
            Marker::new()
                .color(color.to_string())
                .size(12)
                .opacity(0.7)
                .line(Line::new().color("black").width(1.0)),
        )
}

fn axis(title: &str, range: Option<[f64; 2]>) -> Axis {
    let axis = Axis::new()
        .title(Title::new(title))
        .show_grid(true)
        .grid_color("lightgray")
        .show_line(true)
        .line_color("black")
        .line_width(2)
        .zero_line(false)
        .fixed_range(false);
    match range {
        Some([low, high]) => axis.range(vec![low, high]).auto_range(false),
        None => axis.auto_range(true),
    }
}

fn font(size: usize) -> Font {
    Font::new().family(FONT_FAMILY).size(size)
}

/// Title, legend box, pinned axis ranges and a dashed reference line at `y = 0`.
pub fn attestation_layout(x_range: Option<[f64; 2]>, y_range: Option<[f64; 2]>) -> Layout {
    let mut layout = Layout::new()
        .title(
            Title::new(TITLE_TEXT)
                .x(0.5)
                .x_anchor(Anchor::Center)
                .font(font(24)),
        )
        .font(font(14))
        .legend(
            Legend::new()
                .background_color("rgba(255, 255, 255, 0.9)")
                .border_color("black")
                .border_width(1)
                .font(font(14))
                .x(0.88)
                .y(0.98),
        )
        .margin(Margin::new().left(80).right(80).top(100).bottom(120))
        .plot_background_color("white")
        .paper_background_color("white")
        .hover_mode(HoverMode::Closest)
        .x_axis(axis("English Attestation Year", x_range))
        .y_axis(axis("Time Gap (Spanish-English)", y_range).zero_line(true));

    layout.add_shape(
        Shape::new()
            .shape_type(ShapeType::Line)
            .x_ref("x domain")
            .x0(0.0)
            .x1(1.0)
            .y_ref("y")
            .y0(0.0)
            .y1(0.0)
            .line(ShapeLine::new().color("gray").width(1.0).dash(DashType::Dash))
            .opacity(0.5),
    );
    layout
}

/// `[min - pad, max + pad]` with `pad` a fraction of the span, or `None` for no values.
pub fn padded_range<I>(values: I, padding_ratio: f64) -> Option<[f64; 2]>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold(None, |bounds: Option<(f64, f64)>, value| match bounds {
            Some((min, max)) => Some((min.min(value), max.max(value))),
            None => Some((value, value)),
        })?;
    let padding = (max - min) * padding_ratio;
    Some([min - padding, max + padding])
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::Plot;
    use serde_json::Value;

    fn layout_json(layout: Layout) -> Value {
        let mut plot = Plot::new();
        plot.set_layout(layout);
        let json: Value = serde_json::from_str(&plot.to_json()).expect("plot json");
        json["layout"].clone()
    }

    #[test]
    fn padded_range_adds_five_percent_each_side() {
        let range = padded_range([1200.0, 2000.0, 1500.0], 0.05).expect("range");
        assert_eq!(range, [1160.0, 2040.0]);
        assert!(padded_range(Vec::new(), 0.05).is_none());
        assert_eq!(padded_range([7.0], 0.05), Some([7.0, 7.0]));
    }

    #[test]
    fn hover_text_lists_fields_in_reading_order() {
        let detail = HoverDetail {
            spanish_word: "ángel",
            english_word: "angel",
            spanish_year: 1140,
            english_year: 1175,
            time_gap: -35,
        };
        let text = detail.to_hover_text("Religion");

        assert!(text.starts_with("<b style=\"font-size:16px\">ángel / angel</b>"));
        assert!(text.contains("<b>Domain:</b> Religion"));
        assert!(text.contains("<b>English First Attestation:</b> 1175"));
        assert!(text.contains("<b>Spanish First Attestation:</b> 1140"));
        assert!(text.ends_with("<b>Time Gap:</b> -35 years"));
    }

    #[test]
    fn axes_without_range_fall_back_to_autorange() {
        let layout = layout_json(attestation_layout(None, Some([-10.0, 10.0])));

        assert_eq!(layout["xaxis"]["autorange"], true);
        assert!(layout["xaxis"].get("range").is_none());
        assert_eq!(layout["yaxis"]["autorange"], false);
        assert_eq!(layout["yaxis"]["range"][0], -10.0);
        assert_eq!(layout["yaxis"]["zeroline"], true);
        assert_eq!(layout["shapes"][0]["xref"], "x domain");
        assert_eq!(layout["shapes"][0]["line"]["dash"], "dash");
    }
}
