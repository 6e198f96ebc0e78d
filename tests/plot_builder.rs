use cognate_insights::workflows::dataset::{Column, WordPairDataset};
use cognate_insights::workflows::plot::{build_figure, write_interactive_plot, PlotConfig};
use std::io::Cursor;

const RELIGION_ONLY: &str = "\
english_word,spanish_word,cultural_domain,first_attestation_english,first_attestation_spanish,levenshtein_similarity,complexity_overall_complexity
angel,ángel,religion_spirituality,1175,1140,0.8,0.3
bishop,obispo,religion_spirituality,,1100,0.4,0.5
priest,presbítero,religion_spirituality,1000,1220.0,0.2,0.6
mother,madre,family_kinship,900,1050,0.5,0.2
";

fn dataset() -> WordPairDataset {
    WordPairDataset::from_reader(Cursor::new(RELIGION_ONLY), Column::PLOT).expect("dataset parses")
}

#[test]
fn domain_without_rows_has_no_series() {
    let figure = build_figure(&dataset(), &PlotConfig::default());

    assert_eq!(figure.series.len(), 1);
    assert!(figure.series("Technology").is_none());
    let religion = figure.series("Religion").expect("religion series present");
    assert_eq!(religion.points.len(), 2);
}

#[test]
fn row_missing_english_year_never_reaches_a_series() {
    let figure = build_figure(&dataset(), &PlotConfig::default());

    let hover: Vec<&String> = figure
        .series
        .iter()
        .flat_map(|series| series.hover_text.iter())
        .collect();
    assert_eq!(hover.len(), 2);
    assert!(hover[0].contains("<b>English Word:</b> angel"));
    assert!(hover[1].contains("<b>English Word:</b> priest"));
    assert!(hover[1].contains("<b>Time Gap:</b> 220 years"));
    assert!(hover.iter().all(|text| !text.contains("bishop")));
}

#[test]
fn figure_is_reproducible_for_a_fixed_seed() {
    let first = build_figure(&dataset(), &PlotConfig::default());
    let second = build_figure(&dataset(), &PlotConfig::default());

    assert_eq!(first.series, second.series);
    assert_eq!(first.x_range, second.x_range);
    assert_eq!(first.plot.to_json(), second.plot.to_json());
}

#[test]
fn writes_standalone_page_into_nested_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("assets").join("interactive_option_8_enhanced.html");

    write_interactive_plot(&dataset(), &PlotConfig::default(), &path).expect("plot written");

    let html = std::fs::read_to_string(&path).expect("html readable");
    assert!(html.contains("<html"));
    assert!(html.to_lowercase().contains("plotly"));
    assert!(html.contains("priest"));
    assert!(!html.contains("\"Technology\""));
}
