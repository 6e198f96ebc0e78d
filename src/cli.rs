use crate::config::{AppConfig, PathsConfig};
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::dataset::{Column, WordPairDataset};
use crate::workflows::impact::ImpactReport;
use crate::workflows::plot::{write_interactive_plot, PlotConfig};
use crate::workflows::summary::{write_executive_summary, ExecutiveSummary};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "cognate-insights",
    about = "Impact metrics, executive summary and attestation plot for the cognate dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print the business impact metrics report
    Impact(ImpactArgs),
    /// Render the one-page executive summary PDF
    Summary(SummaryArgs),
    /// Build the interactive attestation plot
    Plot(PlotArgs),
    /// Run impact, summary and plot in order (default command)
    All,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
struct ImpactArgs {
    /// Override the configured dataset CSV
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
struct SummaryArgs {
    /// Override the configured PDF destination
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
struct PlotArgs {
    /// Override the configured dataset CSV
    #[arg(long)]
    data: Option<PathBuf>,
    /// Override the configured HTML destination
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "cognate insights starting");

    execute(cli.command.unwrap_or(Command::All), config.paths)
}

fn execute(command: Command, mut paths: PathsConfig) -> Result<(), AppError> {
    match command {
        Command::Impact(args) => {
            if let Some(data) = args.data {
                paths.data = data;
            }
            run_impact(&paths.data)
        }
        Command::Summary(args) => {
            if let Some(output) = args.output {
                paths.summary = output;
            }
            run_summary(&paths.summary)
        }
        Command::Plot(args) => {
            if let Some(data) = args.data {
                paths.data = data;
            }
            if let Some(output) = args.output {
                paths.plot = output;
            }
            run_plot(&paths.data, &paths.plot)
        }
        Command::All => {
            run_impact(&paths.data)?;
            run_summary(&paths.summary)?;
            run_plot(&paths.data, &paths.plot)
        }
    }
}

fn run_impact(data: &Path) -> Result<(), AppError> {
    let dataset = WordPairDataset::from_path(data, Column::IMPACT)?;
    let report = ImpactReport::compute(&dataset)?;
    print!("{report}");
    Ok(())
}

fn run_summary(output: &Path) -> Result<(), AppError> {
    let generated_on = Local::now().date_naive();
    write_executive_summary(&ExecutiveSummary::snapshot(), output, generated_on)?;
    println!("Executive summary PDF generated: {}", output.display());
    Ok(())
}

fn run_plot(data: &Path, output: &Path) -> Result<(), AppError> {
    let dataset = WordPairDataset::from_path(data, Column::PLOT)?;
    let figure = write_interactive_plot(&dataset, &PlotConfig::default(), output)?;
    info!(series = figure.series.len(), "interactive plot built");
    println!("Updated plot saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MASTERFRAME: &str = "\
english_word,spanish_word,relationship_type,cultural_domain,complexity_frequency_complexity,complexity_overall_complexity,levenshtein_similarity,first_attestation_english,first_attestation_spanish
angel,ángel,cognates,religion_spirituality,2.1,0.3,0.8,1175,1140
embarrassed,embarazada,false_friends,family_kinship,2.8,0.6,0.7,1670,1490
computer,computadora,cognates,technology_tools,1.9,0.4,0.6,1646,1950
";

    fn paths_in(dir: &Path) -> PathsConfig {
        let data = dir.join("masterframe.csv");
        fs::write(&data, MASTERFRAME).expect("fixture written");
        PathsConfig {
            data,
            summary: dir.join("docs").join("executive_summary.pdf"),
            plot: dir.join("plots").join("attestation.html"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_all_jobs() {
        let cli = Cli::try_parse_from(["cognate-insights"]).expect("parses");
        assert_eq!(cli.command.unwrap_or(Command::All), Command::All);
    }

    #[test]
    fn plot_accepts_data_and_output_overrides() {
        let cli = Cli::try_parse_from([
            "cognate-insights",
            "plot",
            "--data",
            "rows.csv",
            "--output",
            "out/plot.html",
        ])
        .expect("parses");

        assert_eq!(
            cli.command,
            Some(Command::Plot(PlotArgs {
                data: Some(PathBuf::from("rows.csv")),
                output: Some(PathBuf::from("out/plot.html")),
            }))
        );
        assert!(Cli::try_parse_from(["cognate-insights", "summary", "--data", "x.csv"]).is_err());
    }

    #[test]
    fn all_jobs_write_both_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = paths_in(dir.path());

        execute(Command::All, paths.clone()).expect("all jobs succeed");

        assert!(fs::read(&paths.summary)
            .expect("pdf written")
            .starts_with(b"%PDF-"));
        let html = fs::read_to_string(&paths.plot).expect("html written");
        assert!(html.contains("\"Religion\""));
        assert!(html.contains("\"Technology\""));
    }

    #[test]
    fn flag_overrides_configured_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = paths_in(dir.path());
        let output = dir.path().join("override.html");

        execute(
            Command::Plot(PlotArgs {
                data: None,
                output: Some(output.clone()),
            }),
            paths.clone(),
        )
        .expect("plot succeeds");

        assert!(output.exists());
        assert!(!paths.plot.exists());
    }

    #[test]
    fn missing_dataset_surfaces_as_dataset_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut paths = paths_in(dir.path());
        paths.data = dir.path().join("absent.csv");

        let error = execute(Command::Impact(ImpactArgs::default()), paths)
            .expect_err("missing file fails");
        assert!(matches!(error, AppError::Dataset(_)));
    }
}
