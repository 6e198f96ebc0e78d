use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::dataset::DatasetError;
use crate::workflows::impact::ImpactError;
use crate::workflows::plot::PlotError;
use crate::workflows::summary::SummaryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Dataset(DatasetError),
    Impact(ImpactError),
    Summary(SummaryError),
    Plot(PlotError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Dataset(err) => write!(f, "dataset error: {}", err),
            AppError::Impact(err) => write!(f, "impact metrics error: {}", err),
            AppError::Summary(err) => write!(f, "executive summary error: {}", err),
            AppError::Plot(err) => write!(f, "plot error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::Impact(err) => Some(err),
            AppError::Summary(err) => Some(err),
            AppError::Plot(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<ImpactError> for AppError {
    fn from(value: ImpactError) -> Self {
        Self::Impact(value)
    }
}

impl From<SummaryError> for AppError {
    fn from(value: SummaryError) -> Self {
        Self::Summary(value)
    }
}

impl From<PlotError> for AppError {
    fn from(value: PlotError) -> Self {
        Self::Plot(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::dataset::Column;

    #[test]
    fn display_prefixes_the_failing_stage() {
        let error = AppError::from(DatasetError::MissingColumn {
            column: Column::CulturalDomain,
        });
        assert_eq!(
            error.to_string(),
            "dataset error: dataset is missing required column 'cultural_domain'"
        );

        let error = AppError::from(ImpactError::EmptyDataset);
        assert!(error.to_string().starts_with("impact metrics error: "));
        assert!(std::error::Error::source(&error).is_some());
    }
}
