use std::fs;
use std::path::Path;

use crate::dataset::validate::{ValidationReport, validate_dataset};
use crate::dataset::{Dataset, DatasetError, builtin_dataset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Builtin,
    File,
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub source: DatasetSource,
    pub report: ValidationReport,
}

pub fn load_dataset(path: Option<&Path>) -> Result<LoadedDataset, DatasetError> {
    let (dataset, source) = match path {
        Some(path) => {
            tracing::info!("loading dataset from {}", path.display());
            (read_dataset_json(path)?, DatasetSource::File)
        }
        None => (builtin_dataset(), DatasetSource::Builtin),
    };
    let report = validate_dataset(&dataset)?;
    Ok(LoadedDataset {
        dataset,
        source,
        report,
    })
}

pub fn read_dataset_json(path: &Path) -> Result<Dataset, DatasetError> {
    let text = fs::read_to_string(path)?;
    parse_dataset_json(&text)
}

pub fn parse_dataset_json(text: &str) -> Result<Dataset, DatasetError> {
    Ok(serde_json::from_str(text)?)
}
