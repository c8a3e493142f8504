use std::collections::BTreeSet;

use crate::dataset::{Dataset, DatasetError};

pub const PERCENT_SUM_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

pub fn validate_dataset(dataset: &Dataset) -> Result<ValidationReport, DatasetError> {
    let mut report = ValidationReport::default();

    check_finite("growth_percentage", dataset.growth_percentage)?;

    for (i, c) in dataset.composition.iter().enumerate() {
        check_name(&format!("composition[{i}].title"), &c.title)?;
        check_percentage(&format!("composition[{i}].percentage"), c.percentage)?;
    }

    for (i, p) in dataset.purposes.iter().enumerate() {
        check_name(&format!("purposes[{i}].name"), &p.name)?;
        check_percentage(&format!("purposes[{i}].percentage"), p.percentage)?;
        for (j, c) in p.challenges.iter().enumerate() {
            let field = format!("purposes[{i}].challenges[{j}]");
            check_name(&format!("{field}.name"), &c.name)?;
            check_percentage(&format!("{field}.percentage"), c.percentage)?;
            if c.value > p.value {
                return Err(DatasetError::invalid(
                    format!("{field}.value"),
                    format!(
                        "challenge value {} exceeds purpose value {}",
                        c.value, p.value
                    ),
                ));
            }
        }
    }
    check_percent_sum(
        "purposes",
        dataset.purposes.iter().map(|p| p.percentage),
    )?;

    for (i, s) in dataset.funding_sources.iter().enumerate() {
        check_name(&format!("funding_sources[{i}].name"), &s.name)?;
        check_percentage(&format!("funding_sources[{i}].percentage"), s.percentage)?;
    }
    check_percent_sum(
        "funding_sources",
        dataset.funding_sources.iter().map(|s| s.percentage),
    )?;
    if dataset.credit_source().is_none() {
        return Err(DatasetError::invalid(
            "funding_sources",
            "no credit source found by name or position",
        ));
    }
    if dataset.unrestricted_source().is_none() {
        return Err(DatasetError::invalid(
            "funding_sources",
            "no unrestricted (ICLD) source found by name or position",
        ));
    }

    let mut seen = BTreeSet::new();
    for (i, o) in dataset.organisms.iter().enumerate() {
        check_name(&format!("organisms[{i}].name"), &o.name)?;
        if !seen.insert(o.name.as_str()) {
            let msg = format!("duplicate organism name: {}", o.name);
            tracing::warn!("{msg}");
            report.warnings.push(msg);
        }
    }

    for (i, g) in dataset.population_groups.iter().enumerate() {
        check_name(&format!("population_groups[{i}].name"), &g.name)?;
    }

    for (i, p) in dataset.programs.iter().enumerate() {
        check_name(&format!("programs[{i}].name"), &p.name)?;
        check_percentage(&format!("programs[{i}].percentage"), p.percentage)?;
    }

    tracing::debug!(
        purposes = dataset.purposes.len(),
        organisms = dataset.organisms.len(),
        funding_sources = dataset.funding_sources.len(),
        warnings = report.warnings.len(),
        "dataset validated"
    );
    Ok(report)
}

fn check_name(field: &str, name: &str) -> Result<(), DatasetError> {
    if name.trim().is_empty() {
        return Err(DatasetError::invalid(field, "name is empty"));
    }
    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), DatasetError> {
    if !value.is_finite() {
        return Err(DatasetError::invalid(field, "value is not finite"));
    }
    Ok(())
}

fn check_percentage(field: &str, value: f64) -> Result<(), DatasetError> {
    check_finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(DatasetError::invalid(
            field,
            format!("percentage {value} outside [0, 100]"),
        ));
    }
    Ok(())
}

fn check_percent_sum(
    field: &str,
    values: impl Iterator<Item = f64>,
) -> Result<(), DatasetError> {
    let mut count = 0usize;
    let mut sum = 0.0f64;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        return Ok(());
    }
    if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        return Err(DatasetError::invalid(
            field,
            format!("percentages sum to {sum:.2}, expected 100"),
        ));
    }
    Ok(())
}
