pub mod builtin;
pub mod loader;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use builtin::builtin_dataset;
pub use loader::load_dataset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub value: u64,
    /// Share of the whole POAI investment, not of the parent purpose.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purpose {
    pub name: String,
    pub value: u64,
    pub percentage: f64,
    pub description: String,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub name: String,
    pub projects: u32,
    pub budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    pub name: String,
    pub value: u64,
    pub percentage: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationGroup {
    pub name: String,
    pub budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub budget: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetComponent {
    pub title: String,
    pub value: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub decree: String,
    pub total_budget: u64,
    pub poai_investment: u64,
    pub poai_previous: u64,
    pub growth_percentage: f64,
    pub composition: Vec<BudgetComponent>,
    pub purposes: Vec<Purpose>,
    pub organisms: Vec<Organism>,
    pub funding_sources: Vec<FundingSource>,
    pub population_groups: Vec<PopulationGroup>,
    pub programs: Vec<Program>,
}

const CREDIT_MARKERS: &[&str] = &["Crédito", "Empréstito"];
const UNRESTRICTED_MARKERS: &[&str] = &["ICLD", "Libre"];
const FREE_ALLOCATION_MARKERS: &[&str] = &["Libre"];
const CREDIT_FALLBACK_INDEX: usize = 3;
const UNRESTRICTED_FALLBACK_INDEX: usize = 1;

impl Dataset {
    // Falls back to the conventional position in the funding table.
    pub fn credit_source(&self) -> Option<&FundingSource> {
        find_source(
            &self.funding_sources,
            CREDIT_MARKERS,
            CREDIT_FALLBACK_INDEX,
        )
    }

    pub fn unrestricted_source(&self) -> Option<&FundingSource> {
        find_source(
            &self.funding_sources,
            UNRESTRICTED_MARKERS,
            UNRESTRICTED_FALLBACK_INDEX,
        )
    }
}

pub fn is_credit_source(source: &FundingSource) -> bool {
    name_has_marker(&source.name, CREDIT_MARKERS)
}

pub fn is_free_allocation_source(source: &FundingSource) -> bool {
    name_has_marker(&source.name, FREE_ALLOCATION_MARKERS)
}

fn name_has_marker(name: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| name.contains(m))
}

fn find_source<'a>(
    sources: &'a [FundingSource],
    markers: &[&str],
    fallback: usize,
) -> Option<&'a FundingSource> {
    sources
        .iter()
        .find(|s| name_has_marker(&s.name, markers))
        .or_else(|| sources.get(fallback))
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dataset: {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl DatasetError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DatasetError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dataset/tests.rs"]
mod tests;
