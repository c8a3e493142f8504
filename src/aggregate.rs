use serde::Serialize;

use crate::dataset::{FundingSource, Organism, PopulationGroup, Program, Purpose};

pub const OTHERS_LABEL: &str = "Otros Organismos";

pub trait Budgeted {
    fn budget(&self) -> u64;
}

pub trait Named {
    fn name(&self) -> &str;
}

impl Budgeted for Organism {
    fn budget(&self) -> u64 {
        self.budget
    }
}

impl Named for Organism {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Budgeted for PopulationGroup {
    fn budget(&self) -> u64 {
        self.budget
    }
}

impl Budgeted for Program {
    fn budget(&self) -> u64 {
        self.budget
    }
}

impl Budgeted for FundingSource {
    fn budget(&self) -> u64 {
        self.value
    }
}

impl Budgeted for Purpose {
    fn budget(&self) -> u64 {
        self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OthersBucket {
    pub label: String,
    pub budget: u64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub top: Vec<T>,
    /// Always present; budget and count are zero when nothing was left over.
    pub others: OthersBucket,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Descending by budget. Stable: equal budgets keep their input order.
pub fn sort_descending_by_budget<T: Budgeted + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.budget().cmp(&a.budget()));
    sorted
}

pub fn top_and_others<T: Budgeted + Clone>(
    sorted: &[T],
    k: usize,
) -> Result<Partition<T>, AggregateError> {
    if k == 0 {
        return Err(AggregateError::InvalidArgument(
            "top-k size must be greater than zero".to_string(),
        ));
    }
    let split = k.min(sorted.len());
    let (top, rest) = sorted.split_at(split);
    Ok(Partition {
        top: top.to_vec(),
        others: OthersBucket {
            label: OTHERS_LABEL.to_string(),
            budget: total_budget(rest),
            count: rest.len(),
        },
    })
}

pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

pub fn filter_by_name_substring<T: Named + Clone>(records: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn total_budget<T: Budgeted>(records: &[T]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.budget()))
}

pub fn largest_budget<T: Budgeted>(records: &[T]) -> u64 {
    records.iter().map(Budgeted::budget).max().unwrap_or(0)
}

pub fn relative_widths<T: Budgeted>(records: &[T], reference: u64) -> Vec<f64> {
    records
        .iter()
        .map(|r| percentage_of(r.budget() as f64, reference as f64))
        .collect()
}

#[cfg(test)]
#[path = "../tests/src_inline/aggregate.rs"]
mod tests;
