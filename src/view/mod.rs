pub mod lookup;
pub mod state;

use serde::Serialize;

use crate::aggregate::{
    AggregateError, Named, filter_by_name_substring, largest_budget, percentage_of, relative_widths,
    sort_descending_by_budget, top_and_others, total_budget,
};
use crate::dataset::{
    Dataset, FundingSource, Organism, is_credit_source, is_free_allocation_source,
};
use crate::format::{format_currency, format_plain_percent, format_scaled, format_share};
use lookup::{
    CREDIT_COLOR, UNRESTRICTED_COLOR, palette_color, purpose_icon, tab_descriptor,
};
pub use state::{Tab, ViewState};

pub const CHART_TOP_K: usize = 7;
pub const TOP_PROGRAM_CARDS: usize = 4;
pub const TABLE_SHARE_DECIMALS: usize = 1;
pub const SLICE_SHARE_DECIMALS: usize = 2;

const CREDIT_NOTE: &str = "Este incremento histórico está vinculado directamente a recursos del crédito ({credit}). Al tratarse de fuentes extraordinarias, el cumplimiento de los retos estratégicos en 2026 presenta una alta dependencia de financiación que no se repetirá estructuralmente en las siguientes vigencias.";
const PROGRAMS_NOTE: &str = "La inversión en estos sectores estratégicos requiere una planeación fiscal rigurosa ante la finitud de las fuentes de crédito.";
const SOURCES_CONCLUSION: &str = "La baja participación de los ICLD ({icld}) exige que el Distrito fortalezca el ahorro recurrente para no depender exclusivamente de deuda en vigencias futuras.";
const POPULATIONS_NOTE: &str = "El Plan Operativo Anual de Inversiones (POAI) 2026 garantiza que los recursos se destinen a mejorar la calidad de vida de quienes más lo necesitan, priorizando salud y educación como ejes de reconciliación.";

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error("dataset has no {0} funding source")]
    MissingSource(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    pub value: u64,
    pub currency: String,
    pub scaled: String,
}

impl Money {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            currency: format_currency(value),
            scaled: format_scaled(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: String,
    pub amount: Money,
    pub share: f64,
    pub share_label: String,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub tab: Tab,
    pub tab_label: &'static str,
    pub tab_icon: &'static str,
    pub heading: &'static str,
    pub total_investment: Money,
    pub decree: String,
    pub body: TabView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TabView {
    Overview(OverviewView),
    Challenges(ChallengesView),
    Sources(SourcesView),
    Entities(EntitiesView),
    Populations(PopulationsView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionCard {
    pub title: String,
    pub amount: Money,
    pub percentage_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramCard {
    pub name: String,
    pub amount: Money,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub composition: Vec<CompositionCard>,
    pub purpose_slices: Vec<Slice>,
    pub flagship: Option<ProgramCard>,
    pub runner_up: Option<ProgramCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceHighlight {
    pub name: String,
    pub amount: Money,
    pub percentage_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeRow {
    pub ordinal: String,
    pub name: String,
    pub amount: Money,
    pub percentage_label: String,
    /// Share of the whole investment, as published.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurposeCard {
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub amount: Money,
    pub percentage_label: String,
    pub challenges: Vec<ChallengeRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengesView {
    pub growth_label: String,
    pub previous_investment: Money,
    pub credit: SourceHighlight,
    pub credit_note: String,
    pub top_programs: Vec<ProgramCard>,
    pub programs_note: &'static str,
    pub purposes: Vec<PurposeCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcesView {
    pub credit: SourceHighlight,
    pub unrestricted: SourceHighlight,
    pub conclusion: String,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganismRow {
    pub rank: usize,
    pub name: String,
    pub projects: u32,
    pub amount: Money,
    pub share: f64,
    pub share_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitiesView {
    pub filter: String,
    pub matched: usize,
    pub total_count: usize,
    pub total: Money,
    pub rows: Vec<OrganismRow>,
    pub chart: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationRow {
    pub name: String,
    pub amount: Money,
    pub width: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationsView {
    pub total: Money,
    pub groups: Vec<PopulationRow>,
    pub note: &'static str,
}

#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    dataset: &'a Dataset,
    organisms_sorted: Vec<Organism>,
    organisms_total: u64,
}

impl<'a> Dashboard<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        let organisms_sorted = sort_descending_by_budget(&dataset.organisms);
        let organisms_total = total_budget(&organisms_sorted);
        Self {
            dataset,
            organisms_sorted,
            organisms_total,
        }
    }

    pub fn organisms_sorted(&self) -> &[Organism] {
        &self.organisms_sorted
    }

    pub fn render(&self, state: &ViewState) -> Result<View, ViewError> {
        let body = match state.tab {
            Tab::Overview => TabView::Overview(self.overview()),
            Tab::Challenges => TabView::Challenges(self.challenges()?),
            Tab::Sources => TabView::Sources(self.sources()?),
            Tab::Entities => TabView::Entities(self.entities(state.effective_filter())?),
            Tab::Populations => TabView::Populations(self.populations()),
        };
        let descriptor = tab_descriptor(state.tab);
        Ok(View {
            tab: state.tab,
            tab_label: descriptor.label,
            tab_icon: descriptor.icon,
            heading: descriptor.heading,
            total_investment: Money::new(self.dataset.poai_investment),
            decree: self.dataset.decree.clone(),
            body,
        })
    }

    fn overview(&self) -> OverviewView {
        let ds = self.dataset;
        let composition = ds
            .composition
            .iter()
            .map(|c| CompositionCard {
                title: c.title.clone(),
                amount: Money::new(c.value),
                percentage_label: format_plain_percent(c.percentage),
            })
            .collect();

        let purposes_total = total_budget(&ds.purposes) as f64;
        let purpose_slices = ds
            .purposes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let share = percentage_of(p.value as f64, purposes_total);
                Slice {
                    name: p.name.clone(),
                    amount: Money::new(p.value),
                    share,
                    share_label: format_share(share, SLICE_SHARE_DECIMALS),
                    color: palette_color(i),
                    description: None,
                }
            })
            .collect();

        let ranked = sort_descending_by_budget(&ds.programs);
        let reference = ranked.first().map(|p| p.budget).unwrap_or(0);
        let card = |idx: usize| {
            ranked.get(idx).map(|p| ProgramCard {
                name: p.name.clone(),
                amount: Money::new(p.budget),
                width: percentage_of(p.budget as f64, reference as f64),
            })
        };

        OverviewView {
            composition,
            purpose_slices,
            flagship: card(0),
            runner_up: card(1),
        }
    }

    fn challenges(&self) -> Result<ChallengesView, ViewError> {
        let ds = self.dataset;
        let credit = ds.credit_source().ok_or(ViewError::MissingSource("credit"))?;

        // Widths are relative to the first program as listed, not the largest.
        let shown = &ds.programs[..TOP_PROGRAM_CARDS.min(ds.programs.len())];
        let reference = shown.first().map(|p| p.budget).unwrap_or(0);
        let widths = relative_widths(shown, reference);
        let top_programs = shown
            .iter()
            .zip(widths)
            .map(|(p, width)| ProgramCard {
                name: p.name.clone(),
                amount: Money::new(p.budget),
                width,
            })
            .collect();

        let purposes = ds
            .purposes
            .iter()
            .enumerate()
            .map(|(i, p)| PurposeCard {
                name: p.name.clone(),
                description: p.description.clone(),
                icon: purpose_icon(i),
                amount: Money::new(p.value),
                percentage_label: format_plain_percent(p.percentage),
                challenges: p
                    .challenges
                    .iter()
                    .enumerate()
                    .map(|(j, c)| ChallengeRow {
                        ordinal: format!("RETO {}", j + 1),
                        name: c.name.clone(),
                        amount: Money::new(c.value),
                        percentage_label: format_plain_percent(c.percentage),
                        width: c.percentage,
                    })
                    .collect(),
            })
            .collect();

        Ok(ChallengesView {
            growth_label: format_plain_percent(ds.growth_percentage),
            previous_investment: Money::new(ds.poai_previous),
            credit_note: CREDIT_NOTE.replace("{credit}", &format_scaled(credit.value)),
            credit: highlight(credit),
            top_programs,
            programs_note: PROGRAMS_NOTE,
            purposes,
        })
    }

    fn sources(&self) -> Result<SourcesView, ViewError> {
        let ds = self.dataset;
        let credit = ds.credit_source().ok_or(ViewError::MissingSource("credit"))?;
        let unrestricted = ds
            .unrestricted_source()
            .ok_or(ViewError::MissingSource("unrestricted"))?;

        let total = total_budget(&ds.funding_sources) as f64;
        let slices = ds
            .funding_sources
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let share = percentage_of(s.value as f64, total);
                Slice {
                    name: s.name.clone(),
                    amount: Money::new(s.value),
                    share,
                    share_label: format_share(share, SLICE_SHARE_DECIMALS),
                    color: source_color(i, s),
                    description: Some(s.description.clone()),
                }
            })
            .collect();

        Ok(SourcesView {
            conclusion: SOURCES_CONCLUSION
                .replace("{icld}", &format_plain_percent(unrestricted.percentage)),
            credit: highlight(credit),
            unrestricted: highlight(unrestricted),
            slices,
        })
    }

    fn entities(&self, filter: &str) -> Result<EntitiesView, ViewError> {
        let total = self.organisms_total as f64;
        let ranked = self
            .organisms_sorted
            .iter()
            .enumerate()
            .map(|(i, organism)| Ranked {
                rank: i + 1,
                organism,
            })
            .collect::<Vec<_>>();
        let matched = filter_by_name_substring(&ranked, filter);
        let rows = matched
            .iter()
            .map(|&Ranked { rank, organism: o }| {
                let share = percentage_of(o.budget as f64, total);
                OrganismRow {
                    rank,
                    name: o.name.clone(),
                    projects: o.projects,
                    amount: Money::new(o.budget),
                    share,
                    share_label: format_share(share, TABLE_SHARE_DECIMALS),
                }
            })
            .collect::<Vec<_>>();

        let partition = top_and_others(&self.organisms_sorted, CHART_TOP_K)?;
        let mut chart = partition
            .top
            .iter()
            .enumerate()
            .map(|(i, o)| chart_slice(&o.name, o.budget, total, i))
            .collect::<Vec<_>>();
        if partition.others.count > 0 {
            chart.push(chart_slice(
                &partition.others.label,
                partition.others.budget,
                total,
                chart.len(),
            ));
        }

        Ok(EntitiesView {
            filter: filter.to_string(),
            matched: rows.len(),
            total_count: self.organisms_sorted.len(),
            total: Money::new(self.organisms_total),
            rows,
            chart,
        })
    }

    fn populations(&self) -> PopulationsView {
        let groups = &self.dataset.population_groups;
        let widths = relative_widths(groups, largest_budget(groups));
        PopulationsView {
            total: Money::new(total_budget(groups)),
            groups: groups
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (g, width))| PopulationRow {
                    name: g.name.clone(),
                    amount: Money::new(g.budget),
                    width,
                    color: palette_color(i),
                })
                .collect(),
            note: POPULATIONS_NOTE,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Ranked<'a> {
    rank: usize,
    organism: &'a Organism,
}

impl Named for Ranked<'_> {
    fn name(&self) -> &str {
        &self.organism.name
    }
}

fn highlight(source: &FundingSource) -> SourceHighlight {
    SourceHighlight {
        name: source.name.clone(),
        amount: Money::new(source.value),
        percentage_label: format_plain_percent(source.percentage),
    }
}

fn source_color(index: usize, source: &FundingSource) -> &'static str {
    if is_credit_source(source) {
        CREDIT_COLOR
    } else if is_free_allocation_source(source) {
        UNRESTRICTED_COLOR
    } else {
        palette_color(index)
    }
}

fn chart_slice(name: &str, budget: u64, total: f64, index: usize) -> Slice {
    let share = percentage_of(budget as f64, total);
    Slice {
        name: name.to_string(),
        amount: Money::new(budget),
        share,
        share_label: format_share(share, SLICE_SHARE_DECIMALS),
        color: palette_color(index),
        description: None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/view/tests.rs"]
mod tests;
