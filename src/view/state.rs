use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::view::lookup::{all_tabs, tab_descriptor};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Challenges,
    Sources,
    Entities,
    Populations,
}

impl Tab {
    pub fn id(self) -> &'static str {
        tab_descriptor(self).id
    }

    pub fn label(self) -> &'static str {
        tab_descriptor(self).label
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        all_tabs()
            .iter()
            .find(|d| d.id == wanted || d.label.to_lowercase() == wanted)
            .map(|d| d.tab)
            .ok_or_else(|| format!("unknown tab: {}", s.trim()))
    }
}

/// Session state: the active tab and the organism filter text. The filter is
/// kept across tab changes but only read by the entities view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub tab: Tab,
    pub filter: String,
}

impl ViewState {
    pub fn new(tab: Tab, filter: impl Into<String>) -> Self {
        Self {
            tab,
            filter: filter.into(),
        }
    }

    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn effective_filter(&self) -> &str {
        match self.tab {
            Tab::Entities => &self.filter,
            _ => "",
        }
    }
}
