use crate::view::state::Tab;

#[derive(Debug, Clone, Copy)]
pub struct TabDescriptor {
    pub tab: Tab,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
}

const DEFAULT_HEADING: &str = "Cali 2026: Dashboard Ejecutivo";

const TABS: &[TabDescriptor] = &[
    TabDescriptor {
        tab: Tab::Overview,
        id: "overview",
        label: "Resumen",
        icon: "newspaper",
        heading: DEFAULT_HEADING,
    },
    TabDescriptor {
        tab: Tab::Challenges,
        id: "challenges",
        label: "Propósitos",
        icon: "target",
        heading: "Propósitos y Estructura de Inversión",
    },
    TabDescriptor {
        tab: Tab::Sources,
        id: "sources",
        label: "Fuentes",
        icon: "coins",
        heading: "Análisis de Fuentes 2026",
    },
    TabDescriptor {
        tab: Tab::Entities,
        id: "entities",
        label: "Inversión",
        icon: "building",
        heading: DEFAULT_HEADING,
    },
    TabDescriptor {
        tab: Tab::Populations,
        id: "populations",
        label: "Social",
        icon: "users",
        heading: DEFAULT_HEADING,
    },
];

pub fn all_tabs() -> &'static [TabDescriptor] {
    TABS
}

pub fn tab_descriptor(tab: Tab) -> &'static TabDescriptor {
    match tab {
        Tab::Overview => &TABS[0],
        Tab::Challenges => &TABS[1],
        Tab::Sources => &TABS[2],
        Tab::Entities => &TABS[3],
        Tab::Populations => &TABS[4],
    }
}

pub const PALETTE: &[&str] = &[
    "#086474", "#5c6c24", "#3b82f6", "#ef4444", "#8b5cf6", "#6366f1", "#ec4899", "#f59e0b",
];
pub const CREDIT_COLOR: &str = "#ef4444";
pub const UNRESTRICTED_COLOR: &str = "#f59e0b";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

const PURPOSE_ICONS: &[&str] = &["heart", "layout-dashboard"];
const PURPOSE_ICON_FALLBACK: &str = "shield-check";

pub fn purpose_icon(index: usize) -> &'static str {
    PURPOSE_ICONS
        .get(index)
        .copied()
        .unwrap_or(PURPOSE_ICON_FALLBACK)
}
