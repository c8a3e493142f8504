use crate::dataset::{
    BudgetComponent, Challenge, Dataset, FundingSource, Organism, PopulationGroup, Program,
    Purpose,
};

const DECREE: &str = "Decreto No. 4112.010.20.1049 de 2025 (Diciembre 17)";
const TOTAL_BUDGET: u64 = 7_770_567_471_543;
const POAI_INVESTMENT: u64 = 5_969_056_777_143;
const POAI_PREVIOUS: u64 = 4_529_018_194_762;
const GROWTH_PERCENTAGE: f64 = 31.80;

#[derive(Debug, Clone, Copy)]
struct ChallengeDef {
    name: &'static str,
    value: u64,
    percentage: f64,
}

#[derive(Debug, Clone, Copy)]
struct PurposeDef {
    name: &'static str,
    value: u64,
    percentage: f64,
    description: &'static str,
    challenges: &'static [ChallengeDef],
}

const COMPOSITION: &[(&str, u64, f64)] = &[
    ("Inversión", 6_032_669_271_143, 77.6),
    ("Funcionamiento", 1_452_241_028_271, 18.7),
    ("Servicio Deuda", 285_457_172_129, 3.7),
];

const PURPOSES: &[PurposeDef] = &[
    PurposeDef {
        name: "Cali Reconciliada",
        value: 4_336_729_074_303,
        percentage: 72.65,
        description: "Orientado a promover la convivencia, la seguridad y la reconciliación social mediante el cierre de brechas y la generación de oportunidades.",
        challenges: &[
            ChallengeDef {
                name: "Oportunidades para Integración Social and Económica",
                value: 3_860_295_804_762,
                percentage: 64.67,
            },
            ChallengeDef {
                name: "Seguridad, Convivencia y Justicia",
                value: 476_433_269_541,
                percentage: 7.98,
            },
        ],
    },
    PurposeDef {
        name: "Cali Renovada y Sostenible",
        value: 1_341_187_650_613,
        percentage: 22.47,
        description: "Busca un crecimiento urbano ordenado, respetuoso con el medio ambiente, mejorando la movilidad y la resiliencia del territorio.",
        challenges: &[
            ChallengeDef {
                name: "Territorio Planificado y Conectado",
                value: 1_196_432_457_358,
                percentage: 20.04,
            },
            ChallengeDef {
                name: "Territorio Resiliente y Biodiverso",
                value: 144_755_193_255,
                percentage: 2.43,
            },
        ],
    },
    PurposeDef {
        name: "Cali con Buen Gobierno",
        value: 291_140_052_227,
        percentage: 4.88,
        description: "Modernización de la administración para una gestión pública eficiente, transparente y cercana al ciudadano.",
        challenges: &[
            ChallengeDef {
                name: "Gestión pública para los ciudadanos",
                value: 230_298_175_082,
                percentage: 3.86,
            },
            ChallengeDef {
                name: "Gobierno abierto y transparente",
                value: 60_841_877_145,
                percentage: 1.02,
            },
        ],
    },
];

// name, projects, budget; source order, not sorted.
const ORGANISMS: &[(&str, u32, u64)] = &[
    ("Secretaría de Salud Pública", 33, 1_826_907_812_426),
    ("Secretaría de Educación", 50, 1_399_217_667_804),
    ("Unidad Esp. Servicios Públicos", 30, 514_468_650_557),
    ("Secretaría de Movilidad", 9, 466_608_504_882),
    ("Secretaría de Infraestructura", 23, 373_182_960_177),
    ("Secretaría de Bienestar Social", 42, 293_547_423_340),
    ("Secretaría de Seguridad y Justicia", 14, 185_497_132_635),
    ("Secretaría de Deporte y Recreación", 78, 155_292_755_328),
    ("Secretaría de Desarrollo Económico", 50, 136_516_286_171),
    ("Secretaría de Cultura", 71, 138_226_970_721),
    ("Secretaría de Vivienda Social", 7, 50_840_808_319),
    ("DAGMA", 44, 57_360_554_910),
    ("Planeación Financiera y Sostenibilidad Fiscal", 11, 46_175_390_396),
    ("Secretaría de TIC", 10, 45_465_636_085),
    ("Secretaría de Gobierno", 4, 35_425_318_950),
    ("Subdirección de Finanzas", 6, 24_073_518_100),
];

const FUNDING_SOURCES: &[(&str, u64, f64, &str)] = &[
    (
        "SGP (Nación)",
        1_873_002_982_355,
        31.38,
        "Sistema General de Participaciones.",
    ),
    (
        "Recursos Propios (Libre Destinación)",
        987_373_744_482,
        16.54,
        "Impuestos locales (Predial e ICA).",
    ),
    (
        "Recursos Propios (Destinación Específica)",
        1_067_595_187_149,
        17.89,
        "Estampillas, sobretasas y multas.",
    ),
    (
        "Empréstito (Crédito)",
        789_880_636_152,
        13.23,
        "Crédito interno para inversión (No recurrente).",
    ),
    (
        "Otros Recursos (Destinación Específica)",
        1_251_204_227_005,
        20.96,
        "Rentas con destinación legal.",
    ),
];

const POPULATION_GROUPS: &[(&str, u64)] = &[
    ("Niños, Niñas y Jóvenes", 724_000_173_657),
    ("Etnias", 105_903_213_103),
    ("Adulto Mayor", 44_446_649_785),
    ("Mujeres", 32_257_686_891),
    ("Víctimas", 18_482_441_789),
];

const PROGRAMS: &[(&str, u64, f64)] = &[
    ("Salud Integral y de Calidad", 1_812_098_103_592, 30.36),
    ("Cali Educada", 1_251_240_059_614, 20.96),
    ("Movilidad Segura y Sostenible", 820_608_722_156, 13.75),
    ("Atención Integral a Poblaciones", 208_683_817_779, 3.50),
    ("Hambre Cero", 228_212_438_335, 3.82),
];

pub fn builtin_dataset() -> Dataset {
    Dataset {
        decree: DECREE.to_string(),
        total_budget: TOTAL_BUDGET,
        poai_investment: POAI_INVESTMENT,
        poai_previous: POAI_PREVIOUS,
        growth_percentage: GROWTH_PERCENTAGE,
        composition: COMPOSITION
            .iter()
            .map(|&(title, value, percentage)| BudgetComponent {
                title: title.to_string(),
                value,
                percentage,
            })
            .collect(),
        purposes: PURPOSES.iter().map(purpose_from_def).collect(),
        organisms: ORGANISMS
            .iter()
            .map(|&(name, projects, budget)| Organism {
                name: name.to_string(),
                projects,
                budget,
            })
            .collect(),
        funding_sources: FUNDING_SOURCES
            .iter()
            .map(|&(name, value, percentage, description)| FundingSource {
                name: name.to_string(),
                value,
                percentage,
                description: description.to_string(),
            })
            .collect(),
        population_groups: POPULATION_GROUPS
            .iter()
            .map(|&(name, budget)| PopulationGroup {
                name: name.to_string(),
                budget,
            })
            .collect(),
        programs: PROGRAMS
            .iter()
            .map(|&(name, budget, percentage)| Program {
                name: name.to_string(),
                budget,
                percentage,
            })
            .collect(),
    }
}

fn purpose_from_def(def: &PurposeDef) -> Purpose {
    Purpose {
        name: def.name.to_string(),
        value: def.value,
        percentage: def.percentage,
        description: def.description.to_string(),
        challenges: def
            .challenges
            .iter()
            .map(|c| Challenge {
                name: c.name.to_string(),
                value: c.value,
                percentage: c.percentage,
            })
            .collect(),
    }
}
