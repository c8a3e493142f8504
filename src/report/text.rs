use crate::report::{bar, format_width};
use crate::view::{
    ChallengesView, EntitiesView, OverviewView, PopulationsView, Slice, SourcesView, TabView,
    View,
};

const BAR_CELLS: usize = 20;

pub fn render_view_text(view: &View) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", view.heading));
    out.push_str(&"=".repeat(view.heading.chars().count()));
    out.push('\n');
    out.push_str(&format!(
        "[{}] Total inversión: {}\n\n",
        view.tab_label.to_uppercase(),
        view.total_investment.scaled
    ));

    match &view.body {
        TabView::Overview(v) => render_overview(&mut out, v),
        TabView::Challenges(v) => render_challenges(&mut out, v),
        TabView::Sources(v) => render_sources(&mut out, v),
        TabView::Entities(v) => render_entities(&mut out, v),
        TabView::Populations(v) => render_populations(&mut out, v),
    }

    out.push_str(&format!("\n{}\n", view.decree));
    out
}

fn render_overview(out: &mut String, v: &OverviewView) {
    out.push_str("1. Composición del presupuesto\n");
    for card in &v.composition {
        out.push_str(&format!(
            "{}: {} ({})\n",
            card.title, card.amount.currency, card.percentage_label
        ));
    }
    out.push('\n');

    out.push_str("2. Distribución por propósitos\n");
    push_slices(out, &v.purpose_slices);
    out.push('\n');

    out.push_str("3. Inversión bandera 2026\n");
    if let Some(flagship) = &v.flagship {
        out.push_str(&format!(
            "{}: {}\n",
            flagship.name, flagship.amount.scaled
        ));
    }
    if let Some(runner_up) = &v.runner_up {
        out.push_str(&format!(
            "{}: {}\n",
            runner_up.name, runner_up.amount.scaled
        ));
    }
}

fn render_challenges(out: &mut String, v: &ChallengesView) {
    out.push_str("1. Crecimiento de la inversión\n");
    out.push_str(&format!(
        "Crecimiento: {} (POAI anterior: {})\n",
        v.growth_label, v.previous_investment.scaled
    ));
    out.push_str("Recursos no recurrentes\n");
    out.push_str(&format!("Nota técnica: {}\n\n", v.credit_note));

    out.push_str("2. Programas con mayor apropiación\n");
    for p in &v.top_programs {
        out.push_str(&format!(
            "{} {:>8}  {}\n",
            bar(p.width, BAR_CELLS),
            p.amount.scaled,
            p.name
        ));
    }
    out.push_str(&format!("{}\n\n", v.programs_note));

    out.push_str("3. Propósitos y retos estratégicos\n");
    for purpose in &v.purposes {
        out.push_str(&format!(
            "\n{} [{}] {} del POAI, {}\n",
            purpose.name, purpose.icon, purpose.percentage_label, purpose.amount.currency
        ));
        out.push_str(&format!("  {}\n", purpose.description));
        for c in &purpose.challenges {
            out.push_str(&format!(
                "  {} {} {:>7}  {}\n",
                c.ordinal,
                bar(c.width, BAR_CELLS),
                c.percentage_label,
                c.name
            ));
            out.push_str(&format!("         Presupuesto: {}\n", c.amount.currency));
        }
    }
}

fn render_sources(out: &mut String, v: &SourcesView) {
    out.push_str("1. Sostenibilidad de fuentes\n");
    out.push_str(&format!(
        "Dependencia del crédito (no recurrente): {}\n",
        v.credit.amount.currency
    ));
    out.push_str(&format!(
        "Equivale al {} de la inversión\n",
        v.credit.percentage_label
    ));
    out.push_str(&format!("Conclusión: {}\n\n", v.conclusion));

    out.push_str("2. Fuentes de financiación\n");
    push_slices(out, &v.slices);
    for s in &v.slices {
        if let Some(desc) = &s.description {
            out.push_str(&format!("  {}: {}\n", s.name, desc));
        }
    }
}

fn render_entities(out: &mut String, v: &EntitiesView) {
    out.push_str("1. Estructura por organismos\n");
    if v.filter.is_empty() {
        out.push_str(&format!("{} organismos\n", v.total_count));
    } else {
        out.push_str(&format!(
            "Filtro \"{}\": {} de {} organismos\n",
            v.filter, v.matched, v.total_count
        ));
    }
    out.push_str(&format!(
        "{:>3}  {:<46} {:>9} {:>24} {:>7}\n",
        "#", "Organismo", "Proyectos", "Apropiación", "%"
    ));
    for row in &v.rows {
        out.push_str(&format!(
            "{:>3}  {:<46} {:>9} {:>24} {:>7}\n",
            row.rank, row.name, row.projects, row.amount.currency, row.share_label
        ));
    }
    out.push_str(&format!("Total: {}\n\n", v.total.currency));

    out.push_str("2. Concentración de la inversión\n");
    push_slices(out, &v.chart);
}

fn render_populations(out: &mut String, v: &PopulationsView) {
    out.push_str("1. Inversión social por grupo\n");
    for g in &v.groups {
        out.push_str(&format!(
            "{} {:>24}  {}\n",
            bar(g.width, BAR_CELLS),
            g.amount.currency,
            g.name
        ));
    }
    out.push_str(&format!("Total: {}\n\n", v.total.currency));
    out.push_str(&format!("Nota metodológica: {}\n", v.note));
}

fn push_slices(out: &mut String, slices: &[Slice]) {
    for s in slices {
        out.push_str(&format!(
            "{} {:>7}% {:>8}  {}\n",
            bar(s.share, BAR_CELLS),
            format_width(s.share),
            s.amount.scaled,
            s.name
        ));
    }
}
