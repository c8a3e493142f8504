pub mod json;
pub mod text;

use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render_view(view: &View, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(text::render_view_text(view)),
        ReportFormat::Json => json::render_view_json(view),
    }
}

pub fn format_width(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn bar(width_percent: f64, cells: usize) -> String {
    let clamped = width_percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * cells as f64).round() as usize;
    let mut out = String::with_capacity(cells);
    for i in 0..cells {
        out.push(if i < filled { '#' } else { '.' });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
