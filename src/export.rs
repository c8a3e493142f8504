use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::report::json::render_view_json;
use crate::report::text::render_view_text;
use crate::view::View;

pub const REPORT_FILE: &str = "report.txt";
pub const VIEW_FILE: &str = "view.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub report: PathBuf,
    pub view: PathBuf,
}

pub fn write_reports(view: &View, out_dir: &Path) -> std::io::Result<ExportPaths> {
    fs::create_dir_all(out_dir)?;

    let report = out_dir.join(REPORT_FILE);
    write_text(&report, &render_view_text(view))?;

    let view_path = out_dir.join(VIEW_FILE);
    write_text(&view_path, &render_view_json(view)?)?;

    tracing::info!(
        tab = view.tab.id(),
        dir = %out_dir.display(),
        "exported report"
    );
    Ok(ExportPaths {
        report,
        view: view_path,
    })
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "../tests/src_inline/export.rs"]
mod tests;
