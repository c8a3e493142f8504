use super::*;
use crate::dataset::builtin_dataset;
use crate::view::{Dashboard, Tab, ViewState};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("poai_export_test_{}_{}", std::process::id(), id));
    dir
}

#[test]
fn test_write_reports_creates_both_files() {
    let ds = builtin_dataset();
    let view = Dashboard::new(&ds)
        .render(&ViewState::new(Tab::Sources, ""))
        .unwrap();
    let dir = make_temp_dir().join("nested");

    let paths = write_reports(&view, &dir).unwrap();
    assert_eq!(paths.report, dir.join(REPORT_FILE));
    assert_eq!(paths.view, dir.join(VIEW_FILE));

    let text = std::fs::read_to_string(&paths.report).unwrap();
    assert!(text.starts_with("Análisis de Fuentes 2026"));
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.view).unwrap()).unwrap();
    assert_eq!(json["tab"], "sources");
    assert_eq!(json["body"]["credit"]["percentage_label"], "13.23%");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_write_reports_overwrites() {
    let ds = builtin_dataset();
    let dashboard = Dashboard::new(&ds);
    let dir = make_temp_dir();

    let first = dashboard.render(&ViewState::new(Tab::Overview, "")).unwrap();
    write_reports(&first, &dir).unwrap();
    let second = dashboard
        .render(&ViewState::new(Tab::Populations, ""))
        .unwrap();
    let paths = write_reports(&second, &dir).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.view).unwrap()).unwrap();
    assert_eq!(json["tab"], "populations");

    let _ = std::fs::remove_dir_all(dir);
}
