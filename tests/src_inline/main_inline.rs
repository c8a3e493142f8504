use super::*;
use crate::dataset::loader::DatasetSource;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).unwrap()
}

#[test]
fn test_parse_view_defaults() {
    let cli = parse(&["poai-dashboard", "view"]);
    assert!(cli.dataset.is_none());
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Commands::View { selection, format } => {
            assert_eq!(selection.tab, Tab::Overview);
            assert_eq!(selection.filter, "");
            assert_eq!(format, ReportFormat::Text);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_parse_view_entities_json() {
    let cli = parse(&[
        "poai-dashboard",
        "-vv",
        "view",
        "--tab",
        "entities",
        "--filter",
        "salud",
        "--format",
        "json",
        "--dataset",
        "poai.json",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.dataset, Some(PathBuf::from("poai.json")));
    match cli.command {
        Commands::View { selection, format } => {
            assert_eq!(
                selection.into_state(),
                ViewState::new(Tab::Entities, "salud")
            );
            assert_eq!(format, ReportFormat::Json);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_parse_export_requires_out() {
    assert!(Cli::try_parse_from(["poai-dashboard", "export", "--tab", "sources"]).is_err());
    let cli = parse(&["poai-dashboard", "export", "--out", "out"]);
    assert!(matches!(cli.command, Commands::Export { .. }));
}

#[test]
fn test_parse_rejects_unknown_tab() {
    assert!(Cli::try_parse_from(["poai-dashboard", "view", "--tab", "budget"]).is_err());
}

#[test]
fn test_exit_codes() {
    let invalid = CliError::Dataset(DatasetError::invalid("purposes", "bad"));
    assert_eq!(invalid.exit_code(), 2);
    assert_eq!(invalid.to_string(), "invalid dataset: purposes: bad");
    let io = CliError::Io(io::Error::other("disk"));
    assert_eq!(io.exit_code(), 1);
}

#[test]
fn test_validation_summary() {
    let loaded = load_dataset(None).unwrap();
    let dashboard = Dashboard::new(&loaded.dataset);
    assert_eq!(loaded.source, DatasetSource::Builtin);
    let out = render_validation_summary(&loaded, &dashboard);
    assert!(out.contains("organisms: 16"));
    assert!(out.contains("largest organism: Secretaría de Salud Pública"));
    assert!(out.contains("POAI investment: $\u{a0}5.969.056.777.143"));
    assert!(!out.contains("warning:"));
}

#[test]
fn test_log_directive_from_flags() {
    assert_eq!(logging::default_directive(0, false), "poai_dashboard=info");
    assert_eq!(logging::default_directive(1, false), "poai_dashboard=debug");
    assert_eq!(logging::default_directive(5, false), "poai_dashboard=trace");
    assert_eq!(logging::default_directive(3, true), "poai_dashboard=error");
}
