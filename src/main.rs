mod aggregate;
mod dataset;
mod export;
mod format;
mod logging;
mod report;
mod session;
mod view;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use crate::dataset::loader::LoadedDataset;
use crate::dataset::{DatasetError, load_dataset};
use crate::export::write_reports;
use crate::format::format_currency;
use crate::report::{ReportFormat, render_view};
use crate::session::{SessionError, run_session};
use crate::view::{Dashboard, Tab, ViewError, ViewState};

#[derive(Debug, Parser)]
#[command(name = "poai-dashboard", version)]
#[command(about = "Cali 2026 investment plan (POAI) transparency dashboard")]
struct Cli {
    /// JSON dataset to use instead of the built-in POAI 2026 figures.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
struct Selection {
    #[arg(long, value_enum, default_value_t = Tab::Overview)]
    tab: Tab,
    /// Organism name filter, only applied on the entities tab.
    #[arg(long, default_value = "")]
    filter: String,
}

impl Selection {
    fn into_state(self) -> ViewState {
        ViewState::new(self.tab, self.filter)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render one tab to stdout.
    View {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Write report.txt and view.json for one tab.
    Export {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        out: PathBuf,
    },
    /// Read tab/filter commands from stdin.
    Session {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Validate the dataset and print a summary.
    Validate,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Dataset(_) => 2,
            _ => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let loaded = load_dataset(cli.dataset.as_deref())?;
    tracing::info!(source = ?loaded.source, "dataset ready");
    let dashboard = Dashboard::new(&loaded.dataset);

    match cli.command {
        Commands::View { selection, format } => {
            let view = dashboard.render(&selection.into_state())?;
            let rendered = render_view(&view, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        Commands::Export { selection, out } => {
            let view = dashboard.render(&selection.into_state())?;
            let paths = write_reports(&view, &out)?;
            println!("{}", paths.report.display());
            println!("{}", paths.view.display());
        }
        Commands::Session { format } => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let last = run_session(&dashboard, stdin.lock(), &mut stdout, format)?;
            tracing::debug!(tab = %last.tab, filter = %last.filter, "session ended");
        }
        Commands::Validate => {
            print!("{}", render_validation_summary(&loaded, &dashboard));
        }
    }
    Ok(())
}

fn render_validation_summary(loaded: &LoadedDataset, dashboard: &Dashboard<'_>) -> String {
    let ds = &loaded.dataset;
    let mut out = String::new();
    out.push_str(&format!("dataset: {:?} (valid)\n", loaded.source));
    out.push_str(&format!("total budget: {}\n", format_currency(ds.total_budget)));
    out.push_str(&format!(
        "POAI investment: {}\n",
        format_currency(ds.poai_investment)
    ));
    out.push_str(&format!("purposes: {}\n", ds.purposes.len()));
    out.push_str(&format!("organisms: {}\n", ds.organisms.len()));
    if let Some(top) = dashboard.organisms_sorted().first() {
        out.push_str(&format!(
            "largest organism: {} ({})\n",
            top.name,
            format_currency(top.budget)
        ));
    }
    out.push_str(&format!("funding sources: {}\n", ds.funding_sources.len()));
    out.push_str(&format!(
        "population groups: {}\n",
        ds.population_groups.len()
    ));
    out.push_str(&format!("programs: {}\n", ds.programs.len()));
    for warning in &loaded.report.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
